use super::*;

fn filled() -> PollState<u32> {
    let mut state = PollState::default();
    state.resolve(7);
    state
}

// =============================================================
// apply_outcome
// =============================================================

#[test]
fn success_replaces_data_and_clears_error() {
    let mut state = filled();
    state.fail("stale".to_owned());

    let step = apply_outcome(&mut state, Ok(9));

    assert_eq!(step, PollStep::Reschedule);
    assert_eq!(state.data, Some(9));
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[test]
fn failure_keeps_last_good_data() {
    let mut state = filled();

    let step = apply_outcome(
        &mut state,
        Err(ApiError::Http {
            status: 500,
            message: "boom".to_owned(),
        }),
    );

    assert_eq!(step, PollStep::Reschedule);
    assert_eq!(state.data, Some(7));
    assert_eq!(state.error, Some("boom".to_owned()));
}

#[test]
fn unauthorized_requests_logout_without_touching_state() {
    let mut state = filled();
    let before = state.clone();

    let step = apply_outcome(&mut state, Err(ApiError::Unauthorized("expired".to_owned())));

    assert_eq!(step, PollStep::Logout);
    assert_eq!(state, before);
}

#[test]
fn network_failure_before_first_data_leaves_state_initial() {
    let mut state = PollState::<u32>::default();
    state.begin();

    let step = apply_outcome(
        &mut state,
        Err(ApiError::Network("connection refused".to_owned())),
    );

    assert_eq!(step, PollStep::Reschedule);
    assert!(state.is_initial());
    assert!(state.error.is_some());
    assert!(!state.loading);
}

// =============================================================
// Intervals
// =============================================================

#[test]
fn summary_polls_slower_than_lists() {
    assert!(SUMMARY_POLL_INTERVAL > LIST_POLL_INTERVAL);
}
