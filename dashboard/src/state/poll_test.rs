use super::*;

#[test]
fn default_state_is_initial_and_idle() {
    let state = PollState::<u32>::default();
    assert!(state.is_initial());
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[test]
fn begin_marks_in_flight_without_dropping_data() {
    let mut state = PollState::default();
    state.resolve(1);
    state.begin();

    assert!(state.loading);
    assert_eq!(state.data, Some(1));
}

#[test]
fn resolve_replaces_data_and_clears_error() {
    let mut state = PollState::default();
    state.fail("first fetch failed".to_owned());
    state.begin();
    state.resolve(2);

    assert_eq!(state.data, Some(2));
    assert_eq!(state.error, None);
    assert!(!state.loading);
    assert!(!state.is_initial());
}

#[test]
fn fail_records_message_and_keeps_data() {
    let mut state = PollState::default();
    state.resolve(3);
    state.begin();
    state.fail("boom".to_owned());

    assert_eq!(state.data, Some(3));
    assert_eq!(state.error, Some("boom".to_owned()));
    assert!(!state.loading);
}

/// Once data arrived the view never falls back to the initial loading
/// screen, no matter how many later polls fail.
#[test]
fn never_reverts_to_initial_after_first_data() {
    let mut state = PollState::default();
    state.begin();
    state.resolve(4);

    for _ in 0..3 {
        state.begin();
        state.fail("transient".to_owned());
        assert!(!state.is_initial());
    }
}
