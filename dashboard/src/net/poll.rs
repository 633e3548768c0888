//! Self-rescheduling poller shared by every data view.
//!
//! One instance owns at most one in-flight request: the next fetch is
//! scheduled a fixed interval after the previous one completes, never on
//! a wall-clock tick that could overlap a slow response. There is no
//! backoff, jitter, or fetch timeout beyond what the transport provides;
//! a hung request delays the next poll until the browser gives up. That
//! is a known limitation, acceptable for a status dashboard.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::time::Duration;

use super::api::ApiError;
use crate::state::poll::PollState;

/// Reload delay for list and detail views.
pub const LIST_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Reload delay for the top-level operator summary.
pub const SUMMARY_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// What the poll loop does after one fetch completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollStep {
    /// Fetch again after the interval.
    Reschedule,
    /// 401 arrived: run the shared logout, no further fetches.
    Logout,
}

/// Fold one fetch outcome into the view state.
///
/// Success replaces the data and clears the error; a 401 leaves the
/// state alone (the tree is about to be unmounted); any other failure
/// keeps the last good data and records the message for the banner.
pub fn apply_outcome<T>(state: &mut PollState<T>, outcome: Result<T, ApiError>) -> PollStep {
    match outcome {
        Ok(data) => {
            state.resolve(data);
            PollStep::Reschedule
        }
        Err(ApiError::Unauthorized(_)) => PollStep::Logout,
        Err(error) => {
            state.fail(error.to_string());
            PollStep::Reschedule
        }
    }
}

/// Poll `path` into `state` every `interval`, starting immediately.
///
/// Must be called from a component body: the pending loop is cancelled
/// via `on_cleanup` when the owning view leaves the tree, and a result
/// that lands after teardown is discarded without touching state.
#[cfg(feature = "browser")]
pub fn spawn_poller<T>(
    path: String,
    interval: Duration,
    state: leptos::prelude::RwSignal<PollState<T>>,
    logout: leptos::prelude::Callback<()>,
) where
    T: serde::de::DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::prelude::*;

    let alive = Rc::new(Cell::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.set(false));
    }

    leptos::task::spawn_local(async move {
        loop {
            state.update(PollState::begin);
            let outcome = super::api::get::<T>(&path).await;
            if !alive.get() {
                // Torn down while the request was in flight.
                return;
            }
            if let Err(ApiError::Unauthorized(_)) = &outcome {
                logout.run(());
                return;
            }
            state.update(|s| {
                let _ = apply_outcome(s, outcome);
            });
            gloo_timers::future::sleep(interval).await;
            if !alive.get() {
                return;
            }
        }
    });
}
