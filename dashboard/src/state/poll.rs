#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

/// View-local state for one polled endpoint.
///
/// `data` is replaced wholesale on every successful poll and, once set,
/// survives later failures; `error` holds the banner text for the most
/// recent failure; `loading` is true while a request is in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct PollState<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
}

impl<T> Default for PollState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
        }
    }
}

impl<T> PollState<T> {
    /// A fetch was started.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// A fetch succeeded; the payload replaces whatever was there.
    pub fn resolve(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
        self.loading = false;
    }

    /// A fetch failed; the last good data stays visible.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// True until the first successful poll; the view shows only the
    /// loading/first-error indicator while this holds.
    pub fn is_initial(&self) -> bool {
        self.data.is_none()
    }
}
