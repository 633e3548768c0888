#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Session-store key for the persisted bearer token.
pub const TOKEN_KEY: &str = "auth-token";

/// Where the auth gate currently is.
///
/// `Checking` only covers the silent re-authentication from a persisted
/// token at startup; it is never entered again and never shows an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Checking,
    Unauthenticated,
    Authenticated,
}

/// Auth gate state, held in one `RwSignal` at the application root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    /// Message for the login form after a failed attempt.
    pub error: Option<String>,
    /// True while a login request is in flight.
    pub pending: bool,
}

impl AuthState {
    pub fn authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    /// A login attempt was submitted.
    pub fn begin_login(&mut self) {
        self.pending = true;
        self.error = None;
    }

    /// The token was accepted (validated at startup or freshly issued).
    pub fn accept(&mut self) {
        self.phase = AuthPhase::Authenticated;
        self.error = None;
        self.pending = false;
    }

    /// The token is gone: failed validation, failed login, explicit
    /// logout, or a 401 from anywhere in the tree.
    pub fn reject(&mut self, message: Option<String>) {
        self.phase = AuthPhase::Unauthenticated;
        self.error = message;
        self.pending = false;
    }
}
