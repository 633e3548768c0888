//! Shared bearer token for the API client.
//!
//! Every request reads the token; only the auth gate writes it (set on
//! login, cleared on logout). Single-threaded WASM, so a thread-local
//! cell is all the synchronization this needs.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;

thread_local! {
    static TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Activate a token; subsequent requests carry it.
pub fn set(token: &str) {
    TOKEN.with(|cell| *cell.borrow_mut() = Some(token.to_owned()));
}

/// Drop the active token; subsequent requests are anonymous.
pub fn clear() {
    TOKEN.with(|cell| *cell.borrow_mut() = None);
}

/// The currently active token, if any.
pub fn current() -> Option<String> {
    TOKEN.with(|cell| cell.borrow().clone())
}
