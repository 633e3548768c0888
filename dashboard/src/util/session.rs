//! Tab-scoped key-value persistence for the auth token.
//!
//! Backed by `sessionStorage` in the browser, so the token survives page
//! reloads but not the end of the tab's session. Keys carry a fixed
//! prefix so dashboard entries cannot collide with anything else stored
//! on the same origin. Values are JSON-encoded; a corrupt stored value
//! reads back as `None`, never as an error.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

const KEY_PREFIX: &str = "operator-dashboard.";

/// Raw string storage the session store sits on. The browser impl wraps
/// `sessionStorage`; tests use an in-memory map.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Namespaced JSON store over a [`StorageBackend`].
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read and decode `key`; missing or corrupt values become `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.read(&format!("{KEY_PREFIX}{key}"))?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.backend.write(&format!("{KEY_PREFIX}{key}"), &raw);
        }
    }

    pub fn remove(&self, key: &str) {
        self.backend.remove(&format!("{KEY_PREFIX}{key}"));
    }
}

/// `sessionStorage` backend. Storage can be unavailable (disabled by the
/// browser); reads then find nothing and writes are dropped.
#[cfg(feature = "browser")]
pub struct BrowserSession;

#[cfg(feature = "browser")]
impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok()).flatten()
    }
}

#[cfg(feature = "browser")]
impl StorageBackend for BrowserSession {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The store every browser call site uses.
#[cfg(feature = "browser")]
pub fn browser() -> SessionStore<BrowserSession> {
    SessionStore::new(BrowserSession)
}
