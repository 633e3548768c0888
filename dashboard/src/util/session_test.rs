use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[test]
fn set_then_get_round_trips() {
    let store = SessionStore::new(MemoryBackend::default());
    store.set("auth-token", &"abc123".to_owned());

    assert_eq!(store.get::<String>("auth-token"), Some("abc123".to_owned()));
}

#[test]
fn missing_key_reads_as_none() {
    let store = SessionStore::new(MemoryBackend::default());
    assert_eq!(store.get::<String>("auth-token"), None);
}

#[test]
fn corrupt_value_reads_as_none() {
    let backend = MemoryBackend::default();
    backend.write("operator-dashboard.auth-token", "{not json");
    let store = SessionStore::new(backend);

    assert_eq!(store.get::<String>("auth-token"), None);
}

#[test]
fn remove_drops_the_entry() {
    let store = SessionStore::new(MemoryBackend::default());
    store.set("auth-token", &"abc123".to_owned());
    store.remove("auth-token");

    assert_eq!(store.get::<String>("auth-token"), None);
}

/// Entries are namespaced so a raw key written by anything else on the
/// origin is invisible to the store.
#[test]
fn keys_carry_the_dashboard_prefix() {
    let backend = MemoryBackend::default();
    backend.write("auth-token", "\"unprefixed\"");
    let store = SessionStore::new(backend);

    assert_eq!(store.get::<String>("auth-token"), None);

    store.set("auth-token", &"ours".to_owned());
    assert!(
        store
            .backend
            .entries
            .borrow()
            .contains_key("operator-dashboard.auth-token")
    );
}
