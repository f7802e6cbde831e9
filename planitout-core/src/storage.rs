//! Durable key-value storage abstraction.
//!
//! Session state lives behind this trait so the core never touches the
//! storage medium directly. Implementations degrade instead of raising:
//! reads fall back to "absent" and writes are best-effort, since session
//! state must never take a page down.

use std::collections::HashMap;

/// Get/set/remove contract for the session slots.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store. Used in tests and anywhere persistence isn't wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("user_email"), None);

        store.set("user_email", "a@x.com");
        assert_eq!(store.get("user_email").as_deref(), Some("a@x.com"));

        store.set("user_email", "b@x.com");
        assert_eq!(store.get("user_email").as_deref(), Some("b@x.com"));

        store.remove("user_email");
        assert_eq!(store.get("user_email"), None);
    }
}
