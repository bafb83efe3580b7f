use std::collections::HashMap;

use super::PreferenceStore;
use crate::error::StoreError;

/// An in-memory store. Never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.insert(key, value);
        store
    }

    /// Sets `key` directly, as an outside party would.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Borrows the value stored under `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("darkMode").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("darkMode", "dark").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("dark"));

        store.set("darkMode", "light").unwrap();
        assert_eq!(store.value("darkMode"), Some("light"));
    }

    #[test]
    fn test_remove() {
        let mut store = MemoryStore::with_entry("darkMode", "dark");
        assert_eq!(store.remove("darkMode").as_deref(), Some("dark"));
        assert_eq!(store.get("darkMode").unwrap(), None);
    }
}
