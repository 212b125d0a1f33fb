use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::storage::SessionStorage;

/// In-memory SessionStorage for testing and native builds.
///
/// Clones share the same underlying map, so a clone handed to the HTTP client
/// sees everything the session store writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a single value.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.set_item(key, value);
        storage
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get_item("user").is_none());

        storage.set_item("user", "{}");
        assert_eq!(storage.get_item("user").as_deref(), Some("{}"));

        storage.remove_item("user");
        assert!(storage.get_item("user").is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_items() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set_item("user", "a");
        assert_eq!(other.get_item("user").as_deref(), Some("a"));

        other.remove_item("user");
        assert!(storage.get_item("user").is_none());
    }
}
