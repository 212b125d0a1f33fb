//! Durable string key/value storage used for the persisted session.
//!
//! The trait mirrors the browser's `localStorage` surface. Implementations
//! never fail loudly: a backend that cannot be reached behaves like an empty
//! one, so callers treat "no value" and "storage unavailable" the same way.

/// Synchronous key/value store for small serialized values.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

impl<S: SessionStorage + ?Sized> SessionStorage for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key)
    }
}
