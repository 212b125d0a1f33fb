//! # localStorage session storage: browser-side persistence
//!
//! [`BrowserStorage`] is the [`SessionStorage`] implementation used on the **web
//! platform**. It reads and writes `window.localStorage` through [`web_sys`].
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). Private browsing modes and disabled storage degrade to
//! "no persisted session" rather than breaking the app; the user simply has to
//! sign in again.

use web_sys::Storage;

use crate::storage::SessionStorage;

/// `window.localStorage`-backed SessionStorage.
///
/// Zero-size and `Copy`; the storage handle is looked up on every call since
/// `web_sys::Storage` is not `Send` and cheap to fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = Self::local_storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("Failed to write {key} to localStorage: {e:?}");
        }
    }

    fn remove_item(&self, key: &str) {
        let Some(storage) = Self::local_storage() else {
            return;
        };
        let _ = storage.remove_item(key);
    }
}
