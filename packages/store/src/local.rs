//! # `localStorage` key/value store - browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes the window's `localStorage`, which survives page reloads and is
//! shared by every handle on the same origin.
//!
//! ## Error handling
//!
//! All methods silently swallow errors (no window, storage disabled, quota exceeded),
//! returning `None` for reads and doing nothing for writes. A browser without usable
//! storage behaves like a fresh visitor: no token, default preferences.

use web_sys::Storage;

use crate::KeyValueStore;

/// `localStorage`-backed KeyValueStore for web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
