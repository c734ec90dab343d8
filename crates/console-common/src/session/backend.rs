//! Key/value storage behind the session store

use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::Storage;

/// String key/value storage. Implementations never fail loudly: a write
/// that cannot be persisted is logged and dropped.
pub trait SessionBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process storage, used in tests and when `localStorage` is unavailable
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser `localStorage`; survives reloads and is shared by every tab of the origin
pub struct LocalStorageBackend {
    storage: Storage,
}

impl LocalStorageBackend {
    /// Open the window's local storage, if the browser grants access
    pub fn open() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .map(|storage| Self { storage })
    }
}

impl SessionBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(error) = self.storage.set_item(key, value) {
            tracing::warn!(key, ?error, "failed to persist session entry");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(error) = self.storage.remove_item(key) {
            tracing::warn!(key, ?error, "failed to remove session entry");
        }
    }
}
