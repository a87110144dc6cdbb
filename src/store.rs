//! Persistent key-value storage for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the preference lives in `localStorage`, scoped to the page
//! origin. Storage may be disabled; reads then behave as an absent entry and
//! writes fail with [`StoreError::Unavailable`], which callers treat as a
//! no-op.

use std::collections::HashMap;

use crate::error::StoreError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Get/set access to a string key-value store.
pub trait PreferenceStore {
    /// Current value for `key`, or `None` when unset or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the host refuses the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store used off-browser and in tests.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    available: bool,
    writes: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new(), available: true, writes: 0 }
    }

    /// Store seeded with a single entry, as left by a previous page load.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store that behaves like disabled browser storage.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: HashMap::new(), available: false, writes: 0 }
    }

    /// Number of successful writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// Browser `localStorage` for the current origin.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the origin's `localStorage`. Access errors leave the store
    /// unavailable rather than failing.
    #[must_use]
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::warn!("localStorage access denied: {err:?}");
                None
            }
            None => None,
        };
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read failed for {key}: {err:?}");
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Write(format!("{err:?}")))
    }
}
