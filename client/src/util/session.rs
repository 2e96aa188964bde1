//! Per-tab key/value storage for session identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat username lives in `sessionStorage`, so it survives reloads
//! within a tab and disappears when the tab closes. Lifetime is owned by the
//! browser; nothing here expires or clears values.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::ViewError;

/// Session-scoped string store.
pub trait SessionStorage {
    /// Value stored under `key`, or `None` if never set.
    fn get_item(&self, key: &str) -> Result<Option<String>, ViewError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), ViewError>;
}

/// `HashMap`-backed store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ViewError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ViewError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.sessionStorage`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct BrowserSessionStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl BrowserSessionStorage {
    /// Bind to the current tab's session storage.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Storage` when there is no window, access throws
    /// (e.g. a `SecurityError` in sandboxed frames), or storage is disabled.
    pub fn from_window() -> Result<Self, ViewError> {
        let window = web_sys::window().ok_or_else(|| ViewError::Storage("no window".to_owned()))?;
        let storage = window
            .session_storage()
            .map_err(|e| ViewError::Storage(crate::util::js_message(&e)))?
            .ok_or_else(|| ViewError::Storage("sessionStorage is disabled".to_owned()))?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ViewError> {
        self.storage
            .get_item(key)
            .map_err(|e| ViewError::Storage(crate::util::js_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ViewError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ViewError::Storage(crate::util::js_message(&e)))
    }
}
