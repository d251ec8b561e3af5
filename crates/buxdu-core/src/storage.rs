//! Durable key-value storage abstraction
//!
//! The browser's `localStorage` is the production backend (see `buxdu-web`);
//! [`MemoryStore`] backs tests and the native CLI.

use crate::error::{Result, SiteError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Storage key holding the persisted [`crate::theme::ThemeState`]
pub const THEME_KEY: &str = "theme";

/// Storage key holding the login form's remembered email
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";

/// String key-value store surviving page reloads
///
/// Every method may fail (private browsing, quota, disabled storage); callers
/// are expected to degrade rather than propagate.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store
///
/// `unavailable()` builds a store whose every call fails, mirroring a browser
/// with storage disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        let store = Self::default();
        store.unavailable.set(true);
        store
    }

    /// Toggle availability at runtime (storage revoked mid-session)
    pub fn set_available(&self, available: bool) {
        self.unavailable.set(!available);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable.get() {
            Err(SiteError::StorageUnavailable)
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip_and_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);

        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        store.remove(THEME_KEY).unwrap();
        assert!(store.is_empty());
        // Removing an absent key is fine
        store.remove(THEME_KEY).unwrap();
    }

    #[test]
    fn test_unavailable_store_fails_every_call() {
        let store = MemoryStore::unavailable();
        assert!(store.get(THEME_KEY).is_err());
        assert!(store.set(THEME_KEY, "dark").is_err());
        assert!(store.remove(THEME_KEY).is_err());

        store.set_available(true);
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.len(), 1);
    }
}
