//! `localStorage` backend for [`KeyValueStore`]

use buxdu_core::error::{Result, SiteError};
use buxdu_core::storage::KeyValueStore;

/// Browser `localStorage`, or nothing when the browser refuses access
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            leptos::logging::log!("localStorage unavailable, preferences last for this page only");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage> {
        self.inner.as_ref().ok_or(SiteError::StorageUnavailable)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SiteError::storage(key, format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SiteError::storage(key, format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| SiteError::storage(key, format!("{:?}", e)))
    }
}
