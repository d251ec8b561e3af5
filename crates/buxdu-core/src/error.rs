//! Error types for buxdu-core
//!
//! Nothing here is fatal for a page: storage failures degrade to in-memory
//! state, and form validation failures live in [`crate::forms`] as their own
//! enums because they are shown to the user rather than propagated.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for buxdu-site operations
#[derive(Error, Debug)]
pub enum SiteError {
    // ===================
    // Storage Errors
    // ===================
    #[error("Durable storage is not available")]
    StorageUnavailable,

    #[error("Storage operation failed for key {key}: {message}")]
    Storage { key: String, message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Failed to read navigation config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse navigation config")]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid navigation config: {message}")]
    InvalidConfig { message: String },

    // ===================
    // Render Errors
    // ===================
    #[error("Failed to render header template")]
    Render {
        #[source]
        source: askama::Error,
    },
}

impl SiteError {
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        SiteError::Storage {
            key: key.into(),
            message: message.into(),
        }
    }

    /// True for errors that mean "fall back to session memory"
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            SiteError::StorageUnavailable | SiteError::Storage { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
