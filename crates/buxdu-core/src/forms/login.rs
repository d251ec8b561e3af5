//! Login form validation and the remembered-email preference

use crate::storage::{KeyValueStore, REMEMBERED_EMAIL_KEY};
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Delay before the (log-only) post-login redirect
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Raw field values as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub email: String,
    pub remember: bool,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl LoginInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember: bool) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember,
        }
    }

    pub fn validate(&self) -> Result<LoginSuccess, LoginError> {
        let email = self.email.trim();

        if email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        if !is_valid_email(email) {
            return Err(LoginError::InvalidEmail);
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(LoginError::PasswordTooShort);
        }

        Ok(LoginSuccess {
            email: email.to_string(),
            remember: self.remember,
        })
    }

    /// Validate, then store or forget the email according to the remember flag
    ///
    /// Storage failures are logged and otherwise ignored: the login itself
    /// still succeeds.
    pub fn submit(&self, storage: &impl KeyValueStore) -> Result<LoginSuccess, LoginError> {
        let success = self.validate()?;
        tracing::debug!(remember = success.remember, "login attempt");

        let persisted = if success.remember {
            storage.set(REMEMBERED_EMAIL_KEY, &success.email)
        } else {
            storage.remove(REMEMBERED_EMAIL_KEY)
        };
        if let Err(e) = persisted {
            tracing::debug!("could not update remembered email: {}", e);
        }

        Ok(success)
    }
}

/// Email saved by a previous "remember me" login, used to prefill the form
pub fn remembered_email(storage: &impl KeyValueStore) -> Option<String> {
    storage
        .get(REMEMBERED_EMAIL_KEY)
        .ok()
        .flatten()
        .filter(|email| !email.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("talaba.2024@buxdu.uz"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn test_missing_fields_checked_first() {
        let err = LoginInput::new("   ", "123456", false).validate().unwrap_err();
        assert_eq!(err, LoginError::MissingFields);
        let err = LoginInput::new("bad-email", "", false).validate().unwrap_err();
        assert_eq!(err, LoginError::MissingFields);
    }

    #[test]
    fn test_invalid_email_message() {
        let err = LoginInput::new("bad-email", "123456", false).validate().unwrap_err();
        assert_eq!(err, LoginError::InvalidEmail);
        assert!(err.to_string().contains("valid email"));
    }

    #[test]
    fn test_short_password_message() {
        let err = LoginInput::new("a@b.com", "12345", false).validate().unwrap_err();
        assert_eq!(err, LoginError::PasswordTooShort);
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn test_email_is_trimmed() {
        let ok = LoginInput::new("  a@b.com ", "123456", false).validate().unwrap();
        assert_eq!(ok.email, "a@b.com");
    }

    #[test]
    fn test_remember_persists_and_clears() {
        let storage = MemoryStore::new();

        LoginInput::new("a@b.com", "123456", true).submit(&storage).unwrap();
        assert_eq!(remembered_email(&storage).as_deref(), Some("a@b.com"));

        LoginInput::new("a@b.com", "123456", false).submit(&storage).unwrap();
        assert_eq!(remembered_email(&storage), None);
    }

    #[test]
    fn test_failed_submit_leaves_storage_untouched() {
        let storage = MemoryStore::new();
        storage.set(REMEMBERED_EMAIL_KEY, "old@b.com").unwrap();

        assert!(LoginInput::new("a@b.com", "123", false).submit(&storage).is_err());
        assert_eq!(remembered_email(&storage).as_deref(), Some("old@b.com"));
    }

    #[test]
    fn test_submit_succeeds_without_storage() {
        let storage = MemoryStore::unavailable();
        let ok = LoginInput::new("a@b.com", "123456", true).submit(&storage).unwrap();
        assert!(ok.remember);
        assert_eq!(remembered_email(&storage), None);
    }
}
