//! Registration form validation, phone formatting and password strength

use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Delay before the (log-only) redirect to the login page
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Country prefix every phone number must carry (without the `+`)
pub const PHONE_COUNTRY_CODE: &str = "998";

/// Regions offered by the registration form
pub const REGIONS: &[&str] = &[
    "Buxoro shahri",
    "Kogon shahri",
    "Olot tumani",
    "Buxoro tumani",
    "Vobkent tumani",
    "G'ijduvon tumani",
    "Jondor tumani",
    "Kogon tumani",
    "Qorako'l tumani",
    "Qorovulbozor tumani",
    "Peshku tumani",
    "Romitan tumani",
    "Shofirkon tumani",
];

/// Border colors for the confirmation field
const MATCH_BORDER: &str = "rgb(34 197 94)";
const MISMATCH_BORDER: &str = "rgb(239 68 68)";

static PHONE_SEPARATORS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()]").expect("separator pattern is valid"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+998\d{9}$").expect("phone pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Iltimos, barcha maydonlarni to'ldiring")]
    MissingFields,

    #[error("Iltimos, to'liq ismingizni kiriting (Familiya Ism Otasining ismi)")]
    IncompleteName,

    #[error("Telefon raqam noto'g'ri formatda (+998 XX XXX XX XX)")]
    InvalidPhone,

    #[error("Parollar bir-biriga mos kelmaydi")]
    PasswordMismatch,

    #[error("Parol kamida 8 ta belgidan iborat bo'lishi kerak")]
    PasswordTooShort,

    #[error("Foydalanish shartlarini qabul qilishingiz kerak")]
    TermsNotAccepted,
}

impl RegisterError {
    /// The confirmation field is the one to highlight for this error
    pub fn marks_confirm_invalid(&self) -> bool {
        matches!(self, RegisterError::PasswordMismatch)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterInput {
    pub full_name: String,
    pub phone: String,
    pub region: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

/// A registration that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSuccess {
    pub full_name: String,
    /// `+998XXXXXXXXX` with separators removed
    pub phone: String,
    pub region: String,
}

impl RegisterInput {
    pub fn validate(&self) -> Result<RegisterSuccess, RegisterError> {
        let full_name = self.full_name.trim();
        let phone = self.phone.trim();

        if full_name.is_empty()
            || phone.is_empty()
            || self.region.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(RegisterError::MissingFields);
        }

        if full_name.split_whitespace().count() < 2 {
            return Err(RegisterError::IncompleteName);
        }

        if !is_valid_phone(phone) {
            return Err(RegisterError::InvalidPhone);
        }

        // Mismatch is reported before length so the confirm field gets flagged
        if self.password != self.confirm_password {
            return Err(RegisterError::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterError::PasswordTooShort);
        }

        if !self.terms_accepted {
            return Err(RegisterError::TermsNotAccepted);
        }

        tracing::debug!(region = %self.region, "registration attempt");

        Ok(RegisterSuccess {
            full_name: full_name.to_string(),
            phone: normalize_phone(phone),
            region: self.region.clone(),
        })
    }
}

/// Strip spaces, dashes and parentheses
pub fn normalize_phone(phone: &str) -> String {
    PHONE_SEPARATORS_RE.replace_all(phone, "").into_owned()
}

/// `+998` followed by exactly nine digits once separators are removed
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&normalize_phone(phone))
}

/// Reformat raw phone input as `+998 XX XXX XX XX` while the user types
///
/// Non-digits are dropped, a missing country code is prepended and anything
/// past twelve digits is cut off.
pub fn format_phone(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if !digits.starts_with(PHONE_COUNTRY_CODE) {
        digits.insert_str(0, PHONE_COUNTRY_CODE);
    }

    let mut formatted = format!("+{}", PHONE_COUNTRY_CODE);
    for (start, end) in [(3, 5), (5, 8), (8, 10), (10, 12)] {
        if digits.len() <= start {
            break;
        }
        formatted.push(' ');
        formatted.push_str(&digits[start..end.min(digits.len())]);
    }
    formatted
}

/// Advisory 0-5 score: length >= 8, length >= 12, mixed case, digit, symbol
pub fn password_strength(password: &str) -> u8 {
    let len = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    [
        len >= 8,
        len >= 12,
        has_lower && has_upper,
        has_digit,
        has_symbol,
    ]
    .into_iter()
    .filter(|passed| *passed)
    .count() as u8
}

/// Live state of the confirmation field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmState {
    Empty,
    Matching,
    Mismatch,
}

impl ConfirmState {
    pub fn check(password: &str, confirm: &str) -> Self {
        if confirm.is_empty() {
            ConfirmState::Empty
        } else if password == confirm {
            ConfirmState::Matching
        } else {
            ConfirmState::Mismatch
        }
    }

    /// Inline `border-color`, empty string resets to the stylesheet
    pub fn border_color(self) -> &'static str {
        match self {
            ConfirmState::Empty => "",
            ConfirmState::Matching => MATCH_BORDER,
            ConfirmState::Mismatch => MISMATCH_BORDER,
        }
    }
}
