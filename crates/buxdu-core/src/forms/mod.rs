//! Login and registration form logic
//!
//! Validation never talks to a server. A failed check yields a typed error
//! whose `Display` is the message shown to the user in the form's notice.

pub mod login;
pub mod register;

pub use login::{LoginError, LoginInput, LoginSuccess};
pub use register::{ConfirmState, RegisterError, RegisterInput, RegisterSuccess};

/// Classes added to an input's wrapper while it has focus
pub const FOCUS_RING_CLASSES: [&str; 2] = ["ring-2", "ring-pink-600"];
