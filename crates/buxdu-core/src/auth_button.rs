//! Header call-to-action mapping
//!
//! On the login page the header offers registration and vice versa; every
//! other page keeps the template default.

pub const LOGIN_PAGE: &str = "login.html";
pub const REGISTER_PAGE: &str = "register.html";

pub const SIGN_IN_LABEL: &str = "Tizimga kirish";
pub const REGISTER_LABEL: &str = "Ro'yxatdan o'tish";

/// Element ids of the desktop and mobile auth controls
pub const AUTH_BUTTON_IDS: [&str; 2] = ["auth-button", "mobile-auth-button"];

/// Replacement href and label for the auth controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthAction {
    pub href: &'static str,
    pub label: &'static str,
}

impl AuthAction {
    /// What the template renders before adaptation
    pub const DEFAULT: AuthAction = AuthAction {
        href: LOGIN_PAGE,
        label: SIGN_IN_LABEL,
    };
}

/// Last path segment of a document location (`/a/b/login.html` -> `login.html`)
pub fn page_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Auth control override for the current page, `None` keeps the default
pub fn adapt(current_page: &str) -> Option<AuthAction> {
    match current_page {
        LOGIN_PAGE => Some(AuthAction {
            href: REGISTER_PAGE,
            label: REGISTER_LABEL,
        }),
        REGISTER_PAGE => Some(AuthAction {
            href: LOGIN_PAGE,
            label: SIGN_IN_LABEL,
        }),
        _ => None,
    }
}

/// Effective auth control for a page
pub fn resolve(current_page: &str) -> AuthAction {
    adapt(current_page).unwrap_or(AuthAction::DEFAULT)
}
