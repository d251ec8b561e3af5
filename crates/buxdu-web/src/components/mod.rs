//! Leptos form components

mod login_form;
mod notice;
mod register_form;

pub use login_form::{LoginForm, LOGIN_ROOT_ID};
pub use notice::{show_notice, NoticeBanner};
pub use register_form::{RegisterForm, REGISTER_ROOT_ID};

use buxdu_core::forms::FOCUS_RING_CLASSES;

/// Class list of an input wrapper, with the focus ring while focused
fn field_wrapper_class(focused: bool) -> String {
    if focused {
        format!("input-wrapper {}", FOCUS_RING_CLASSES.join(" "))
    } else {
        "input-wrapper".to_string()
    }
}
