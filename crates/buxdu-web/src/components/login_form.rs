//! Login form component

use super::field_wrapper_class;
use super::notice::{show_notice, NoticeBanner};
use crate::storage::LocalStorage;
use buxdu_core::forms::login::{remembered_email, LoginInput, REDIRECT_DELAY};
use buxdu_core::notice::{Notice, NoticeKind, LOGIN_ERROR, LOGIN_SUCCESS};
use leptos::logging::log;
use leptos::prelude::*;

/// Mount point for [`LoginForm`]
pub const LOGIN_ROOT_ID: &str = "login-root";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Email,
    Password,
}

/// Email + password form with "remember me"
///
/// Prefills the email saved by a previous remembered login. Nothing is sent
/// anywhere; a successful submit only updates local storage.
#[component]
pub fn LoginForm() -> impl IntoView {
    let saved = remembered_email(&LocalStorage::new());

    let email = RwSignal::new(saved.clone().unwrap_or_default());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(saved.is_some());
    let focused = RwSignal::new(None::<Field>);

    let success = RwSignal::new(Notice::new());
    let failure = RwSignal::new(Notice::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let input = LoginInput::new(
            email.get_untracked(),
            password.get_untracked(),
            remember.get_untracked(),
        );

        match input.submit(&LocalStorage::new()) {
            Ok(_) => {
                show_notice(success, None, LOGIN_SUCCESS);
                email.set(String::new());
                password.set(String::new());
                remember.set(false);
                set_timeout(|| log!("Redirecting to dashboard..."), REDIRECT_DELAY);
            }
            Err(e) => show_notice(failure, Some(e.to_string()), LOGIN_ERROR),
        }
    };

    view! {
        <form id="loginForm" class="auth-form" on:submit=on_submit>
            <NoticeBanner notice=failure kind=NoticeKind::Error fallback="" />
            <NoticeBanner
                notice=success
                kind=NoticeKind::Success
                fallback="Login successful! Redirecting..."
            />

            <label for="email">"Email"</label>
            <div class=move || field_wrapper_class(focused.get() == Some(Field::Email))>
                <input
                    id="email"
                    type="text"
                    inputmode="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:focus=move |_| focused.set(Some(Field::Email))
                    on:blur=move |_| focused.set(None)
                />
            </div>

            <label for="password">"Password"</label>
            <div class=move || field_wrapper_class(focused.get() == Some(Field::Password))>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:focus=move |_| focused.set(Some(Field::Password))
                    on:blur=move |_| focused.set(None)
                />
            </div>

            <label class="remember">
                <input
                    id="remember"
                    type="checkbox"
                    prop:checked=move || remember.get()
                    on:change=move |ev| remember.set(event_target_checked(&ev))
                />
                <span>"Remember me"</span>
            </label>

            <button type="submit" class="auth-submit">"Sign in"</button>
        </form>
    }
}
