//! Registration form component

use super::field_wrapper_class;
use super::notice::{show_notice, NoticeBanner};
use buxdu_core::forms::register::{
    format_phone, password_strength, ConfirmState, RegisterInput, REDIRECT_DELAY, REGIONS,
};
use buxdu_core::notice::{Notice, NoticeKind, REGISTER_ERROR, REGISTER_SUCCESS};
use leptos::logging::log;
use leptos::prelude::*;

/// Mount point for [`RegisterForm`]
pub const REGISTER_ROOT_ID: &str = "register-root";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    FullName,
    Phone,
    Region,
    Password,
    Confirm,
}

fn strength_label(score: u8) -> &'static str {
    match score {
        0..=1 => "Zaif",
        2..=3 => "O'rtacha",
        _ => "Kuchli",
    }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let terms = RwSignal::new(false);

    let focused = RwSignal::new(None::<Field>);
    let confirm_flagged = RwSignal::new(false);

    let success = RwSignal::new(Notice::new());
    let failure = RwSignal::new(Notice::new());

    let strength = Memo::new(move |_| password.with(|p| password_strength(p)));
    let confirm_state =
        Memo::new(move |_| password.with(|p| confirm.with(|c| ConfirmState::check(p, c))));

    let wrapper = move |field: Field| move || field_wrapper_class(focused.get() == Some(field));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let input = RegisterInput {
            full_name: full_name.get_untracked(),
            phone: phone.get_untracked(),
            region: region.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            terms_accepted: terms.get_untracked(),
        };

        match input.validate() {
            Ok(registered) => {
                log!("Registration accepted ({})", registered.region);
                show_notice(success, None, REGISTER_SUCCESS);
                for field in [full_name, phone, region, password, confirm] {
                    field.set(String::new());
                }
                terms.set(false);
                confirm_flagged.set(false);
                set_timeout(|| log!("Redirecting to login page..."), REDIRECT_DELAY);
            }
            Err(e) => {
                confirm_flagged.set(e.marks_confirm_invalid());
                show_notice(failure, Some(e.to_string()), REGISTER_ERROR);
            }
        }
    };

    view! {
        <form id="registerForm" class="auth-form" on:submit=on_submit>
            <NoticeBanner notice=failure kind=NoticeKind::Error fallback="" />
            <NoticeBanner
                notice=success
                kind=NoticeKind::Success
                fallback="Muvaffaqiyatli ro'yxatdan o'tdingiz!"
            />

            <label for="fullName">"To'liq ism"</label>
            <div class=wrapper(Field::FullName)>
                <input
                    id="fullName"
                    type="text"
                    autocomplete="name"
                    placeholder="Familiya Ism Otasining ismi"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                    on:focus=move |_| focused.set(Some(Field::FullName))
                    on:blur=move |_| focused.set(None)
                />
            </div>

            <label for="phone">"Telefon raqam"</label>
            <div class=wrapper(Field::Phone)>
                <input
                    id="phone"
                    type="tel"
                    autocomplete="tel"
                    placeholder="+998 XX XXX XX XX"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(format_phone(&event_target_value(&ev)))
                    on:focus=move |_| focused.set(Some(Field::Phone))
                    on:blur=move |_| focused.set(None)
                />
            </div>

            <label for="region">"Viloyat / tuman"</label>
            <div class=wrapper(Field::Region)>
                <select
                    id="region"
                    prop:value=move || region.get()
                    on:change=move |ev| region.set(event_target_value(&ev))
                    on:focus=move |_| focused.set(Some(Field::Region))
                    on:blur=move |_| focused.set(None)
                >
                    <option value="">"Tanlang"</option>
                    {REGIONS
                        .iter()
                        .map(|name| view! { <option value=*name>{*name}</option> })
                        .collect_view()}
                </select>
            </div>

            <label for="password">"Parol"</label>
            <div class=wrapper(Field::Password)>
                <input
                    id="password"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:focus=move |_| focused.set(Some(Field::Password))
                    on:blur=move |_| focused.set(None)
                />
            </div>
            <div class="password-strength" data-score=move || strength.get().to_string()>
                <meter min="0" max="5" value=move || strength.get().to_string()></meter>
                <span>{move || strength_label(strength.get())}</span>
            </div>

            <label for="confirmPassword">"Parolni tasdiqlang"</label>
            <div class=wrapper(Field::Confirm)>
                <input
                    id="confirmPassword"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    style:border-color=move || confirm_state.get().border_color()
                    aria-invalid=move || confirm_flagged.get().to_string()
                    on:input=move |ev| {
                        confirm_flagged.set(false);
                        confirm.set(event_target_value(&ev));
                    }
                    on:focus=move |_| focused.set(Some(Field::Confirm))
                    on:blur=move |_| focused.set(None)
                />
            </div>

            <label class="terms">
                <input
                    id="terms"
                    type="checkbox"
                    prop:checked=move || terms.get()
                    on:change=move |ev| terms.set(event_target_checked(&ev))
                />
                <span>"Foydalanish shartlariga roziman"</span>
            </label>

            <button type="submit" class="auth-submit">"Ro'yxatdan o'tish"</button>
        </form>
    }
}
