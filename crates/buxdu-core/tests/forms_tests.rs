//! Integration tests for the login and registration forms

use buxdu_core::forms::login::{remembered_email, LoginError, LoginInput};
use buxdu_core::forms::register::{
    format_phone, password_strength, ConfirmState, RegisterError, RegisterInput, REGIONS,
};
use buxdu_core::notice::{Notice, NoticePhase, LOGIN_ERROR, REGISTER_ERROR};
use buxdu_core::storage::{KeyValueStore, MemoryStore, REMEMBERED_EMAIL_KEY};

#[test]
fn test_login_scenarios() {
    let storage = MemoryStore::new();

    let err = LoginInput::new("bad-email", "123456", false)
        .submit(&storage)
        .unwrap_err();
    assert!(err.to_string().contains("valid email"));

    let err = LoginInput::new("a@b.com", "12345", false)
        .submit(&storage)
        .unwrap_err();
    assert!(err.to_string().contains("6 characters"));

    let ok = LoginInput::new("a@b.com", "123456", true)
        .submit(&storage)
        .unwrap();
    assert_eq!(ok.email, "a@b.com");
    assert_eq!(
        storage.get(REMEMBERED_EMAIL_KEY).unwrap().as_deref(),
        Some("a@b.com")
    );
}

#[test]
fn test_remembered_email_prefills_next_visit() {
    let storage = MemoryStore::new();
    assert_eq!(remembered_email(&storage), None);

    LoginInput::new("talaba@buxdu.uz", "maxfiy1", true)
        .submit(&storage)
        .unwrap();
    assert_eq!(
        remembered_email(&storage).as_deref(),
        Some("talaba@buxdu.uz")
    );
}

#[test]
fn test_login_error_notice_uses_login_timing() {
    let mut notice = Notice::new();
    let err = LoginInput::default().validate().unwrap_err();
    assert_eq!(err, LoginError::MissingFields);

    let ticket = notice.show(Some(err.to_string()));
    assert_eq!(notice.phase(), NoticePhase::Shown);
    assert_eq!(LOGIN_ERROR.total().as_millis(), 4300);
    assert!(notice.begin_fade(ticket));
    assert!(notice.finish(ticket));
    assert!(!notice.is_visible());
}

#[test]
fn test_register_typed_phone_then_submit() {
    let typed = format_phone("998901234567");
    assert_eq!(typed, "+998 90 123 45 67");

    let input = RegisterInput {
        full_name: "Karimova Dilnoza Rustamovna".to_string(),
        phone: typed,
        region: REGIONS[5].to_string(),
        password: "Kuchli#Parol12".to_string(),
        confirm_password: "Kuchli#Parol12".to_string(),
        terms_accepted: true,
    };
    let ok = input.validate().unwrap();
    assert_eq!(ok.phone, "+998901234567");
    assert_eq!(password_strength(&input.password), 5);
}

#[test]
fn test_register_rejections() {
    let base = RegisterInput {
        full_name: "Ali".to_string(),
        phone: "+998 90 123 45 67".to_string(),
        region: REGIONS[0].to_string(),
        password: "abc".to_string(),
        confirm_password: "abcd".to_string(),
        terms_accepted: true,
    };
    assert_eq!(base.validate(), Err(RegisterError::IncompleteName));

    let named = RegisterInput {
        full_name: "Ali Valiyev".to_string(),
        ..base
    };
    let err = named.validate().unwrap_err();
    assert_eq!(err, RegisterError::PasswordMismatch);
    assert!(err.marks_confirm_invalid());
    assert_eq!(
        ConfirmState::check(&named.password, &named.confirm_password),
        ConfirmState::Mismatch
    );
    assert_eq!(REGISTER_ERROR.visible.as_millis(), 5000);
}
