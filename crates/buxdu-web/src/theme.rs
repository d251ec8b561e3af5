//! Theme toggle wiring
//!
//! One [`ThemeStore`] per page. The `data-theme` attribute and the toggle
//! icons are subscribers; the scroll styler subscribes in [`crate::scroll`].

use crate::dom::{by_id_within, document, listen, query_all, set_styles};
use crate::storage::LocalStorage;
use buxdu_core::navigation::{
    id_selector, THEME_ICON_MOON_ID, THEME_ICON_SUN_ID, THEME_TOGGLE_ID,
};
use buxdu_core::theme::{ThemeState, ThemeStore, THEME_ATTRIBUTE};
use leptos::logging::{log, warn};
use std::cell::Cell;
use web_sys::{Element, Event};

thread_local! {
    static STORE: ThemeStore<LocalStorage> = ThemeStore::new(LocalStorage::new());
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

pub fn with_store<R>(f: impl FnOnce(&ThemeStore<LocalStorage>) -> R) -> R {
    STORE.with(f)
}

pub fn current() -> ThemeState {
    with_store(|store| store.theme())
}

pub fn set_theme(theme: ThemeState) {
    with_store(|store| store.set_theme(theme));
}

/// Initialise `data-theme` from storage and subscribe the attribute and icons
///
/// Safe to call more than once; only the first call subscribes.
pub fn install() {
    if INSTALLED.with(|installed| installed.replace(true)) {
        return;
    }

    let theme = current();
    apply_attribute(theme);
    apply_icons(theme);

    with_store(|store| {
        store.subscribe(apply_attribute);
        store.subscribe(apply_icons);
    });
}

/// Bind the toggle button of a freshly mounted header
pub fn bind_toggle(header: &Element) {
    let Some(button) = by_id_within(header, THEME_TOGGLE_ID) else {
        return;
    };
    if by_id_within(header, THEME_ICON_SUN_ID).is_none()
        || by_id_within(header, THEME_ICON_MOON_ID).is_none()
    {
        return;
    }

    apply_icons(current());

    listen(&button, "click", |_: Event| {
        let theme = with_store(|store| store.toggle());
        log!("Theme switched to {}", theme);
    });
}

fn apply_attribute(theme: ThemeState) {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };
    if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        warn!("Failed to set {}: {:?}", THEME_ATTRIBUTE, e);
    }
}

fn apply_icons(theme: ThemeState) {
    let (sun, moon) = theme.icons().display();
    for icon in query_all(&id_selector(THEME_ICON_SUN_ID)) {
        set_styles(&icon, &[("display", sun)]);
    }
    for icon in query_all(&id_selector(THEME_ICON_MOON_ID)) {
        set_styles(&icon, &[("display", moon)]);
    }
}
