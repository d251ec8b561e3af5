//! Page preloader overlay

use crate::dom::{by_id, document, listen, window};
use buxdu_core::preloader::{
    Preloader, ReadyState, FALLBACK_TIMEOUT, PRELOADER_CLASS, PRELOADER_HIDDEN_CLASS,
    PRELOADER_HTML, PRELOADER_ID,
};
use leptos::logging::warn;
use leptos::prelude::set_timeout;
use std::cell::RefCell;
use web_sys::Event;

thread_local! {
    static PRELOADER: RefCell<Preloader> = RefCell::new(Preloader::new());
}

/// Show the overlay until `load` fires or the fallback timeout elapses
///
/// No-op if the overlay is already in the document.
pub fn init() {
    let Some(document) = document() else {
        return;
    };
    if by_id(PRELOADER_ID).is_some() {
        return;
    }

    let Some(body) = document.body() else {
        return;
    };
    let overlay = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            warn!("Failed to create preloader: {:?}", e);
            return;
        }
    };
    overlay.set_id(PRELOADER_ID);
    overlay.set_class_name(PRELOADER_CLASS);
    overlay.set_inner_html(PRELOADER_HTML);
    if let Err(e) = body.append_child(&overlay) {
        warn!("Failed to attach preloader: {:?}", e);
        return;
    }

    if ReadyState::parse(&document.ready_state()).loaded() {
        hide();
        return;
    }

    if let Some(window) = window() {
        listen(&window, "load", |_: Event| hide());
    }
    set_timeout(hide, FALLBACK_TIMEOUT);
}

/// Start the fade; the second trigger to arrive finds the phase moved on
pub fn hide() {
    let Some(delay) = PRELOADER.with(|p| p.borrow_mut().hide()) else {
        return;
    };

    if let Some(overlay) = by_id(PRELOADER_ID) {
        if let Err(e) = overlay.class_list().add_1(PRELOADER_HIDDEN_CLASS) {
            warn!("Failed to fade preloader: {:?}", e);
        }
    }
    set_timeout(remove, delay);
}

fn remove() {
    if PRELOADER.with(|p| p.borrow_mut().remove()) {
        if let Some(overlay) = by_id(PRELOADER_ID) {
            overlay.remove();
        }
    }
}
