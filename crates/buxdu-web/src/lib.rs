//! buxdu-web - Browser front end for the BuxDU site
//!
//! Compiled to WASM and loaded by every static page. On DOM ready it shows
//! the preloader, applies the stored theme, injects the shared header and
//! mounts whichever auth form the page hosts.

pub mod components;
pub mod dom;
pub mod header;
pub mod preloader;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod user_menu;

use buxdu_core::navigation::HEADER_CONTAINER_ID;
use buxdu_core::preloader::ReadyState;
use components::{LoginForm, RegisterForm, LOGIN_ROOT_ID, REGISTER_ROOT_ID};
use leptos::mount::mount_to;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

/// Run page setup now, or on `DOMContentLoaded` if the document is still loading
pub fn start() {
    let Some(document) = dom::document() else {
        return;
    };

    if !ReadyState::parse(&document.ready_state()).dom_ready() {
        dom::listen(&document, "DOMContentLoaded", |_: Event| on_dom_ready());
    } else {
        on_dom_ready();
    }
}

fn on_dom_ready() {
    preloader::init();
    theme::install();
    header::mount(HEADER_CONTAINER_ID);
    scroll::install();
    user_menu::init();
    mount_forms();
}

/// Re-inject the header into another container (exposed to page scripts)
#[wasm_bindgen(js_name = mountHeader)]
pub fn mount_header(container_id: &str) {
    header::mount(container_id);
}

fn mount_root(id: &str) -> Option<HtmlElement> {
    dom::by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn mount_forms() {
    if let Some(root) = mount_root(LOGIN_ROOT_ID) {
        mount_to(root, LoginForm).forget();
    }
    if let Some(root) = mount_root(REGISTER_ROOT_ID) {
        mount_to(root, RegisterForm).forget();
    }
}
