//! Scroll-reactive header styling
//!
//! Recomputes on every window scroll and on every theme change; the core
//! [`ScrollStyler`] drops events that would not change anything.

use crate::dom::{listen, query_all, scroll_offset, set_styles, window};
use crate::theme;
use buxdu_core::navigation::{MAIN_NAV_SELECTOR, TOP_BAR_SELECTOR};
use buxdu_core::scroll::ScrollStyler;
use buxdu_core::theme::ThemeState;
use std::cell::{Cell, RefCell};
use web_sys::Event;

thread_local! {
    static STYLER: RefCell<ScrollStyler> = RefCell::new(ScrollStyler::new());
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Attach the window scroll listener and the theme subscription (once per page)
pub fn install() {
    if INSTALLED.with(|installed| installed.replace(true)) {
        return;
    }

    if let Some(window) = window() {
        listen(&window, "scroll", |_: Event| apply(theme::current()));
    }
    theme::with_store(|store| store.subscribe(apply));

    apply(theme::current());
}

/// Re-apply the current style to freshly injected header nodes
pub fn refresh() {
    STYLER.with(|styler| styler.borrow_mut().invalidate());
    apply(theme::current());
}

fn apply(theme: ThemeState) {
    let top_bars = query_all(TOP_BAR_SELECTOR);
    let main_navs = query_all(MAIN_NAV_SELECTOR);
    if top_bars.is_empty() || main_navs.is_empty() {
        return;
    }

    let offset = scroll_offset();
    let Some(style) = STYLER.with(|styler| styler.borrow_mut().update(offset, theme)) else {
        return;
    };

    for top_bar in &top_bars {
        set_styles(top_bar, &style.top_bar_properties());
    }
    for main_nav in &main_navs {
        set_styles(main_nav, &style.nav_properties());
    }
}
