//! Header injection, auth button and mobile menu

use crate::dom::{apply_panel, by_id, by_id_within, current_page, listen, panel_state};
use crate::{scroll, theme};
use buxdu_core::auth_button::{self, AuthAction, AUTH_BUTTON_IDS};
use buxdu_core::navigation::NavigationTemplate;
use buxdu_core::panel::{CLOSE_MENU_ID, MOBILE_MENU_ID, OPEN_MENU_ID};
use leptos::logging::{error, log};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlAnchorElement};

thread_local! {
    static NAVIGATION: Option<NavigationTemplate> = match NavigationTemplate::embedded() {
        Ok(nav) => Some(nav),
        Err(e) => {
            error!("Embedded navigation is invalid: {}", e);
            None
        }
    };
}

/// Inject the header into `container_id` and bind its controls
///
/// Does nothing when the page has no such element. Calling it again replaces
/// the whole subtree, so listeners on the old nodes are discarded with them.
/// Mounting into a second container binds only that container's controls.
pub fn mount(container_id: &str) {
    let Some(container) = by_id(container_id) else {
        log!("No #{} on this page, header not mounted", container_id);
        return;
    };

    let theme = theme::current();
    let rendered = NAVIGATION.with(|nav| {
        nav.as_ref()
            .map(|nav| nav.render_for(AuthAction::DEFAULT, theme))
    });
    let html = match rendered {
        Some(Ok(html)) => html,
        Some(Err(e)) => {
            error!("Failed to render header: {}", e);
            return;
        }
        None => return,
    };

    container.set_inner_html(&html);

    // Controls are looked up inside this container, another one may hold the same ids
    adapt_auth_buttons(&container, &current_page());
    bind_mobile_menu(&container);
    theme::bind_toggle(&container);
    scroll::refresh();
}

/// Point the desktop and mobile auth controls at the other auth page
fn adapt_auth_buttons(header: &Element, page: &str) {
    let Some(action) = auth_button::adapt(page) else {
        return;
    };

    for id in AUTH_BUTTON_IDS {
        let Some(button) = by_id_within(header, id) else {
            continue;
        };
        if let Some(anchor) = button.dyn_ref::<HtmlAnchorElement>() {
            anchor.set_href(action.href);
        }
        button.set_text_content(Some(action.label));
    }
}

fn bind_mobile_menu(header: &Element) {
    let (Some(open), Some(close), Some(panel)) = (
        by_id_within(header, OPEN_MENU_ID),
        by_id_within(header, CLOSE_MENU_ID),
        by_id_within(header, MOBILE_MENU_ID),
    ) else {
        return;
    };

    let open_panel = panel.clone();
    listen(&open, "click", move |_: Event| {
        let mut state = panel_state(&open_panel);
        apply_panel(&open_panel, state.open());
    });

    listen(&close, "click", move |_: Event| {
        let mut state = panel_state(&panel);
        apply_panel(&panel, state.close());
    });
}
