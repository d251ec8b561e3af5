//! User-menu dropdown: trigger toggles, outside click closes

use crate::dom::{apply_panel, by_id, document, listen, panel_state};
use buxdu_core::panel::{USER_MENU_PANEL_ID, USER_MENU_TRIGGER_ID};
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};

pub fn init() {
    let (Some(trigger), Some(panel)) = (by_id(USER_MENU_TRIGGER_ID), by_id(USER_MENU_PANEL_ID))
    else {
        return;
    };
    let Some(document) = document() else {
        return;
    };

    let toggle_panel = panel.clone();
    listen(&trigger, "click", move |ev: MouseEvent| {
        // Keep the document handler below from closing what we just opened
        ev.stop_propagation();
        let mut state = panel_state(&toggle_panel);
        apply_panel(&toggle_panel, state.toggle());
    });

    listen(&document, "click", move |ev: MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = target
            .as_ref()
            .is_some_and(|node| trigger.contains(Some(node)) || panel.contains(Some(node)));

        let mut state = panel_state(&panel);
        apply_panel(&panel, state.dismiss_on_click(inside));
    });
}
