//! Thin helpers over web-sys
//!
//! Every lookup returns `Option`: pages are free to omit any control, and a
//! missing element always means "skip", never an error.

use buxdu_core::navigation::id_selector;
use buxdu_core::panel::{PanelState, ACTIVE_CLASS};
use leptos::logging::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, SvgElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Every match in the document; two mounted headers share ids and classes
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element with `id` inside `scope` only
pub fn by_id_within(scope: &Element, id: &str) -> Option<Element> {
    scope.query_selector(&id_selector(id)).ok().flatten()
}

/// Last path segment of the current location
pub fn current_page() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| buxdu_core::auth_button::page_name(&path).to_string())
        .unwrap_or_default()
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Write inline style properties on an HTML or SVG element
pub fn set_styles(element: &Element, properties: &[(&str, &str)]) {
    let style = if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style()
    } else if let Some(svg) = element.dyn_ref::<SvgElement>() {
        svg.style()
    } else {
        return;
    };
    for (name, value) in properties {
        if let Err(e) = style.set_property(name, value) {
            warn!("Failed to set style {}: {:?}", name, e);
        }
    }
}

/// Attach a listener for the lifetime of the page
///
/// The closure is leaked and lives as long as its target.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        warn!("Failed to add listener for {}: {:?}", event, e);
    }
    callback.forget();
}

/// Panel state as reflected by its `active` class
pub fn panel_state(panel: &Element) -> PanelState {
    PanelState::from_active_class(panel.class_list().contains(ACTIVE_CLASS))
}

pub fn apply_panel(panel: &Element, state: PanelState) {
    let classes = panel.class_list();
    let result = if state.is_open() {
        classes.add_1(ACTIVE_CLASS)
    } else {
        classes.remove_1(ACTIVE_CLASS)
    };
    if let Err(e) = result {
        warn!("Failed to update panel class: {:?}", e);
    }
}
