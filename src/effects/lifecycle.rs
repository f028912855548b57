use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::effects::tooltip;

/// Escape blurs whatever holds focus and dismisses the shared tooltip.
pub fn init_escape_dismiss() {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return,
    };
    let callback = Closure::wrap(Box::new({
        let document = document.clone();
        move |event: KeyboardEvent| {
            if event.key() != "Escape" {
                return;
            }
            if let Some(active) = document
                .active_element()
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            {
                let _ = active.blur();
            }
            tooltip::hide(&document);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
    callback.forget();
}

/// Fades the page in once loading settles. A no-op unless the host styles
/// start the body transparent (index.html does).
pub fn init_page_fade_in() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };

    // The wasm module can come up before or after the load event; handle
    // both the same way the init path handles document readiness.
    if document.ready_state() == "complete" {
        show_body(&document);
        return;
    }
    let callback = Closure::wrap(Box::new(move || {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            show_body(&document);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("load", callback.as_ref().unchecked_ref());
    callback.forget();
}

fn show_body(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("opacity", "1");
    }
}
