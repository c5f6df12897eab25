//! Window-level event hooks
//!
//! Listeners live for the whole page, so their closures are leaked.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Raised by the store client when its real-time channel reports a change
const ITEMS_UPDATED: &str = "itemsUpdated";

pub fn on_items_updated<F>(callback: F)
where
    F: Fn() + 'static,
{
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        callback();
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback(ITEMS_UPDATED, listener.as_ref().unchecked_ref());
    }
    listener.forget();
}

pub fn on_escape<F>(callback: F)
where
    F: Fn() + 'static,
{
    let listener = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            callback();
        }
    });
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
    }
    listener.forget();
}
