//! Log access from the browser devtools
//!
//! `window.lostFoundLogs()` returns the logger's buffered records as lines.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

const LOGS_HOOK: &str = "lostFoundLogs";

pub fn expose_recent_logs() {
    let dump = Closure::<dyn Fn() -> js_sys::Array>::new(|| {
        board_logger::recent()
            .iter()
            .map(|entry| JsValue::from_str(&entry.to_string()))
            .collect::<js_sys::Array>()
    });
    if let Some(win) = web_sys::window() {
        if let Err(e) = js_sys::Reflect::set(&win, &JsValue::from_str(LOGS_HOOK), dump.as_ref()) {
            log::warn!("Could not install window.{}: {:?}", LOGS_HOOK, e);
        }
    }
    dump.forget();
}
