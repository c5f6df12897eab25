//! Browser Bindings
//!
//! Rust wrappers around the JS globals the board talks to: the hosted store
//! client (`window.storage`), EmailJS, the clipboard and window events.

mod clipboard;
mod config;
mod diagnostics;
mod email;
mod events;
mod storage;

use wasm_bindgen::{JsCast, JsValue};

pub use clipboard::copy_text;
pub use config::load_board_config;
pub use diagnostics::expose_recent_logs;
pub use email::EmailJsRelay;
pub use events::{on_escape, on_items_updated};
pub use storage::WindowStorage;

/// Best-effort message out of a thrown JS value
pub(crate) fn js_error(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
