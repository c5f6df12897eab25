//! Board configuration from `window.LOST_FOUND_CONFIG`

use wasm_bindgen::JsValue;

use lost_found_core::BoardConfig;

use super::js_error;

const CONFIG_GLOBAL: &str = "LOST_FOUND_CONFIG";

/// Read the page-provided config object, falling back to defaults when it is
/// missing or malformed.
pub fn load_board_config() -> BoardConfig {
    let Some(window) = web_sys::window() else {
        return BoardConfig::default();
    };
    let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return BoardConfig::default(),
    };
    let parsed = js_sys::JSON::stringify(&value)
        .map_err(js_error)
        .and_then(|json| BoardConfig::from_json(&String::from(json)).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("[CONFIG] Ignoring window.{}: {}", CONFIG_GLOBAL, e).into());
            BoardConfig::default()
        }
    }
}
