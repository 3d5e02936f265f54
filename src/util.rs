// Console logging helpers

use std::cell::Cell;
use wasm_bindgen::JsValue;

thread_local! {
    static DEBUG: Cell<bool> = const { Cell::new(false) };
}

pub fn set_debug(enabled: bool) {
    DEBUG.with(|d| d.set(enabled));
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Per-event tracing; silent unless the page config enables `debug`.
pub fn cdebug(msg: &str) {
    if DEBUG.with(Cell::get) {
        web_sys::console::debug_1(&JsValue::from_str(msg));
    }
}
