//! Console logging
//!
//! On wasm32 messages go to the browser devtools console.
//! Native builds (tests, tooling) write to stderr instead, since the
//! `web_sys` imports are only callable inside a JS host.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub fn debug(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::debug_1(&JsValue::from_str(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[debug] {msg}");
    }
}

pub fn info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[info] {msg}");
    }
}

pub fn error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::error_1(&JsValue::from_str(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[error] {msg}");
    }
}
