//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

pub mod rizz;
mod events;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Command errors reject with the backend's string; IPC failures with an `Error`
fn js_error(err: JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => format!("{:?}", err),
    }
}

pub use events::*;
