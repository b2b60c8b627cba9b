//! Backend Event Listeners
//!
//! Bindings to the Tauri event API.

use wasm_bindgen::prelude::*;
use super::js_error;

/// Emitted by the backend once the database is ready
pub const DB_INITIALIZED: &str = "db-initialized";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

/// Run `handler` every time the database-ready event arrives.
/// The listener lives for the rest of the page.
pub async fn on_db_initialized(handler: impl Fn() + 'static) -> Result<(), String> {
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |_payload: JsValue| handler());
    listen(DB_INITIALIZED, &closure).await.map_err(js_error)?;
    closure.forget();
    Ok(())
}
