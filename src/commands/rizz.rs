//! Rizz Commands
//!
//! Frontend bindings for the `rizz` API.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Rizz;
use super::{invoke, js_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SubmitArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

// ========================
// Commands
// ========================

/// Fetch every rizz in server order
pub async fn get_all() -> Result<Vec<Rizz>, String> {
    let result = invoke("get_all_rizz", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Submit a new rizz, returns the created entry
pub async fn submit(name: &str) -> Result<Rizz, String> {
    let js_args = serde_wasm_bindgen::to_value(&SubmitArgs { name }).map_err(|e| e.to_string())?;
    let result = invoke("submit_rizz", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn upvote(id: u32) -> Result<Rizz, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("upvote_rizz", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn downvote(id: u32) -> Result<Rizz, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("downvote_rizz", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
