//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod rizz_cmd;
mod log_cmd;

pub use rizz_cmd::*;
pub use log_cmd::*;
