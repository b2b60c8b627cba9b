//! Log Commands
//!
//! Read access to the in-memory log buffer.

/// Most recent log lines, oldest first
#[tauri::command]
pub fn recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}
