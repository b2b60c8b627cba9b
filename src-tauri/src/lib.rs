//! Rizzclopedia Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use std::path::PathBuf;
use tauri::{Emitter, Manager};

mod domain;
mod repository;
mod commands;

use repository::{init_db, DbState};

/// Event emitted once the database is ready
pub const DB_INITIALIZED_EVENT: &str = "db-initialized";

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join("rizzclopedia.db"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "Rizzclopedia")?;

            let db_path = get_db_path(&app_handle)?;
            log::info!("App setup starting, db at {}", db_path.display());

            // Empty DbState, filled in once the background init finishes
            let db_state = DbState::new();
            app.manage(AppState {
                db_state: db_state.clone(),
            });

            tauri::async_runtime::spawn(async move {
                match init_db(&db_path).await {
                    Ok(initialized) => {
                        let conn = initialized.conn.lock().await.take();
                        *db_state.conn.lock().await = conn;
                        let _ = rolling_logger::info("Database initialized");

                        if let Err(e) = app_handle.emit(DB_INITIALIZED_EVENT, ()) {
                            let _ = rolling_logger::error(&format!(
                                "Failed to emit {}: {}",
                                DB_INITIALIZED_EVENT, e
                            ));
                        }
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Database init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_all_rizz,
            commands::submit_rizz,
            commands::upvote_rizz,
            commands::downvote_rizz,
            commands::recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
