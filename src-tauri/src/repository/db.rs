//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared database state.
///
/// The connection slot stays `None` until `init_db` has finished, so the
/// app can be managed by Tauri before the database is ready.
#[derive(Clone, Default)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
}

impl DbState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Open the database at `db_path` (":memory:" for an in-memory DB) and migrate it
pub async fn init_db(db_path: &Path) -> Result<DbState, String> {
    let conn = if db_path == Path::new(":memory:") {
        Connection::open_in_memory()
    } else {
        Connection::open(db_path)
    }
    .map_err(|e| format!("Failed to open db: {}", e))?;

    run_migrations(&conn)?;

    let state = DbState::new();
    *state.conn.lock().await = Some(conn);

    Ok(state)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS rizz (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            rizz TEXT NOT NULL,
            votes INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER,
            updated_at INTEGER
        )",
        [],
    )
    .map_err(|e| format!("Failed to create rizz table: {}", e))?;

    conn.execute("CREATE INDEX IF NOT EXISTS idx_rizz_votes ON rizz(votes)", [])
        .map_err(|e| e.to_string())?;

    Ok(())
}
