//! Rizz Repository
//!
//! SQLite-backed storage for rizz and their votes.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Rizz, Vote};
use super::traits::Repository;

const SELECT_RIZZ: &str = "SELECT id, rizz, votes, created_at, updated_at FROM rizz";

/// SQLite implementation of the rizz repository
pub struct RizzRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl RizzRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// Apply a vote atomically and return the updated rizz.
    /// The count saturates at the `i32` bounds.
    pub async fn vote(&self, id: u32, vote: Vote) -> DomainResult<Rizz> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let now = chrono::Local::now().timestamp_millis();
        let changed = conn
            .execute(
                "UPDATE rizz SET votes = MIN(MAX(votes + ?1, ?2), ?3), updated_at = ?4 WHERE id = ?5",
                params![vote.delta(), i32::MIN, i32::MAX, now, id],
            )
            .map_err(internal)?;

        if changed == 0 {
            return Err(DomainError::not_found("Rizz", id));
        }

        find_in(conn, id)?.ok_or_else(|| DomainError::not_found("Rizz", id))
    }
}

#[async_trait]
impl Repository<Rizz> for RizzRepository {
    async fn create(&self, entity: &Rizz) -> DomainResult<Rizz> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO rizz (rizz, votes, created_at, updated_at) VALUES (?, ?, ?, ?)",
            params![entity.rizz, entity.votes, now, now],
        )
        .map_err(internal)?;

        let id = u32::try_from(conn.last_insert_rowid())
            .map_err(|_| DomainError::Internal("Rizz id out of range".to_string()))?;

        Ok(Rizz {
            id,
            rizz: entity.rizz.clone(),
            votes: entity.votes,
            created_at: Some(now),
            updated_at: Some(now),
        })
    }

    async fn list(&self) -> DomainResult<Vec<Rizz>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn
            .prepare(&format!("{} ORDER BY id ASC", SELECT_RIZZ))
            .map_err(internal)?;
        let rows = stmt.query_map([], row_to_rizz).map_err(internal)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(internal)
    }
}

fn find_in(conn: &Connection, id: u32) -> DomainResult<Option<Rizz>> {
    conn.query_row(&format!("{} WHERE id = ?", SELECT_RIZZ), params![id], row_to_rizz)
        .optional()
        .map_err(internal)
}

/// Convert a database row to Rizz
fn row_to_rizz(row: &rusqlite::Row) -> rusqlite::Result<Rizz> {
    Ok(Rizz {
        id: row.get(0)?,
        rizz: row.get(1)?,
        votes: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

fn internal(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

fn not_initialized() -> DomainError {
    DomainError::Internal("Database not initialized".to_string())
}
