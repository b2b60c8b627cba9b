//! Tauri Commands for the rizz API
//!
//! `get_all`, `submit`, `upvote` and `downvote`, exposed via Tauri IPC.

use tauri::State;
use crate::domain::{DomainError, DomainResult, Entity, Rizz, Vote};
use crate::repository::{Repository, RizzRepository};
use crate::AppState;

/// List every rizz in creation order
#[tauri::command]
pub async fn get_all_rizz(state: State<'_, AppState>) -> Result<Vec<Rizz>, String> {
    let repo = RizzRepository::new(state.db_state.conn.clone());
    repo.list().await.map_err(|e| ipc_error("get_all", e))
}

/// Submit a new rizz
#[tauri::command]
pub async fn submit_rizz(state: State<'_, AppState>, name: String) -> Result<Rizz, String> {
    let repo = RizzRepository::new(state.db_state.conn.clone());
    submit(&repo, &name).await.map_err(|e| ipc_error("submit", e))
}

#[tauri::command]
pub async fn upvote_rizz(state: State<'_, AppState>, id: u32) -> Result<Rizz, String> {
    let repo = RizzRepository::new(state.db_state.conn.clone());
    cast_vote(&repo, id, Vote::Up).await.map_err(|e| ipc_error("upvote", e))
}

#[tauri::command]
pub async fn downvote_rizz(state: State<'_, AppState>, id: u32) -> Result<Rizz, String> {
    let repo = RizzRepository::new(state.db_state.conn.clone());
    cast_vote(&repo, id, Vote::Down).await.map_err(|e| ipc_error("downvote", e))
}

async fn submit(repo: &RizzRepository, name: &str) -> DomainResult<Rizz> {
    let content = Rizz::validate_content(name)?;
    let created = repo.create(&Rizz::new(0, content)).await?;
    log::info!("Submitted rizz {}", created.id());
    Ok(created)
}

async fn cast_vote(repo: &RizzRepository, id: u32, vote: Vote) -> DomainResult<Rizz> {
    let updated = repo.vote(id, vote).await?;
    log::info!("{:?} vote on rizz {}, now {}", vote, id, updated.votes);
    Ok(updated)
}

/// Log and flatten an error for the frontend
fn ipc_error(op: &str, e: DomainError) -> String {
    let _ = rolling_logger::warn(&format!("rizz.{} failed: {}", op, e));
    e.to_string()
}
