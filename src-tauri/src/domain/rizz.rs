//! Rizz Entity
//!
//! A short user-submitted line with a signed vote count.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// Longest accepted rizz, in characters
pub const MAX_RIZZ_LEN: usize = 280;

/// A submitted rizz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rizz {
    /// Unique identifier (assigned by the database)
    pub id: u32,
    /// Text content
    pub rizz: String,
    /// Net votes, may go negative
    pub votes: i32,
    /// Unix millis
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Rizz {
    /// Create an unsaved rizz with zero votes
    pub fn new(id: u32, rizz: String) -> Self {
        Self {
            id,
            rizz,
            votes: 0,
            created_at: None,
            updated_at: None,
        }
    }

    /// Trim submitted content and reject empty or oversized text
    pub fn validate_content(content: &str) -> DomainResult<String> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("Rizz cannot be empty".into()));
        }
        let len = trimmed.chars().count();
        if len > MAX_RIZZ_LEN {
            return Err(DomainError::InvalidInput(format!(
                "Rizz is {} characters, limit is {}",
                len, MAX_RIZZ_LEN
            )));
        }
        Ok(trimmed.to_string())
    }
}

impl Entity for Rizz {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Direction of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    /// Change applied to the vote count
    pub fn delta(&self) -> i32 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }
}
