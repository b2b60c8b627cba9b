//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Rizz entry (matches backend, timestamps are ignored)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rizz {
    pub id: u32,
    pub rizz: String,
    pub votes: i32,
}

/// Client-side sort order for the rizz list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most votes first
    #[default]
    Vote,
    /// Content, ascending
    Alphabetical,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Vote => "vote",
            SortOrder::Alphabetical => "alphabetical",
        }
    }

    /// Unknown values are ignored by the selector
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "vote" => Some(SortOrder::Vote),
            "alphabetical" => Some(SortOrder::Alphabetical),
            _ => None,
        }
    }
}
