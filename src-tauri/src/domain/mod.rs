//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod rizz;

pub use entity::{Entity, DomainError, DomainResult};
pub use rizz::{Rizz, Vote};
