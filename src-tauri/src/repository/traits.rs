//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async so commands can await them directly.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Persist a new entity, returning it with its assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// List all entities in creation order
    async fn list(&self) -> DomainResult<Vec<T>>;
}
