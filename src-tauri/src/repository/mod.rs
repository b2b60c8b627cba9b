//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod rizz_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{init_db, DbState};
pub use rizz_repo::RizzRepository;
