//! Persistence abstractions for the catalog (repositories + in-memory backend).

pub mod in_memory;
pub mod repository;

pub use in_memory::InMemoryStore;
pub use repository::{MenuGroupRepository, MenuRepository, ProductRepository};

use thiserror::Error;

/// Storage operation error.
///
/// These are **infrastructure errors** as opposed to domain errors (validation,
/// missing references, price bound).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend cannot serve requests (e.g. a poisoned lock or lost connection).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
