//! Entity trait: identity + the catalog kind used when a lookup misses.

use crate::error::{DomainError, EntityKind};

/// Catalog entity: identified by a stable id, compared by identity rather than value.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Kind reported in `EntityNotFound` errors.
    const KIND: EntityKind;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Error for a reference to an entity of this kind that does not exist.
    fn not_found(id: &Self::Id) -> DomainError {
        DomainError::not_found(Self::KIND, id)
    }
}
