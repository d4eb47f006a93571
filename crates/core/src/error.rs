//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Kind of catalog entity referenced by a lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    MenuGroup,
    Product,
    Menu,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::MenuGroup => "menu_group",
            EntityKind::Product => "product",
            EntityKind::Menu => "menu",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Every variant is
/// terminal for the request that produced it; storage failures live in the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value object was constructed from an out-of-range magnitude (e.g. negative money).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    EntityNotFound { entity: EntityKind, id: String },

    /// A request was well-formed but violates a business rule.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn not_found(entity: EntityKind, id: impl core::fmt::Display) -> Self {
        Self::EntityNotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
