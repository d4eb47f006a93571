//! `kitchenpos-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the domain error model, and the `Money` / `Quantity` value objects
//! shared by the catalog modules.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod quantity;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, EntityKind};
pub use id::{MenuGroupId, MenuId, ProductId};
pub use money::Money;
pub use quantity::Quantity;
