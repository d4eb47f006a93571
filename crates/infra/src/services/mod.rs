//! Application services: request orchestration over the pure domain crates.
//!
//! Services own the IO-facing steps (repository lookups, persistence) and leave every
//! business rule to the domain types. They return [`ServiceError`], which keeps the
//! domain failure kinds distinct from storage failures.

pub mod menu_groups;
pub mod menus;
pub mod products;

pub use menu_groups::{MenuGroupResponse, MenuGroupService};
pub use menus::{MenuProductResponse, MenuResponse, MenuService};
pub use products::{ProductResponse, ProductService};

use kitchenpos_core::DomainError;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Deterministic business failure (invalid value, missing reference, price bound).
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Persistence failed; nothing was written.
    #[error(transparent)]
    Store(#[from] StoreError),
}
