//! Infrastructure layer: persistence adapters and application services.

pub mod services;
pub mod store;

pub use services::ServiceError;
pub use store::StoreError;
