//! Products domain module.
//!
//! The product catalog owns the authoritative price of every product. Menus only
//! reference products by id and resolve the current price through a lookup.

pub mod product;

pub use product::{CreateProduct, Product};
