//! Menus domain module.
//!
//! A menu bundles products (each with a quantity) under a menu group and sells the
//! bundle at a fixed price. This crate is pure: it never looks products up. The
//! application layer resolves current product prices and asks the menu whether its
//! own price is above the resolved total.

pub mod menu;
pub mod menu_product;

pub use menu::{CreateMenu, Menu, MenuProductLine};
pub use menu_product::{MenuProduct, MenuProducts};
