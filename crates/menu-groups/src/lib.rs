//! Menu groups domain module.
//!
//! A menu group is a named category (e.g. "two-chicken sets"). Menus point at one by id.

pub mod menu_group;

pub use menu_group::{CreateMenuGroup, MenuGroup};
