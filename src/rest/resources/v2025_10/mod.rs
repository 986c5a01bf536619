//! REST resources for API version 2025-10.
//!
//! - [`InventoryLevel`] - Stock of one inventory item at one location
//! - [`InventoryLevelListOptions`] - Filters for listing inventory levels
//! - [`InventoryLevels`] - The list endpoint, bound to a transport

mod inventory_level;

pub use inventory_level::{InventoryLevel, InventoryLevelListOptions, InventoryLevels};
