//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version to allow for version-specific
//! differences in resource structure or behavior:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v2025_10/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! The latest stable version is re-exported at this module level:
//!
//! ```rust,ignore
//! use shopify_inventory::rest::resources::InventoryLevels;  // Uses latest version
//!
//! // Or explicitly specify a version:
//! use shopify_inventory::rest::resources::v2025_10::InventoryLevels;
//! ```

pub mod v2025_10;

pub use v2025_10::{InventoryLevel, InventoryLevelListOptions, InventoryLevels};
