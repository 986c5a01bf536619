//! REST resource infrastructure for the Shopify Admin API.
//!
//! - **[`ListParams`]**: how a list call is filtered or paged
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper carrying pagination,
//!   rate limit and request id alongside the data
//! - **[`parse_link_header`]**: cursor extraction from the `Link` header
//! - **[`ResourceError`]**: error types for resource operations
//!
//! Individual resources live in the [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::{RestClient, Session, ShopDomain};
//! use shopify_inventory::rest::ListParams;
//! use shopify_inventory::rest::resources::{InventoryLevelListOptions, InventoryLevels};
//!
//! let session = Session::new(ShopDomain::new("my-store")?, "access-token");
//! let client = RestClient::new(&session, None);
//!
//! let levels = InventoryLevels::new(&client)
//!     .list(ListParams::Filter(InventoryLevelListOptions {
//!         location_ids: vec![655441491],
//!         ..Default::default()
//!     }))
//!     .await?;
//! ```

mod errors;
mod pagination;
mod params;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use pagination::{parse_link_header, PageOptions, Pagination, PaginationError};
pub use params::{ListOptions, ListParams};
pub use response::ResourceResponse;
