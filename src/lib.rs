//! # Shopify Inventory
//!
//! A typed async client for the Shopify Admin REST inventory-levels endpoint.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for the shop domain, API host and API version
//! - An async HTTP client with optional retries and rate limit parsing
//! - The [`InventoryLevels`] endpoint: `list` and `list_with_pagination`
//! - Cursor pagination parsed from the `Link` response header
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_inventory::{ApiVersion, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Listing Inventory Levels
//!
//! ```rust,ignore
//! use shopify_inventory::{InventoryLevels, RestClient, Session, ShopDomain};
//! use shopify_inventory::rest::{ListParams, resources::InventoryLevelListOptions};
//!
//! let session = Session::new(ShopDomain::new("my-store")?, "access-token");
//! let client = RestClient::new(&session, None);
//! let levels = InventoryLevels::new(&client);
//!
//! let params = ListParams::Filter(InventoryLevelListOptions {
//!     inventory_item_ids: vec![808950810, 808950811],
//!     ..Default::default()
//! });
//! let response = levels.list_with_pagination(params).await?;
//!
//! for level in response.iter() {
//!     println!("{} @ {}: {:?}", level.inventory_item_id, level.location_id, level.available);
//! }
//!
//! if let Some(next) = response.pagination()?.next_page() {
//!     let next_levels = levels.list(next).await?;
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod session;

// Re-export public types at crate root for convenience
pub use config::{ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;
pub use session::Session;

// Re-export HTTP client types
pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RestClient,
    RestError, RestTransport,
};

// Re-export REST resource types
pub use rest::resources::{InventoryLevel, InventoryLevelListOptions, InventoryLevels};
pub use rest::{
    parse_link_header, ListOptions, ListParams, PageOptions, Pagination, PaginationError,
    ResourceError, ResourceResponse,
};
