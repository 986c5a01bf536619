//! REST API client for the Shopify Admin API.
//!
//! This module provides a REST client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()` methods
//! - [`RestTransport`]: The trait resource bindings use to reach the API
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::{RestClient, Session, ShopDomain};
//!
//! let session = Session::new(ShopDomain::new("my-store")?, "access-token");
//! let client = RestClient::new(&session, None);
//!
//! let response = client.get("inventory_levels", None).await?;
//! println!("Levels: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/inventory_levels` -> `inventory_levels`
//! - Trailing `.json` is stripped and re-added: `inventory_levels.json` -> `inventory_levels.json`
//! - A path that is empty after stripping is rejected with [`RestError::InvalidPath`]
//!
//! # Retry Behavior
//!
//! Requests are attempted once. [`RestClient::get_with_tries`] allows retries
//! on 429 (rate limited) and 500 (server error) responses.

mod client;
mod errors;
mod transport;

pub use client::RestClient;
pub use errors::RestError;
pub use transport::RestTransport;
