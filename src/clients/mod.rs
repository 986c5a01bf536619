//! HTTP client types for Shopify API communication.
//!
//! This module provides the HTTP layer for making authenticated requests to
//! the Shopify Admin API. It handles request/response processing, retry
//! logic, and Shopify-specific header parsing.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A GET request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestTransport`]: The trait resource bindings are generic over
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::{HttpClient, HttpRequest, Session, ShopDomain};
//!
//! let session = Session::new(ShopDomain::new("my-store")?, "access-token");
//! let client = HttpClient::new("/admin/api/2025-10", &session, None);
//!
//! let request = HttpRequest::builder("inventory_levels.json")
//!     .query_param("location_ids", "655441491")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse};

pub use rest::{RestClient, RestError, RestTransport};
