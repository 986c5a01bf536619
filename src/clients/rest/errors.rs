//! REST-specific error types.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST client operations.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: String::new() };
/// assert!(error.to_string().contains("Invalid REST API path"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid (e.g. empty after normalization).
    #[error("Invalid REST API path: {path:?}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
