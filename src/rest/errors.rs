//! Error types for REST resource operations.
//!
//! [`ResourceError`] separates the ways a list call can fail:
//!
//! - **Transport**: [`ResourceError::Http`] / [`ResourceError::Rest`], a network
//!   failure or non-2xx response
//! - **Decoding**: [`ResourceError::Decode`], the body is not the expected JSON
//! - **Pagination**: [`ResourceError::Pagination`], a malformed `Link` header
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::rest::ResourceError;
//!
//! match levels.list(ListParams::All).await {
//!     Ok(levels) => println!("{} levels", levels.len()),
//!     Err(ResourceError::Pagination(e)) => println!("bad Link header: {e}"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use crate::clients::{HttpError, HttpResponseError, RestError};
use crate::rest::PaginationError;
use thiserror::Error;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// The response body did not match the expected shape.
    #[error("Failed to decode {resource} response: {message}")]
    Decode {
        /// The type name of the resource (e.g., "InventoryLevel").
        resource: &'static str,
        /// What went wrong.
        message: String,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The `Link` header could not be parsed.
    #[error("Malformed Link header: {0}")]
    Pagination(#[from] PaginationError),

    /// The list parameters could not be turned into a query string.
    #[error("Invalid list parameters: {message}")]
    InvalidParams {
        /// What went wrong.
        message: String,
    },
}

impl ResourceError {
    /// Creates a `ResourceError` for a non-2xx response.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_inventory::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     404,
    ///     &json!({"errors": "Not Found"}),
    ///     Some("req-123"),
    /// );
    /// assert_eq!(error.request_id(), Some("req-123"));
    /// ```
    #[must_use]
    pub fn from_http_response(code: u16, body: &serde_json::Value, request_id: Option<&str>) -> Self {
        Self::Http(HttpError::Response(HttpResponseError {
            code,
            message: body.to_string(),
            error_reference: request_id.map(ToString::to_string),
        }))
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Decode { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) | Self::Rest(RestError::Http(HttpError::Response(e))) => {
                e.error_reference.as_deref()
            }
            Self::Http(HttpError::MaxRetries(e))
            | Self::Rest(RestError::Http(HttpError::MaxRetries(e))) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MaxHttpRetriesExceededError;
    use serde_json::json;

    #[test]
    fn test_decode_error_formats_message_with_resource() {
        let error = ResourceError::Decode {
            resource: "InventoryLevel",
            message: "missing field `location_id`".to_string(),
            request_id: Some("req-1".to_string()),
        };
        let message = error.to_string();

        assert!(message.contains("InventoryLevel"));
        assert!(message.contains("location_id"));
        assert_eq!(error.request_id(), Some("req-1"));
    }

    #[test]
    fn test_pagination_error_converts() {
        let error: ResourceError = PaginationError::MissingPageInfo {
            rel: "next".to_string(),
        }
        .into();

        assert!(matches!(error, ResourceError::Pagination(_)));
        assert!(error.to_string().contains("page_info"));
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_from_http_response_keeps_code_and_body() {
        let error = ResourceError::from_http_response(
            500,
            &json!({"errors": "Internal error"}),
            Some("req-789"),
        );

        assert!(matches!(
            &error,
            ResourceError::Http(HttpError::Response(e)) if e.code == 500
        ));
        assert!(error.to_string().contains("Internal error"));
        assert_eq!(error.request_id(), Some("req-789"));
    }

    #[test]
    fn test_request_id_through_rest_error() {
        let error: ResourceError = RestError::Http(HttpError::MaxRetries(
            MaxHttpRetriesExceededError {
                code: 429,
                tries: 3,
                message: "{}".to_string(),
                error_reference: Some("req-abc".to_string()),
            },
        ))
        .into();

        assert_eq!(error.request_id(), Some("req-abc"));
    }

    #[test]
    fn test_from_rest_error_conversion() {
        let rest_error = RestError::InvalidPath {
            path: String::new(),
        };

        let resource_error: ResourceError = rest_error.into();
        assert!(matches!(resource_error, ResourceError::Rest(_)));
        assert_eq!(resource_error.request_id(), None);
    }
}
