//! Outgoing GET requests.
//!
//! The transport is read-only: every [`HttpRequest`] is a GET against a path
//! under the client's base path, with optional query parameters.

use std::collections::HashMap;

use crate::clients::errors::InvalidHttpRequestError;

/// A GET request to be sent to the API.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::clients::HttpRequest;
///
/// let request = HttpRequest::builder("inventory_levels.json")
///     .query_param("location_ids", "655441491")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.tries, 1);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Path relative to the client's base path.
    pub path: String,
    /// Query string parameters.
    pub query: Option<HashMap<String, String>>,
    /// Headers sent in addition to the client defaults.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Attempts allowed on 429/500 responses (default: 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Starts building a GET request for `path`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            path: path.into(),
            query: None,
            extra_headers: None,
            tries: 1,
        }
    }

    /// Checks the request before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::ZeroTries`] if `tries` is zero.
    pub const fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.tries == 0 {
            return Err(InvalidHttpRequestError::ZeroTries);
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    tries: u32,
}

impl HttpRequestBuilder {
    /// Replaces the query parameters.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds one query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds one extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets how many attempts a 429 or 500 response may use.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds and verifies the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails verification.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            path: self.path,
            query: self.query,
            extra_headers: self.extra_headers,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}
