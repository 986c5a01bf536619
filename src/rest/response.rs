//! Response wrapper for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines
//! resource data with metadata like pagination and rate limit information.
//! The wrapper implements `Deref` for ergonomic access to the inner data.
//!
//! # Independent pagination
//!
//! The decoded data and the parsed `Link` header are separate outcomes. A
//! malformed `Link` header does not discard a body that decoded fine; it is
//! kept as the `Err` side of [`ResourceResponse::pagination`]. Callers that
//! want both to succeed use [`ResourceResponse::into_checked`].
//!
//! # Example
//!
//! ```rust,ignore
//! let response = InventoryLevels::new(&client)
//!     .list_with_pagination(ListParams::All)
//!     .await?;
//!
//! // Deref to Vec<InventoryLevel>
//! for level in response.iter() {
//!     println!("{} @ {}: {:?}", level.inventory_item_id, level.location_id, level.available);
//! }
//!
//! if let Ok(pagination) = response.pagination() {
//!     if let Some(next) = pagination.next_page() {
//!         // Fetch next page with `next`...
//!     }
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse};
use crate::rest::{parse_link_header, Pagination, PaginationError, ResourceError};

/// A response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::rest::{Pagination, PageOptions, ResourceResponse};
/// use shopify_inventory::clients::ApiCallLimit;
///
/// let response = ResourceResponse::new(
///     vec!["item1", "item2", "item3"],
///     Ok(Pagination {
///         next_page_options: Some(PageOptions::new("eyJsYXN0X2lkIjo0fQ")),
///         previous_page_options: None,
///     }),
///     Some(ApiCallLimit { request_count: 1, bucket_size: 40 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response[0], "item1");
/// assert!(response.has_next_page());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Result<Pagination, PaginationError>,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Result<Pagination, PaginationError>,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data, whatever the
    /// pagination outcome.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the response and returns the data and pagination outcome.
    #[must_use]
    pub fn into_parts(self) -> (T, Result<Pagination, PaginationError>) {
        (self.data, self.pagination)
    }

    /// Consumes the response, returning the data only if the `Link` header
    /// also parsed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Pagination`] if the `Link` header was malformed.
    ///
    /// ```rust
    /// use shopify_inventory::rest::{PaginationError, ResourceError, ResourceResponse};
    ///
    /// let response = ResourceResponse::new(
    ///     vec![1, 2],
    ///     Err(PaginationError::MissingPageInfo { rel: "next".to_string() }),
    ///     None,
    ///     None,
    /// );
    /// assert!(matches!(response.into_checked(), Err(ResourceError::Pagination(_))));
    /// ```
    pub fn into_checked(self) -> Result<T, ResourceError> {
        self.pagination?;
        Ok(self.data)
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the parsed pagination, or why the `Link` header was rejected.
    ///
    /// # Errors
    ///
    /// Returns the [`PaginationError`] the `Link` header produced.
    pub const fn pagination(&self) -> Result<&Pagination, &PaginationError> {
        self.pagination.as_ref()
    }

    /// Returns `true` if there is a next page of results.
    ///
    /// `false` when the `Link` header could not be parsed.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination
            .as_ref()
            .is_ok_and(Pagination::has_next_page)
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.pagination
            .as_ref()
            .is_ok_and(Pagination::has_previous_page)
    }

    /// Returns the page info token for the next page, if available.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .ok()
            .and_then(Pagination::next_page_info)
    }

    /// Returns the page info token for the previous page, if available.
    #[must_use]
    pub fn previous_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .ok()
            .and_then(Pagination::previous_page_info)
    }

    /// Returns the rate limit information, if available.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Creates a `ResourceResponse` from an HTTP response.
    ///
    /// Decodes the body value under `key` and parses the `Link` header. A
    /// missing header means no further pages.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if `key` is missing or its value
    /// does not deserialize into `T`. A bad `Link` header is not an error here.
    pub fn from_http_response(
        response: HttpResponse,
        key: &str,
        resource: &'static str,
    ) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);
        let rate_limit = response.api_call_limit;

        let pagination = response
            .link_header()
            .map_or_else(|| Ok(Pagination::default()), |link| parse_link_header(&link));
        if let Err(error) = &pagination {
            tracing::debug!("Could not parse Link header for {}: {}", resource, error);
        }

        let mut body = response.body;
        let value = body
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| ResourceError::Decode {
                resource,
                message: format!("Missing key '{key}' in response body"),
                request_id: request_id.clone(),
            })?;

        let data = serde_json::from_value(value).map_err(|e| ResourceError::Decode {
            resource,
            message: format!("Failed to deserialize '{key}': {e}"),
            request_id: request_id.clone(),
        })?;

        Ok(Self {
            data,
            pagination,
            rate_limit,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
