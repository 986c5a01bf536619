//! The seam between typed resource bindings and the HTTP layer.

use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::HttpResponse;

/// Anything that can issue an authenticated GET against the Admin REST API.
///
/// [`RestClient`](crate::clients::rest::RestClient) is the production
/// implementation. Resource bindings are generic over this trait so they can
/// be driven by an in-memory transport in tests.
///
/// `path` is relative to the versioned base path (`inventory_levels`,
/// not `/admin/api/2025-10/inventory_levels.json`). A non-2xx response must be
/// reported as [`RestError::Http`].
#[allow(async_fn_in_trait)]
pub trait RestTransport: Send + Sync {
    /// Sends a single GET request.
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError>;
}
