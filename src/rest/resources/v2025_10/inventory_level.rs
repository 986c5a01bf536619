//! `InventoryLevel` resource implementation.
//!
//! Inventory levels represent the quantity of an inventory item available at
//! a specific location.
//!
//! # Composite Key
//!
//! Unlike most resources, `InventoryLevel` does NOT have an `id` field. It is
//! identified by `inventory_item_id` + `location_id`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::rest::ListParams;
//! use shopify_inventory::rest::resources::v2025_10::{InventoryLevelListOptions, InventoryLevels};
//!
//! let levels = InventoryLevels::new(&client);
//!
//! let params = ListParams::Filter(InventoryLevelListOptions {
//!     inventory_item_ids: vec![808950810, 808950811],
//!     location_ids: vec![655441491],
//!     ..Default::default()
//! });
//! let mut response = levels.list_with_pagination(params).await?;
//!
//! loop {
//!     for level in response.iter() {
//!         println!("{} @ {}: {:?}", level.inventory_item_id, level.location_id, level.available);
//!     }
//!     match response.pagination()?.next_page() {
//!         Some(next) => response = levels.list_with_pagination(next).await?,
//!         None => break,
//!     }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::rest::{RestClient, RestTransport};
use crate::rest::{ListOptions, ListParams, ResourceError, ResourceResponse};

/// An inventory level in a Shopify store.
///
/// `available` and `updated_at` are `None` when the server omits them (or
/// sends `null`); `Some(0)` is a real zero stock count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryLevel {
    /// The ID of the inventory item.
    pub inventory_item_id: u64,

    /// The ID of the location.
    pub location_id: u64,

    /// The quantity available for sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,

    /// When the inventory level was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID for this inventory level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

#[derive(Deserialize)]
struct InventoryLevelEnvelope {
    inventory_level: InventoryLevel,
}

impl InventoryLevel {
    /// The type name used in error messages.
    pub const NAME: &'static str = "InventoryLevel";
    /// The key wrapping the collection in list responses.
    pub const PLURAL: &'static str = "inventory_levels";
    /// The collection path, relative to the versioned API base.
    pub const PATH: &'static str = "inventory_levels";

    /// Decodes a single-record body, `{"inventory_level": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body is not that shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_inventory::rest::resources::v2025_10::InventoryLevel;
    /// use serde_json::json;
    ///
    /// let level = InventoryLevel::from_envelope(json!({
    ///     "inventory_level": {"inventory_item_id": 1, "location_id": 2, "available": 0}
    /// })).unwrap();
    /// assert_eq!(level.available, Some(0));
    /// ```
    pub fn from_envelope(body: serde_json::Value) -> Result<Self, ResourceError> {
        serde_json::from_value::<InventoryLevelEnvelope>(body)
            .map(|envelope| envelope.inventory_level)
            .map_err(|e| ResourceError::Decode {
                resource: Self::NAME,
                message: format!("Failed to deserialize 'inventory_level': {e}"),
                request_id: None,
            })
    }
}

/// Filters for listing inventory levels.
///
/// Shopify requires at least one of `inventory_item_ids` or `location_ids`,
/// and rejects them alongside `page_info`; neither rule is checked locally.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevelListOptions {
    /// Paging parameters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Inventory item IDs to retrieve levels for. Sent comma-joined.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inventory_item_ids: Vec<u64>,

    /// Location IDs to retrieve levels for. Sent comma-joined.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location_ids: Vec<u64>,

    /// Show inventory levels updated at or after this date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
}

/// The inventory-levels endpoint, bound to a transport.
///
/// Holds only a borrow of the transport, so it is cheap to create per call
/// and safe to share when the transport is.
#[derive(Debug)]
pub struct InventoryLevels<'a, C: RestTransport = RestClient> {
    transport: &'a C,
}

impl<C: RestTransport> Clone for InventoryLevels<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: RestTransport> Copy for InventoryLevels<'_, C> {}

impl<'a, C: RestTransport> InventoryLevels<'a, C> {
    /// Binds the endpoint to a transport.
    #[must_use]
    pub const fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// Lists inventory levels, discarding pagination.
    ///
    /// The `Link` header is still parsed, so a malformed one fails this call
    /// the same way it would show up in [`list_with_pagination`](Self::list_with_pagination).
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Rest`] / [`ResourceError::Http`] if the request fails
    /// - [`ResourceError::Decode`] if the body is not an `inventory_levels` array
    /// - [`ResourceError::Pagination`] if the `Link` header is malformed
    /// - [`ResourceError::InvalidParams`] if the params cannot be encoded
    pub async fn list(
        &self,
        params: ListParams<InventoryLevelListOptions>,
    ) -> Result<Vec<InventoryLevel>, ResourceError> {
        self.list_with_pagination(params).await?.into_checked()
    }

    /// Lists inventory levels along with the page cursors from the `Link`
    /// header.
    ///
    /// Pagination is a separate outcome inside the response: a malformed
    /// `Link` header leaves the decoded levels intact and makes
    /// [`ResourceResponse::pagination`] return `Err`.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Rest`] / [`ResourceError::Http`] if the request fails
    /// - [`ResourceError::Decode`] if the body is not an `inventory_levels` array
    /// - [`ResourceError::InvalidParams`] if the params cannot be encoded
    pub async fn list_with_pagination(
        &self,
        params: ListParams<InventoryLevelListOptions>,
    ) -> Result<ResourceResponse<Vec<InventoryLevel>>, ResourceError> {
        let query = Some(params.to_query()?).filter(|q| !q.is_empty());

        tracing::debug!(
            "Listing {} with query {:?}",
            InventoryLevel::PLURAL,
            query
        );

        let response = self.transport.get(InventoryLevel::PATH, query).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                response.request_id(),
            ));
        }

        // `"inventory_levels": null` is an empty page.
        let levels: ResourceResponse<Option<Vec<InventoryLevel>>> =
            ResourceResponse::from_http_response(
                response,
                InventoryLevel::PLURAL,
                InventoryLevel::NAME,
            )?;
        Ok(levels.map(Option::unwrap_or_default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::rest::RestError;
    use crate::clients::{HttpError, HttpResponse, HttpResponseError};
    use crate::rest::{PageOptions, PaginationError};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    type Query = Option<HashMap<String, String>>;

    struct FakeTransport {
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
        calls: Mutex<Vec<(String, Query)>>,
    }

    impl FakeTransport {
        fn new(body: serde_json::Value) -> Self {
            Self {
                code: 200,
                headers: HashMap::new(),
                body,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with_link(mut self, link: &str) -> Self {
            self.headers
                .insert("link".to_string(), vec![link.to_string()]);
            self
        }

        fn last_call(&self) -> (String, Query) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl RestTransport for FakeTransport {
        async fn get(&self, path: &str, query: Query) -> Result<HttpResponse, RestError> {
            self.calls
                .lock()
                .unwrap()
                .push((path.to_string(), query));
            Ok(HttpResponse::new(
                self.code,
                self.headers.clone(),
                self.body.clone(),
            ))
        }
    }

    struct FailingTransport;

    impl RestTransport for FailingTransport {
        async fn get(&self, _path: &str, _query: Query) -> Result<HttpResponse, RestError> {
            Err(RestError::Http(HttpError::Response(HttpResponseError {
                code: 401,
                message: r#"{"errors":"[API] Invalid API key or access token"}"#.to_string(),
                error_reference: Some("req-401".to_string()),
            })))
        }
    }

    fn levels_body() -> serde_json::Value {
        json!({
            "inventory_levels": [
                {
                    "inventory_item_id": 808950810,
                    "location_id": 655441491,
                    "available": 1,
                    "updated_at": "2024-06-20T15:45:00-04:00",
                    "admin_graphql_api_id": "gid://shopify/InventoryLevel/655441491?inventory_item_id=808950810"
                },
                {
                    "inventory_item_id": 808950811,
                    "location_id": 655441491,
                    "available": 0,
                    "updated_at": null
                },
                {
                    "inventory_item_id": 808950812,
                    "location_id": 655441491
                }
            ]
        })
    }

    #[test]
    fn test_inventory_level_deserialization() {
        let json = r#"{
            "inventory_item_id": 808950810,
            "location_id": 655441491,
            "available": 42,
            "updated_at": "2024-06-20T15:45:00Z",
            "admin_graphql_api_id": "gid://shopify/InventoryLevel/808950810?inventory_item_id=808950810"
        }"#;

        let level: InventoryLevel = serde_json::from_str(json).unwrap();

        assert_eq!(level.inventory_item_id, 808_950_810);
        assert_eq!(level.location_id, 655_441_491);
        assert_eq!(level.available, Some(42));
        assert_eq!(
            level.updated_at,
            Some(
                DateTime::parse_from_rfc3339("2024-06-20T15:45:00Z")
                    .unwrap()
                    .with_timezone(&Utc)
            )
        );
    }

    #[test]
    fn test_zero_available_is_distinct_from_missing() {
        let zero: InventoryLevel = serde_json::from_value(
            json!({"inventory_item_id": 1, "location_id": 2, "available": 0}),
        )
        .unwrap();
        let missing: InventoryLevel =
            serde_json::from_value(json!({"inventory_item_id": 1, "location_id": 2})).unwrap();
        let null: InventoryLevel = serde_json::from_value(
            json!({"inventory_item_id": 1, "location_id": 2, "available": null}),
        )
        .unwrap();

        assert_eq!(zero.available, Some(0));
        assert_eq!(missing.available, None);
        assert_eq!(null.available, None);
    }

    #[test]
    fn test_levels_survive_reencoding() {
        let levels: Vec<InventoryLevel> =
            serde_json::from_value(levels_body()["inventory_levels"].clone()).unwrap();

        let reencoded = serde_json::to_value(&levels).unwrap();
        let decoded: Vec<InventoryLevel> = serde_json::from_value(reencoded.clone()).unwrap();

        assert_eq!(decoded, levels);
        // Omitted fields stay omitted.
        assert!(reencoded[2].get("available").is_none());
        assert!(reencoded[1].get("updated_at").is_none());
        // Same instant, normalized to UTC.
        assert_eq!(reencoded[0]["updated_at"], "2024-06-20T19:45:00Z");
    }

    #[test]
    fn test_from_envelope() {
        let level = InventoryLevel::from_envelope(json!({
            "inventory_level": {
                "inventory_item_id": 808950810,
                "location_id": 905684977,
                "available": 6,
                "updated_at": "2024-01-15T10:30:00Z"
            }
        }))
        .unwrap();

        assert_eq!(level.location_id, 905_684_977);
        assert_eq!(level.available, Some(6));

        let error = InventoryLevel::from_envelope(json!({"inventory_levels": []})).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::Decode {
                resource: "InventoryLevel",
                ..
            }
        ));
    }

    #[test]
    fn test_list_options_query() {
        let params = ListParams::Filter(InventoryLevelListOptions {
            list: ListOptions {
                page_info: None,
                limit: Some(50),
            },
            inventory_item_ids: vec![808_950_810, 808_950_811, 808_950_810],
            location_ids: vec![655_441_492, 655_441_491],
            updated_at_min: Some(
                DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ),
        });

        let query = params.to_query().unwrap();

        assert_eq!(
            query.get("inventory_item_ids").map(String::as_str),
            Some("808950810,808950811,808950810")
        );
        assert_eq!(
            query.get("location_ids").map(String::as_str),
            Some("655441492,655441491")
        );
        assert_eq!(query.get("limit").map(String::as_str), Some("50"));
        assert_eq!(
            query.get("updated_at_min").map(String::as_str),
            Some("2024-01-01T00:00:00Z")
        );
        assert!(!query.contains_key("page_info"));

        let empty = ListParams::Filter(InventoryLevelListOptions::default());
        assert!(empty.to_query().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_sends_one_get_with_filters() {
        let transport = FakeTransport::new(levels_body());
        let levels = InventoryLevels::new(&transport);

        let result = levels
            .list(ListParams::Filter(InventoryLevelListOptions {
                inventory_item_ids: vec![808_950_810],
                location_ids: vec![655_441_491],
                ..Default::default()
            }))
            .await
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].inventory_item_id, 808_950_810);
        assert_eq!(result[1].available, Some(0));
        assert_eq!(result[2].available, None);

        assert_eq!(transport.calls.lock().unwrap().len(), 1);
        let (path, query) = transport.last_call();
        assert_eq!(path, "inventory_levels");
        let query = query.unwrap();
        assert_eq!(query.get("inventory_item_ids").map(String::as_str), Some("808950810"));
        assert_eq!(query.get("location_ids").map(String::as_str), Some("655441491"));
    }

    #[tokio::test]
    async fn test_list_all_sends_no_query() {
        let transport = FakeTransport::new(json!({"inventory_levels": []}));
        let result = InventoryLevels::new(&transport)
            .list(ListParams::All)
            .await
            .unwrap();

        assert!(result.is_empty());
        assert_eq!(transport.last_call().1, None);
    }

    #[tokio::test]
    async fn test_list_with_pagination_returns_cursors() {
        let transport = FakeTransport::new(levels_body()).with_link(
            r#"<https://test-shop.myshopify.com/admin/api/2025-10/inventory_levels.json?limit=3&page_info=prev123>; rel="previous", <https://test-shop.myshopify.com/admin/api/2025-10/inventory_levels.json?limit=3&page_info=next456>; rel="next""#,
        );
        let levels = InventoryLevels::new(&transport);

        let response = levels.list_with_pagination(ListParams::All).await.unwrap();

        assert_eq!(response.len(), 3);
        assert_eq!(response.next_page_info(), Some("next456"));
        assert_eq!(response.previous_page_info(), Some("prev123"));

        let next = response.pagination().unwrap().next_page().unwrap();
        assert_eq!(
            next,
            ListParams::Page(PageOptions {
                page_info: "next456".to_string(),
                limit: Some(3),
            })
        );

        levels.list_with_pagination(next).await.unwrap();
        let query = transport.last_call().1.unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("page_info").map(String::as_str), Some("next456"));
        assert_eq!(query.get("limit").map(String::as_str), Some("3"));
    }

    #[tokio::test]
    async fn test_list_matches_list_with_pagination() {
        let transport = FakeTransport::new(levels_body())
            .with_link(r#"<https://x/y?page_info=abc>; rel="next""#);
        let levels = InventoryLevels::new(&transport);

        let listed = levels.list(ListParams::All).await.unwrap();
        let paged = levels
            .list_with_pagination(ListParams::All)
            .await
            .unwrap()
            .into_inner();

        assert_eq!(listed, paged);
    }

    #[tokio::test]
    async fn test_bad_link_header_fails_list_but_not_list_with_pagination() {
        let transport =
            FakeTransport::new(levels_body()).with_link(r#"<https://x/y>; rel="next""#);
        let levels = InventoryLevels::new(&transport);

        let error = levels.list(ListParams::All).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::Pagination(PaginationError::MissingPageInfo { .. })
        ));

        let response = levels.list_with_pagination(ListParams::All).await.unwrap();
        assert_eq!(response.len(), 3);
        assert!(response.pagination().is_err());
    }

    #[tokio::test]
    async fn test_decode_error() {
        let transport = FakeTransport::new(json!({"inventory_levels": {"not": "a list"}}));
        let error = InventoryLevels::new(&transport)
            .list(ListParams::All)
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ResourceError::Decode {
                resource: "InventoryLevel",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_non_2xx_response_is_http_error() {
        let mut transport = FakeTransport::new(json!({"errors": "Not Found"}));
        transport.code = 404;

        let error = InventoryLevels::new(&transport)
            .list(ListParams::All)
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ResourceError::Http(HttpError::Response(ref e)) if e.code == 404
        ));
    }

    #[tokio::test]
    async fn test_transport_error_is_propagated() {
        let error = InventoryLevels::new(&FailingTransport)
            .list(ListParams::All)
            .await
            .unwrap_err();

        assert!(matches!(error, ResourceError::Rest(RestError::Http(_))));
        assert_eq!(error.request_id(), Some("req-401"));
    }
}
