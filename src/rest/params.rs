//! List parameters and their query-string encoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rest::{PageOptions, ResourceError};

/// Paging parameters shared by every list endpoint.
///
/// Resource filter structs embed this with `#[serde(flatten)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Cursor token for a specific page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Maximum number of results per page (Shopify default 50, max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// The three ways a list endpoint is called.
///
/// `F` is the resource's typed filter struct.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::rest::ListParams;
/// use shopify_inventory::rest::resources::v2025_10::InventoryLevelListOptions;
///
/// let params = ListParams::Filter(InventoryLevelListOptions {
///     location_ids: vec![655441491],
///     ..Default::default()
/// });
///
/// let query = params.to_query().unwrap();
/// assert_eq!(query.get("location_ids").map(String::as_str), Some("655441491"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListParams<F> {
    /// No filter; the endpoint's defaults apply.
    All,
    /// A typed filter.
    Filter(F),
    /// A cursor taken from a previous response's `Link` header.
    Page(PageOptions),
}

impl<F> Default for ListParams<F> {
    fn default() -> Self {
        Self::All
    }
}

impl<F: Serialize> ListParams<F> {
    /// Flattens the parameters into a query map.
    ///
    /// Sequences become comma-joined lists in their original order. `None`
    /// fields and empty sequences are left out.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParams`] if the filter cannot be
    /// serialized.
    pub fn to_query(&self) -> Result<HashMap<String, String>, ResourceError> {
        match self {
            Self::All => Ok(HashMap::new()),
            Self::Filter(filter) => serialize_to_query(filter),
            Self::Page(page) => serialize_to_query(page),
        }
    }
}

/// Serializes a params struct into query parameters.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidParams {
        message: format!("Failed to serialize params: {e}"),
    })?;

    let map = match value {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(ResourceError::InvalidParams {
                message: format!("Params must serialize to an object, got {other}"),
            })
        }
    };

    let mut query = HashMap::new();

    for (key, val) in map {
        match val {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) => {
                query.insert(key, s);
            }
            serde_json::Value::Number(n) => {
                query.insert(key, n.to_string());
            }
            serde_json::Value::Bool(b) => {
                query.insert(key, b.to_string());
            }
            serde_json::Value::Array(arr) => {
                let values: Vec<String> = arr
                    .iter()
                    .filter_map(|v| match v {
                        serde_json::Value::String(s) => Some(s.clone()),
                        serde_json::Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                if !values.is_empty() {
                    query.insert(key, values.join(","));
                }
            }
            serde_json::Value::Object(_) => {
                query.insert(key, val.to_string());
            }
        }
    }

    Ok(query)
}
