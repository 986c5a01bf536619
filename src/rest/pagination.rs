//! Cursor pagination from the `Link` response header.
//!
//! Shopify paginates REST collections with opaque `page_info` cursors carried
//! in a `Link` header:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2025-10/inventory_levels.json?limit=50&page_info=abc>; rel="next",
//! <https://shop.myshopify.com/admin/api/2025-10/inventory_levels.json?limit=50&page_info=def>; rel="previous"
//! ```
//!
//! [`parse_link_header`] turns such a value into a [`Pagination`]. Parsing is
//! all-or-nothing: a malformed entry fails the whole header.

use serde::Serialize;
use thiserror::Error;

use crate::rest::ListParams;

/// The query parameters needed to fetch an adjacent page.
///
/// When paging with `page_info`, Shopify rejects every filter except `limit`
/// (and `fields`), so this is all a follow-up request carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOptions {
    /// The opaque cursor token.
    pub page_info: String,

    /// Page size carried over from the link, if it had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PageOptions {
    /// Creates page options for the given cursor, without a limit.
    #[must_use]
    pub fn new(page_info: impl Into<String>) -> Self {
        Self {
            page_info: page_info.into(),
            limit: None,
        }
    }
}

/// The next/previous cursors parsed from one response.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::rest::parse_link_header;
///
/// let pagination = parse_link_header(
///     r#"<https://x/y?page_info=abc123>; rel="next""#,
/// ).unwrap();
///
/// assert_eq!(pagination.next_page_info(), Some("abc123"));
/// assert!(!pagination.has_previous_page());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Options for the next page, if there is one.
    pub next_page_options: Option<PageOptions>,
    /// Options for the previous page, if there is one.
    pub previous_page_options: Option<PageOptions>,
}

impl Pagination {
    /// Returns the cursor token for the next page.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.next_page_options
            .as_ref()
            .map(|options| options.page_info.as_str())
    }

    /// Returns the cursor token for the previous page.
    #[must_use]
    pub fn previous_page_info(&self) -> Option<&str> {
        self.previous_page_options
            .as_ref()
            .map(|options| options.page_info.as_str())
    }

    /// Returns `true` if the server advertised a next page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_options.is_some()
    }

    /// Returns `true` if the server advertised a previous page.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.previous_page_options.is_some()
    }

    /// Returns list parameters that fetch the next page.
    ///
    /// ```rust
    /// use shopify_inventory::rest::{parse_link_header, ListParams};
    /// use shopify_inventory::rest::resources::v2025_10::InventoryLevelListOptions;
    ///
    /// let pagination = parse_link_header(
    ///     r#"<https://x/y?limit=10&page_info=abc>; rel="next""#,
    /// ).unwrap();
    ///
    /// let params: ListParams<InventoryLevelListOptions> = pagination.next_page().unwrap();
    /// assert!(matches!(params, ListParams::Page(ref page) if page.limit == Some(10)));
    /// ```
    #[must_use]
    pub fn next_page<F>(&self) -> Option<ListParams<F>> {
        self.next_page_options.clone().map(ListParams::Page)
    }

    /// Returns list parameters that fetch the previous page.
    #[must_use]
    pub fn previous_page<F>(&self) -> Option<ListParams<F>> {
        self.previous_page_options.clone().map(ListParams::Page)
    }
}

/// A malformed `Link` header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A link entry does not start with a `<...>` target.
    #[error("Link entry is missing angle brackets around its URL: {entry:?}")]
    MissingAngleBrackets {
        /// The offending entry.
        entry: String,
    },

    /// A link parameter is not of the form `key="value"`.
    #[error("Link parameter is not of the form key=\"value\": {attribute:?}")]
    MalformedAttribute {
        /// The offending parameter.
        attribute: String,
    },

    /// A `next` or `previous` link carries no `page_info` query parameter.
    #[error("Link with rel=\"{rel}\" has no page_info parameter")]
    MissingPageInfo {
        /// The relation of the offending link.
        rel: String,
    },

    /// A query parameter in a link URL could not be decoded.
    #[error("Invalid value for {name} in link URL: {value:?}")]
    InvalidQueryValue {
        /// The parameter name.
        name: String,
        /// The raw value.
        value: String,
    },
}

#[derive(Clone, Copy)]
enum Rel {
    Next,
    Previous,
}

/// Parses a `Link` header value into a [`Pagination`].
///
/// An empty (or blank) header yields an empty `Pagination`. Links whose `rel`
/// is neither `"next"` nor `"previous"`, or that have no `rel`, are skipped.
/// If the same relation appears twice, the later link wins.
///
/// # Errors
///
/// Returns [`PaginationError`] when any entry lacks `<...>` around its URL,
/// has a parameter that is not `key="value"`, is a `next`/`previous` link
/// without a `page_info`, or has an undecodable `page_info` or `limit`.
pub fn parse_link_header(header: &str) -> Result<Pagination, PaginationError> {
    let mut pagination = Pagination::default();

    for entry in split_entries(header) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (target, attributes) = split_target(entry)?;

        let mut rel = None;
        for attribute in attributes.split(';') {
            let attribute = attribute.trim();
            if attribute.is_empty() {
                continue;
            }
            let (key, value) = parse_attribute(attribute)?;
            if key.eq_ignore_ascii_case("rel") {
                rel = Some(value);
            }
        }

        let rel = match rel {
            Some("next") => Rel::Next,
            Some("previous") => Rel::Previous,
            _ => continue,
        };

        let options = page_options(target)?.ok_or_else(|| PaginationError::MissingPageInfo {
            rel: match rel {
                Rel::Next => "next",
                Rel::Previous => "previous",
            }
            .to_string(),
        })?;

        match rel {
            Rel::Next => pagination.next_page_options = Some(options),
            Rel::Previous => pagination.previous_page_options = Some(options),
        }
    }

    Ok(pagination)
}

/// Splits on commas that are outside `<...>` and quoted strings.
fn split_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_target = false;
    let mut in_quotes = false;
    let mut start = 0;

    for (index, ch) in header.char_indices() {
        match ch {
            '<' if !in_quotes => in_target = true,
            '>' if !in_quotes => in_target = false,
            '"' if !in_target => in_quotes = !in_quotes,
            ',' if !in_target && !in_quotes => {
                entries.push(&header[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    entries.push(&header[start..]);

    entries
}

/// Splits `<url>; a="b"; c="d"` into the URL and the parameter list.
fn split_target(entry: &str) -> Result<(&str, &str), PaginationError> {
    let missing_brackets = || PaginationError::MissingAngleBrackets {
        entry: entry.to_string(),
    };

    let (target, rest) = entry
        .strip_prefix('<')
        .and_then(|rest| rest.split_once('>'))
        .ok_or_else(missing_brackets)?;

    // An unclosed `<` swallows the following entry up to its `>`.
    if target.contains('<') {
        return Err(missing_brackets());
    }

    let rest = rest.trim_start();
    if rest.is_empty() {
        return Ok((target, rest));
    }

    rest.strip_prefix(';')
        .map(|attributes| (target, attributes))
        .ok_or_else(|| PaginationError::MalformedAttribute {
            attribute: rest.to_string(),
        })
}

fn parse_attribute(attribute: &str) -> Result<(&str, &str), PaginationError> {
    let malformed = || PaginationError::MalformedAttribute {
        attribute: attribute.to_string(),
    };

    let (key, value) = attribute.split_once('=').ok_or_else(malformed)?;
    let key = key.trim();
    let value = value
        .trim()
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(malformed)?;

    if key.is_empty() {
        return Err(malformed());
    }

    Ok((key, value))
}

/// Reads `page_info` and `limit` from a link URL's query string.
///
/// Returns `None` when there is no non-empty `page_info`. The first occurrence
/// of each parameter is used; other parameters are not decoded.
fn page_options(target: &str) -> Result<Option<PageOptions>, PaginationError> {
    let query = target
        .split_once('?')
        .map_or("", |(_, query)| query)
        .split('#')
        .next()
        .unwrap_or_default();

    let mut page_info = None;
    let mut limit = None;

    for pair in query.split('&') {
        let (name, raw_value) = pair.split_once('=').unwrap_or((pair, ""));

        match name {
            "page_info" if page_info.is_none() => {
                page_info = Some(decode_component(raw_value, "page_info")?);
            }
            "limit" if limit.is_none() => {
                let value = decode_component(raw_value, "limit")?;
                let parsed = value
                    .parse::<u32>()
                    .map_err(|_| PaginationError::InvalidQueryValue {
                        name: "limit".to_string(),
                        value: raw_value.to_string(),
                    })?;
                limit = Some(parsed);
            }
            _ => {}
        }
    }

    Ok(page_info
        .filter(|page_info| !page_info.is_empty())
        .map(|page_info| PageOptions { page_info, limit }))
}

/// Decodes one `application/x-www-form-urlencoded` component.
fn decode_component(raw: &str, name: &str) -> Result<String, PaginationError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| PaginationError::InvalidQueryValue {
            name: name.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_header_yields_empty_pagination() {
        assert_eq!(parse_link_header("").unwrap(), Pagination::default());
        assert_eq!(parse_link_header("   ").unwrap(), Pagination::default());
    }

    #[test]
    fn test_next_only() {
        let pagination = parse_link_header(r#"<https://x/y?page_info=abc123>; rel="next""#).unwrap();

        assert_eq!(pagination.next_page_info(), Some("abc123"));
        assert_eq!(pagination.previous_page_info(), None);
        assert!(pagination.has_next_page());
        assert!(!pagination.has_previous_page());
    }

    #[test]
    fn test_next_and_previous_in_either_order() {
        let forward = parse_link_header(
            r#"<https://x/y?page_info=abc123>; rel="next", <https://x/y?page_info=def456>; rel="previous""#,
        )
        .unwrap();
        let backward = parse_link_header(
            r#"<https://x/y?page_info=def456>; rel="previous", <https://x/y?page_info=abc123>; rel="next""#,
        )
        .unwrap();

        assert_eq!(forward.next_page_info(), Some("abc123"));
        assert_eq!(forward.previous_page_info(), Some("def456"));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_missing_page_info_is_an_error() {
        let error = parse_link_header(r#"<https://x/y>; rel="next""#).unwrap_err();
        assert_eq!(
            error,
            PaginationError::MissingPageInfo {
                rel: "next".to_string()
            }
        );

        let error = parse_link_header(r#"<https://x/y?limit=5&page_info=>; rel="previous""#)
            .unwrap_err();
        assert!(matches!(error, PaginationError::MissingPageInfo { rel } if rel == "previous"));
    }

    #[test]
    fn test_unknown_rel_is_ignored() {
        let pagination = parse_link_header(r#"<https://x/y?page_info=abc>; rel="bogus""#).unwrap();
        assert_eq!(pagination, Pagination::default());

        // No page_info is fine when the link is ignored anyway.
        let pagination = parse_link_header(r#"<https://x/y>; rel="first""#).unwrap();
        assert_eq!(pagination, Pagination::default());
    }

    #[test]
    fn test_link_without_rel_is_ignored() {
        let pagination = parse_link_header(r#"<https://x/y?page_info=abc>; title="x""#).unwrap();
        assert_eq!(pagination, Pagination::default());

        let pagination = parse_link_header("<https://x/y?page_info=abc>").unwrap();
        assert_eq!(pagination, Pagination::default());
    }

    #[test]
    fn test_duplicate_rel_last_one_wins() {
        let pagination = parse_link_header(
            r#"<https://x/y?page_info=first>; rel="next", <https://x/y?page_info=second>; rel="next""#,
        )
        .unwrap();

        assert_eq!(pagination.next_page_info(), Some("second"));
    }

    #[test]
    fn test_missing_angle_brackets() {
        let error = parse_link_header(r#"https://x/y?page_info=abc; rel="next""#).unwrap_err();
        assert!(matches!(error, PaginationError::MissingAngleBrackets { .. }));

        let error = parse_link_header(r#"<https://x/y?page_info=abc; rel="next""#).unwrap_err();
        assert!(matches!(error, PaginationError::MissingAngleBrackets { .. }));

        let error = parse_link_header(
            r#"<https://x/y?page_info=abc; rel="next", <https://x/y?page_info=def>; rel="previous""#,
        )
        .unwrap_err();
        assert!(matches!(error, PaginationError::MissingAngleBrackets { .. }));

        let error = parse_link_header(
            r#"<https://x/y?page_info=abc>; rel="next", <https://x/y?page_info=def; rel="previous""#,
        )
        .unwrap_err();
        assert!(matches!(error, PaginationError::MissingAngleBrackets { .. }));
    }

    #[test]
    fn test_malformed_attribute() {
        let error = parse_link_header("<https://x/y?page_info=abc>; rel=next").unwrap_err();
        assert_eq!(
            error,
            PaginationError::MalformedAttribute {
                attribute: "rel=next".to_string()
            }
        );

        let error = parse_link_header("<https://x/y?page_info=abc>; next").unwrap_err();
        assert!(matches!(error, PaginationError::MalformedAttribute { .. }));

        let error =
            parse_link_header(r#"<https://x/y?page_info=abc> rel="next""#).unwrap_err();
        assert!(matches!(error, PaginationError::MalformedAttribute { .. }));
    }

    #[test]
    fn test_error_aborts_the_whole_header() {
        let result = parse_link_header(
            r#"<https://x/y?page_info=abc>; rel="next", https://x/y?page_info=def; rel="previous""#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_limit_is_carried_over() {
        let pagination = parse_link_header(
            r#"<https://shop.myshopify.com/admin/api/2025-10/inventory_levels.json?limit=50&page_info=eyJsYXN0X2lkIjo0fQ>; rel="next""#,
        )
        .unwrap();

        assert_eq!(
            pagination.next_page_options,
            Some(PageOptions {
                page_info: "eyJsYXN0X2lkIjo0fQ".to_string(),
                limit: Some(50),
            })
        );
    }

    #[test]
    fn test_invalid_limit() {
        let error =
            parse_link_header(r#"<https://x/y?limit=lots&page_info=abc>; rel="next""#).unwrap_err();
        assert_eq!(
            error,
            PaginationError::InvalidQueryValue {
                name: "limit".to_string(),
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn test_page_info_is_url_decoded() {
        let pagination =
            parse_link_header(r#"<https://x/y?page_info=a%3D%3D+b>; rel="next""#).unwrap();
        assert_eq!(pagination.next_page_info(), Some("a== b"));
    }

    #[test]
    fn test_unrelated_params_are_not_decoded() {
        let pagination = parse_link_header(
            r#"<https://x/y?%FF=1&fields=a%FF&page_info=abc>; rel="next""#,
        )
        .unwrap();
        assert_eq!(pagination.next_page_info(), Some("abc"));

        let error = parse_link_header(r#"<https://x/y?page_info=a%FF>; rel="next""#).unwrap_err();
        assert!(matches!(error, PaginationError::InvalidQueryValue { name, .. } if name == "page_info"));
    }

    #[test]
    fn test_commas_inside_url_do_not_split_entries() {
        let pagination = parse_link_header(
            r#"<https://x/y?fields=inventory_item_id,available&page_info=abc>; rel="next", <https://x/y?page_info=def>; rel="previous""#,
        )
        .unwrap();

        assert_eq!(pagination.next_page_info(), Some("abc"));
        assert_eq!(pagination.previous_page_info(), Some("def"));
    }

    #[test]
    fn test_fragment_is_not_part_of_page_info() {
        let pagination = parse_link_header(r#"<https://x/y?page_info=abc#top>; rel="next""#).unwrap();
        assert_eq!(pagination.next_page_info(), Some("abc"));
    }

    #[test]
    fn test_next_page_builds_page_params() {
        let pagination = parse_link_header(
            r#"<https://x/y?limit=2&page_info=n>; rel="next", <https://x/y?page_info=p>; rel="previous""#,
        )
        .unwrap();

        let next: ListParams<()> = pagination.next_page().unwrap();
        assert_eq!(
            next,
            ListParams::Page(PageOptions {
                page_info: "n".to_string(),
                limit: Some(2),
            })
        );

        let previous: ListParams<()> = pagination.previous_page().unwrap();
        assert_eq!(previous, ListParams::Page(PageOptions::new("p")));

        assert!(Pagination::default().next_page::<()>().is_none());
    }
}
