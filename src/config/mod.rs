//! Configuration types for the inventory SDK.
//!
//! # Overview
//!
//! - [`ShopifyConfig`]: settings shared by every client built from it
//! - [`ShopifyConfigBuilder`]: builder for [`ShopifyConfig`]
//! - [`ShopDomain`]: a validated Shopify shop domain
//! - [`HostUrl`]: a validated host used to route API traffic
//! - [`ApiVersion`]: the Shopify API version to use
//!
//! # Example
//!
//! ```rust
//! use shopify_inventory::{ApiVersion, HostUrl, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2025_07)
//!     .api_host(HostUrl::new("https://proxy.example.com").unwrap())
//!     .user_agent_prefix("InventorySync/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_version(), &ApiVersion::V2025_07);
//! ```

mod newtypes;
mod version;

pub use newtypes::{HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for API clients.
///
/// Configuration is instance-based; nothing is read from globals or the
/// environment.
#[derive(Clone, Debug, Default)]
pub struct ShopifyConfig {
    api_host: Option<HostUrl>,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the API host override, if configured.
    ///
    /// When set, requests go to this host and the shop domain is sent in the
    /// `Host` header instead.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for constructing [`ShopifyConfig`] instances.
///
/// # Defaults
///
/// - `api_version`: latest stable version
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes requests through the given host.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUserAgentPrefix`] if the prefix is empty
    /// or contains control characters.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        if let Some(prefix) = &self.user_agent_prefix {
            if prefix.trim().is_empty() || prefix.chars().any(char::is_control) {
                return Err(ConfigError::InvalidUserAgentPrefix {
                    prefix: prefix.clone(),
                });
            }
        }

        Ok(ShopifyConfig {
            api_host: self.api_host,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
