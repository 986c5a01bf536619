//! Session credentials for Shopify API calls.
//!
//! This module provides the [`Session`] type: the shop a client talks to and
//! the access token it authenticates with.

use crate::config::ShopDomain;
use std::fmt;

/// An authenticated connection to a single shop.
///
/// How the access token was obtained (OAuth, a custom app, token exchange)
/// is outside this crate; the session only carries the result.
///
/// The `Debug` implementation masks the access token.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::{Session, ShopDomain};
///
/// let session = Session::new(ShopDomain::new("my-store").unwrap(), "shpat_123");
/// assert!(session.is_active());
/// assert!(!format!("{session:?}").contains("shpat_123"));
/// ```
#[derive(Clone)]
pub struct Session {
    /// The shop this session is for.
    pub shop: ShopDomain,

    /// The access token sent as `X-Shopify-Access-Token`.
    pub access_token: String,
}

impl Session {
    /// Creates a new session.
    #[must_use]
    pub fn new(shop: ShopDomain, access_token: impl Into<String>) -> Self {
        Self {
            shop,
            access_token: access_token.into(),
        }
    }

    /// Returns `true` if the session carries an access token.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("shop", &self.shop)
            .field("access_token", &"*****")
            .finish()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
