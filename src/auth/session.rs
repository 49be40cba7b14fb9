//! Session management for Wish API authentication.
//!
//! This module provides the [`Session`] type for representing the
//! credentials used in API calls.

use crate::config::{AccessToken, Environment, MerchantId};

/// The credentials and target host used for Wish API calls.
///
/// A session is immutable once created. Building a new
/// [`HttpClient`](crate::clients::HttpClient) from a new session is the way
/// to rotate tokens.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The bearer token sent with every request.
    pub access_token: AccessToken,

    /// The environment (and therefore host) requests go to.
    pub environment: Environment,

    /// The merchant the calls act for, if the token spans several.
    pub merchant_id: Option<MerchantId>,
}

impl Session {
    /// Creates a new session with the specified parameters.
    #[must_use]
    pub const fn new(
        access_token: AccessToken,
        environment: Environment,
        merchant_id: Option<MerchantId>,
    ) -> Self {
        Self {
            access_token,
            environment,
            merchant_id,
        }
    }

    /// Returns the base URL of the session's environment.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.environment.base_url()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
