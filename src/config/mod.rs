//! Configuration types for the Wish API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Wish.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WishConfig`]: The main configuration struct holding all SDK settings
//! - [`WishConfigBuilder`]: A builder for constructing [`WishConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`MerchantId`]: A validated merchant identifier
//! - [`HostUrl`]: A validated base URL for custom environments
//! - [`Environment`]: Production, sandbox, or a custom host
//!
//! # Example
//!
//! ```rust
//! use wish_api::{WishConfig, AccessToken, Environment};
//!
//! let config = WishConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.environment(), &Environment::Sandbox);
//! ```

mod environment;
mod newtypes;

pub use environment::{Environment, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use newtypes::{AccessToken, HostUrl, MerchantId};

use std::time::Duration;

use crate::auth::Session;
use crate::error::ConfigError;

/// Configuration for the Wish API SDK.
///
/// Holds the credentials, target environment, and transport settings used
/// by [`WishClient`](crate::WishClient).
///
/// # Thread Safety
///
/// `WishConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct WishConfig {
    access_token: AccessToken,
    environment: Environment,
    merchant_id: Option<MerchantId>,
    user_agent_prefix: Option<String>,
    tries: u32,
    timeout: Option<Duration>,
}

impl WishConfig {
    /// Creates a new builder for constructing a `WishConfig`.
    #[must_use]
    pub fn builder() -> WishConfigBuilder {
        WishConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the target environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the merchant id, if configured.
    #[must_use]
    pub const fn merchant_id(&self) -> Option<&MerchantId> {
        self.merchant_id.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the number of HTTP attempts made per call.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the [`Session`] described by this configuration.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(
            self.access_token.clone(),
            self.environment.clone(),
            self.merchant_id.clone(),
        )
    }
}

// Verify WishConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WishConfig>();
};

/// Builder for constructing [`WishConfig`] instances.
///
/// `access_token` is the only required field.
///
/// # Defaults
///
/// - `environment`: [`Environment::Production`]
/// - `merchant_id`: `None`
/// - `user_agent_prefix`: `None`
/// - `tries`: `1` (no automatic retries)
/// - `timeout`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use wish_api::{WishConfig, AccessToken, MerchantId, Environment};
///
/// let config = WishConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .environment(Environment::Sandbox)
///     .merchant_id(MerchantId::new("5413fe984ad3ab745fee8b0c").unwrap())
///     .user_agent_prefix("MyShopSync/2.1")
///     .tries(3)
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct WishConfigBuilder {
    access_token: Option<AccessToken>,
    environment: Option<Environment>,
    merchant_id: Option<MerchantId>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
    timeout: Option<Duration>,
}

impl WishConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the target environment.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the merchant id sent with every call.
    #[must_use]
    pub fn merchant_id(mut self, merchant_id: MerchantId) -> Self {
        self.merchant_id = Some(merchant_id);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the number of HTTP attempts per call.
    ///
    /// Only HTTP 429 and 500 responses are retried; service-level failures
    /// never are.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`WishConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not
    /// set, or [`ConfigError::InvalidTries`] if `tries` is zero.
    pub fn build(self) -> Result<WishConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(WishConfig {
            access_token,
            environment: self.environment.unwrap_or_default(),
            merchant_id: self.merchant_id,
            user_agent_prefix: self.user_agent_prefix,
            tries,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("test-token").unwrap()
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = WishConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = WishConfig::builder().access_token(token()).build().unwrap();

        assert_eq!(config.environment(), &Environment::Production);
        assert!(config.merchant_id().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.tries(), 1);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_tries() {
        let result = WishConfig::builder().access_token(token()).tries(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidTries { tries: 0 })));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let merchant = MerchantId::new("abc123").unwrap();
        let config = WishConfig::builder()
            .access_token(token())
            .environment(Environment::Sandbox)
            .merchant_id(merchant.clone())
            .user_agent_prefix("MyApp/1.0")
            .tries(3)
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert_eq!(config.environment(), &Environment::Sandbox);
        assert_eq!(config.merchant_id(), Some(&merchant));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.tries(), 3);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_session_mirrors_config() {
        let config = WishConfig::builder()
            .access_token(token())
            .environment(Environment::Sandbox)
            .build()
            .unwrap();

        let session = config.session();
        assert_eq!(session.access_token.as_ref(), "test-token");
        assert_eq!(session.environment, Environment::Sandbox);
        assert!(session.merchant_id.is_none());
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = WishConfig::builder().access_token(token()).build().unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("WishConfig"));
        assert!(!debug_str.contains("test-token"));
    }
}
