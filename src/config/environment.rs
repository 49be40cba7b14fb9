//! Wish API environment definitions.
//!
//! This module provides the [`Environment`] enum for choosing which Wish
//! merchant API host the SDK talks to.

use crate::config::HostUrl;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Base URL of the production merchant API.
pub const PRODUCTION_BASE_URL: &str = "https://merchant.wish.com/api/v2";

/// Base URL of the sandbox merchant API.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.merchant.wish.com/api/v2";

/// The Wish API environment a client sends its requests to.
///
/// # Example
///
/// ```rust
/// use wish_api::Environment;
///
/// let env: Environment = "sandbox".parse().unwrap();
/// assert_eq!(env, Environment::Sandbox);
/// assert_eq!(env.base_url(), "https://sandbox.merchant.wish.com/api/v2");
///
/// assert_eq!(Environment::default(), Environment::Production);
/// assert_eq!(Environment::Production.to_string(), "prod");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    /// The live merchant API.
    #[default]
    Production,
    /// The sandbox merchant API, for testing integrations.
    Sandbox,
    /// Any other base URL, e.g. a proxy or a local mock server.
    Custom(HostUrl),
}

impl Environment {
    /// Returns the base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Custom(url) => url.as_ref(),
        }
    }

    /// Returns `true` for the production environment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("prod"),
            Self::Sandbox => f.write_str("sandbox"),
            Self::Custom(url) => f.write_str(url.as_ref()),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    /// Parses `prod`/`production` or `sandbox`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            _ => Err(ConfigError::UnknownEnvironment {
                name: s.to_string(),
            }),
        }
    }
}
