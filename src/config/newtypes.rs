//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Wish merchant access token.
///
/// The token is sent with every request, so its `Debug` output is masked to
/// keep it out of logs.
///
/// # Example
///
/// ```rust
/// use wish_api::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or
    /// only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated Wish merchant identifier.
///
/// Merchant ids are opaque alphanumeric strings (Wish uses 24-character hex
/// object ids). When configured, the id is sent as the `merchant_id`
/// parameter on every call, which lets one token act for a specific merchant.
///
/// # Example
///
/// ```rust
/// use wish_api::MerchantId;
///
/// let id = MerchantId::new("5413fe984ad3ab745fee8b0c").unwrap();
/// assert_eq!(id.as_ref(), "5413fe984ad3ab745fee8b0c");
///
/// let json = serde_json::to_string(&id).unwrap();
/// assert_eq!(json, r#""5413fe984ad3ab745fee8b0c""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MerchantId(String);

impl MerchantId {
    /// Creates a new validated merchant id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMerchantId`] if the id is empty or
    /// contains anything other than ASCII letters, digits, `-` or `_`.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let trimmed = id.trim();

        if trimmed.is_empty()
            || !trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::InvalidMerchantId { merchant_id: id });
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for MerchantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MerchantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for MerchantId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MerchantId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated API base URL.
///
/// Used to point the client at a non-standard host, such as a proxy or a
/// local mock server. The URL must include a scheme and a host; a trailing
/// slash is removed so paths can be appended uniformly.
///
/// # Example
///
/// ```rust
/// use wish_api::HostUrl;
///
/// let url = HostUrl::new("https://merchant.example.com/api/v2/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("merchant.example.com"));
/// assert_eq!(url.as_ref(), "https://merchant.example.com/api/v2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_merchant_id_accepts_object_id() {
        let id = MerchantId::new(" 5413fe984ad3ab745fee8b0c ").unwrap();
        assert_eq!(id.as_ref(), "5413fe984ad3ab745fee8b0c");
        assert_eq!(id.to_string(), "5413fe984ad3ab745fee8b0c");
    }

    #[test]
    fn test_merchant_id_rejects_invalid_values() {
        assert!(MerchantId::new("").is_err());
        assert!(MerchantId::new("has space").is_err());
        assert!(MerchantId::new("semi;colon").is_err());
    }

    #[test]
    fn test_merchant_id_deserialize_validates() {
        let ok: MerchantId = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(ok.as_ref(), "abc123");

        let bad: Result<MerchantId, _> = serde_json::from_str(r#""bad id""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://merchant.wish.com/api/v2").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("merchant.wish.com"));

        let url = HostUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("127.0.0.1"));
    }

    #[test]
    fn test_host_url_strips_trailing_slash() {
        let url = HostUrl::new("https://merchant.wish.com/api/v2/").unwrap();
        assert_eq!(url.as_ref(), "https://merchant.wish.com/api/v2");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("merchant.wish.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
    }
}
