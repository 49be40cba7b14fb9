//! HTTP-specific error types for the Wish API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, request validation failures and undecodable
//! bodies.
//!
//! These errors describe transport problems only. A well-formed response
//! envelope carrying a non-zero service code is *not* an HTTP error; it is
//! classified by [`crate::api::classify`] instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use wish_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(envelope) => println!("Service code: {}", envelope.code),
//!     Err(HttpError::Response(e)) => println!("HTTP {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("Retries exhausted after {} tries", e.tries),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Decode { code, .. }) => println!("Unreadable body (HTTP {})", code),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when a non-2xx response carries no decodable envelope.
///
/// # Example
///
/// ```rust
/// use wish_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 502,
///     message: "Bad Gateway".to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, or a placeholder when it was empty.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// Raised when a request keeps receiving 429 or 500 responses after all
/// configured attempts have been made.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last status: {code}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The endpoint path is empty.
    #[error("Endpoint path cannot be empty.")]
    EmptyPath,

    /// A parameter name is empty.
    #[error("Parameter names cannot be empty (path '{path}').")]
    EmptyParamName {
        /// The endpoint path the parameter was attached to.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response without a service envelope.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A 2xx response whose body is not a service envelope.
    #[error("Failed to decode response envelope (HTTP {code}): {source}")]
    Decode {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.error_reference.as_deref(),
            Self::MaxRetries(e) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.contains("Exceeded maximum retry count of 3"));
        assert!(message.contains("429"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::EmptyPath.to_string(),
            "Endpoint path cannot be empty."
        );
        assert!(InvalidHttpRequestError::EmptyParamName {
            path: "product".to_string()
        }
        .to_string()
        .contains("product"));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = HttpError::Decode { code: 200, source };
        assert!(error.to_string().contains("HTTP 200"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_request_id_accessor() {
        let error = HttpError::Response(HttpResponseError {
            code: 503,
            message: "unavailable".to_string(),
            error_reference: Some("req-9".to_string()),
        });
        assert_eq!(error.request_id(), Some("req-9"));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPath);
        assert!(error.request_id().is_none());
    }
}
