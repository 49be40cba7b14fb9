//! Error types for Wish API operations.
//!
//! Two layers of failure reach callers of [`WishClient`](crate::WishClient):
//!
//! - [`ServiceFailure`]: the service answered, but with a non-zero status
//!   code. Produced only by [`classify`](crate::api::classify).
//! - [`ApiError`]: everything a client method can return, i.e. a service
//!   failure, a record that could not be converted, or a transport error.
//!
//! # Example
//!
//! ```rust,ignore
//! use wish_api::api::{ApiError, ServiceFailure, UnauthorizedReason};
//!
//! match client.fulfill_order_by_id("order-1", &tracker).await {
//!     Ok(()) => println!("fulfilled"),
//!     Err(e) if e.is_order_already_fulfilled() => println!("nothing to do"),
//!     Err(ApiError::Service {
//!         failure: ServiceFailure::Unauthorized { reason: UnauthorizedReason::TokenExpired },
//!         ..
//!     }) => println!("refresh the token"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};

/// Why the service refused the credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnauthorizedReason {
    /// The token does not grant access (code 4000).
    InvalidAccess,
    /// The token has expired (code 1015).
    TokenExpired,
    /// The token has been revoked (code 1016).
    TokenRevoked,
}

impl fmt::Display for UnauthorizedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAccess => f.write_str("unauthorized access"),
            Self::TokenExpired => f.write_str("access token expired"),
            Self::TokenRevoked => f.write_str("access token revoked"),
        }
    }
}

/// A domain conflict the service reports with its own code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// The order has already been fulfilled (code 1002).
    OrderAlreadyFulfilled,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrderAlreadyFulfilled => f.write_str("order has already been fulfilled"),
        }
    }
}

/// The outcome of classifying a non-zero service status code.
///
/// Exactly one kind is produced per failed call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceFailure {
    /// The credentials were rejected.
    #[error("Unauthorized request: {reason}")]
    Unauthorized {
        /// Which credential problem the service reported.
        reason: UnauthorizedReason,
    },

    /// The service rejected the request parameters (code 1000).
    #[error("Invalid parameter")]
    InvalidParameter,

    /// The request conflicts with the current state of the resource.
    #[error("Conflict: {kind}")]
    Conflict {
        /// The conflict the service reported.
        kind: ConflictKind,
    },

    /// Any other non-zero code.
    #[error("Service error (code {raw_code})")]
    ServiceError {
        /// The status code exactly as the service sent it.
        raw_code: i64,
    },
}

impl ServiceFailure {
    /// Returns the service status code this failure stands for.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Unauthorized {
                reason: UnauthorizedReason::InvalidAccess,
            } => 4000,
            Self::Unauthorized {
                reason: UnauthorizedReason::TokenExpired,
            } => 1015,
            Self::Unauthorized {
                reason: UnauthorizedReason::TokenRevoked,
            } => 1016,
            Self::InvalidParameter => 1000,
            Self::Conflict {
                kind: ConflictKind::OrderAlreadyFulfilled,
            } => 1002,
            Self::ServiceError { raw_code } => *raw_code,
        }
    }

    /// Returns `true` for any credential failure.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Error type for every [`WishClient`](crate::WishClient) operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-zero status code.
    #[error("{failure}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Service {
        /// The classified failure.
        failure: ServiceFailure,
        /// The service's message, if it sent one.
        message: Option<String>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// A record in a successful response could not be turned into a model.
    #[error("Failed to convert {resource} record: {source}")]
    Conversion {
        /// The model the record was meant for (e.g., "Product").
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A model passed to an action lacks the key that addresses it.
    ///
    /// Raised before any request is sent.
    #[error("{resource} has no {key}")]
    MissingKey {
        /// The model that was passed (e.g., "Order").
        resource: &'static str,
        /// The field the action needs (e.g., "order_id").
        key: &'static str,
    },

    /// The service kept reporting more pages past the largest offset.
    #[error("{resource} listing still reports more pages at offset {offset}")]
    OffsetOverflow {
        /// The model being listed.
        resource: &'static str,
        /// The offset of the last page fetched.
        offset: u32,
    },

    /// The transport failed before an envelope was obtained.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    /// Returns the classified service failure, if this is one.
    #[must_use]
    pub const fn failure(&self) -> Option<&ServiceFailure> {
        match self {
            Self::Service { failure, .. } => Some(failure),
            _ => None,
        }
    }

    /// Returns `true` when the service reported the order as already fulfilled.
    ///
    /// Callers that fulfill idempotently usually treat this as success.
    #[must_use]
    pub fn is_order_already_fulfilled(&self) -> bool {
        matches!(
            self.failure(),
            Some(ServiceFailure::Conflict {
                kind: ConflictKind::OrderAlreadyFulfilled
            })
        )
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Service { request_id, .. } => request_id.as_deref(),
            Self::Http(e) => e.request_id(),
            Self::Conversion { .. } | Self::MissingKey { .. } | Self::OffsetOverflow { .. } => {
                None
            }
        }
    }
}

impl From<InvalidHttpRequestError> for ApiError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_failure_codes_round_trip_through_code() {
        let cases = [
            (
                ServiceFailure::Unauthorized {
                    reason: UnauthorizedReason::InvalidAccess,
                },
                4000,
            ),
            (
                ServiceFailure::Unauthorized {
                    reason: UnauthorizedReason::TokenExpired,
                },
                1015,
            ),
            (
                ServiceFailure::Unauthorized {
                    reason: UnauthorizedReason::TokenRevoked,
                },
                1016,
            ),
            (ServiceFailure::InvalidParameter, 1000),
            (
                ServiceFailure::Conflict {
                    kind: ConflictKind::OrderAlreadyFulfilled,
                },
                1002,
            ),
            (ServiceFailure::ServiceError { raw_code: 7 }, 7),
        ];

        for (failure, code) in cases {
            assert_eq!(failure.code(), code);
        }
    }

    #[test]
    fn test_failure_messages() {
        let expired = ServiceFailure::Unauthorized {
            reason: UnauthorizedReason::TokenExpired,
        };
        assert_eq!(expired.to_string(), "Unauthorized request: access token expired");
        assert!(expired.is_unauthorized());

        let unknown = ServiceFailure::ServiceError { raw_code: 9999 };
        assert_eq!(unknown.to_string(), "Service error (code 9999)");
        assert!(!unknown.is_unauthorized());
    }

    #[test]
    fn test_api_error_service_message_includes_service_text() {
        let error = ApiError::Service {
            failure: ServiceFailure::InvalidParameter,
            message: Some("'id' is required".to_string()),
            request_id: Some("req-1".to_string()),
        };
        assert_eq!(error.to_string(), "Invalid parameter: 'id' is required");
        assert_eq!(error.request_id(), Some("req-1"));

        let bare = ApiError::Service {
            failure: ServiceFailure::InvalidParameter,
            message: None,
            request_id: None,
        };
        assert_eq!(bare.to_string(), "Invalid parameter");
    }

    #[test]
    fn test_is_order_already_fulfilled() {
        let conflict = ApiError::Service {
            failure: ServiceFailure::Conflict {
                kind: ConflictKind::OrderAlreadyFulfilled,
            },
            message: None,
            request_id: None,
        };
        assert!(conflict.is_order_already_fulfilled());

        let other = ApiError::Service {
            failure: ServiceFailure::ServiceError { raw_code: 1002 + 1 },
            message: None,
            request_id: None,
        };
        assert!(!other.is_order_already_fulfilled());
    }

    #[test]
    fn test_conversion_error_is_distinct() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let error = ApiError::Conversion {
            resource: "Product",
            source,
        };
        assert!(error.failure().is_none());
        assert!(error.to_string().contains("Product"));
    }

    #[test]
    fn test_from_http_error() {
        let error: ApiError = HttpError::Response(HttpResponseError {
            code: 502,
            message: "bad gateway".to_string(),
            error_reference: Some("edge-1".to_string()),
        })
        .into();
        assert!(matches!(error, ApiError::Http(_)));
        assert_eq!(error.request_id(), Some("edge-1"));
    }

    #[test]
    fn test_from_invalid_request_error() {
        let error: ApiError = InvalidHttpRequestError::EmptyPath.into();
        assert!(matches!(
            error,
            ApiError::Http(HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPath))
        ));
    }
}
