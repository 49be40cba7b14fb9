//! Classification of service status codes.
//!
//! Every envelope carries a numeric `code`. Zero is success; a handful of
//! codes have a dedicated failure kind; anything else is a generic
//! [`ServiceFailure::ServiceError`] that keeps the raw code.
//!
//! The dedicated codes are checked in a fixed priority order
//! ([`FAILURE_PRIORITY`]) and the first match wins.

use serde_json::Value;

use crate::api::errors::{ApiError, ConflictKind, ServiceFailure, UnauthorizedReason};
use crate::clients::ResponseEnvelope;

/// The service status code for success.
pub const SUCCESS_CODE: i64 = 0;

/// Service codes with a dedicated failure kind, in the order they are checked.
pub const FAILURE_PRIORITY: [(i64, ServiceFailure); 5] = [
    (
        4000,
        ServiceFailure::Unauthorized {
            reason: UnauthorizedReason::InvalidAccess,
        },
    ),
    (
        1015,
        ServiceFailure::Unauthorized {
            reason: UnauthorizedReason::TokenExpired,
        },
    ),
    (
        1016,
        ServiceFailure::Unauthorized {
            reason: UnauthorizedReason::TokenRevoked,
        },
    ),
    (1000, ServiceFailure::InvalidParameter),
    (
        1002,
        ServiceFailure::Conflict {
            kind: ConflictKind::OrderAlreadyFulfilled,
        },
    ),
];

/// Classifies a service status code.
///
/// Returns the payload unchanged on success, whatever its shape (an empty
/// object or array is still success). This is a pure function.
///
/// # Errors
///
/// Returns the [`ServiceFailure`] for any non-zero code.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use wish_api::api::{classify, ServiceFailure};
///
/// assert_eq!(classify(0, json!([])), Ok(json!([])));
/// assert_eq!(classify(1000, json!({})), Err(ServiceFailure::InvalidParameter));
/// assert_eq!(
///     classify(31337, json!(null)),
///     Err(ServiceFailure::ServiceError { raw_code: 31337 })
/// );
/// ```
pub fn classify(code: i64, data: Value) -> Result<Value, ServiceFailure> {
    if code == SUCCESS_CODE {
        return Ok(data);
    }

    Err(FAILURE_PRIORITY
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map_or(ServiceFailure::ServiceError { raw_code: code }, |(_, failure)| {
            *failure
        }))
}

/// Checks an envelope, passing it through on success.
///
/// Unlike [`classify`] this keeps the whole envelope (paging included) and
/// attaches the service message and request id to the error.
///
/// # Errors
///
/// Returns [`ApiError::Service`] for any non-zero code.
pub fn check_envelope(envelope: ResponseEnvelope) -> Result<ResponseEnvelope, ApiError> {
    match classify(envelope.code, Value::Null) {
        Ok(_) => Ok(envelope),
        Err(failure) => {
            tracing::warn!(
                code = envelope.code,
                http_status = envelope.http_status,
                request_id = envelope.request_id.as_deref().unwrap_or(""),
                message = envelope.message.as_deref().unwrap_or(""),
                "Wish API returned {failure}"
            );
            Err(ApiError::Service {
                failure,
                message: envelope.message,
                request_id: envelope.request_id,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_returns_payload() {
        let payload = json!({"Product": {"id": "1"}});
        assert_eq!(classify(0, payload.clone()), Ok(payload));
    }

    #[test]
    fn test_empty_success_payloads_are_success() {
        assert_eq!(classify(0, json!({})), Ok(json!({})));
        assert_eq!(classify(0, json!([])), Ok(json!([])));
        assert_eq!(classify(0, Value::Null), Ok(Value::Null));
    }

    #[test]
    fn test_decision_table() {
        let table = [
            (
                4000,
                ServiceFailure::Unauthorized {
                    reason: UnauthorizedReason::InvalidAccess,
                },
            ),
            (
                1015,
                ServiceFailure::Unauthorized {
                    reason: UnauthorizedReason::TokenExpired,
                },
            ),
            (
                1016,
                ServiceFailure::Unauthorized {
                    reason: UnauthorizedReason::TokenRevoked,
                },
            ),
            (1000, ServiceFailure::InvalidParameter),
            (
                1002,
                ServiceFailure::Conflict {
                    kind: ConflictKind::OrderAlreadyFulfilled,
                },
            ),
        ];

        for (code, expected) in table {
            assert_eq!(classify(code, json!({})), Err(expected), "code {code}");
        }
    }

    #[test]
    fn test_unknown_codes_keep_raw_code() {
        for code in [1, -1, 1001, 1003, 1014, 1017, 3999, 4001, 9999, i64::MAX] {
            assert_eq!(
                classify(code, json!([1, 2])),
                Err(ServiceFailure::ServiceError { raw_code: code })
            );
        }
    }

    #[test]
    fn test_priority_list_has_no_duplicate_codes() {
        for (i, (code, _)) in FAILURE_PRIORITY.iter().enumerate() {
            assert!(
                FAILURE_PRIORITY[i + 1..].iter().all(|(other, _)| other != code),
                "duplicate code {code}"
            );
            assert_ne!(*code, SUCCESS_CODE);
        }
    }

    #[test]
    fn test_check_envelope_passes_success_through() {
        let envelope = ResponseEnvelope::new(0, json!([1]), true);
        let checked = check_envelope(envelope.clone()).unwrap();
        assert_eq!(checked, envelope);
    }

    #[test]
    fn test_check_envelope_attaches_message() {
        let mut envelope =
            ResponseEnvelope::new(1015, json!({}), false).with_message("Access token expired");
        envelope.request_id = Some("req-7".to_string());

        let error = check_envelope(envelope).unwrap_err();
        match error {
            ApiError::Service {
                failure,
                message,
                request_id,
            } => {
                assert_eq!(
                    failure,
                    ServiceFailure::Unauthorized {
                        reason: UnauthorizedReason::TokenExpired
                    }
                );
                assert_eq!(message.as_deref(), Some("Access token expired"));
                assert_eq!(request_id.as_deref(), Some("req-7"));
            }
            other => panic!("expected service failure, got {other:?}"),
        }
    }
}
