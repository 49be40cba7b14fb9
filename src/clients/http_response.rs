//! Response envelope types for the Wish API SDK.
//!
//! Every Wish merchant API response is wrapped in the same JSON envelope:
//!
//! ```json
//! {
//!   "code": 0,
//!   "data": [ ... ] | { ... },
//!   "message": "",
//!   "paging": { "next": "https://...", "prev": "https://..." }
//! }
//! ```
//!
//! This module decodes that envelope into [`ResponseEnvelope`]. The envelope
//! is produced once per transport call and is not modified afterwards.

use serde::Deserialize;
use serde_json::Value;

/// Paging links from the envelope's `paging` object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Paging {
    /// URL of the next page, present while more data remains.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page.
    #[serde(default)]
    pub prev: Option<String>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    code: i64,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    paging: Option<Paging>,
}

/// A decoded service response.
///
/// `code` is the service status code (not the HTTP status); `0` means
/// success. `data` is `Value::Null` when the service sent none.
///
/// # Example
///
/// ```rust
/// use wish_api::clients::ResponseEnvelope;
///
/// let body = r#"{"code":0,"data":[{"Product":{"id":"1"}}],"paging":{"next":"https://x"}}"#;
/// let envelope = ResponseEnvelope::from_body(200, None, body).unwrap();
///
/// assert_eq!(envelope.code, 0);
/// assert!(envelope.has_more());
/// assert_eq!(envelope.records().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseEnvelope {
    /// The service status code.
    pub code: i64,
    /// The payload: an array of records, a single record, or `Null`.
    pub data: Value,
    /// The service's human-readable message, if any.
    pub message: Option<String>,
    /// Paging links; `paging.next` drives [`has_more`](Self::has_more).
    pub paging: Paging,
    /// The HTTP status the envelope arrived with.
    pub http_status: u16,
    /// The `X-Request-Id` header value, if present.
    pub request_id: Option<String>,
}

impl ResponseEnvelope {
    /// Creates an envelope directly, as a transport or a test double would.
    ///
    /// When `has_more` is `true` a placeholder `paging.next` link is set.
    #[must_use]
    pub fn new(code: i64, data: Value, has_more: bool) -> Self {
        Self {
            code,
            data,
            message: None,
            paging: Paging {
                next: has_more.then(|| "next".to_string()),
                prev: None,
            },
            http_status: 200,
            request_id: None,
        }
    }

    /// Sets the service message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Decodes an envelope from a raw response body.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `body` is not an envelope (for instance an
    /// HTML error page from a proxy, or JSON without a `code`).
    pub fn from_body(
        http_status: u16,
        request_id: Option<String>,
        body: &str,
    ) -> Result<Self, serde_json::Error> {
        let raw: RawEnvelope = serde_json::from_str(body)?;
        Ok(Self {
            code: raw.code,
            data: raw.data,
            message: raw.message.filter(|m| !m.is_empty()),
            paging: raw.paging.unwrap_or_default(),
            http_status,
            request_id,
        })
    }

    /// Returns `true` when the service reports more pages after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.paging.next.as_deref().is_some_and(|next| !next.is_empty())
    }

    /// Returns `true` when the payload carries nothing.
    ///
    /// `null`, `[]`, `{}` and `""` all count as empty.
    #[must_use]
    pub fn is_data_empty(&self) -> bool {
        match &self.data {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::String(s) => s.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    /// Returns the payload's records in server order.
    ///
    /// An array yields its elements, any other non-empty payload is a single
    /// record, and an empty payload yields nothing.
    #[must_use]
    pub fn records(&self) -> Vec<&Value> {
        if self.is_data_empty() {
            return Vec::new();
        }
        match &self.data {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        }
    }

    /// Consumes the envelope and returns its records in server order.
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        if self.is_data_empty() {
            return Vec::new();
        }
        match self.data {
            Value::Array(items) => items,
            other => vec![other],
        }
    }
}
