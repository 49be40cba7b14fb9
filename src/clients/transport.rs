//! The transport seam between the API layer and the network.
//!
//! [`WishClient`](crate::WishClient) never talks to reqwest directly; it
//! hands each [`HttpRequest`] to a [`Transport`] and gets a decoded
//! [`ResponseEnvelope`] back. [`HttpClient`](crate::clients::HttpClient) is
//! the production implementation. Tests and callers with special needs
//! (recording, replay, custom auth) can plug in their own.

use std::future::Future;

use crate::clients::{HttpError, HttpRequest, ResponseEnvelope};

/// Executes one request and returns the decoded service envelope.
///
/// Implementations own authentication, host selection and any
/// network-level retry. They must not interpret the envelope's service
/// `code`; classification happens above this layer.
///
/// The returned future must be `Send` so that client calls can run on a
/// multi-threaded runtime. Implementations may still be written as
/// `async fn`.
///
/// # Example
///
/// ```rust
/// use wish_api::clients::{HttpError, HttpRequest, ResponseEnvelope, Transport};
///
/// struct AlwaysOk;
///
/// impl Transport for AlwaysOk {
///     async fn execute(&self, _request: HttpRequest) -> Result<ResponseEnvelope, HttpError> {
///         Ok(ResponseEnvelope::new(0, serde_json::json!("success"), false))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no envelope could be obtained.
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<ResponseEnvelope, HttpError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<ResponseEnvelope, HttpError>> + Send {
        (**self).execute(request)
    }
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<ResponseEnvelope, HttpError>> + Send {
        (**self).execute(request)
    }
}
