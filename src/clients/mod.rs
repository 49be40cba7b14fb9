//! HTTP transport types for Wish API communication.
//!
//! This module provides the transport layer underneath
//! [`WishClient`](crate::WishClient): building requests, sending them with
//! credentials attached, and decoding the service's response envelope.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async reqwest-based client, the default [`Transport`]
//! - [`Transport`]: The seam the API layer sends requests through
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`RequestParams`] / [`ParamValue`]: The request parameter map
//! - [`ResponseEnvelope`]: A decoded `{code, data, message, paging}` envelope
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`HttpError`]: Transport-level failures
//!
//! # Example
//!
//! ```rust,ignore
//! use wish_api::{AccessToken, Environment, Session};
//! use wish_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let session = Session::new(AccessToken::new("token")?, Environment::Production, None);
//! let client = HttpClient::new(&session, None);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "product")
//!     .param("id", "5413fe984ad3ab745fee8b0c")
//!     .build()?;
//!
//! let envelope = client.request(request).await?;
//! println!("service code {}", envelope.code);
//! ```
//!
//! # Retry Behavior
//!
//! The client can retry transient HTTP failures:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Anything else**: Returned immediately
//!
//! The default `tries` is 1, meaning no automatic retries. Service-level
//! failures (a non-zero envelope `code`) are never retried here.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, ParamValue, RequestParams};
pub use http_response::{Paging, ResponseEnvelope};
pub use transport::Transport;
