//! # Wish Merchant API Rust SDK
//!
//! A Rust SDK for the Wish merchant API (v2), providing type-safe
//! configuration, an async HTTP transport, service-code classification and
//! transparent pagination over list endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`WishConfig`] and [`WishConfigBuilder`]
//! - Validated newtypes for the access token, merchant id and custom hosts
//! - Production, sandbox and custom environments via [`Environment`]
//! - An async reqwest-based transport with optional retries
//! - Classification of every response's service `code` into a typed
//!   [`ServiceFailure`]
//! - Offset pagination that returns complete listings or an error, never a
//!   partial result
//! - Typed models for products, variations, orders, tickets and download jobs
//!
//! ## Quick Start
//!
//! ```rust
//! use wish_api::{AccessToken, Environment, WishConfig};
//!
//! let config = WishConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .environment(Environment::Sandbox)
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use wish_api::{AccessToken, WishClient, WishConfig};
//!
//! let config = WishConfig::builder()
//!     .access_token(AccessToken::new("your-access-token")?)
//!     .build()?;
//! let client = WishClient::new(&config);
//!
//! // Single resources
//! let product = client.get_product_by_id("5413fe984ad3ab745fee8b0c").await?;
//!
//! // Listings are fetched page by page until the service reports no more
//! let products = client.get_all_products().await?;
//! println!("{} products", products.len());
//! ```
//!
//! ## Error Handling
//!
//! Every client method returns [`ApiError`]:
//!
//! ```rust,ignore
//! use wish_api::{ApiError, ServiceFailure};
//!
//! match client.auth_test().await {
//!     Ok(()) => println!("token accepted"),
//!     Err(ApiError::Service { failure, .. }) if failure.is_unauthorized() => {
//!         println!("token rejected: {failure}");
//!     }
//!     Err(e) => println!("call failed: {e}"),
//! }
//! ```
//!
//! ## Custom Transports
//!
//! [`WishClient`] sends requests through the [`clients::Transport`] trait.
//! Implement it to record, replay or otherwise intercept calls:
//!
//! ```rust
//! use serde_json::json;
//! use wish_api::clients::{HttpError, HttpRequest, ResponseEnvelope, Transport};
//! use wish_api::WishClient;
//!
//! struct Offline;
//!
//! impl Transport for Offline {
//!     async fn execute(&self, _request: HttpRequest) -> Result<ResponseEnvelope, HttpError> {
//!         Ok(ResponseEnvelope::new(0, json!([]), false))
//!     }
//! }
//!
//! let client = WishClient::with_transport(Offline);
//! let tickets = tokio_test::block_on(client.get_all_action_required_tickets()).unwrap();
//! assert!(tickets.is_empty());
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events (requests and pages at `debug`, retries
//! and service failures at `warn`). Install a subscriber to see them.

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use api::{ApiError, ServiceFailure, WishClient};
pub use auth::Session;
pub use config::{
    AccessToken, Environment, HostUrl, MerchantId, WishConfig, WishConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponseError,
    InvalidHttpRequestError, MaxHttpRetriesExceededError, ResponseEnvelope,
};
