//! Authentication types for the Wish API SDK.
//!
//! Wish merchant API calls are authenticated with a bearer access token,
//! optionally scoped to a merchant id. This module provides the [`Session`]
//! type that bundles those credentials with the environment they belong to.
//!
//! Obtaining the token (the OAuth authorization code flow) happens outside
//! this SDK; the session simply carries it.
//!
//! # Example
//!
//! ```rust
//! use wish_api::{AccessToken, Environment, Session};
//!
//! let session = Session::new(
//!     AccessToken::new("access-token").unwrap(),
//!     Environment::Sandbox,
//!     None,
//! );
//!
//! assert_eq!(session.base_url(), "https://sandbox.merchant.wish.com/api/v2");
//! ```

pub mod session;

pub use session::Session;
