//! Error types for the Wish API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use wish_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Wish merchant access token.")]
    EmptyAccessToken,

    /// Merchant ID is invalid.
    #[error("Invalid merchant id '{merchant_id}'. Expected a non-empty alphanumeric identifier.")]
    InvalidMerchantId {
        /// The invalid merchant id that was provided.
        merchant_id: String,
    },

    /// Environment name is not recognized.
    #[error("Unknown environment '{name}'. Expected 'prod' or 'sandbox'.")]
    UnknownEnvironment {
        /// The unrecognized environment name.
        name: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://merchant.example.com/api/v2').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The number of HTTP attempts must be at least one.
    #[error("Invalid tries value {tries}. At least one attempt is required.")]
    InvalidTries {
        /// The rejected value.
        tries: u32,
    },
}
