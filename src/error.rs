//! Configuration error types for the App Store Connect client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials or URLs are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use asc_api::{IssuerId, ConfigError};
//!
//! let result = IssuerId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyIssuerId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`AscConfig`](crate::AscConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Issuer ID cannot be empty.
    #[error("Issuer ID cannot be empty. Find it on the Keys page of App Store Connect.")]
    EmptyIssuerId,

    /// Key ID cannot be empty.
    #[error("Key ID cannot be empty. Please provide the ID of your App Store Connect API key.")]
    EmptyKeyId,

    /// The private key could not be parsed as an EC (P-256) PEM key.
    #[error("Invalid private key: {reason}")]
    InvalidPrivateKey {
        /// Why the key was rejected.
        reason: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL such as 'https://api.appstoreconnect.apple.com/v1'.")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
    },

    /// Token lifetime outside the range accepted by App Store Connect.
    #[error("Invalid token lifetime of {seconds}s. App Store Connect accepts 1 to 1200 seconds.")]
    InvalidTokenLifetime {
        /// The rejected lifetime in seconds.
        seconds: u64,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
