//! Authentication for the App Store Connect API.
//!
//! App Store Connect authenticates every request with a short-lived JSON Web
//! Token signed (ES256) with an API key created in the "Users and Access"
//! section of App Store Connect.
//!
//! # Overview
//!
//! - [`TokenSigner`]: builds and signs bearer tokens from an [`AscConfig`]
//! - [`Claims`]: the JWT payload sent to App Store Connect
//! - [`AuthError`]: token signing failures
//!
//! # Example
//!
//! ```rust,ignore
//! use asc_api::auth::TokenSigner;
//!
//! let signer = TokenSigner::new(&config);
//! let token = signer.sign()?;
//! // Authorization: Bearer {token}
//! ```
//!
//! [`AscConfig`]: crate::AscConfig

mod token;

pub use token::{AuthError, Claims, TokenSigner, AUDIENCE};
