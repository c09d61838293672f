//! ES256 bearer token signing.
//!
//! A fresh token is signed for every request; tokens are never cached.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AscConfig;

/// The `aud` claim App Store Connect expects.
pub const AUDIENCE: &str = "appstoreconnect-v1";

/// Errors that can occur while producing a bearer token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The JWT could not be encoded or signed.
    #[error("Failed to sign App Store Connect token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// JWT payload for App Store Connect API tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer ID of the API key.
    pub iss: String,
    /// Issued-at timestamp (Unix seconds).
    pub iat: i64,
    /// Expiration timestamp (Unix seconds).
    pub exp: i64,
    /// Always [`AUDIENCE`].
    pub aud: String,
}

impl Claims {
    /// Builds claims issued at `now` and valid for `lifetime`.
    #[must_use]
    pub fn new(issuer_id: &str, now: DateTime<Utc>, lifetime: Duration) -> Self {
        let iat = now.timestamp();
        let lifetime_secs = i64::try_from(lifetime.as_secs()).unwrap_or(i64::MAX);
        Self {
            iss: issuer_id.to_string(),
            iat,
            exp: iat.saturating_add(lifetime_secs),
            aud: AUDIENCE.to_string(),
        }
    }
}

/// Signs App Store Connect bearer tokens.
///
/// Holds a copy of the key material from the configuration; it never
/// changes after construction.
#[derive(Clone)]
pub struct TokenSigner {
    issuer_id: String,
    key_id: String,
    key: EncodingKey,
    lifetime: Duration,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("issuer_id", &self.issuer_id)
            .field("key_id", &self.key_id)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    /// Creates a signer from the credentials in `config`.
    #[must_use]
    pub fn new(config: &AscConfig) -> Self {
        Self {
            issuer_id: config.issuer_id().as_ref().to_string(),
            key_id: config.key_id().as_ref().to_string(),
            key: config.private_key().encoding_key().clone(),
            lifetime: config.token_lifetime(),
        }
    }

    /// Signs a token valid from now for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if the token cannot be signed.
    pub fn sign(&self) -> Result<String, AuthError> {
        self.sign_at(Utc::now())
    }

    /// Signs a token issued at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if the token cannot be signed.
    pub fn sign_at(&self, now: DateTime<Utc>) -> Result<String, AuthError> {
        let mut header = Header::new(Algorithm::ES256);
        header.kid = Some(self.key_id.clone());

        let claims = Claims::new(&self.issuer_id, now, self.lifetime);
        Ok(encode(&header, &claims, &self.key)?)
    }
}

// Verify TokenSigner is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenSigner>();
};
