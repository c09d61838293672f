//! Configuration types for the App Store Connect client.
//!
//! # Overview
//!
//! - [`AscConfig`]: immutable client configuration (credentials, base URL,
//!   token lifetime, HTTP settings)
//! - [`AscConfigBuilder`]: builder for [`AscConfig`]
//! - [`IssuerId`], [`KeyId`], [`PrivateKey`]: validated API key credentials
//! - [`BaseUrl`]: validated API endpoint
//!
//! # Example
//!
//! ```rust,ignore
//! use asc_api::{AscConfig, IssuerId, KeyId, PrivateKey};
//!
//! let config = AscConfig::builder()
//!     .issuer_id(IssuerId::new("57246542-96fe-1a63-e053-0824d011072a")?)
//!     .key_id(KeyId::new("2X9R4HXF34")?)
//!     .private_key(PrivateKey::from_pem_file("AuthKey_2X9R4HXF34.p8")?)
//!     .build()?;
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, IssuerId, KeyId, PrivateKey};

use std::time::Duration;

use crate::error::ConfigError;

/// Longest token lifetime App Store Connect accepts (20 minutes).
pub const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(20 * 60);

/// Configuration for the App Store Connect client.
///
/// Built once and then only read. `AscConfig` is `Clone + Send + Sync`, so it
/// can be shared between clients and tasks.
#[derive(Clone, Debug)]
pub struct AscConfig {
    issuer_id: IssuerId,
    key_id: KeyId,
    private_key: PrivateKey,
    base_url: BaseUrl,
    token_lifetime: Duration,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl AscConfig {
    /// Creates a new builder for constructing an `AscConfig`.
    #[must_use]
    pub fn builder() -> AscConfigBuilder {
        AscConfigBuilder::new()
    }

    /// Returns the API key issuer ID.
    #[must_use]
    pub const fn issuer_id(&self) -> &IssuerId {
        &self.issuer_id
    }

    /// Returns the API key ID.
    #[must_use]
    pub const fn key_id(&self) -> &KeyId {
        &self.key_id
    }

    /// Returns the API private key.
    #[must_use]
    pub const fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns how long each signed token stays valid.
    #[must_use]
    pub const fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify AscConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AscConfig>();
};

/// Builder for constructing [`AscConfig`] instances.
///
/// `issuer_id`, `key_id` and `private_key` are required.
///
/// # Defaults
///
/// - `base_url`: [`BaseUrl::DEFAULT`]
/// - `token_lifetime`: [`MAX_TOKEN_LIFETIME`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
#[derive(Debug, Default)]
pub struct AscConfigBuilder {
    issuer_id: Option<IssuerId>,
    key_id: Option<KeyId>,
    private_key: Option<PrivateKey>,
    base_url: Option<BaseUrl>,
    token_lifetime: Option<Duration>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl AscConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the issuer ID (required).
    #[must_use]
    pub fn issuer_id(mut self, issuer_id: IssuerId) -> Self {
        self.issuer_id = Some(issuer_id);
        self
    }

    /// Sets the key ID (required).
    #[must_use]
    pub fn key_id(mut self, key_id: KeyId) -> Self {
        self.key_id = Some(key_id);
        self
    }

    /// Sets the private key (required).
    #[must_use]
    pub fn private_key(mut self, key: PrivateKey) -> Self {
        self.private_key = Some(key);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the lifetime of each signed token.
    #[must_use]
    pub const fn token_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = Some(lifetime);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`AscConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a credential is not
    /// set, or [`ConfigError::InvalidTokenLifetime`] if the lifetime is zero
    /// or longer than [`MAX_TOKEN_LIFETIME`].
    pub fn build(self) -> Result<AscConfig, ConfigError> {
        let issuer_id = self
            .issuer_id
            .ok_or(ConfigError::MissingRequiredField { field: "issuer_id" })?;
        let key_id = self
            .key_id
            .ok_or(ConfigError::MissingRequiredField { field: "key_id" })?;
        let private_key = self.private_key.ok_or(ConfigError::MissingRequiredField {
            field: "private_key",
        })?;

        let token_lifetime = self.token_lifetime.unwrap_or(MAX_TOKEN_LIFETIME);
        if token_lifetime.is_zero() || token_lifetime > MAX_TOKEN_LIFETIME {
            return Err(ConfigError::InvalidTokenLifetime {
                seconds: token_lifetime.as_secs(),
            });
        }

        Ok(AscConfig {
            issuer_id,
            key_id,
            private_key,
            base_url: self.base_url.unwrap_or_default(),
            token_lifetime,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
