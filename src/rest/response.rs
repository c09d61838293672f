//! Typed response wrapper.
//!
//! [`ApiResponse<T>`] pairs a decoded body with the response descriptor
//! (status, headers, rate limit, request ID). It implements `Deref` to `T`:
//!
//! ```rust,ignore
//! let apps = client.apps().list_apps(&ListAppsQuery::default()).await?;
//!
//! // Document fields through Deref
//! for app in &apps.data {
//!     println!("{}", app.id);
//! }
//!
//! // Descriptor
//! if let Some(limit) = apps.rate_limit() {
//!     println!("{} of {} requests left this hour", limit.remaining, limit.limit);
//! }
//!
//! // Take ownership of the document
//! let document = apps.into_inner();
//! ```

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{DecodeError, HttpResponse, RateLimit};

/// A decoded response together with its HTTP metadata.
///
/// # Example
///
/// ```rust
/// use asc_api::clients::HttpResponse;
/// use asc_api::rest::ApiResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
/// let raw = HttpResponse::new(200, headers, r#"["a","b"]"#.to_string());
///
/// let response: ApiResponse<Vec<String>> = ApiResponse::from_http_response(raw).unwrap();
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.request_id(), Some("req-1"));
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    data: T,
    status: u16,
    headers: HashMap<String, Vec<String>>,
    rate_limit: Option<RateLimit>,
}

impl<T> ApiResponse<T> {
    /// Creates a response from already decoded data and its descriptor.
    #[must_use]
    pub const fn new(
        data: T,
        status: u16,
        headers: HashMap<String, Vec<String>>,
        rate_limit: Option<RateLimit>,
    ) -> Self {
        Self {
            data,
            status,
            headers,
            rate_limit,
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the response headers (lower-cased names).
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// Returns the rate limit reported with this response.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Consumes the response and returns the decoded data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Transforms the data while keeping the descriptor.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            status: self.status,
            headers: self.headers,
            rate_limit: self.rate_limit,
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes a raw response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body does not match `T`.
    pub fn from_http_response(response: HttpResponse) -> Result<Self, DecodeError> {
        let data = response.decode()?;
        Ok(Self::new(
            data,
            response.code,
            response.headers,
            response.rate_limit,
        ))
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ApiResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ApiResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiResponse<String>>();
};
