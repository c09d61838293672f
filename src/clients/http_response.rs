//! HTTP response types for the App Store Connect client.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! information App Store Connect reports on every response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::DecodeError;

/// Hourly rate limit parsed from the `X-Rate-Limit` header.
///
/// The header format is `user-hour-lim:3600;user-hour-rem:3599;`.
///
/// # Example
///
/// ```rust
/// use asc_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("user-hour-lim:3600;user-hour-rem:3599;").unwrap();
/// assert_eq!(limit.limit, 3600);
/// assert_eq!(limit.remaining, 3599);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per hour.
    pub limit: u32,
    /// Requests left in the current hour.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses the rate limit header value.
    ///
    /// Returns `None` unless both the limit and the remaining count are present.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let mut limit = None;
        let mut remaining = None;

        for part in header_value.split(';') {
            let Some((key, value)) = part.split_once(':') else {
                continue;
            };
            match key.trim() {
                "user-hour-lim" => limit = value.trim().parse().ok(),
                "user-hour-rem" => remaining = value.trim().parse().ok(),
                _ => {}
            }
        }

        Some(Self {
            limit: limit?,
            remaining: remaining?,
        })
    }
}

/// An HTTP response from App Store Connect or an upload host.
///
/// Header names are stored lower-cased. The body is kept as raw text so it
/// can be reported verbatim when decoding or the request fails.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Rate limit information (from the `X-Rate-Limit` header).
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let rate_limit = headers
            .get("x-rate-limit")
            .and_then(|values| values.first())
            .and_then(|value| RateLimit::parse(value));

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// Include this ID when reporting problems to Apple.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Decodes the body as JSON into `T`.
    ///
    /// An empty body decodes as JSON `null`, so `()` and `Option<_>` targets
    /// accept `204 No Content` responses.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] carrying the status and raw body if the body
    /// does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        let text = if self.body.trim().is_empty() {
            "null"
        } else {
            self.body.as_str()
        };
        serde_json::from_str(text).map_err(|source| DecodeError {
            code: self.code,
            body: self.body.clone(),
            source,
        })
    }
}
