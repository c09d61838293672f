//! HTTP-level error types.
//!
//! Every failure of a single request surfaces as one [`HttpError`] variant,
//! so callers can tell the failure kinds apart:
//!
//! - [`HttpError::Network`]: the request never produced a response
//! - [`HttpError::Response`]: the server answered with a non-2xx status
//! - [`HttpError::Decode`]: a 2xx body could not be decoded
//! - [`HttpError::InvalidRequest`]: the request was rejected before sending
//! - [`HttpError::Auth`]: no bearer token could be signed
//! - [`HttpError::Encode`]: the request body or query could not be encoded
//!
//! # Example
//!
//! ```rust,ignore
//! use asc_api::HttpError;
//!
//! match client.apps().get_app("123", &Default::default()).await {
//!     Ok(app) => println!("{:?}", app.data.attributes),
//!     Err(HttpError::Response(e)) if e.code == 404 => println!("no such app"),
//!     Err(HttpError::Response(e)) => println!("rejected {}: {}", e.code, e.body),
//!     Err(HttpError::Decode(e)) => println!("unexpected reply: {}", e.body),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::AuthError;

/// One entry of the JSON:API `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorObject {
    /// Unique ID of this error occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// HTTP status code, as a string.
    #[serde(default)]
    pub status: String,
    /// Machine-readable error code, e.g. `ENTITY_ERROR.ATTRIBUTE.INVALID`.
    #[serde(default)]
    pub code: String,
    /// Short summary of the problem.
    #[serde(default)]
    pub title: String,
    /// Detailed explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Which part of the request caused the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

/// Location of the request element an [`ErrorObject`] refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorSource {
    /// JSON pointer into the request body, e.g. `/data/attributes/name`.
    Pointer {
        /// The JSON pointer.
        pointer: String,
    },
    /// Name of the offending query parameter.
    Parameter {
        /// The query parameter name.
        parameter: String,
    },
}

/// The body App Store Connect sends with error responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The individual errors.
    #[serde(default)]
    pub errors: Vec<ErrorObject>,
}

/// Error returned when the API answers with a non-2xx status.
///
/// The raw body is always kept; `errors` holds whatever could be parsed
/// from it and is empty when the body was not a JSON:API error document.
///
/// # Example
///
/// ```rust
/// use asc_api::clients::HttpResponseError;
///
/// let error = HttpResponseError::new(
///     409,
///     r#"{"errors":[{"status":"409","code":"ENTITY_ERROR","title":"Conflict"}]}"#.to_string(),
///     None,
/// );
/// assert_eq!(error.code, 409);
/// assert_eq!(error.errors[0].code, "ENTITY_ERROR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// Error objects parsed from the body.
    pub errors: Vec<ErrorObject>,
    /// Request ID from the `x-request-id` header, if any.
    pub request_id: Option<String>,
}

impl HttpResponseError {
    /// Creates a response error, parsing `errors` from the body when possible.
    #[must_use]
    pub fn new(code: u16, body: String, request_id: Option<String>) -> Self {
        let errors = serde_json::from_str::<ErrorResponse>(&body)
            .map(|parsed| parsed.errors)
            .unwrap_or_default();
        Self {
            code,
            body,
            errors,
            request_id,
        }
    }

    /// Returns `true` for 404 responses.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }

    /// Returns `true` for 409 responses.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        self.code == 409
    }
}

impl fmt::Display for HttpResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "App Store Connect returned HTTP {}", self.code)?;
        match self.errors.first() {
            Some(first) => {
                write!(f, ": {}", first.title)?;
                if let Some(detail) = &first.detail {
                    write!(f, " ({detail})")?;
                }
                if self.errors.len() > 1 {
                    write!(f, " and {} more", self.errors.len() - 1)?;
                }
            }
            None if !self.body.is_empty() => write!(f, ": {}", self.body)?,
            None => {}
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " [request id {request_id}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpResponseError {}

/// Error returned when a successful response body cannot be decoded.
#[derive(Debug, Error)]
#[error("Failed to decode App Store Connect response (HTTP {code}): {source}")]
pub struct DecodeError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header: {name}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for a single HTTP exchange.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Successful response with an undecodable body.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Bearer token signing failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Request body or query parameters could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Decode(e) => Some(e.code),
            _ => None,
        }
    }
}
