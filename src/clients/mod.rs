//! HTTP client types for App Store Connect communication.
//!
//! This module provides the transport layer: request construction, bearer
//! token injection, query encoding, response parsing and error mapping.
//!
//! # Overview
//!
//! - [`HttpClient`]: async HTTP client that signs and sends requests
//! - [`HttpRequest`]: a request to be sent
//! - [`HttpResponse`]: a raw response with parsed rate limit
//! - [`QueryParams`]: bracketed query parameter encoding
//! - [`HttpMethod`], [`DataType`]: request method and body content type
//! - [`rest::RestClient`]: typed JSON client and service entry point
//! - [`HttpError`]: every way a request can fail
//!
//! # No Retries
//!
//! Every call results in exactly one outbound request. A `429` or `5xx`
//! response comes back as [`HttpError::Response`]; retrying is left to the
//! caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;
pub mod rest;

pub use errors::{
    DecodeError, ErrorObject, ErrorResponse, ErrorSource, HttpError, HttpResponseError,
    InvalidHttpRequestError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpBody, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
pub use query::QueryParams;

pub use rest::RestClient;
