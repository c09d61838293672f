//! HTTP client for App Store Connect communication.
//!
//! This module provides the [`HttpClient`] type, which signs a bearer token
//! for every API request, sends it once and hands back the raw response.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::auth::TokenSigner;
use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpBody, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{AscConfig, BaseUrl};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to App Store Connect.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and Accept
/// - A freshly signed `Authorization: Bearer` token per API request
/// - Rate limit header parsing
///
/// Requests are sent exactly once; non-2xx responses become
/// [`HttpError::Response`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use asc_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "apps").build()?;
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
    signer: TokenSigner,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (for example when TLS initialization fails).
    pub fn new(config: &AscConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}App Store Connect API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().clone(),
            default_headers,
            signer: TokenSigner::new(config),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the full URL for a request, including its query string.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let mut url = if request.external {
            request.path.clone()
        } else {
            self.base_url.join(&request.path)
        };
        if let Some(query) = request.query.as_ref().filter(|q| !q.is_empty()) {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query.to_query_string());
        }
        url
    }

    /// Sends an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The token cannot be signed (`Auth`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);

        let mut headers = HeaderMap::new();
        for (key, value) in &self.default_headers {
            if !request.external || key == "User-Agent" {
                insert_header(&mut headers, key, value)?;
            }
        }
        if !request.external {
            let token = format!("Bearer {}", self.signer.sign()?);
            insert_header(&mut headers, "Authorization", &token)?;
        }
        if let Some(body_type) = &request.body_type {
            insert_header(&mut headers, "Content-Type", body_type.as_content_type())?;
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                insert_header(&mut headers, key, value)?;
            }
        }

        let req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        let mut req_builder = req_builder.headers(headers);

        match request.body {
            Some(HttpBody::Json(body)) => req_builder = req_builder.body(body.to_string()),
            Some(HttpBody::Bytes(bytes)) => req_builder = req_builder.body(bytes),
            None => {}
        }

        tracing::debug!(method = %request.http_method, url = %url, "sending App Store Connect request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);

        tracing::debug!(
            method = %request.http_method,
            url = %url,
            status = code,
            "received App Store Connect response"
        );

        if response.is_ok() {
            return Ok(response);
        }

        let request_id = response.request_id().map(String::from);
        tracing::warn!(
            method = %request.http_method,
            url = %url,
            status = code,
            request_id = request_id.as_deref().unwrap_or("-"),
            "App Store Connect request failed"
        );

        Err(HttpError::Response(HttpResponseError::new(
            code,
            response.body,
            request_id,
        )))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Inserts a header, replacing any earlier value under the same name.
fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), InvalidHttpRequestError> {
    let invalid = || InvalidHttpRequestError::InvalidHeader {
        name: name.to_string(),
    };
    let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
    let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
    headers.insert(name, value);
    Ok(())
}
