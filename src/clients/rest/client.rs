//! Typed REST client for the App Store Connect API.
//!
//! [`RestClient`] wraps the [`HttpClient`] with JSON encoding of request
//! bodies and query option structs, and decoding of response documents.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, QueryParams};
use crate::config::AscConfig;
use crate::rest::resources::{AppsService, SubscriptionsService};
use crate::rest::ApiResponse;

/// REST API client for App Store Connect.
///
/// Provides `get`, `post`, `patch` and `delete` with typed bodies and
/// responses, plus accessors for the per-resource services.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use asc_api::{AscConfig, RestClient};
/// use asc_api::rest::resources::ListAppsQuery;
///
/// let client = RestClient::new(&config)?;
///
/// let apps = client.apps().list_apps(&ListAppsQuery::default()).await?;
/// for app in &apps.data {
///     println!("{}", app.id);
/// }
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &AscConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the apps service.
    #[must_use]
    pub const fn apps(&self) -> AppsService<'_> {
        AppsService::new(self)
    }

    /// Returns the subscriptions service.
    #[must_use]
    pub const fn subscriptions(&self) -> SubscriptionsService<'_> {
        SubscriptionsService::new(self)
    }

    /// Sends a GET request and decodes the response.
    ///
    /// `query` is any serializable option struct; see [`QueryParams`] for
    /// the encoding rules.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body can't be decoded.
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<ApiResponse<T>, HttpError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = QueryParams::from_options(query).map_err(HttpError::Encode)?;
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build()?;
        Self::decode(self.http_client.request(request).await?)
    }

    /// Sends a POST request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body can't be decoded.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send_json(HttpMethod::Post, path, body).await?;
        Self::decode(response)
    }

    /// Sends a PATCH request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body can't be decoded.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send_json(HttpMethod::Patch, path, body).await?;
        Self::decode(response)
    }

    /// Sends a PATCH request whose response has no body (`204 No Content`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn patch_no_content<B>(&self, path: &str, body: &B) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(HttpMethod::Patch, path, body).await
    }

    /// Sends a DELETE request without a body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.http_client.request(request).await
    }

    /// Sends a DELETE request with a JSON body, as used to remove
    /// relationship linkages.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_with_body<B>(&self, path: &str, body: &B) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(HttpMethod::Delete, path, body).await
    }

    async fn send_json<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(HttpError::Encode)?;
        let request = HttpRequest::builder(method, path)
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        self.http_client.request(request).await
    }

    fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<ApiResponse<T>, HttpError> {
        Ok(ApiResponse::from_http_response(response)?)
    }
}
