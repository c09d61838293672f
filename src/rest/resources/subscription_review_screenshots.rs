//! App Review screenshots of subscriptions.
//!
//! Uploading is a three-step exchange:
//!
//! 1. Reserve: POST the file name and size. The response lists upload
//!    operations, each naming a byte range and a signed upload URL.
//! 2. Upload: PUT every byte range to its URL as `image/png`, with the
//!    headers the operation lists replacing any of the same name. These
//!    requests go to Apple's asset hosts and do not carry the API token.
//! 3. Commit: PATCH the reservation with `uploaded: true`.
//!
//! [`SubscriptionsService::upload_review_screenshot`] runs all three and
//! stops at the first failure. A failed upload is never committed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clients::{DataType, HttpError, HttpMethod, HttpRequest};
use crate::rest::resources::assets::{AssetDeliveryState, ImageAsset, UploadOperation};
use crate::rest::resources::subscriptions::SUBSCRIPTIONS;
use crate::rest::resources::SubscriptionsService;
use crate::rest::{
    build_path, ApiResponse, Document, RequestBody, Resource, ResourceData, ToOne, ToOneResponse,
    UploadError,
};

/// Resource type of subscription review screenshots.
pub const SUBSCRIPTION_REVIEW_SCREENSHOTS: &str = "subscriptionAppStoreReviewScreenshots";

/// Attributes of a subscription review screenshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionReviewScreenshotAttributes {
    /// Size of the file in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Name of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// MD5 checksum of the source file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file_checksum: Option<String>,
    /// The processed image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_asset: Option<ImageAsset>,
    /// Asset token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_token: Option<String>,
    /// Asset type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    /// Upload operations, present after reservation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_operations: Option<Vec<UploadOperation>>,
    /// Processing state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_delivery_state: Option<AssetDeliveryState>,
}

/// Relationships of a subscription review screenshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionReviewScreenshotRelationships {
    /// The subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<ToOneResponse>,
}

/// A subscription review screenshot.
pub type SubscriptionReviewScreenshot =
    Resource<SubscriptionReviewScreenshotAttributes, SubscriptionReviewScreenshotRelationships>;

/// A single subscription review screenshot.
pub type SubscriptionReviewScreenshotResponse = Document<SubscriptionReviewScreenshot>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReserveAttributes<'a> {
    file_name: &'a str,
    file_size: u64,
}

#[derive(Debug, Serialize)]
struct SubscriptionRelationship {
    subscription: ToOne,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommitAttributes<'a> {
    uploaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_file_checksum: Option<&'a str>,
}

impl SubscriptionsService<'_> {
    /// Uploads the App Review screenshot of a subscription.
    ///
    /// The file name sent to App Store Connect is the final component of
    /// `path`. Returns the committed screenshot.
    ///
    /// # Errors
    ///
    /// - [`UploadError::File`] if the path names no file or the file can't
    ///   be read; nothing is sent.
    /// - [`UploadError::NoUploadOperations`] if the reservation lists none.
    /// - [`UploadError::OperationOutOfRange`] if an operation exceeds the file.
    /// - [`UploadError::UploadRejected`] if an upload host answers with
    ///   anything but `200`; the reservation is left uncommitted.
    /// - [`UploadError::Http`] if the reservation or commit fails.
    pub async fn upload_review_screenshot(
        &self,
        subscription_id: &str,
        path: impl AsRef<Path>,
    ) -> Result<ApiResponse<SubscriptionReviewScreenshotResponse>, UploadError> {
        let path = path.as_ref();
        let Some(file_name) = path.file_name().map(|name| name.to_string_lossy().into_owned()) else {
            return Err(UploadError::File {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
            });
        };
        let bytes = tokio::fs::read(path).await.map_err(|source| UploadError::File {
            path: path.to_path_buf(),
            source,
        })?;

        let reservation = self
            .reserve_review_screenshot(subscription_id, &file_name, bytes.len() as u64)
            .await?;
        let operations = reservation
            .data
            .attributes
            .as_ref()
            .and_then(|attributes| attributes.upload_operations.as_deref())
            .unwrap_or_default();
        if operations.is_empty() {
            return Err(UploadError::NoUploadOperations { file_name });
        }

        for operation in operations {
            self.run_upload_operation(operation, &bytes).await?;
        }

        self.commit_review_screenshot(&reservation.data.id, None)
            .await
            .map_err(UploadError::from)
    }

    /// Reserves a review screenshot upload for a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn reserve_review_screenshot(
        &self,
        subscription_id: &str,
        file_name: &str,
        file_size: u64,
    ) -> Result<ApiResponse<SubscriptionReviewScreenshotResponse>, HttpError> {
        let body = RequestBody::new(
            ResourceData::create(SUBSCRIPTION_REVIEW_SCREENSHOTS)
                .with_attributes(ReserveAttributes {
                    file_name,
                    file_size,
                })
                .with_relationships(SubscriptionRelationship {
                    subscription: ToOne::new(SUBSCRIPTIONS, subscription_id),
                }),
        );
        self.client().post(SUBSCRIPTION_REVIEW_SCREENSHOTS, &body).await
    }

    /// Marks a reserved review screenshot as uploaded.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn commit_review_screenshot(
        &self,
        id: &str,
        source_file_checksum: Option<&str>,
    ) -> Result<ApiResponse<SubscriptionReviewScreenshotResponse>, HttpError> {
        let body = RequestBody::new(
            ResourceData::update(SUBSCRIPTION_REVIEW_SCREENSHOTS, id).with_attributes(CommitAttributes {
                uploaded: true,
                source_file_checksum,
            }),
        );
        self.client()
            .patch(
                &build_path("subscriptionAppStoreReviewScreenshots/{id}", &[("id", id)]),
                &body,
            )
            .await
    }

    async fn run_upload_operation(&self, operation: &UploadOperation, bytes: &[u8]) -> Result<(), UploadError> {
        let end = operation.end();
        let range = usize::try_from(operation.offset).ok().zip(usize::try_from(end).ok());
        let Some(chunk) = range.and_then(|(start, end)| bytes.get(start..end)) else {
            return Err(UploadError::OperationOutOfRange {
                offset: operation.offset,
                end,
                file_size: bytes.len() as u64,
            });
        };
        let method = HttpMethod::from_name(&operation.method).unwrap_or(HttpMethod::Put);

        tracing::debug!(
            method = %method,
            url = %operation.url,
            offset = operation.offset,
            length = operation.length,
            "uploading asset range"
        );

        let mut builder = HttpRequest::builder(method, operation.url.as_str())
            .bytes(chunk.to_vec())
            .body_type(DataType::Png)
            .external();
        for header in &operation.request_headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        let request = builder.build().map_err(HttpError::from)?;

        match self.client().http_client().request(request).await {
            Ok(response) if response.code == 200 => Ok(()),
            Ok(response) => Err(UploadError::UploadRejected {
                status: response.code,
                url: operation.url.clone(),
                body: response.body,
            }),
            Err(HttpError::Response(error)) => Err(UploadError::UploadRejected {
                status: error.code,
                url: operation.url.clone(),
                body: error.body,
            }),
            Err(error) => Err(error.into()),
        }
    }
}
