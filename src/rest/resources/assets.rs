//! Types shared by uploaded assets (screenshots, review screenshots).

use serde::{Deserialize, Serialize};

/// One header to send with an upload operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOperationHeader {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

/// Instructions for uploading one byte range of an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOperation {
    /// HTTP method, normally `PUT`.
    #[serde(default)]
    pub method: String,
    /// Absolute upload URL.
    #[serde(default)]
    pub url: String,
    /// First byte of the range.
    #[serde(default)]
    pub offset: u64,
    /// Number of bytes in the range.
    #[serde(default)]
    pub length: u64,
    /// Headers to send with the range.
    #[serde(default)]
    pub request_headers: Vec<UploadOperationHeader>,
}

impl UploadOperation {
    /// One past the last byte of the range.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.offset.saturating_add(self.length)
    }
}

/// An image stored by App Store Connect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    /// URL template with `{w}`, `{h}` and `{f}` placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_url: Option<String>,
    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Processing state of an uploaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetState {
    /// Waiting for the upload to finish.
    AwaitingUpload,
    /// Uploaded, being processed.
    UploadComplete,
    /// Processed and ready.
    Complete,
    /// Processing failed.
    Failed,
}

/// An error reported while processing an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDeliveryError {
    /// Error code.
    #[serde(default)]
    pub code: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}

/// Delivery state of an uploaded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDeliveryState {
    /// The state.
    pub state: AssetState,
    /// Processing errors.
    #[serde(default)]
    pub errors: Vec<AssetDeliveryError>,
    /// Processing warnings.
    #[serde(default)]
    pub warnings: Vec<AssetDeliveryError>,
}
