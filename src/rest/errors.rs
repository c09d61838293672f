//! Errors of multi-step resource operations.
//!
//! Single requests fail with [`HttpError`]. Asset uploads span a reservation
//! request, one or more byte-range uploads and a commit request, so they
//! report [`UploadError`] to say which step failed.
//!
//! # Example
//!
//! ```rust,ignore
//! use asc_api::rest::UploadError;
//!
//! match client.subscriptions().upload_review_screenshot("1", "shot.png").await {
//!     Ok(screenshot) => println!("uploaded {}", screenshot.data.id),
//!     Err(UploadError::File { path, source }) => println!("{}: {source}", path.display()),
//!     Err(UploadError::UploadRejected { status, url, .. }) => println!("{url} returned {status}"),
//!     Err(e) => println!("upload failed: {e}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for asset uploads.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The local file could not be read. Nothing was sent.
    #[error("Cannot read upload file {}: {source}", .path.display())]
    File {
        /// The file that was requested.
        path: PathBuf,
        /// The I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The reservation response listed no upload operations.
    #[error("App Store Connect returned no upload operations for {file_name}")]
    NoUploadOperations {
        /// The reserved file name.
        file_name: String,
    },

    /// An upload operation points outside the file.
    #[error("Upload operation for bytes {offset}..{end} exceeds the file size of {file_size} bytes")]
    OperationOutOfRange {
        /// First byte of the operation.
        offset: u64,
        /// One past the last byte of the operation.
        end: u64,
        /// Size of the local file.
        file_size: u64,
    },

    /// An upload host answered with a status other than 200. The upload was
    /// not committed.
    #[error("Upload to {url} was rejected with HTTP {status}")]
    UploadRejected {
        /// The HTTP status code.
        status: u16,
        /// The upload operation URL.
        url: String,
        /// The raw response body.
        body: String,
    },

    /// The reservation or commit request failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_mentions_path() {
        let error = UploadError::File {
            path: PathBuf::from("/tmp/missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = error.to_string();
        assert!(message.contains("/tmp/missing.png"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_upload_rejected_message() {
        let error = UploadError::UploadRejected {
            status: 500,
            url: "https://upload.example.com/1".to_string(),
            body: "boom".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Upload to https://upload.example.com/1 was rejected with HTTP 500"
        );
    }

    #[test]
    fn test_http_error_converts() {
        let error: UploadError =
            HttpError::InvalidRequest(crate::clients::InvalidHttpRequestError::EmptyPath).into();
        assert!(matches!(error, UploadError::Http(_)));
    }
}
