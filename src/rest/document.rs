//! Top-level JSON:API response documents.
//!
//! Every App Store Connect response has the shape
//! `{data, included?, links, meta?}`. [`Document`] models it generically:
//! `Document<App>` for a single resource and `Document<Vec<App>>` for a
//! page of resources.
//!
//! # Pagination
//!
//! A list is paginated when `links.next` is present. The cursor for the next
//! page is the `cursor` query value of that URL:
//!
//! ```rust,ignore
//! let mut query = ListAppsQuery { limit: Some(50), ..Default::default() };
//! loop {
//!     let page = client.apps().list_apps(&query).await?;
//!     for app in &page.data {
//!         println!("{}", app.id);
//!     }
//!     match page.next_cursor() {
//!         Some(cursor) => query.cursor = Some(cursor),
//!         None => break,
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::linkage::ResourceIdentifier;
use crate::rest::resource::UntypedResource;

/// Total and page size of a paginated collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Total number of resources matching the request.
    #[serde(default)]
    pub total: u64,
    /// Maximum number of resources per page.
    #[serde(default)]
    pub limit: u64,
}

/// The `meta` member of paginated documents and to-many relationships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInformation {
    /// Paging details.
    pub paging: Paging,
}

/// The `links` member of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLinks {
    /// URL of this document.
    #[serde(rename = "self", default)]
    pub self_link: String,
    /// URL of the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// URL of the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// A JSON:API response document.
///
/// `I` is the type of the `included` entries. It defaults to
/// [`UntypedResource`] because `included` may mix several resource types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<D, I = UntypedResource> {
    /// The primary data.
    pub data: D,
    /// Related resources requested with `include`.
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<I>,
    /// Document links.
    #[serde(default)]
    pub links: DocumentLinks,
    /// Paging information for lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PagingInformation>,
}

/// A page of relationship linkages (`.../relationships/<name>` endpoints).
pub type LinkagesResponse = Document<Vec<ResourceIdentifier>>;

impl<D, I> Document<D, I> {
    /// Returns `true` if the server reported another page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.links.next.is_some()
    }

    /// Returns the `cursor` of the next page, decoded.
    #[must_use]
    pub fn next_cursor(&self) -> Option<String> {
        self.links.next.as_deref().and_then(extract_cursor)
    }

    /// Returns the total number of resources, if the server reported it.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.meta.map(|meta| meta.paging.total)
    }
}

/// Extracts the `cursor` parameter from a URL.
fn extract_cursor(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    for param in query.split('&') {
        if let Some((key, value)) = param.split_once('=') {
            if key == "cursor" {
                return urlencoding::decode(value).ok().map(|v| v.into_owned());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_next_cursor_from_links() {
        let doc: Document<Vec<ResourceIdentifier>> = Document {
            data: vec![],
            included: vec![],
            links: DocumentLinks {
                self_link: "https://api.appstoreconnect.apple.com/v1/apps".to_string(),
                first: None,
                next: Some(
                    "https://api.appstoreconnect.apple.com/v1/apps?cursor=eyJvZmZzZXQiOiIyIn0%3D&limit=2"
                        .to_string(),
                ),
            },
            meta: None,
        };

        assert!(doc.has_next_page());
        assert_eq!(doc.next_cursor().as_deref(), Some("eyJvZmZzZXQiOiIyIn0="));
    }

    #[test]
    fn test_last_page_has_no_cursor() {
        let doc: LinkagesResponse = serde_json::from_value(json!({
            "data": [{"id": "1", "type": "appScreenshots"}],
            "links": {"self": "https://api.appstoreconnect.apple.com/v1/appScreenshotSets/9/relationships/appScreenshots"},
            "meta": {"paging": {"total": 1, "limit": 50}}
        }))
        .unwrap();

        assert!(!doc.has_next_page());
        assert!(doc.next_cursor().is_none());
        assert_eq!(doc.total(), Some(1));
        assert_eq!(doc.data[0].kind, "appScreenshots");
    }

    #[test]
    fn test_next_link_without_cursor() {
        assert_eq!(extract_cursor("https://example.com/v1/apps?limit=2"), None);
        assert_eq!(extract_cursor("https://example.com/v1/apps"), None);
    }

    #[test]
    fn test_included_is_omitted_when_empty() {
        let doc: Document<ResourceIdentifier> = Document {
            data: ResourceIdentifier::new("apps", "1"),
            included: vec![],
            links: DocumentLinks::default(),
            meta: None,
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("included").is_none());
        assert!(value.get("meta").is_none());
    }
}
