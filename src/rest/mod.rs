//! JSON:API data model and resource services for App Store Connect.
//!
//! This module provides:
//!
//! - **[`Resource<A, R>`]** and **[`UntypedResource`]**: resource objects as returned by the server
//! - **[`Document<D, I>`]**: the `{data, included, links, meta}` response envelope with pagination helpers
//! - **[`Relationship`]**, **[`ToOne`]**, **[`ToMany`]**: identity-only linkages used in requests
//! - **[`RequestBody`]**, **[`ResourceData`]**, **[`Placeholder`]**: request envelopes, including compound writes
//! - **[`ApiResponse<T>`]**: a Deref-based wrapper pairing decoded data with its HTTP metadata
//! - **[`UploadError`]**: errors of multi-step asset uploads
//! - **[`resources`]**: typed models and service methods per resource family
//!
//! # Example
//!
//! ```rust,ignore
//! use asc_api::{AscConfig, IssuerId, KeyId, PrivateKey, RestClient};
//! use asc_api::rest::resources::{GetAppQuery, ListAppsQuery};
//!
//! let config = AscConfig::builder()
//!     .issuer_id(IssuerId::new("57246542-96fe-1a63-e053-0824d011072a")?)
//!     .key_id(KeyId::new("2X9R4HXF34")?)
//!     .private_key(PrivateKey::from_pem(std::fs::read_to_string("AuthKey.p8")?)?)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! // List apps, filtered by bundle ID
//! let apps = client
//!     .apps()
//!     .list_apps(&ListAppsQuery {
//!         filter_bundle_id: vec!["com.example.app".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Read one app with its builds included
//! let app = client
//!     .apps()
//!     .get_app(
//!         &apps.data[0].id,
//!         &GetAppQuery {
//!             include: vec!["builds".to_string()],
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! for build in app.included.iter().filter(|resource| resource.is("builds")) {
//!     println!("build {}", build.id);
//! }
//! ```

mod document;
mod envelope;
mod errors;
mod linkage;
mod path;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use document::{Document, DocumentLinks, LinkagesResponse, Paging, PagingInformation};
pub use envelope::{Placeholder, RequestBody, ResourceData};
pub use errors::UploadError;
pub use linkage::{
    Relationship, RelationshipData, RelationshipLinks, ResourceIdentifier, ResponseRelationship,
    ToMany, ToManyResponse, ToOne, ToOneResponse,
};
pub use path::build_path;
pub use resource::{included_of, Relationships, Resource, ResourceLinks, UntypedResource};
pub use response::ApiResponse;
