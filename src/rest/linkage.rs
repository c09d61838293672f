//! Relationship linkages between resources.
//!
//! Requests reference related resources by identity only:
//! `{"data": {"id": "...", "type": "apps"}}` for a to-one relationship and
//! `{"data": [{...}, {...}]}` for a to-many relationship. Responses add
//! `links` and paging `meta` and may leave `data` out entirely.

use serde::{Deserialize, Serialize};

use crate::rest::document::PagingInformation;

/// The `{id, type}` pair identifying a resource.
///
/// # Example
///
/// ```rust
/// use asc_api::rest::ResourceIdentifier;
///
/// let tester = ResourceIdentifier::new("betaTesters", "1a2b3c");
/// assert_eq!(
///     serde_json::to_string(&tester).unwrap(),
///     r#"{"id":"1a2b3c","type":"betaTesters"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// The resource ID.
    pub id: String,
    /// The resource type, e.g. `apps`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResourceIdentifier {
    /// Creates an identifier for a resource of type `kind`.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// A relationship linkage as sent in request bodies.
///
/// `D` is [`ResourceIdentifier`] for to-one relationships and
/// `Vec<ResourceIdentifier>` for to-many relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship<D> {
    /// The linkage.
    pub data: D,
}

/// A to-one relationship linkage.
pub type ToOne = Relationship<ResourceIdentifier>;

/// A to-many relationship linkage.
pub type ToMany = Relationship<Vec<ResourceIdentifier>>;

impl ToOne {
    /// Links to a single resource.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            data: ResourceIdentifier::new(kind, id),
        }
    }
}

impl ToMany {
    /// Links to several resources of the same type.
    #[must_use]
    pub fn new<I, S>(kind: &str, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: ids
                .into_iter()
                .map(|id| ResourceIdentifier::new(kind, id))
                .collect(),
        }
    }
}

/// Links attached to a relationship in responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipLinks {
    /// The relationship's own URL (`.../relationships/<name>`).
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// URL of the related resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
}

/// A relationship as returned by the server.
///
/// `data` is only present when the relationship was requested through
/// `include` or relationship field selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRelationship<D> {
    /// The linkage, if the server sent one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<D>,
    /// Relationship links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<RelationshipLinks>,
    /// Paging information for to-many relationships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PagingInformation>,
}

impl<D> Default for ResponseRelationship<D> {
    fn default() -> Self {
        Self {
            data: None,
            links: None,
            meta: None,
        }
    }
}

/// A to-one relationship in a response.
pub type ToOneResponse = ResponseRelationship<ResourceIdentifier>;

/// A to-many relationship in a response.
pub type ToManyResponse = ResponseRelationship<Vec<ResourceIdentifier>>;

/// Linkage data when the relationship's cardinality is not known statically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// A to-one linkage.
    One(ResourceIdentifier),
    /// A to-many linkage.
    Many(Vec<ResourceIdentifier>),
}

impl RelationshipData {
    /// Returns the linked identifiers as a slice.
    #[must_use]
    pub fn identifiers(&self) -> &[ResourceIdentifier] {
        match self {
            Self::One(one) => std::slice::from_ref(one),
            Self::Many(many) => many,
        }
    }
}
