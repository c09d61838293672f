//! Request bodies.
//!
//! Every write sends `{"data": ...}`. Compound writes add an `included`
//! array of resources created inline; those carry [`Placeholder`] IDs
//! (`${name}`) that the primary resource references from a relationship.
//!
//! # Example
//!
//! ```rust
//! use asc_api::rest::{RequestBody, ResourceData, ToOne};
//! use serde_json::json;
//!
//! #[derive(serde::Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct GroupAttributes {
//!     reference_name: String,
//! }
//!
//! #[derive(serde::Serialize)]
//! struct GroupRelationships {
//!     app: ToOne,
//! }
//!
//! let body = RequestBody::new(
//!     ResourceData::create("subscriptionGroups")
//!         .with_attributes(GroupAttributes { reference_name: "Premium".into() })
//!         .with_relationships(GroupRelationships { app: ToOne::new("apps", "123") }),
//! );
//!
//! assert_eq!(
//!     serde_json::to_value(&body).unwrap(),
//!     json!({"data": {
//!         "type": "subscriptionGroups",
//!         "attributes": {"referenceName": "Premium"},
//!         "relationships": {"app": {"data": {"id": "123", "type": "apps"}}}
//!     }})
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `{"data": ..., "included": [...]}` envelope of a request.
///
/// An empty `included` list is left out of the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody<D, I = serde_json::Value> {
    /// The primary payload.
    pub data: D,
    /// Resources created inline with the primary resource.
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<I>,
}

impl<D> RequestBody<D> {
    /// Wraps `data` into an envelope without `included` resources.
    #[must_use]
    pub const fn new(data: D) -> Self {
        Self {
            data,
            included: Vec::new(),
        }
    }

    /// Attaches inline resources, turning this into a compound write.
    #[must_use]
    pub fn with_included<I>(self, included: Vec<I>) -> RequestBody<D, I> {
        RequestBody {
            data: self.data,
            included,
        }
    }
}

/// A resource object inside a request body.
///
/// `id` is omitted on create and set on update. Inline resources in
/// `included` use a [`Placeholder`] as their `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceData<A = (), R = ()> {
    /// The resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The resource type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Attributes to set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<A>,
    /// Relationships to set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<R>,
}

impl ResourceData {
    /// Starts a payload creating a resource of type `kind`.
    #[must_use]
    pub fn create(kind: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            attributes: None,
            relationships: None,
        }
    }

    /// Starts a payload updating the resource `id` of type `kind`.
    #[must_use]
    pub fn update(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::create(kind)
        }
    }

    /// Starts a payload for an inline resource identified by `placeholder`.
    #[must_use]
    pub fn inline(kind: impl Into<String>, placeholder: &Placeholder) -> Self {
        Self::update(kind, placeholder.to_string())
    }
}

impl<A, R> ResourceData<A, R> {
    /// Sets the attributes.
    #[must_use]
    pub fn with_attributes<T>(self, attributes: T) -> ResourceData<T, R> {
        ResourceData {
            id: self.id,
            kind: self.kind,
            attributes: Some(attributes),
            relationships: self.relationships,
        }
    }

    /// Sets the relationships.
    #[must_use]
    pub fn with_relationships<T>(self, relationships: T) -> ResourceData<A, T> {
        ResourceData {
            id: self.id,
            kind: self.kind,
            attributes: self.attributes,
            relationships: Some(relationships),
        }
    }
}

/// A temporary ID for a resource created inline in a compound write.
///
/// Renders as `${name}`. The server replaces it with the real ID.
///
/// # Example
///
/// ```rust
/// use asc_api::rest::Placeholder;
///
/// assert_eq!(Placeholder::new("price-usa").to_string(), "${price-usa}");
/// assert_eq!(Placeholder::new("${price-usa}").to_string(), "${price-usa}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placeholder(String);

impl Placeholder {
    /// Creates a placeholder named `name`. An already wrapped `${name}` is accepted as-is.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        let bare = name
            .strip_prefix("${")
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(name);
        Self(bare.to_string())
    }

    /// Returns the bare name without `${` and `}`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${{{}}}", self.0)
    }
}
