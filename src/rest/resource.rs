//! JSON:API resource objects.
//!
//! Responses carry resources as `{id, type, attributes?, relationships?,
//! links?}`. [`Resource`] is generic over the attribute and relationship
//! structs of each resource kind. [`UntypedResource`] covers `included`
//! arrays, which can mix several kinds; its `type` acts as the tag and its
//! attributes can be decoded on demand.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::rest::linkage::{RelationshipData, ResourceIdentifier, ResponseRelationship};

/// Links attached to a resource object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinks {
    /// Canonical URL of the resource.
    #[serde(rename = "self", default)]
    pub self_link: String,
}

/// A resource object as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<A, R = Relationships> {
    /// Server-assigned ID.
    pub id: String,
    /// Resource type, e.g. `apps`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Attributes; absent when excluded through field selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<A>,
    /// Relationships; absent when excluded through field selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<R>,
    /// Resource links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

impl<A, R> Resource<A, R> {
    /// Returns the `{id, type}` identifier of this resource.
    #[must_use]
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(&self.kind, &self.id)
    }
}

/// Relationships keyed by name, for resources without a typed relationship struct.
pub type Relationships = BTreeMap<String, ResponseRelationship<RelationshipData>>;

/// A resource whose attributes are kept as raw JSON.
pub type UntypedResource = Resource<serde_json::Map<String, serde_json::Value>, Relationships>;

impl UntypedResource {
    /// Returns `true` if this resource is of type `kind`.
    #[must_use]
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Decodes the attributes into a typed struct.
    ///
    /// Missing attributes decode from an empty object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the attributes don't match `T`.
    pub fn attributes_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let attributes = self.attributes.clone().unwrap_or_default();
        serde_json::from_value(serde_json::Value::Object(attributes))
    }
}

/// Picks the included resources of type `kind` and decodes their attributes.
///
/// Resources whose attributes don't decode are skipped.
pub fn included_of<'a, T: DeserializeOwned + 'a>(
    included: &'a [UntypedResource],
    kind: &'a str,
) -> impl Iterator<Item = (&'a str, T)> + 'a {
    included
        .iter()
        .filter(move |resource| resource.is(kind))
        .filter_map(|resource| {
            resource
                .attributes_as::<T>()
                .ok()
                .map(|attributes| (resource.id.as_str(), attributes))
        })
}
