//! JSON:API building blocks shared by every resource
//!
//! Responses arrive as documents: `{data, included, links, meta}`. A
//! resource inside `data` is a [`ResourceObject`] with typed attributes
//! and relationships; concrete resources are aliases over it.

use super::Included;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// A link URL as sent by the API.
///
/// The string is kept exactly as received. [`cursor`](Self::cursor) reads
/// the continuation token out of it for callers that page manually.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    /// Wrap a link URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The link as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the link as a URL.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.0)
    }

    /// The `cursor` query parameter, or `None` if the link has none or is
    /// not a valid URL.
    ///
    /// ```rust
    /// use asconnect::types::Reference;
    ///
    /// let next = Reference::new("https://api.appstoreconnect.apple.com/v1/apps?cursor=abc123&limit=50");
    /// assert_eq!(next.cursor().as_deref(), Some("abc123"));
    ///
    /// let first = Reference::new("https://api.appstoreconnect.apple.com/v1/apps?limit=50");
    /// assert_eq!(first.cursor(), None);
    /// ```
    pub fn cursor(&self) -> Option<String> {
        self.url()
            .ok()?
            .query_pairs()
            .find(|(key, _)| key == "cursor")
            .map(|(_, value)| value.into_owned())
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Reference {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for Reference {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

/// Links of a single-resource document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLinks {
    /// Canonical link to the document
    #[serde(rename = "self")]
    pub self_link: Reference,
}

/// Links of a list document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedDocumentLinks {
    /// Link to this page
    #[serde(rename = "self")]
    pub self_link: Reference,
    /// Link to the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<Reference>,
    /// Link to the next page; absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Reference>,
}

/// Links of a resource object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLinks {
    /// Canonical link to the resource
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Reference>,
}

/// Paging metadata attached to list documents and to-many relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInformation {
    /// Totals for the whole collection
    pub paging: Paging,
}

/// Collection size and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Total number of resources across all pages
    pub total: u64,
    /// Page size used for this response
    pub limit: u32,
}

/// `{type, id}` pointer to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Linkage {
    /// Resource type, e.g. `betaGroups`
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource id
    pub id: String,
}

impl Linkage {
    /// Create a linkage.
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

/// Linkage of a to-one or to-many relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// To-one
    One(Linkage),
    /// To-many
    Many(Vec<Linkage>),
}

/// Links of a relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipLinks {
    /// Link to the relationship itself
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Reference>,
    /// Link to the related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Reference>,
}

/// A relationship entry under `relationships`.
///
/// `data` is present only when the relationship was requested with
/// `include`, or for to-one relationships the API always resolves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Relationship {
    /// Resource linkage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RelationshipData>,
    /// Relationship links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RelationshipLinks>,
    /// Paging information for to-many relationships
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PagingInformation>,
}

impl Relationship {
    /// Ids of the linked resources, in API order.
    pub fn ids(&self) -> Vec<&str> {
        match &self.data {
            Some(RelationshipData::One(linkage)) => vec![linkage.id.as_str()],
            Some(RelationshipData::Many(linkages)) => {
                linkages.iter().map(|l| l.id.as_str()).collect()
            }
            None => Vec::new(),
        }
    }

    /// Id of a to-one relationship.
    pub fn id(&self) -> Option<&str> {
        match &self.data {
            Some(RelationshipData::One(linkage)) => Some(&linkage.id),
            _ => None,
        }
    }
}

/// A JSON:API resource with typed attributes and relationships.
///
/// The `type` member is not stored: it is implied by `A` inside a typed
/// document and consumed as the tag inside [`Included`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject<A, R = NoRelationships> {
    /// Resource id
    pub id: String,
    /// Attributes, absent when filtered out with `fields[...]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<A>,
    /// Relationships
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<R>,
    /// Resource links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

/// Relationships of a resource the client does not model any for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoRelationships {}

/// A document whose `data` is a single resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataResponse<T> {
    /// The resource
    pub data: T,
    /// Related resources requested with `include`
    #[serde(default)]
    pub included: Vec<Included>,
    /// Document links
    pub links: DocumentLinks,
}

/// A document whose `data` is a page of resources.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListResponse<T> {
    /// Resources on this page
    pub data: Vec<T>,
    /// Related resources requested with `include`
    #[serde(default)]
    pub included: Vec<Included>,
    /// Page links
    pub links: PagedDocumentLinks,
    /// Paging metadata
    #[serde(default)]
    pub meta: Option<PagingInformation>,
}

impl<T> ListResponse<T> {
    /// Whether a next page exists.
    pub fn has_next_page(&self) -> bool {
        self.links.next.is_some()
    }

    /// Cursor of the next page, if any.
    pub fn next_cursor(&self) -> Option<String> {
        self.links.next.as_ref()?.cursor()
    }

    /// Total number of resources across all pages, if reported.
    pub fn total(&self) -> Option<u64> {
        self.meta.map(|m| m.paging.total)
    }
}

/// Request body wrapper: `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBody<D> {
    /// Payload
    pub data: D,
}

/// Payload for creating a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewResource<A, R = NoRelationships> {
    /// Resource type
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Attributes of the new resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<A>,
    /// Relationships of the new resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<R>,
}

impl<A, R> RequestBody<NewResource<A, R>> {
    /// Wrap a creation payload.
    pub fn create(kind: &'static str, attributes: Option<A>, relationships: Option<R>) -> Self {
        RequestBody {
            data: NewResource {
                kind,
                attributes,
                relationships,
            },
        }
    }
}

/// Payload for updating a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceUpdate<A> {
    /// Resource type
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Id of the resource being updated
    pub id: String,
    /// Attributes to change; unset fields are left alone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<A>,
}

impl<A> RequestBody<ResourceUpdate<A>> {
    /// Wrap an update payload.
    pub fn update(kind: &'static str, id: impl Into<String>, attributes: A) -> Self {
        RequestBody {
            data: ResourceUpdate {
                kind,
                id: id.into(),
                attributes: Some(attributes),
            },
        }
    }
}

/// Body of a relationship mutation: `{"data": [{"type", "id"}, ...]}`.
pub type RelationshipRequest = RequestBody<Vec<Linkage>>;

impl RelationshipRequest {
    /// Link resources of one type by id.
    pub fn linking<I, S>(kind: &str, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RequestBody {
            data: ids.into_iter().map(|id| Linkage::new(kind, id)).collect(),
        }
    }
}

/// To-one relationship in a request body: `{"data": {"type", "id"}}`.
pub type RelationshipLink = RequestBody<Linkage>;

impl RelationshipLink {
    /// Link to a single resource.
    pub fn to(kind: &str, id: impl Into<String>) -> Self {
        RequestBody {
            data: Linkage::new(kind, id),
        }
    }
}

/// Apple platform identifier used across resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    /// iOS and iPadOS
    Ios,
    /// macOS
    MacOs,
    /// tvOS
    TvOs,
    /// visionOS
    VisionOs,
    /// iOS and macOS (bundle IDs only)
    Universal,
    /// A platform this client does not know yet
    #[serde(other)]
    Unknown,
}
