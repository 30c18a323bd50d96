//! TestFlight beta groups and beta testers

use super::common::{
    DataResponse, ListResponse, NewResource, Relationship, RelationshipLink, RelationshipRequest,
    RequestBody, ResourceObject, ResourceUpdate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A TestFlight beta group.
pub type BetaGroup = ResourceObject<BetaGroupAttributes, BetaGroupRelationships>;

/// `GET /v1/betaGroups/{id}` response.
pub type BetaGroupResponse = DataResponse<BetaGroup>;

/// `GET /v1/betaGroups` response.
pub type BetaGroupsResponse = ListResponse<BetaGroup>;

/// Attributes of a beta group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaGroupAttributes {
    /// Group name
    pub name: Option<String>,
    /// Creation time
    pub created_date: Option<DateTime<Utc>>,
    /// Internal (team members) vs external group
    pub is_internal_group: Option<bool>,
    /// Internal groups only: every build is available automatically
    pub has_access_to_all_builds: Option<bool>,
    /// Whether the public link is enabled
    pub public_link_enabled: Option<bool>,
    /// Public link id
    pub public_link_id: Option<String>,
    /// Whether the public link has a tester cap
    pub public_link_limit_enabled: Option<bool>,
    /// Tester cap for the public link
    pub public_link_limit: Option<u32>,
    /// Public link URL
    pub public_link: Option<String>,
    /// Whether testers can send feedback
    pub feedback_enabled: Option<bool>,
}

/// Relationships of a beta group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaGroupRelationships {
    /// Owning app
    pub app: Option<Relationship>,
    /// Builds available to the group
    pub builds: Option<Relationship>,
    /// Testers in the group
    pub beta_testers: Option<Relationship>,
}

/// Attributes of a new beta group.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaGroupCreateAttributes {
    /// Group name
    pub name: String,
    /// Create an internal group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_internal_group: Option<bool>,
    /// Internal groups only: make every build available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_access_to_all_builds: Option<bool>,
    /// Enable the public link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_link_enabled: Option<bool>,
    /// Cap the public link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_link_limit_enabled: Option<bool>,
    /// Tester cap for the public link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_link_limit: Option<u32>,
    /// Allow feedback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_enabled: Option<bool>,
}

/// Relationships of a new beta group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaGroupCreateRelationships {
    /// Owning app
    pub app: RelationshipLink,
    /// Builds to make available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builds: Option<RelationshipRequest>,
    /// Testers to add
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta_testers: Option<RelationshipRequest>,
}

/// `POST /v1/betaGroups` body.
pub type BetaGroupCreateRequest =
    RequestBody<NewResource<BetaGroupCreateAttributes, BetaGroupCreateRelationships>>;

impl BetaGroupCreateRequest {
    /// A group named `name` for the app with id `app_id`.
    pub fn new(app_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_attributes(
            app_id,
            BetaGroupCreateAttributes {
                name: name.into(),
                ..Default::default()
            },
        )
    }

    /// A group for `app_id` with full control over its attributes.
    pub fn with_attributes(app_id: impl Into<String>, attributes: BetaGroupCreateAttributes) -> Self {
        Self::create(
            "betaGroups",
            Some(attributes),
            Some(BetaGroupCreateRelationships {
                app: RelationshipLink::to("apps", app_id),
                builds: None,
                beta_testers: None,
            }),
        )
    }

    /// Make these builds available to the new group.
    pub fn builds<I, S>(mut self, build_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(relationships) = self.data.relationships.as_mut() {
            relationships.builds = Some(RelationshipRequest::linking("builds", build_ids));
        }
        self
    }
}

/// Attributes that can be changed on a beta group.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaGroupUpdateAttributes {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Enable or disable the public link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_link_enabled: Option<bool>,
    /// Enable or disable the public link cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_link_limit_enabled: Option<bool>,
    /// New public link cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_link_limit: Option<u32>,
    /// Allow feedback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_enabled: Option<bool>,
}

/// `PATCH /v1/betaGroups/{id}` body.
pub type BetaGroupUpdateRequest = RequestBody<ResourceUpdate<BetaGroupUpdateAttributes>>;

/// Query for `GET /v1/betaGroups`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListBetaGroupsQuery {
    /// Attributes to return for beta groups
    #[serde(rename = "fields[betaGroups]")]
    pub fields_beta_groups: Option<Vec<String>>,
    /// Filter by app id
    #[serde(rename = "filter[app]")]
    pub filter_app: Option<Vec<String>>,
    /// Filter by name
    #[serde(rename = "filter[name]")]
    pub filter_name: Option<Vec<String>>,
    /// Filter internal or external groups
    #[serde(rename = "filter[isInternalGroup]")]
    pub filter_is_internal_group: Option<bool>,
    /// Filter by public link state
    #[serde(rename = "filter[publicLinkEnabled]")]
    pub filter_public_link_enabled: Option<bool>,
    /// Filter by id
    #[serde(rename = "filter[id]")]
    pub filter_id: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
    /// Sort order
    pub sort: Option<Vec<String>>,
    /// Page size
    pub limit: Option<u32>,
    /// Continuation cursor
    pub cursor: Option<String>,
}

impl ListBetaGroupsQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Only groups of this app
    pub fn app(mut self, app_id: impl Into<String>) -> Self {
        self.filter_app = Some(vec![app_id.into()]);
        self
    }

    /// Only groups with this name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.filter_name = Some(vec![name.into()]);
        self
    }
}

/// Query for `GET /v1/betaGroups/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetBetaGroupQuery {
    /// Attributes to return for the group
    #[serde(rename = "fields[betaGroups]")]
    pub fields_beta_groups: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
}

/// A TestFlight tester.
pub type BetaTester = ResourceObject<BetaTesterAttributes, BetaTesterRelationships>;

/// `GET /v1/betaTesters/{id}` response.
pub type BetaTesterResponse = DataResponse<BetaTester>;

/// `GET /v1/betaTesters` response.
pub type BetaTestersResponse = ListResponse<BetaTester>;

/// Attributes of a beta tester.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaTesterAttributes {
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub last_name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// How the tester was invited
    pub invite_type: Option<BetaInviteType>,
}

/// Relationships of a beta tester.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaTesterRelationships {
    /// Apps the tester can test
    pub apps: Option<Relationship>,
    /// Groups the tester belongs to
    pub beta_groups: Option<Relationship>,
    /// Builds assigned individually
    pub builds: Option<Relationship>,
}

/// How a tester joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BetaInviteType {
    /// Invited by email
    Email,
    /// Joined through a public link
    PublicLink,
}

/// Attributes of a new tester.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaTesterCreateAttributes {
    /// Email address
    pub email: String,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Relationships of a new tester.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaTesterCreateRelationships {
    /// Groups to add the tester to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta_groups: Option<RelationshipRequest>,
    /// Builds to assign individually
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builds: Option<RelationshipRequest>,
}

/// `POST /v1/betaTesters` body.
pub type BetaTesterCreateRequest =
    RequestBody<NewResource<BetaTesterCreateAttributes, BetaTesterCreateRelationships>>;

impl BetaTesterCreateRequest {
    /// Invite `email` into the given groups.
    pub fn new<I, S>(email: impl Into<String>, beta_group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::create(
            "betaTesters",
            Some(BetaTesterCreateAttributes {
                email: email.into(),
                ..Default::default()
            }),
            Some(BetaTesterCreateRelationships {
                beta_groups: Some(RelationshipRequest::linking("betaGroups", beta_group_ids)),
                builds: None,
            }),
        )
    }

    /// Set the tester's name.
    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        if let Some(attributes) = self.data.attributes.as_mut() {
            attributes.first_name = Some(first_name.into());
            attributes.last_name = Some(last_name.into());
        }
        self
    }
}

/// Query for `GET /v1/betaTesters`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListBetaTestersQuery {
    /// Attributes to return for testers
    #[serde(rename = "fields[betaTesters]")]
    pub fields_beta_testers: Option<Vec<String>>,
    /// Filter by email
    #[serde(rename = "filter[email]")]
    pub filter_email: Option<Vec<String>>,
    /// Filter by first name
    #[serde(rename = "filter[firstName]")]
    pub filter_first_name: Option<Vec<String>>,
    /// Filter by last name
    #[serde(rename = "filter[lastName]")]
    pub filter_last_name: Option<Vec<String>>,
    /// Filter by invite type
    #[serde(rename = "filter[inviteType]")]
    pub filter_invite_type: Option<BetaInviteType>,
    /// Filter by app id
    #[serde(rename = "filter[apps]")]
    pub filter_apps: Option<Vec<String>>,
    /// Filter by beta group id
    #[serde(rename = "filter[betaGroups]")]
    pub filter_beta_groups: Option<Vec<String>>,
    /// Filter by build id
    #[serde(rename = "filter[builds]")]
    pub filter_builds: Option<Vec<String>>,
    /// Filter by id
    #[serde(rename = "filter[id]")]
    pub filter_id: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
    /// Sort order
    pub sort: Option<Vec<String>>,
    /// Page size
    pub limit: Option<u32>,
    /// Continuation cursor
    pub cursor: Option<String>,
}

impl ListBetaTestersQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Only testers with this email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.filter_email = Some(vec![email.into()]);
        self
    }

    /// Only testers in this group
    pub fn beta_group(mut self, group_id: impl Into<String>) -> Self {
        self.filter_beta_groups = Some(vec![group_id.into()]);
        self
    }
}

/// Query for `GET /v1/betaTesters/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetBetaTesterQuery {
    /// Attributes to return for the tester
    #[serde(rename = "fields[betaTesters]")]
    pub fields_beta_testers: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
}
