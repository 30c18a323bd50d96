//! Team users and user invitations

use super::common::{
    DataResponse, ListResponse, NewResource, Relationship, RelationshipRequest, RequestBody,
    ResourceObject, ResourceUpdate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member of the team.
pub type User = ResourceObject<UserAttributes, UserRelationships>;

/// `GET /v1/users/{id}` response.
pub type UserResponse = DataResponse<User>;

/// `GET /v1/users` response.
pub type UsersResponse = ListResponse<User>;

/// Attributes of a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttributes {
    /// Apple ID
    pub username: Option<String>,
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub last_name: Option<String>,
    /// Assigned roles
    pub roles: Option<Vec<UserRole>>,
    /// Whether every app is visible to the user
    pub all_apps_visible: Option<bool>,
    /// Whether the user can manage certificates and profiles
    pub provisioning_allowed: Option<bool>,
}

/// Relationships of a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRelationships {
    /// Apps visible when `all_apps_visible` is off
    pub visible_apps: Option<Relationship>,
}

/// Team role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Admin
    Admin,
    /// Finance
    Finance,
    /// Account Holder
    AccountHolder,
    /// Sales
    Sales,
    /// Marketing
    Marketing,
    /// App Manager
    AppManager,
    /// Developer
    Developer,
    /// Access to Reports
    AccessToReports,
    /// Customer Support
    CustomerSupport,
    /// Create Apps
    CreateApps,
    /// Cloud-managed Developer ID
    CloudManagedDeveloperId,
    /// Cloud-managed App Distribution
    CloudManagedAppDistribution,
    /// Generate Individual API Keys
    GenerateIndividualKeys,
    /// A role this client does not know yet
    #[serde(other)]
    Unknown,
}

/// Attributes that can be changed on a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateAttributes {
    /// Replace the roles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<UserRole>>,
    /// Show every app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_apps_visible: Option<bool>,
    /// Allow provisioning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_allowed: Option<bool>,
}

/// `PATCH /v1/users/{id}` body.
pub type UserUpdateRequest = RequestBody<ResourceUpdate<UserUpdateAttributes>>;

/// Query for `GET /v1/users`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUsersQuery {
    /// Attributes to return for users
    #[serde(rename = "fields[users]")]
    pub fields_users: Option<Vec<String>>,
    /// Filter by role
    #[serde(rename = "filter[roles]")]
    pub filter_roles: Option<Vec<UserRole>>,
    /// Filter by Apple ID
    #[serde(rename = "filter[username]")]
    pub filter_username: Option<Vec<String>>,
    /// Filter by visible app id
    #[serde(rename = "filter[visibleApps]")]
    pub filter_visible_apps: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
    /// Sort order
    pub sort: Option<Vec<String>>,
    /// Page size
    pub limit: Option<u32>,
    /// Continuation cursor
    pub cursor: Option<String>,
}

/// Query for `GET /v1/users/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUserQuery {
    /// Attributes to return for the user
    #[serde(rename = "fields[users]")]
    pub fields_users: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
}

/// A pending invitation to join the team.
pub type UserInvitation = ResourceObject<UserInvitationAttributes, UserRelationships>;

/// `GET /v1/userInvitations/{id}` response.
pub type UserInvitationResponse = DataResponse<UserInvitation>;

/// `GET /v1/userInvitations` response.
pub type UserInvitationsResponse = ListResponse<UserInvitation>;

/// Attributes of an invitation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInvitationAttributes {
    /// Invited email address
    pub email: Option<String>,
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub last_name: Option<String>,
    /// When the invitation lapses
    pub expiration_date: Option<DateTime<Utc>>,
    /// Roles granted on acceptance
    pub roles: Option<Vec<UserRole>>,
    /// Whether every app will be visible
    pub all_apps_visible: Option<bool>,
    /// Whether provisioning will be allowed
    pub provisioning_allowed: Option<bool>,
}

/// Attributes of a new invitation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInvitationCreateAttributes {
    /// Email address to invite
    pub email: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Roles to grant
    pub roles: Vec<UserRole>,
    /// Show every app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_apps_visible: Option<bool>,
    /// Allow provisioning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_allowed: Option<bool>,
}

/// Relationships of a new invitation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInvitationCreateRelationships {
    /// Apps to make visible when `all_apps_visible` is off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_apps: Option<RelationshipRequest>,
}

/// `POST /v1/userInvitations` body.
pub type UserInvitationCreateRequest =
    RequestBody<NewResource<UserInvitationCreateAttributes, UserInvitationCreateRelationships>>;

impl UserInvitationCreateRequest {
    /// Invite a person with the given roles and access to all apps.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        roles: Vec<UserRole>,
    ) -> Self {
        Self::create(
            "userInvitations",
            Some(UserInvitationCreateAttributes {
                email: email.into(),
                first_name: first_name.into(),
                last_name: last_name.into(),
                roles,
                all_apps_visible: Some(true),
                provisioning_allowed: None,
            }),
            None,
        )
    }

    /// Limit visibility to these apps instead of all apps.
    pub fn visible_apps<I, S>(mut self, app_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(attributes) = self.data.attributes.as_mut() {
            attributes.all_apps_visible = Some(false);
        }
        self.data.relationships = Some(UserInvitationCreateRelationships {
            visible_apps: Some(RelationshipRequest::linking("apps", app_ids)),
        });
        self
    }
}

/// Query for `GET /v1/userInvitations`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUserInvitationsQuery {
    /// Attributes to return for invitations
    #[serde(rename = "fields[userInvitations]")]
    pub fields_user_invitations: Option<Vec<String>>,
    /// Filter by email
    #[serde(rename = "filter[email]")]
    pub filter_email: Option<Vec<String>>,
    /// Filter by role
    #[serde(rename = "filter[roles]")]
    pub filter_roles: Option<Vec<UserRole>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
    /// Sort order
    pub sort: Option<Vec<String>>,
    /// Page size
    pub limit: Option<u32>,
    /// Continuation cursor
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::encode_query;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_roles_decode() {
        let user: User = serde_json::from_str(
            r#"{"id": "U1", "attributes": {"username": "dev@example.com", "roles": ["DEVELOPER", "APP_MANAGER", "BRAND_NEW_ROLE"]}}"#,
        )
        .unwrap();
        assert_eq!(
            user.attributes.unwrap().roles.unwrap(),
            vec![UserRole::Developer, UserRole::AppManager, UserRole::Unknown]
        );
    }

    #[test]
    fn test_invitation_with_visible_apps() {
        let body = UserInvitationCreateRequest::new(
            "new@example.com",
            "New",
            "Person",
            vec![UserRole::Developer],
        )
        .visible_apps(["A1"]);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"data": {
                "type": "userInvitations",
                "attributes": {
                    "email": "new@example.com",
                    "firstName": "New",
                    "lastName": "Person",
                    "roles": ["DEVELOPER"],
                    "allAppsVisible": false
                },
                "relationships": {
                    "visibleApps": {"data": [{"type": "apps", "id": "A1"}]}
                }
            }})
        );
    }

    #[test]
    fn test_roles_filter_is_comma_joined() {
        let query = ListUsersQuery {
            filter_roles: Some(vec![UserRole::Admin, UserRole::Finance]),
            ..Default::default()
        };
        assert_eq!(
            encode_query(&query).unwrap(),
            vec![("filter[roles]".to_string(), "ADMIN,FINANCE".to_string())]
        );
    }
}
