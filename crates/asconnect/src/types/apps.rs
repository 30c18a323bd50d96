//! Apps and App Store versions

use super::common::{
    DataResponse, ListResponse, Platform, Relationship, RequestBody, ResourceObject,
    ResourceUpdate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An app.
pub type App = ResourceObject<AppAttributes, AppRelationships>;

/// `GET /v1/apps/{id}` response.
pub type AppResponse = DataResponse<App>;

/// `GET /v1/apps` response.
pub type AppsResponse = ListResponse<App>;

/// Attributes of an app.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAttributes {
    /// Name on the App Store
    pub name: Option<String>,
    /// Bundle identifier
    pub bundle_id: Option<String>,
    /// SKU chosen at creation
    pub sku: Option<String>,
    /// Primary locale, e.g. `en-US`
    pub primary_locale: Option<String>,
    /// Whether the app is or was ever made for kids
    pub is_or_ever_was_made_for_kids: Option<bool>,
    /// Server notification URL for subscription status changes
    pub subscription_status_url: Option<String>,
    /// Third-party content declaration
    pub content_rights_declaration: Option<ContentRightsDeclaration>,
}

/// Relationships of an app.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRelationships {
    /// Beta groups
    pub beta_groups: Option<Relationship>,
    /// App Store versions
    pub app_store_versions: Option<Relationship>,
    /// Pre-release versions
    pub pre_release_versions: Option<Relationship>,
    /// Builds
    pub builds: Option<Relationship>,
}

/// Whether an app uses third-party content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentRightsDeclaration {
    /// No third-party content
    DoesNotUseThirdPartyContent,
    /// Uses third-party content
    UsesThirdPartyContent,
}

/// Attributes that can be changed on an app.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUpdateAttributes {
    /// New bundle identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    /// New primary locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_locale: Option<String>,
    /// New subscription notification URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_status_url: Option<String>,
    /// New content rights declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_rights_declaration: Option<ContentRightsDeclaration>,
}

/// `PATCH /v1/apps/{id}` body.
pub type AppUpdateRequest = RequestBody<ResourceUpdate<AppUpdateAttributes>>;

/// Query for `GET /v1/apps`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListAppsQuery {
    /// Attributes to return for apps
    #[serde(rename = "fields[apps]")]
    pub fields_apps: Option<Vec<String>>,
    /// Filter by bundle identifier
    #[serde(rename = "filter[bundleId]")]
    pub filter_bundle_id: Option<Vec<String>>,
    /// Filter by id
    #[serde(rename = "filter[id]")]
    pub filter_id: Option<Vec<String>>,
    /// Filter by name
    #[serde(rename = "filter[name]")]
    pub filter_name: Option<Vec<String>>,
    /// Filter by SKU
    #[serde(rename = "filter[sku]")]
    pub filter_sku: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
    /// Sort order, e.g. `name` or `-bundleId`
    pub sort: Option<Vec<String>>,
    /// Page size (max 200)
    pub limit: Option<u32>,
    /// Continuation cursor from a previous page
    pub cursor: Option<String>,
}

impl ListAppsQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Only apps with this bundle identifier
    pub fn bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.filter_bundle_id = Some(vec![bundle_id.into()]);
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue from a cursor
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Query for `GET /v1/apps/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetAppQuery {
    /// Attributes to return for the app
    #[serde(rename = "fields[apps]")]
    pub fields_apps: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
    /// Number of included builds
    #[serde(rename = "limit[builds]")]
    pub limit_builds: Option<u32>,
}

/// Query for `GET /v1/apps/{id}/builds`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListBuildsForAppQuery {
    /// Attributes to return for builds
    #[serde(rename = "fields[builds]")]
    pub fields_builds: Option<Vec<String>>,
    /// Page size
    pub limit: Option<u32>,
    /// Continuation cursor
    pub cursor: Option<String>,
}

/// An App Store version.
pub type AppStoreVersion = ResourceObject<AppStoreVersionAttributes, AppStoreVersionRelationships>;

/// `GET /v1/apps/{id}/appStoreVersions` response.
pub type AppStoreVersionsResponse = ListResponse<AppStoreVersion>;

/// Attributes of an App Store version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStoreVersionAttributes {
    /// Platform
    pub platform: Option<Platform>,
    /// Marketing version, e.g. `2.1.0`
    pub version_string: Option<String>,
    /// Review/release state, e.g. `READY_FOR_SALE`
    pub app_store_state: Option<String>,
    /// Copyright line
    pub copyright: Option<String>,
    /// How the version is released after approval
    pub release_type: Option<ReleaseType>,
    /// Scheduled release date
    pub earliest_release_date: Option<DateTime<Utc>>,
    /// Creation time
    pub created_date: Option<DateTime<Utc>>,
    /// Whether the version can be downloaded
    pub downloadable: Option<bool>,
}

/// Relationships of an App Store version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStoreVersionRelationships {
    /// Owning app
    pub app: Option<Relationship>,
    /// Attached build
    pub build: Option<Relationship>,
    /// Pending submission
    pub app_store_version_submission: Option<Relationship>,
}

/// Release behaviour of an approved version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReleaseType {
    /// Released by hand
    Manual,
    /// Released as soon as it is approved
    AfterApproval,
    /// Released at `earliest_release_date`
    Scheduled,
}

/// Query for `GET /v1/apps/{id}/appStoreVersions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListAppStoreVersionsQuery {
    /// Attributes to return for versions
    #[serde(rename = "fields[appStoreVersions]")]
    pub fields_app_store_versions: Option<Vec<String>>,
    /// Filter by platform
    #[serde(rename = "filter[platform]")]
    pub filter_platform: Option<Vec<Platform>>,
    /// Filter by marketing version
    #[serde(rename = "filter[versionString]")]
    pub filter_version_string: Option<Vec<String>>,
    /// Filter by state
    #[serde(rename = "filter[appStoreState]")]
    pub filter_app_store_state: Option<Vec<String>>,
    /// Filter by id
    #[serde(rename = "filter[id]")]
    pub filter_id: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
    /// Page size
    pub limit: Option<u32>,
    /// Continuation cursor
    pub cursor: Option<String>,
}
