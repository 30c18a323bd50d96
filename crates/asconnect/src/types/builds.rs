//! Builds and pre-release versions

use super::common::{
    DataResponse, ListResponse, Platform, Relationship, RequestBody, ResourceObject,
    ResourceUpdate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded build.
pub type Build = ResourceObject<BuildAttributes, BuildRelationships>;

/// `GET /v1/builds/{id}` response.
pub type BuildResponse = DataResponse<Build>;

/// `GET /v1/builds` response.
pub type BuildsResponse = ListResponse<Build>;

/// Attributes of a build.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildAttributes {
    /// Build number (`CFBundleVersion`)
    pub version: Option<String>,
    /// Upload time
    pub uploaded_date: Option<DateTime<Utc>>,
    /// When the build stops being testable
    pub expiration_date: Option<DateTime<Utc>>,
    /// Whether the build has expired
    pub expired: Option<bool>,
    /// Minimum OS version
    pub min_os_version: Option<String>,
    /// Processing state
    pub processing_state: Option<ProcessingState>,
    /// Export compliance answer
    pub uses_non_exempt_encryption: Option<bool>,
}

/// Relationships of a build.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRelationships {
    /// Owning app
    pub app: Option<Relationship>,
    /// Pre-release version (marketing version + platform)
    pub pre_release_version: Option<Relationship>,
    /// Beta groups the build is available to
    pub beta_groups: Option<Relationship>,
    /// Testers added to the build directly
    pub individual_testers: Option<Relationship>,
    /// App Store version the build is attached to
    pub app_store_version: Option<Relationship>,
}

/// Processing state of an uploaded build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingState {
    /// Still processing
    Processing,
    /// Processing failed
    Failed,
    /// Rejected as invalid
    Invalid,
    /// Ready for testing and submission
    Valid,
}

/// Attributes that can be changed on a build.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildUpdateAttributes {
    /// Expire the build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
    /// Export compliance answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_non_exempt_encryption: Option<bool>,
}

/// `PATCH /v1/builds/{id}` body.
pub type BuildUpdateRequest = RequestBody<ResourceUpdate<BuildUpdateAttributes>>;

/// Query for `GET /v1/builds`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListBuildsQuery {
    /// Attributes to return for builds
    #[serde(rename = "fields[builds]")]
    pub fields_builds: Option<Vec<String>>,
    /// Filter by app id
    #[serde(rename = "filter[app]")]
    pub filter_app: Option<Vec<String>>,
    /// Filter by build number
    #[serde(rename = "filter[version]")]
    pub filter_version: Option<Vec<String>>,
    /// Filter by processing state
    #[serde(rename = "filter[processingState]")]
    pub filter_processing_state: Option<Vec<ProcessingState>>,
    /// Filter by expiry
    #[serde(rename = "filter[expired]")]
    pub filter_expired: Option<bool>,
    /// Filter by marketing version
    #[serde(rename = "filter[preReleaseVersion.version]")]
    pub filter_pre_release_version: Option<Vec<String>>,
    /// Filter by platform
    #[serde(rename = "filter[preReleaseVersion.platform]")]
    pub filter_platform: Option<Vec<Platform>>,
    /// Filter by beta group id
    #[serde(rename = "filter[betaGroups]")]
    pub filter_beta_groups: Option<Vec<String>>,
    /// Filter by id
    #[serde(rename = "filter[id]")]
    pub filter_id: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
    /// Sort order, e.g. `-uploadedDate`
    pub sort: Option<Vec<String>>,
    /// Page size (max 200)
    pub limit: Option<u32>,
    /// Continuation cursor
    pub cursor: Option<String>,
}

impl ListBuildsQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Only builds of this app
    pub fn app(mut self, app_id: impl Into<String>) -> Self {
        self.filter_app = Some(vec![app_id.into()]);
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

/// Query for `GET /v1/builds/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetBuildQuery {
    /// Attributes to return for the build
    #[serde(rename = "fields[builds]")]
    pub fields_builds: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
}

/// A pre-release version: marketing version and platform shared by builds.
pub type PreReleaseVersion = ResourceObject<PreReleaseVersionAttributes>;

/// Attributes of a pre-release version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreReleaseVersionAttributes {
    /// Marketing version
    pub version: Option<String>,
    /// Platform
    pub platform: Option<Platform>,
}
