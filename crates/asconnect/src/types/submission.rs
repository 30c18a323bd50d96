//! App Store version submissions

use super::common::{
    DataResponse, NewResource, Relationship, RelationshipLink, RequestBody,
    ResourceObject,
};
use serde::{Deserialize, Serialize};

/// A submission of an App Store version for review.
pub type AppStoreVersionSubmission =
    ResourceObject<NoAttributes, AppStoreVersionSubmissionRelationships>;

/// Response carrying one submission.
pub type AppStoreVersionSubmissionResponse = DataResponse<AppStoreVersionSubmission>;

/// Attributes of a resource that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoAttributes {}

/// Relationships of a submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStoreVersionSubmissionRelationships {
    /// Submitted version
    pub app_store_version: Option<Relationship>,
}

/// Relationships of a new submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStoreVersionSubmissionCreateRelationships {
    /// Version to submit
    pub app_store_version: RelationshipLink,
}

/// `POST /v1/appStoreVersionSubmissions` body.
pub type AppStoreVersionSubmissionCreateRequest =
    RequestBody<NewResource<NoAttributes, AppStoreVersionSubmissionCreateRelationships>>;

impl AppStoreVersionSubmissionCreateRequest {
    /// Submit the version with this id.
    pub fn new(app_store_version_id: impl Into<String>) -> Self {
        Self::create(
            "appStoreVersionSubmissions",
            None,
            Some(AppStoreVersionSubmissionCreateRelationships {
                app_store_version: RelationshipLink::to("appStoreVersions", app_store_version_id),
            }),
        )
    }
}
