//! App Store version submission endpoints

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    types::{AppStoreVersionSubmissionCreateRequest, AppStoreVersionSubmissionResponse},
};

/// App Store version submissions resource.
#[derive(Debug, Clone)]
pub struct Submissions {
    client: Client,
}

impl Submissions {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /v1/appStoreVersionSubmissions`
    ///
    /// Submits the version for App Review. The version must have a build
    /// attached and all required metadata filled in.
    pub async fn create(
        &self,
        app_store_version_id: &str,
    ) -> Result<AppStoreVersionSubmissionResponse> {
        let body = AppStoreVersionSubmissionCreateRequest::new(app_store_version_id);
        self.client
            .post("v1/appStoreVersionSubmissions", &body)
            .await
    }

    /// `DELETE /v1/appStoreVersionSubmissions/{id}`
    ///
    /// Withdraws a submission that has not been reviewed yet.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("v1/appStoreVersionSubmissions/{}", id))
            .await
    }

    /// `GET /v1/appStoreVersions/{id}/appStoreVersionSubmission`
    pub async fn get_for_version(
        &self,
        app_store_version_id: &str,
    ) -> Result<AppStoreVersionSubmissionResponse> {
        self.client
            .get(&format!(
                "v1/appStoreVersions/{}/appStoreVersionSubmission",
                app_store_version_id
            ))
            .await
    }
}

impl Resource for Submissions {
    fn client(&self) -> &Client {
        &self.client
    }
}
