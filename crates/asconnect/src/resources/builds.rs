//! Builds endpoints

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    types::{
        AppResponse, BuildResponse, BuildUpdateAttributes, BuildUpdateRequest, BuildsResponse,
        GetBuildQuery, ListBuildsQuery, RelationshipRequest,
    },
};

/// Builds resource.
#[derive(Debug, Clone)]
pub struct Builds {
    client: Client,
}

impl Builds {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /v1/builds`
    pub async fn list(&self, query: &ListBuildsQuery) -> Result<BuildsResponse> {
        self.client.get_with_query("v1/builds", query).await
    }

    /// `GET /v1/builds/{id}`
    pub async fn get(&self, id: &str, query: &GetBuildQuery) -> Result<BuildResponse> {
        self.client
            .get_with_query(&format!("v1/builds/{}", id), query)
            .await
    }

    /// `PATCH /v1/builds/{id}`
    pub async fn update(
        &self,
        id: &str,
        attributes: BuildUpdateAttributes,
    ) -> Result<BuildResponse> {
        let body = BuildUpdateRequest::update("builds", id, attributes);
        self.client.patch(&format!("v1/builds/{}", id), &body).await
    }

    /// `GET /v1/builds/{id}/app`
    pub async fn get_app(&self, build_id: &str) -> Result<AppResponse> {
        self.client.get(&format!("v1/builds/{}/app", build_id)).await
    }

    /// `POST /v1/builds/{id}/relationships/betaGroups`
    ///
    /// Makes the build available to the given beta groups.
    pub async fn add_beta_groups<I, S>(&self, build_id: &str, group_ids: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = RelationshipRequest::linking("betaGroups", group_ids);
        self.client
            .post_empty(&format!("v1/builds/{}/relationships/betaGroups", build_id), &body)
            .await
    }

    /// `DELETE /v1/builds/{id}/relationships/betaGroups`
    pub async fn remove_beta_groups<I, S>(&self, build_id: &str, group_ids: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = RelationshipRequest::linking("betaGroups", group_ids);
        self.client
            .delete_with_body(&format!("v1/builds/{}/relationships/betaGroups", build_id), &body)
            .await
    }
}

impl Resource for Builds {
    fn client(&self) -> &Client {
        &self.client
    }
}
