//! TestFlight endpoints: beta groups and beta testers

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    types::{
        BetaGroupCreateRequest, BetaGroupResponse, BetaGroupUpdateAttributes,
        BetaGroupUpdateRequest, BetaGroupsResponse, BetaTesterCreateRequest, BetaTesterResponse,
        BetaTestersResponse, GetBetaGroupQuery, GetBetaTesterQuery, ListBetaGroupsQuery,
        ListBetaTestersQuery, RelationshipRequest,
    },
};

/// TestFlight resource.
#[derive(Debug, Clone)]
pub struct TestFlight {
    client: Client,
}

impl TestFlight {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /v1/betaGroups`
    pub async fn list_beta_groups(&self, query: &ListBetaGroupsQuery) -> Result<BetaGroupsResponse> {
        self.client.get_with_query("v1/betaGroups", query).await
    }

    /// `GET /v1/betaGroups/{id}`
    pub async fn get_beta_group(
        &self,
        id: &str,
        query: &GetBetaGroupQuery,
    ) -> Result<BetaGroupResponse> {
        self.client
            .get_with_query(&format!("v1/betaGroups/{}", id), query)
            .await
    }

    /// `POST /v1/betaGroups`
    pub async fn create_beta_group(
        &self,
        body: &BetaGroupCreateRequest,
    ) -> Result<BetaGroupResponse> {
        self.client.post("v1/betaGroups", body).await
    }

    /// `PATCH /v1/betaGroups/{id}`
    pub async fn update_beta_group(
        &self,
        id: &str,
        attributes: BetaGroupUpdateAttributes,
    ) -> Result<BetaGroupResponse> {
        let body = BetaGroupUpdateRequest::update("betaGroups", id, attributes);
        self.client
            .patch(&format!("v1/betaGroups/{}", id), &body)
            .await
    }

    /// `DELETE /v1/betaGroups/{id}`
    pub async fn delete_beta_group(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("v1/betaGroups/{}", id)).await
    }

    /// `POST /v1/betaGroups/{id}/relationships/betaTesters`
    pub async fn add_beta_testers<I, S>(&self, group_id: &str, tester_ids: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = RelationshipRequest::linking("betaTesters", tester_ids);
        self.client
            .post_empty(
                &format!("v1/betaGroups/{}/relationships/betaTesters", group_id),
                &body,
            )
            .await
    }

    /// `DELETE /v1/betaGroups/{id}/relationships/betaTesters`
    pub async fn remove_beta_testers<I, S>(&self, group_id: &str, tester_ids: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = RelationshipRequest::linking("betaTesters", tester_ids);
        self.client
            .delete_with_body(
                &format!("v1/betaGroups/{}/relationships/betaTesters", group_id),
                &body,
            )
            .await
    }

    /// `GET /v1/betaTesters`
    pub async fn list_beta_testers(
        &self,
        query: &ListBetaTestersQuery,
    ) -> Result<BetaTestersResponse> {
        self.client.get_with_query("v1/betaTesters", query).await
    }

    /// `GET /v1/betaTesters/{id}`
    pub async fn get_beta_tester(
        &self,
        id: &str,
        query: &GetBetaTesterQuery,
    ) -> Result<BetaTesterResponse> {
        self.client
            .get_with_query(&format!("v1/betaTesters/{}", id), query)
            .await
    }

    /// `POST /v1/betaTesters`
    ///
    /// Creates the tester and sends the TestFlight invitation email.
    pub async fn create_beta_tester(
        &self,
        body: &BetaTesterCreateRequest,
    ) -> Result<BetaTesterResponse> {
        self.client.post("v1/betaTesters", body).await
    }

    /// `DELETE /v1/betaTesters/{id}`
    ///
    /// Removes the tester from every group and app.
    pub async fn delete_beta_tester(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("v1/betaTesters/{}", id)).await
    }
}

impl Resource for TestFlight {
    fn client(&self) -> &Client {
        &self.client
    }
}
