//! Apps endpoints

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::RawResponse,
    types::{
        AppResponse, AppStoreVersionsResponse, AppUpdateAttributes, AppUpdateRequest,
        AppsResponse, BuildsResponse, GetAppQuery, ListAppStoreVersionsQuery, ListAppsQuery,
        ListBuildsForAppQuery,
    },
};
use http::Method;

/// Apps resource.
///
/// Apps are created in the App Store Connect web UI; the API can read and
/// update them.
#[derive(Debug, Clone)]
pub struct Apps {
    client: Client,
}

impl Apps {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /v1/apps`
    pub async fn list(&self, query: &ListAppsQuery) -> Result<AppsResponse> {
        self.client.get_with_query("v1/apps", query).await
    }

    /// `GET /v1/apps/{id}`
    pub async fn get(&self, id: &str, query: &GetAppQuery) -> Result<AppResponse> {
        self.client
            .get_with_query(&format!("v1/apps/{}", id), query)
            .await
    }

    /// `PATCH /v1/apps/{id}`
    ///
    /// Only the attributes set to `Some` are sent.
    pub async fn update(&self, id: &str, attributes: AppUpdateAttributes) -> Result<AppResponse> {
        let body = AppUpdateRequest::update("apps", id, attributes);
        self.client.patch(&format!("v1/apps/{}", id), &body).await
    }

    /// `GET /v1/apps/{id}/builds`
    pub async fn list_builds(
        &self,
        app_id: &str,
        query: &ListBuildsForAppQuery,
    ) -> Result<BuildsResponse> {
        self.client
            .get_with_query(&format!("v1/apps/{}/builds", app_id), query)
            .await
    }

    /// `GET /v1/apps/{id}/appStoreVersions`
    pub async fn list_app_store_versions(
        &self,
        app_id: &str,
        query: &ListAppStoreVersionsQuery,
    ) -> Result<AppStoreVersionsResponse> {
        self.client
            .get_with_query(&format!("v1/apps/{}/appStoreVersions", app_id), query)
            .await
    }

    /// Return responses together with their HTTP metadata.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use asconnect::{Client, types::ListAppsQuery};
    /// # async fn example(client: Client) -> asconnect::Result<()> {
    /// let raw = client.apps().with_raw_response().list(&ListAppsQuery::new()).await?;
    /// if let Some(limit) = raw.meta().rate_limit() {
    ///     println!("{} of {} requests left this hour", limit.remaining, limit.limit);
    /// }
    /// println!("{} apps", raw.parsed().data.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_raw_response(&self) -> AppsRaw {
        AppsRaw {
            client: self.client.clone(),
        }
    }
}

impl Resource for Apps {
    fn client(&self) -> &Client {
        &self.client
    }
}

/// Apps resource in raw response mode.
///
/// Same methods as [`Apps`], returning [`RawResponse`] so headers such as
/// `x-rate-limit` stay reachable.
#[derive(Debug, Clone)]
pub struct AppsRaw {
    client: Client,
}

impl AppsRaw {
    /// `GET /v1/apps` with response metadata.
    pub async fn list(&self, query: &ListAppsQuery) -> Result<RawResponse<AppsResponse>> {
        let request = self.client.request(Method::GET, "v1/apps")?.query(query)?;
        self.client.execute(request).await
    }

    /// `GET /v1/apps/{id}` with response metadata.
    pub async fn get(&self, id: &str, query: &GetAppQuery) -> Result<RawResponse<AppResponse>> {
        let request = self
            .client
            .request(Method::GET, &format!("v1/apps/{}", id))?
            .query(query)?;
        self.client.execute(request).await
    }
}
