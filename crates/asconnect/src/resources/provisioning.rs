//! Provisioning endpoints: bundle IDs, certificates, devices and profiles

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    types::{
        BundleIdCreateRequest, BundleIdResponse, BundleIdsResponse, CertificateResponse,
        CertificatesResponse, DeviceCreateRequest, DeviceResponse, DeviceUpdateAttributes,
        DeviceUpdateRequest, DevicesResponse, GetBundleIdQuery, GetProfileQuery,
        ListBundleIdsQuery, ListCertificatesQuery, ListDevicesQuery, ListProfilesQuery,
        ProfileCreateRequest, ProfileResponse, ProfilesResponse,
    },
};

/// Provisioning resource.
///
/// Groups the four code-signing resources, which are almost always used
/// together when setting up signing for an app.
#[derive(Debug, Clone)]
pub struct Provisioning {
    client: Client,
}

impl Provisioning {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /v1/bundleIds`
    pub async fn list_bundle_ids(&self, query: &ListBundleIdsQuery) -> Result<BundleIdsResponse> {
        self.client.get_with_query("v1/bundleIds", query).await
    }

    /// `GET /v1/bundleIds/{id}`
    pub async fn get_bundle_id(
        &self,
        id: &str,
        query: &GetBundleIdQuery,
    ) -> Result<BundleIdResponse> {
        self.client
            .get_with_query(&format!("v1/bundleIds/{}", id), query)
            .await
    }

    /// `POST /v1/bundleIds`
    pub async fn create_bundle_id(&self, body: &BundleIdCreateRequest) -> Result<BundleIdResponse> {
        self.client.post("v1/bundleIds", body).await
    }

    /// `DELETE /v1/bundleIds/{id}`
    pub async fn delete_bundle_id(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("v1/bundleIds/{}", id)).await
    }

    /// `GET /v1/certificates`
    pub async fn list_certificates(
        &self,
        query: &ListCertificatesQuery,
    ) -> Result<CertificatesResponse> {
        self.client.get_with_query("v1/certificates", query).await
    }

    /// `GET /v1/certificates/{id}`
    pub async fn get_certificate(&self, id: &str) -> Result<CertificateResponse> {
        self.client.get(&format!("v1/certificates/{}", id)).await
    }

    /// `DELETE /v1/certificates/{id}`
    ///
    /// Revocation is permanent; profiles using the certificate become invalid.
    pub async fn revoke_certificate(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("v1/certificates/{}", id)).await
    }

    /// `GET /v1/devices`
    pub async fn list_devices(&self, query: &ListDevicesQuery) -> Result<DevicesResponse> {
        self.client.get_with_query("v1/devices", query).await
    }

    /// `POST /v1/devices`
    pub async fn register_device(&self, body: &DeviceCreateRequest) -> Result<DeviceResponse> {
        self.client.post("v1/devices", body).await
    }

    /// `PATCH /v1/devices/{id}`
    ///
    /// Devices cannot be deleted; disable them with
    /// `status: Some(DeviceStatus::Disabled)` instead.
    pub async fn update_device(
        &self,
        id: &str,
        attributes: DeviceUpdateAttributes,
    ) -> Result<DeviceResponse> {
        let body = DeviceUpdateRequest::update("devices", id, attributes);
        self.client.patch(&format!("v1/devices/{}", id), &body).await
    }

    /// `GET /v1/profiles`
    pub async fn list_profiles(&self, query: &ListProfilesQuery) -> Result<ProfilesResponse> {
        self.client.get_with_query("v1/profiles", query).await
    }

    /// `GET /v1/profiles/{id}`
    pub async fn get_profile(&self, id: &str, query: &GetProfileQuery) -> Result<ProfileResponse> {
        self.client
            .get_with_query(&format!("v1/profiles/{}", id), query)
            .await
    }

    /// `POST /v1/profiles`
    pub async fn create_profile(&self, body: &ProfileCreateRequest) -> Result<ProfileResponse> {
        self.client.post("v1/profiles", body).await
    }

    /// `DELETE /v1/profiles/{id}`
    pub async fn delete_profile(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("v1/profiles/{}", id)).await
    }
}

impl Resource for Provisioning {
    fn client(&self) -> &Client {
        &self.client
    }
}
