//! Bundle IDs, certificates, devices and provisioning profiles

use super::common::{
    DataResponse, ListResponse, NewResource, Platform, Relationship, RelationshipLink,
    RelationshipRequest, RequestBody, ResourceObject, ResourceUpdate,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered bundle identifier.
pub type BundleId = ResourceObject<BundleIdAttributes, BundleIdRelationships>;

/// `GET /v1/bundleIds/{id}` response.
pub type BundleIdResponse = DataResponse<BundleId>;

/// `GET /v1/bundleIds` response.
pub type BundleIdsResponse = ListResponse<BundleId>;

/// Attributes of a bundle ID.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleIdAttributes {
    /// Display name
    pub name: Option<String>,
    /// Platform
    pub platform: Option<Platform>,
    /// Reverse-DNS identifier, e.g. `com.example.demo`
    pub identifier: Option<String>,
    /// Team seed (app ID prefix)
    pub seed_id: Option<String>,
}

/// Relationships of a bundle ID.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleIdRelationships {
    /// Profiles issued for this bundle ID
    pub profiles: Option<Relationship>,
    /// Enabled capabilities
    pub bundle_id_capabilities: Option<Relationship>,
    /// App using this bundle ID
    pub app: Option<Relationship>,
}

/// Attributes of a new bundle ID.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleIdCreateAttributes {
    /// Display name
    pub name: String,
    /// Platform
    pub platform: Platform,
    /// Reverse-DNS identifier
    pub identifier: String,
    /// Team seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_id: Option<String>,
}

/// `POST /v1/bundleIds` body.
pub type BundleIdCreateRequest = RequestBody<NewResource<BundleIdCreateAttributes>>;

impl BundleIdCreateRequest {
    /// Register `identifier` under `name` for `platform`.
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        platform: Platform,
    ) -> Self {
        Self::create(
            "bundleIds",
            Some(BundleIdCreateAttributes {
                name: name.into(),
                platform,
                identifier: identifier.into(),
                seed_id: None,
            }),
            None,
        )
    }
}

/// Query for `GET /v1/bundleIds`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListBundleIdsQuery {
    /// Attributes to return for bundle IDs
    #[serde(rename = "fields[bundleIds]")]
    pub fields_bundle_ids: Option<Vec<String>>,
    /// Filter by identifier
    #[serde(rename = "filter[identifier]")]
    pub filter_identifier: Option<Vec<String>>,
    /// Filter by name
    #[serde(rename = "filter[name]")]
    pub filter_name: Option<Vec<String>>,
    /// Filter by platform
    #[serde(rename = "filter[platform]")]
    pub filter_platform: Option<Vec<Platform>>,
    /// Filter by seed id
    #[serde(rename = "filter[seedId]")]
    pub filter_seed_id: Option<Vec<String>>,
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

/// Query for `GET /v1/bundleIds/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetBundleIdQuery {
    /// Attributes to return for the bundle ID
    #[serde(rename = "fields[bundleIds]")]
    pub fields_bundle_ids: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
}

/// A signing certificate.
pub type Certificate = ResourceObject<CertificateAttributes>;

/// `GET /v1/certificates/{id}` response.
pub type CertificateResponse = DataResponse<Certificate>;

/// `GET /v1/certificates` response.
pub type CertificatesResponse = ListResponse<Certificate>;

/// Attributes of a certificate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAttributes {
    /// Common name
    pub name: Option<String>,
    /// Kind of certificate
    pub certificate_type: Option<CertificateType>,
    /// Display name
    pub display_name: Option<String>,
    /// Serial number
    pub serial_number: Option<String>,
    /// Platform
    pub platform: Option<Platform>,
    /// Expiry
    pub expiration_date: Option<DateTime<Utc>>,
    /// Base64-encoded DER certificate
    pub certificate_content: Option<String>,
}

/// Kind of signing certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateType {
    /// Apple Development
    Development,
    /// Apple Distribution
    Distribution,
    /// iOS development (legacy)
    IosDevelopment,
    /// iOS distribution (legacy)
    IosDistribution,
    /// Mac App Store distribution
    MacAppDistribution,
    /// Mac installer distribution
    MacInstallerDistribution,
    /// Mac development (legacy)
    MacAppDevelopment,
    /// Developer ID kernel extension
    DeveloperIdKext,
    /// Developer ID application
    DeveloperIdApplication,
    /// Pass Type ID
    PassTypeId,
    /// Pass Type ID with NFC
    PassTypeIdWithNfc,
    /// A type this client does not know yet
    #[serde(other)]
    Unknown,
}

/// Query for `GET /v1/certificates`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListCertificatesQuery {
    /// Attributes to return for certificates
    #[serde(rename = "fields[certificates]")]
    pub fields_certificates: Option<Vec<String>>,
    /// Filter by type
    #[serde(rename = "filter[certificateType]")]
    pub filter_certificate_type: Option<Vec<CertificateType>>,
    /// Filter by display name
    #[serde(rename = "filter[displayName]")]
    pub filter_display_name: Option<Vec<String>>,
    /// Filter by serial number
    #[serde(rename = "filter[serialNumber]")]
    pub filter_serial_number: Option<Vec<String>>,
    /// Filter by id
    #[serde(rename = "filter[id]")]
    pub filter_id: Option<Vec<String>>,
    /// Sort order
    pub sort: Option<Vec<String>>,
    /// Page size
    pub limit: Option<u32>,
    /// Continuation cursor
    pub cursor: Option<String>,
}

/// A registered test device.
pub type Device = ResourceObject<DeviceAttributes>;

/// `GET /v1/devices/{id}` response.
pub type DeviceResponse = DataResponse<Device>;

/// `GET /v1/devices` response.
pub type DevicesResponse = ListResponse<Device>;

/// Attributes of a device.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAttributes {
    /// Display name
    pub name: Option<String>,
    /// Platform
    pub platform: Option<Platform>,
    /// Unique device identifier
    pub udid: Option<String>,
    /// Hardware class, e.g. `IPHONE`
    pub device_class: Option<String>,
    /// Whether the device can be used for provisioning
    pub status: Option<DeviceStatus>,
    /// Model name
    pub model: Option<String>,
    /// Registration time
    pub added_date: Option<DateTime<Utc>>,
}

/// Whether a device can be used for provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    /// Usable
    Enabled,
    /// Disabled; still counts against the yearly limit
    Disabled,
}

/// Attributes of a device to register.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCreateAttributes {
    /// Display name
    pub name: String,
    /// Platform
    pub platform: Platform,
    /// Unique device identifier
    pub udid: String,
}

/// `POST /v1/devices` body.
pub type DeviceCreateRequest = RequestBody<NewResource<DeviceCreateAttributes>>;

impl DeviceCreateRequest {
    /// Register a device.
    pub fn new(name: impl Into<String>, udid: impl Into<String>, platform: Platform) -> Self {
        Self::create(
            "devices",
            Some(DeviceCreateAttributes {
                name: name.into(),
                platform,
                udid: udid.into(),
            }),
            None,
        )
    }
}

/// Attributes that can be changed on a device.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdateAttributes {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Enable or disable the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
}

/// `PATCH /v1/devices/{id}` body.
pub type DeviceUpdateRequest = RequestBody<ResourceUpdate<DeviceUpdateAttributes>>;

/// Query for `GET /v1/devices`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListDevicesQuery {
    /// Attributes to return for devices
    #[serde(rename = "fields[devices]")]
    pub fields_devices: Option<Vec<String>>,
    /// Filter by name
    #[serde(rename = "filter[name]")]
    pub filter_name: Option<Vec<String>>,
    /// Filter by platform
    #[serde(rename = "filter[platform]")]
    pub filter_platform: Option<Vec<Platform>>,
    /// Filter by status
    #[serde(rename = "filter[status]")]
    pub filter_status: Option<DeviceStatus>,
    /// Filter by UDID
    #[serde(rename = "filter[udid]")]
    pub filter_udid: Option<Vec<String>>,
    /// Filter by id
    #[serde(rename = "filter[id]")]
    pub filter_id: Option<Vec<String>>,
    /// Sort order
    pub sort: Option<Vec<String>>,
    /// Page size
    pub limit: Option<u32>,
    /// Continuation cursor
    pub cursor: Option<String>,
}

/// A provisioning profile.
pub type Profile = ResourceObject<ProfileAttributes, ProfileRelationships>;

/// `GET /v1/profiles/{id}` response.
pub type ProfileResponse = DataResponse<Profile>;

/// `GET /v1/profiles` response.
pub type ProfilesResponse = ListResponse<Profile>;

/// Attributes of a profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAttributes {
    /// Display name
    pub name: Option<String>,
    /// Platform
    pub platform: Option<Platform>,
    /// Kind of profile, e.g. `IOS_APP_STORE`
    pub profile_type: Option<String>,
    /// Whether the profile is still usable
    pub profile_state: Option<ProfileState>,
    /// Base64-encoded `.mobileprovision` payload
    pub profile_content: Option<String>,
    /// Profile UUID
    pub uuid: Option<String>,
    /// Creation time
    pub created_date: Option<DateTime<Utc>>,
    /// Expiry
    pub expiration_date: Option<DateTime<Utc>>,
}

/// Relationships of a profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRelationships {
    /// Bundle ID the profile is for
    pub bundle_id: Option<Relationship>,
    /// Devices in the profile
    pub devices: Option<Relationship>,
    /// Certificates in the profile
    pub certificates: Option<Relationship>,
}

/// Whether a profile is still usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileState {
    /// Usable
    Active,
    /// Invalidated, e.g. by a revoked certificate
    Invalid,
}

impl Profile {
    /// The profile payload decoded from base64, ready to be written as a
    /// `.mobileprovision` file. `Ok(None)` if the content was not returned.
    pub fn decoded_content(&self) -> Result<Option<Vec<u8>>, base64::DecodeError> {
        decode_base64(
            self.attributes
                .as_ref()
                .and_then(|a| a.profile_content.as_deref()),
        )
    }
}

impl Certificate {
    /// The DER certificate decoded from base64. `Ok(None)` if the content
    /// was not returned.
    pub fn decoded_content(&self) -> Result<Option<Vec<u8>>, base64::DecodeError> {
        decode_base64(
            self.attributes
                .as_ref()
                .and_then(|a| a.certificate_content.as_deref()),
        )
    }
}

fn decode_base64(content: Option<&str>) -> Result<Option<Vec<u8>>, base64::DecodeError> {
    content.map(|c| STANDARD.decode(c.trim())).transpose()
}

/// Attributes of a new profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCreateAttributes {
    /// Display name
    pub name: String,
    /// Kind of profile, e.g. `IOS_APP_DEVELOPMENT`
    pub profile_type: String,
}

/// Relationships of a new profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCreateRelationships {
    /// Bundle ID the profile is for
    pub bundle_id: RelationshipLink,
    /// Certificates to include
    pub certificates: RelationshipRequest,
    /// Devices to include; required for development and ad hoc profiles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<RelationshipRequest>,
}

/// `POST /v1/profiles` body.
pub type ProfileCreateRequest =
    RequestBody<NewResource<ProfileCreateAttributes, ProfileCreateRelationships>>;

impl ProfileCreateRequest {
    /// A profile for `bundle_id` signed with `certificate_ids`.
    pub fn new<I, S>(
        name: impl Into<String>,
        profile_type: impl Into<String>,
        bundle_id: impl Into<String>,
        certificate_ids: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::create(
            "profiles",
            Some(ProfileCreateAttributes {
                name: name.into(),
                profile_type: profile_type.into(),
            }),
            Some(ProfileCreateRelationships {
                bundle_id: RelationshipLink::to("bundleIds", bundle_id),
                certificates: RelationshipRequest::linking("certificates", certificate_ids),
                devices: None,
            }),
        )
    }

    /// Restrict the profile to these devices.
    pub fn devices<I, S>(mut self, device_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(relationships) = self.data.relationships.as_mut() {
            relationships.devices = Some(RelationshipRequest::linking("devices", device_ids));
        }
        self
    }
}

/// Query for `GET /v1/profiles`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListProfilesQuery {
    /// Attributes to return for profiles
    #[serde(rename = "fields[profiles]")]
    pub fields_profiles: Option<Vec<String>>,
    /// Filter by name
    #[serde(rename = "filter[name]")]
    pub filter_name: Option<Vec<String>>,
    /// Filter by profile type
    #[serde(rename = "filter[profileType]")]
    pub filter_profile_type: Option<Vec<String>>,
    /// Filter by state
    #[serde(rename = "filter[profileState]")]
    pub filter_profile_state: Option<ProfileState>,
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

/// Query for `GET /v1/profiles/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetProfileQuery {
    /// Attributes to return for the profile
    #[serde(rename = "fields[profiles]")]
    pub fields_profiles: Option<Vec<String>>,
    /// Related resources to include
    pub include: Option<Vec<String>>,
}
