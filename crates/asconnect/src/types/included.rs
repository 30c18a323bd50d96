//! Side-loaded resources from a document's `included` member

use super::apps::{App, AppStoreVersion};
use super::builds::{Build, PreReleaseVersion};
use super::provisioning::{BundleId, Certificate, Device, Profile};
use super::submission::AppStoreVersionSubmission;
use super::testflight::{BetaGroup, BetaTester};
use super::users::{User, UserInvitation};
use serde::Deserialize;

/// A resource returned through `include=...`, discriminated by its `type`.
///
/// Types this client does not model decode as [`Included::Unknown`] so a
/// new server-side resource never breaks decoding of the primary data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Included {
    /// `apps`
    #[serde(rename = "apps")]
    App(App),
    /// `appStoreVersions`
    #[serde(rename = "appStoreVersions")]
    AppStoreVersion(AppStoreVersion),
    /// `appStoreVersionSubmissions`
    #[serde(rename = "appStoreVersionSubmissions")]
    AppStoreVersionSubmission(AppStoreVersionSubmission),
    /// `builds`
    #[serde(rename = "builds")]
    Build(Build),
    /// `preReleaseVersions`
    #[serde(rename = "preReleaseVersions")]
    PreReleaseVersion(PreReleaseVersion),
    /// `bundleIds`
    #[serde(rename = "bundleIds")]
    BundleId(BundleId),
    /// `certificates`
    #[serde(rename = "certificates")]
    Certificate(Certificate),
    /// `devices`
    #[serde(rename = "devices")]
    Device(Device),
    /// `profiles`
    #[serde(rename = "profiles")]
    Profile(Profile),
    /// `betaGroups`
    #[serde(rename = "betaGroups")]
    BetaGroup(BetaGroup),
    /// `betaTesters`
    #[serde(rename = "betaTesters")]
    BetaTester(BetaTester),
    /// `users`
    #[serde(rename = "users")]
    User(User),
    /// `userInvitations`
    #[serde(rename = "userInvitations")]
    UserInvitation(UserInvitation),
    /// Any other resource type
    #[serde(other)]
    Unknown,
}

impl Included {
    /// JSON:API type name of a known variant.
    pub fn type_name(&self) -> Option<&'static str> {
        Some(match self {
            Included::App(_) => "apps",
            Included::AppStoreVersion(_) => "appStoreVersions",
            Included::AppStoreVersionSubmission(_) => "appStoreVersionSubmissions",
            Included::Build(_) => "builds",
            Included::PreReleaseVersion(_) => "preReleaseVersions",
            Included::BundleId(_) => "bundleIds",
            Included::Certificate(_) => "certificates",
            Included::Device(_) => "devices",
            Included::Profile(_) => "profiles",
            Included::BetaGroup(_) => "betaGroups",
            Included::BetaTester(_) => "betaTesters",
            Included::User(_) => "users",
            Included::UserInvitation(_) => "userInvitations",
            Included::Unknown => return None,
        })
    }

    /// Id of a known variant.
    pub fn id(&self) -> Option<&str> {
        let id = match self {
            Included::App(r) => &r.id,
            Included::AppStoreVersion(r) => &r.id,
            Included::AppStoreVersionSubmission(r) => &r.id,
            Included::Build(r) => &r.id,
            Included::PreReleaseVersion(r) => &r.id,
            Included::BundleId(r) => &r.id,
            Included::Certificate(r) => &r.id,
            Included::Device(r) => &r.id,
            Included::Profile(r) => &r.id,
            Included::BetaGroup(r) => &r.id,
            Included::BetaTester(r) => &r.id,
            Included::User(r) => &r.id,
            Included::UserInvitation(r) => &r.id,
            Included::Unknown => return None,
        };
        Some(id)
    }

    /// Whether this is the resource a linkage points at.
    pub fn matches(&self, linkage: &super::Linkage) -> bool {
        self.type_name() == Some(linkage.kind.as_str()) && self.id() == Some(linkage.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppResponse, Linkage};
    use assert_matches::assert_matches;

    #[test]
    fn test_included_variants() {
        let included: Vec<Included> = serde_json::from_str(
            r#"[
                {"type": "builds", "id": "b1", "attributes": {"version": "7"}},
                {"type": "betaGroups", "id": "g1", "attributes": {"name": "QA"}},
                {"type": "appEncryptionDeclarations", "id": "e1", "attributes": {"exempt": true}}
            ]"#,
        )
        .unwrap();

        assert_matches!(&included[0], Included::Build(b) if b.id == "b1");
        assert_matches!(&included[1], Included::BetaGroup(g) if g.attributes.as_ref().unwrap().name.as_deref() == Some("QA"));
        assert_matches!(included[2], Included::Unknown);
        assert_eq!(included[2].id(), None);
    }

    #[test]
    fn test_matches_linkage() {
        let response: AppResponse = serde_json::from_str(
            r#"{
                "data": {
                    "type": "apps",
                    "id": "a1",
                    "relationships": {"builds": {"data": [{"type": "builds", "id": "b1"}]}}
                },
                "included": [{"type": "builds", "id": "b1"}],
                "links": {"self": "https://api.appstoreconnect.apple.com/v1/apps/a1"}
            }"#,
        )
        .unwrap();

        let linkage = Linkage::new("builds", "b1");
        assert!(response.included[0].matches(&linkage));
        assert!(!response.included[0].matches(&Linkage::new("apps", "b1")));
    }
}
