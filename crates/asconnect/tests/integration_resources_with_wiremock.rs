//! Integration tests for the resource modules using wiremock
//!
//! Each test pins the method, path and JSON body a resource call produces
//! and checks the decoded result.

mod common;

use asconnect::types::{
    AppUpdateAttributes, BetaGroupCreateRequest, BetaTesterCreateRequest, BuildUpdateAttributes,
    BundleIdCreateRequest, DeviceStatus, DeviceUpdateAttributes, GetProfileQuery,
    ListBetaGroupsQuery, ListBuildsQuery, Platform, ProfileCreateRequest, ProfileState,
    UserInvitationCreateRequest, UserRole, UserUpdateAttributes,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn single(kind: &str, id: &str, attributes: serde_json::Value) -> serde_json::Value {
    json!({
        "data": {"type": kind, "id": id, "attributes": attributes},
        "links": {"self": format!("https://api.appstoreconnect.apple.com/v1/{}/{}", kind, id)}
    })
}

fn empty_page(kind: &str) -> serde_json::Value {
    json!({
        "data": [],
        "links": {"self": format!("https://api.appstoreconnect.apple.com/v1/{}", kind)}
    })
}

// ===== Apps =====

#[tokio::test]
async fn test_update_app_sends_only_set_attributes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/apps/A1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "data": {"type": "apps", "id": "A1", "attributes": {"primaryLocale": "de-DE"}}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(single("apps", "A1", json!({"primaryLocale": "de-DE"}))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let app = client
        .apps()
        .update(
            "A1",
            AppUpdateAttributes {
                primary_locale: Some("de-DE".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        app.data.attributes.unwrap().primary_locale.as_deref(),
        Some("de-DE")
    );
    mock_server.verify().await;
}

#[tokio::test]
async fn test_list_builds_for_app() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apps/A1/builds"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page("builds")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let query = asconnect::types::ListBuildsForAppQuery {
        limit: Some(10),
        ..Default::default()
    };
    let page = client.apps().list_builds("A1", &query).await.unwrap();

    assert!(page.data.is_empty());
    assert!(!page.has_next_page());
    mock_server.verify().await;
}

// ===== Builds =====

#[tokio::test]
async fn test_list_builds_with_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/builds"))
        .and(query_param("filter[app]", "A1"))
        .and(query_param("sort", "-uploadedDate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page("builds")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let query = ListBuildsQuery {
        sort: Some(vec!["-uploadedDate".to_string()]),
        ..ListBuildsQuery::new().app("A1")
    };
    client.builds().list(&query).await.unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_expire_build() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/builds/B1"))
        .and(body_json(json!({
            "data": {"type": "builds", "id": "B1", "attributes": {"expired": true}}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(single("builds", "B1", json!({"expired": true}))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let build = client
        .builds()
        .update(
            "B1",
            BuildUpdateAttributes {
                expired: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(build.data.attributes.unwrap().expired, Some(true));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_build_beta_group_relationship() {
    let mock_server = MockServer::start().await;
    let linkage = json!({"data": [
        {"type": "betaGroups", "id": "G1"},
        {"type": "betaGroups", "id": "G2"}
    ]});

    Mock::given(method("POST"))
        .and(path("/v1/builds/B1/relationships/betaGroups"))
        .and(body_json(linkage.clone()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/builds/B1/relationships/betaGroups"))
        .and(body_json(linkage))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    client.builds().add_beta_groups("B1", ["G1", "G2"]).await.unwrap();
    client
        .builds()
        .remove_beta_groups("B1", vec!["G1".to_string(), "G2".to_string()])
        .await
        .unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_get_app_of_build() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/builds/B1/app"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(single("apps", "A1", json!({"name": "Demo"}))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let app = client.builds().get_app("B1").await.unwrap();

    assert_eq!(app.data.id, "A1");
    mock_server.verify().await;
}

// ===== Provisioning =====

#[tokio::test]
async fn test_create_bundle_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/bundleIds"))
        .and(body_json(json!({
            "data": {
                "type": "bundleIds",
                "attributes": {
                    "name": "Demo",
                    "platform": "IOS",
                    "identifier": "com.example.demo"
                }
            }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_string(common::load_response_fixture("bundle_id")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let body = BundleIdCreateRequest::new("Demo", "com.example.demo", Platform::Ios);
    let created = client.provisioning().create_bundle_id(&body).await.unwrap();

    let attributes = created.data.attributes.unwrap();
    assert_eq!(created.data.id, "B7X9");
    assert_eq!(attributes.seed_id.as_deref(), Some("TEAM123"));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_get_profile_and_decode_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/profiles/P-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(common::load_response_fixture("profile")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let profile = client
        .provisioning()
        .get_profile("P-1", &GetProfileQuery::default())
        .await
        .unwrap();

    assert_eq!(
        profile.data.attributes.as_ref().unwrap().profile_state,
        Some(ProfileState::Active)
    );
    assert_eq!(
        profile.data.decoded_content().unwrap().as_deref(),
        Some(&b"hello profile"[..])
    );
    mock_server.verify().await;
}

#[tokio::test]
async fn test_create_profile_links_certificates_and_devices() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/profiles"))
        .and(body_json(json!({
            "data": {
                "type": "profiles",
                "attributes": {"name": "CI Development", "profileType": "IOS_APP_DEVELOPMENT"},
                "relationships": {
                    "bundleId": {"data": {"type": "bundleIds", "id": "B7X9"}},
                    "certificates": {"data": [{"type": "certificates", "id": "C1"}]},
                    "devices": {"data": [{"type": "devices", "id": "D1"}, {"type": "devices", "id": "D2"}]}
                }
            }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_string(common::load_response_fixture("profile")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let body = ProfileCreateRequest::new("CI Development", "IOS_APP_DEVELOPMENT", "B7X9", ["C1"])
        .devices(["D1", "D2"]);
    let profile = client.provisioning().create_profile(&body).await.unwrap();

    assert_eq!(profile.data.id, "P-1");
    mock_server.verify().await;
}

#[tokio::test]
async fn test_disable_device() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/devices/D1"))
        .and(body_json(json!({
            "data": {"type": "devices", "id": "D1", "attributes": {"status": "DISABLED"}}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(single("devices", "D1", json!({"status": "DISABLED"}))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let device = client
        .provisioning()
        .update_device(
            "D1",
            DeviceUpdateAttributes {
                status: Some(DeviceStatus::Disabled),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        device.data.attributes.unwrap().status,
        Some(DeviceStatus::Disabled)
    );
    mock_server.verify().await;
}

#[tokio::test]
async fn test_revoke_certificate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/certificates/C1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    client.provisioning().revoke_certificate("C1").await.unwrap();

    mock_server.verify().await;
}

// ===== Submission =====

#[tokio::test]
async fn test_submit_version_for_review() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/appStoreVersionSubmissions"))
        .and(body_json(json!({
            "data": {
                "type": "appStoreVersionSubmissions",
                "relationships": {
                    "appStoreVersion": {"data": {"type": "appStoreVersions", "id": "v-1"}}
                }
            }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_string(common::load_response_fixture("submission")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/appStoreVersions/v-1/appStoreVersionSubmission"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(common::load_response_fixture("submission")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/appStoreVersionSubmissions/sub-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let submissions = client.submissions();

    let created = submissions.create("v-1").await.unwrap();
    let fetched = submissions.get_for_version("v-1").await.unwrap();
    assert_eq!(created.data, fetched.data);

    submissions.delete(&created.data.id).await.unwrap();
    mock_server.verify().await;
}

// ===== TestFlight =====

#[tokio::test]
async fn test_create_beta_group_and_add_testers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/betaGroups"))
        .and(body_json(json!({
            "data": {
                "type": "betaGroups",
                "attributes": {"name": "QA"},
                "relationships": {"app": {"data": {"type": "apps", "id": "1234567890"}}}
            }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_string(common::load_response_fixture("beta_group")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/betaGroups/g-1/relationships/betaTesters"))
        .and(body_json(json!({"data": [{"type": "betaTesters", "id": "t-1"}]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let testflight = client.testflight();

    let group = testflight
        .create_beta_group(&BetaGroupCreateRequest::new("1234567890", "QA"))
        .await
        .unwrap();
    let attributes = group.data.attributes.as_ref().unwrap();
    assert_eq!(attributes.public_link_limit, Some(100));
    assert_eq!(
        attributes.created_date.unwrap().to_rfc3339(),
        "2024-04-10T08:30:00+00:00"
    );

    testflight
        .add_beta_testers(&group.data.id, ["t-1"])
        .await
        .unwrap();
    mock_server.verify().await;
}

#[tokio::test]
async fn test_list_beta_groups_for_app() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/betaGroups"))
        .and(query_param("filter[app]", "A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page("betaGroups")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    client
        .testflight()
        .list_beta_groups(&ListBetaGroupsQuery::new().app("A1"))
        .await
        .unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_invite_and_remove_beta_tester() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/betaTesters"))
        .and(body_json(json!({
            "data": {
                "type": "betaTesters",
                "attributes": {"email": "qa@example.com"},
                "relationships": {"betaGroups": {"data": [{"type": "betaGroups", "id": "g-1"}]}}
            }
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(single("betaTesters", "t-1", json!({"email": "qa@example.com", "inviteType": "EMAIL"}))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/betaTesters/t-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let tester = client
        .testflight()
        .create_beta_tester(&BetaTesterCreateRequest::new("qa@example.com", ["g-1"]))
        .await
        .unwrap();
    client
        .testflight()
        .delete_beta_tester(&tester.data.id)
        .await
        .unwrap();

    mock_server.verify().await;
}

// ===== Users =====

#[tokio::test]
async fn test_update_user_roles() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/users/u-1"))
        .and(body_json(json!({
            "data": {
                "type": "users",
                "id": "u-1",
                "attributes": {"roles": ["DEVELOPER", "APP_MANAGER"]}
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(common::load_response_fixture("user")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let user = client
        .users()
        .update(
            "u-1",
            UserUpdateAttributes {
                roles: Some(vec![UserRole::Developer, UserRole::AppManager]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        user.data.attributes.unwrap().roles,
        Some(vec![UserRole::Developer, UserRole::AppManager])
    );
    mock_server.verify().await;
}

#[tokio::test]
async fn test_invite_and_cancel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/userInvitations"))
        .respond_with(ResponseTemplate::new(201).set_body_json(single(
            "userInvitations",
            "inv-1",
            json!({
                "email": "new@example.com",
                "roles": ["FINANCE"],
                "expirationDate": "2024-06-01T00:00:00Z"
            }),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/userInvitations/inv-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let body =
        UserInvitationCreateRequest::new("new@example.com", "New", "Person", vec![UserRole::Finance]);
    let invitation = client.users().invite(&body).await.unwrap();
    assert!(
        invitation
            .data
            .attributes
            .as_ref()
            .unwrap()
            .expiration_date
            .is_some()
    );

    client
        .users()
        .cancel_invitation(&invitation.data.id)
        .await
        .unwrap();
    mock_server.verify().await;
}

// ===== Listing and reading =====

#[tokio::test]
async fn test_list_endpoints_hit_their_paths() {
    let mock_server = MockServer::start().await;

    for (route, kind) in [
        ("/v1/apps/A1/appStoreVersions", "appStoreVersions"),
        ("/v1/bundleIds", "bundleIds"),
        ("/v1/certificates", "certificates"),
        ("/v1/devices", "devices"),
        ("/v1/profiles", "profiles"),
        ("/v1/betaTesters", "betaTesters"),
        ("/v1/userInvitations", "userInvitations"),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(empty_page(kind)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = common::mock_client(&mock_server);
    let provisioning = client.provisioning();

    client
        .apps()
        .list_app_store_versions("A1", &Default::default())
        .await
        .unwrap();
    provisioning.list_bundle_ids(&Default::default()).await.unwrap();
    provisioning.list_certificates(&Default::default()).await.unwrap();
    provisioning.list_devices(&Default::default()).await.unwrap();
    provisioning.list_profiles(&Default::default()).await.unwrap();
    client
        .testflight()
        .list_beta_testers(&Default::default())
        .await
        .unwrap();
    client
        .users()
        .list_invitations(&Default::default())
        .await
        .unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_get_endpoints_decode_single_resources() {
    let mock_server = MockServer::start().await;

    let routes = [
        ("/v1/bundleIds/B7X9", single("bundleIds", "B7X9", json!({"identifier": "com.example.demo"}))),
        ("/v1/certificates/C1", single("certificates", "C1", json!({"certificateContent": "ZGVy"}))),
        ("/v1/betaGroups/g-1", single("betaGroups", "g-1", json!({"name": "QA"}))),
        ("/v1/betaTesters/t-1", single("betaTesters", "t-1", json!({"email": "qa@example.com"}))),
        ("/v1/userInvitations/inv-1", single("userInvitations", "inv-1", json!({"email": "new@example.com"}))),
    ];
    for (route, body) in routes {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = common::mock_client(&mock_server);

    let bundle_id = client
        .provisioning()
        .get_bundle_id("B7X9", &Default::default())
        .await
        .unwrap();
    assert_eq!(bundle_id.data.id, "B7X9");

    let certificate = client.provisioning().get_certificate("C1").await.unwrap();
    assert_eq!(
        certificate.data.decoded_content().unwrap().as_deref(),
        Some(&b"der"[..])
    );

    let group = client
        .testflight()
        .get_beta_group("g-1", &Default::default())
        .await
        .unwrap();
    assert_eq!(group.data.attributes.unwrap().name.as_deref(), Some("QA"));

    let tester = client
        .testflight()
        .get_beta_tester("t-1", &Default::default())
        .await
        .unwrap();
    assert_eq!(tester.data.id, "t-1");

    let invitation = client.users().get_invitation("inv-1").await.unwrap();
    assert_eq!(invitation.data.id, "inv-1");

    mock_server.verify().await;
}

// ===== Writes =====

#[tokio::test]
async fn test_register_device() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/devices"))
        .and(body_json(json!({
            "data": {
                "type": "devices",
                "attributes": {
                    "name": "QA iPhone",
                    "platform": "IOS",
                    "udid": "00008110-000A1B2C3D4E5F6A"
                }
            }
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(single("devices", "D9", json!({"status": "ENABLED"}))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let body = asconnect::types::DeviceCreateRequest::new(
        "QA iPhone",
        "00008110-000A1B2C3D4E5F6A",
        Platform::Ios,
    );
    let device = client.provisioning().register_device(&body).await.unwrap();

    assert_eq!(
        device.data.attributes.unwrap().status,
        Some(DeviceStatus::Enabled)
    );
    mock_server.verify().await;
}

#[tokio::test]
async fn test_update_beta_group_and_remove_testers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/betaGroups/g-1"))
        .and(body_json(json!({
            "data": {
                "type": "betaGroups",
                "id": "g-1",
                "attributes": {"publicLinkEnabled": false}
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(common::load_response_fixture("beta_group")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/betaGroups/g-1/relationships/betaTesters"))
        .and(body_json(json!({"data": [
            {"type": "betaTesters", "id": "t-1"},
            {"type": "betaTesters", "id": "t-2"}
        ]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let testflight = client.testflight();

    testflight
        .update_beta_group(
            "g-1",
            asconnect::types::BetaGroupUpdateAttributes {
                public_link_enabled: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    testflight
        .remove_beta_testers("g-1", ["t-1", "t-2"])
        .await
        .unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_deletes_send_no_body() {
    let mock_server = MockServer::start().await;

    for route in [
        "/v1/betaGroups/g-1",
        "/v1/bundleIds/B7X9",
        "/v1/profiles/P-1",
        "/v1/users/u-1",
    ] {
        Mock::given(method("DELETE"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = common::mock_client(&mock_server);
    client.testflight().delete_beta_group("g-1").await.unwrap();
    client.provisioning().delete_bundle_id("B7X9").await.unwrap();
    client.provisioning().delete_profile("P-1").await.unwrap();
    client.users().remove("u-1").await.unwrap();

    for request in mock_server.received_requests().await.unwrap() {
        assert!(request.body.is_empty(), "{} carried a body", request.url);
    }
}

#[tokio::test]
async fn test_delete_of_missing_resource_is_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/profiles/gone"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(common::load_response_fixture("not_found")),
        )
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let err = client
        .provisioning()
        .delete_profile("gone")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.problems()[0].code, "NOT_FOUND");
}
