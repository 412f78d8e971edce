//! Integration tests for the managed-app endpoints using wiremock.
//!
//! Verifies URL construction (including the distinct `managedapps` vs
//! `iosmanagedapps` path spellings), identifier rendering, API-key header
//! attachment, and error propagation:
//!
//! - GET /rest/v1/api/tenants/{tenant}/devices/{id}/managedapps — device_managed_apps
//! - GET /rest/v1/api/tenants/{tenant}/iosmanagedapps            — tenant_managed_apps

use moki_api::client::MokiClient;
use moki_api::config::MokiConfig;
use moki_api::error::MokiError;
use moki_api::managed_apps::*;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> MokiClient {
    let config = MokiConfig::new(server.uri(), "abcd123-test", "secret-key").unwrap();
    MokiClient::new(config)
}

// ── device_managed_apps ────────────────────────────────────────────────

#[tokio::test]
async fn device_managed_apps_with_udid() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path(
            "/rest/v1/api/tenants/abcd123-test/devices/abcd1234-1234-1234-1234-abcdef123456/managedapps",
        ))
        .and(header("X-Moki-Api-Key", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "app-1",
                "name": "MokiTouch",
                "bundleId": "com.moki.mokitouch",
                "version": "2.4.1",
                "status": "Managed"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let apps = device_managed_apps(&client, "abcd1234-1234-1234-1234-abcdef123456")
        .await
        .unwrap();

    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].id, "app-1");
    assert_eq!(apps[0].bundle_id.as_deref(), Some("com.moki.mokitouch"));
    assert_eq!(apps[0].status.as_deref(), Some("Managed"));
}

#[tokio::test]
async fn device_managed_apps_bare_serial_is_rendered_with_prefix() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    // A bare serial must be uppercased and prefixed in the path.
    Mock::given(method("GET"))
        .and(path(
            "/rest/v1/api/tenants/abcd123-test/devices/sn-!-ABCDEFGHIJ12/managedapps",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let apps = device_managed_apps(&client, "ABCDEFGHIJ12").await.unwrap();
    assert!(apps.is_empty());
}

#[tokio::test]
async fn device_managed_apps_invalid_identifier_issues_no_request() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = device_managed_apps(&client, "ermishness-nope")
        .await
        .unwrap_err();
    assert!(
        matches!(err, MokiError::InvalidIdentifier { .. }),
        "expected InvalidIdentifier, got: {err}"
    );
}

// ── tenant_managed_apps ────────────────────────────────────────────────

#[tokio::test]
async fn tenant_managed_apps_hits_iosmanagedapps_endpoint() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    // Note the path spelling: iosmanagedapps, not managedapps.
    Mock::given(method("GET"))
        .and(path("/rest/v1/api/tenants/abcd123-test/iosmanagedapps"))
        .and(header("X-Moki-Api-Key", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "app-10", "name": "Kiosk Browser", "itunesStoreId": 498856093},
            {"id": "app-11", "name": "Inventory Scanner"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let apps = tenant_managed_apps(&client).await.unwrap();

    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].id, "app-10");
    assert_eq!(apps[0].itunes_store_id, Some(498856093));
    assert_eq!(apps[1].name.as_deref(), Some("Inventory Scanner"));
}

#[tokio::test]
async fn tenant_managed_apps_server_error_is_api_error() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/rest/v1/api/tenants/abcd123-test/iosmanagedapps"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = tenant_managed_apps(&client).await.unwrap_err();
    match err {
        MokiError::Api { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("internal error"));
        }
        other => panic!("expected Api error, got: {other}"),
    }
}
