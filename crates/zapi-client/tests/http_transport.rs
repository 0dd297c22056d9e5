//! End-to-end tests of the reqwest transport against a local mock server.

use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use zapi_client::instance::requests;
use zapi_client::{Pagination, ReqwestTransport, ZApi, ZApiConfig, ZApiErrorCode};

const PREFIX: &str = "/instances/ABC/token/XYZ";

fn zapi_for(server: &MockServer) -> ZApi {
    let config = ZApiConfig::new("ABC", "XYZ")
        .with_base_url(server.base_url())
        .with_timeout(5);
    ZApi::new(config).unwrap()
}

#[tokio::test]
async fn test_send_text_posts_json() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(Method::POST)
            .path(format!("{}/send-text", PREFIX))
            .header("content-type", "application/json")
            .json_body(json!({"phone": "5511999999999", "message": "hi"}));
        then.status(200)
            .json_body(json!({"zaapId": "Z1", "messageId": "M1", "id": "M1"}));
    });

    let resp = zapi_for(&server)
        .messaging()
        .send_text("5511999999999", "hi")
        .await
        .unwrap();

    m.assert();
    assert_eq!(resp["messageId"], "M1");
}

#[tokio::test]
async fn test_get_still_carries_json_body() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(Method::GET)
            .path(format!("{}/contacts", PREFIX))
            .query_param("page", "1")
            .query_param("pageSize", "15")
            .header("content-type", "application/json")
            .body("{}");
        then.status(200).json_body(json!([{"phone": "5511", "name": "Ana"}]));
    });

    let resp = zapi_for(&server)
        .contacts()
        .contacts(Pagination::default())
        .await
        .unwrap();

    m.assert();
    assert_eq!(resp[0]["name"], "Ana");
}

#[tokio::test]
async fn test_delete_queued_message() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(Method::DELETE).path(format!("{}/queue/abc123", PREFIX));
        then.status(200).json_body(json!({}));
    });

    zapi_for(&server)
        .queue()
        .remove_queued_message("abc123")
        .await
        .unwrap();

    assert_eq!(m.hits(), 1);
}

#[tokio::test]
async fn test_http_error_maps_to_transport_error() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(Method::GET).path(format!("{}/status", PREFIX));
        then.status(401)
            .header("content-type", "application/json")
            .json_body(json!({"error": "Unauthorized", "message": "Invalid token"}));
    });

    let err = zapi_for(&server).instance().status().await.unwrap_err();

    m.assert();
    assert_eq!(err.code, ZApiErrorCode::TransportError);
    assert_eq!(err.http_status, Some(401));
    assert_eq!(err.message, "Invalid token");
}

#[tokio::test]
async fn test_invalid_verb_never_reaches_server() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.path(format!("{}/status", PREFIX));
        then.status(200).json_body(json!({}));
    });

    let err = zapi_for(&server)
        .dispatch("HEAD", "status", json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.code, ZApiErrorCode::InvalidArgument);
    assert_eq!(m.hits(), 0);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 9 of localhost in the test environment.
    let config = ZApiConfig::new("ABC", "SECRET_TOKEN_123")
        .with_base_url("http://127.0.0.1:9")
        .with_timeout(5);
    let err = ZApi::new(config)
        .unwrap()
        .instance()
        .status()
        .await
        .unwrap_err();

    assert_eq!(err.code, ZApiErrorCode::TransportError);
    assert_eq!(err.http_status, None);
    assert!(!err.to_string().contains("SECRET_TOKEN_123"));
    assert!(!serde_json::to_string(&err).unwrap().contains("SECRET_TOKEN_123"));
}

#[tokio::test]
async fn test_from_client_still_sends_json_content_type() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(Method::GET)
            .path(format!("{}/restart", PREFIX))
            .header("content-type", "application/json")
            .body("{}");
        then.status(200).json_body(json!({"value": true}));
    });

    let config = ZApiConfig::new("ABC", "XYZ").with_base_url(server.base_url());
    let transport = Arc::new(ReqwestTransport::from_client(reqwest::Client::new()));
    let zapi = ZApi::with_transport(config, transport).unwrap();
    let resp = zapi
        .api_client()
        .execute(requests::restart_instance())
        .await
        .unwrap();

    m.assert();
    assert_eq!(resp["value"], true);
}
