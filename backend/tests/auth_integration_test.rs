//! Integration tests for bearer authentication

mod common;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_missing_token_never_reaches_backend() {
    let app = common::TestApp::new().await;
    Mock::given(path_regex("^/(auth|rest)/v1/.*"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    let (status, body) = app.get("/api/classes").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(common::error_code(&body), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_rejected_token_returns_401_without_table_access() {
    let app = common::TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "msg": "bad jwt" })))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(path_regex("^/rest/v1/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&app.server)
        .await;

    let (status, body) = app.get_auth("/api/demands", "expired-token").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        common::json_body(&body)["error"]["message"],
        "Invalid or expired token"
    );
}

#[tokio::test]
async fn test_payload_without_user_returns_401() {
    let app = common::TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "aud": "authenticated" })))
        .mount(&app.server)
        .await;

    let (status, body) = app.get_auth("/api/me", "token").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(common::json_body(&body)["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_wrapped_user_payload_is_accepted() {
    let app = common::TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "id": "u1", "email": "u1@example.com" }
        })))
        .mount(&app.server)
        .await;
    app.mock_table("GET", "profiles", 200, json!([{ "id": "u1", "full_name": "Ana" }]))
        .await;

    let (status, body) = app.get_auth("/api/me", "token").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::json_body(&body)["full_name"], "Ana");
}
