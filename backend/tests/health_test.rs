//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_root_describes_api() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    let body = common::json_body(&body);
    assert_eq!(body["message"], "FitSenior API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["endpoints"]["health"], "/health");
    assert_eq!(body["endpoints"]["api"], "/api");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::json_body(&body), serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
async fn test_readiness_endpoint() {
    let app = common::TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.server)
        .await;

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    let body = common::json_body(&body);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["supabase"]["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_unavailable_backend() {
    let app = common::TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.server)
        .await;

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(common::json_body(&body)["status"], "not_ready");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
