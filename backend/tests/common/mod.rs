//! Common test utilities for integration tests
//!
//! Each test gets its own router and a wiremock server standing in for the
//! Supabase project (both `/auth/v1` and `/rest/v1`).

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitsenior_backend::{config::AppConfig, routes, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub server: MockServer,
}

impl TestApp {
    /// Create a new test application backed by a mock Supabase project
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let config = AppConfig::for_project(&server.uri(), "test-anon-key", "test-service-key");

        let state = AppState::new(config).expect("Failed to build application state");
        let app = routes::create_router(state);

        Self { app, server }
    }

    /// Accept `token` as the bearer token of user `user_id`
    pub async fn mock_user(&self, token: &str, user_id: &str) {
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .and(header("apikey", "test-anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": user_id,
                "email": format!("{}@example.com", user_id),
                "role": "authenticated"
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer `verb` on table `table` with `status` and `body`, whatever the query
    pub async fn mock_table(&self, verb: &str, table: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(format!("/rest/v1/{}", table)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None, None).await
    }

    /// Make a GET request with a bearer token
    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.send("GET", path, None, Some(token)).await
    }

    /// Make a POST request with JSON body and a bearer token
    pub async fn post_auth(&self, path: &str, body: &str, token: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body), Some(token)).await
    }

    /// Make a PUT request with JSON body and a bearer token
    pub async fn put_auth(&self, path: &str, body: &str, token: &str) -> (StatusCode, String) {
        self.send("PUT", path, Some(body), Some(token)).await
    }

    /// Make a DELETE request with a bearer token
    pub async fn delete_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.send("DELETE", path, None, Some(token)).await
    }

    async fn send(
        &self,
        verb: &str,
        path: &str,
        body: Option<&str>,
        token: Option<&str>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(verb).uri(path);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

/// Parse a response body as JSON
pub fn json_body(body: &str) -> Value {
    serde_json::from_str(body).expect("Response body is not JSON")
}

/// The `error.code` of an error response
pub fn error_code(body: &str) -> String {
    json_body(body)["error"]["code"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
