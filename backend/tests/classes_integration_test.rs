//! Integration tests for class endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_classes_embeds_professional() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/classes"))
        .and(query_param("select", "*, professionals(full_name)"))
        .and(query_param("order", "created_at.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "c1", "title": "Chair yoga", "professionals": { "full_name": "Rita" } },
            { "id": "c2", "title": "Water aerobics", "professionals": null }
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let (status, body) = app.get_auth("/api/classes", "tok").await;

    assert_eq!(status, StatusCode::OK);
    let body = common::json_body(&body);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["professionals"]["full_name"], "Rita");
}

#[tokio::test]
async fn test_get_class_adds_enrollment_count() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/classes"))
        .and(query_param("id", "eq.c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "c1",
            "title": "Chair yoga",
            "capacity": 10,
            "professionals": { "full_name": "Rita", "user_id": "u9" }
        }])))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/enrollments"))
        .and(query_param("class_id", "eq.c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "e1" }, { "id": "e2" }])))
        .mount(&app.server)
        .await;

    let (status, body) = app.get_auth("/api/classes/c1", "tok").await;

    assert_eq!(status, StatusCode::OK);
    let body = common::json_body(&body);
    assert_eq!(body["id"], "c1");
    assert_eq!(body["enrollment_count"], 2);
    assert_eq!(body["professionals"]["user_id"], "u9");
}

#[tokio::test]
async fn test_get_unknown_class() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    app.mock_table("GET", "classes", 200, json!([])).await;

    let (status, body) = app.get_auth("/api/classes/nope", "tok").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(common::json_body(&body)["error"]["message"], "Class not found");
}

#[tokio::test]
async fn test_get_class_rejects_malformed_id() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;

    let (status, body) = app.get_auth("/api/classes/c1,evil", "tok").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::error_code(&body), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_class_as_professional() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/professionals"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "p1" }])))
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/classes"))
        .and(body_json(json!([{
            "title": "Chair yoga",
            "date": "2026-11-03",
            "capacity": 8,
            "professional_id": "p1"
        }])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": "c1",
            "title": "Chair yoga",
            "date": "2026-11-03",
            "capacity": 8,
            "professional_id": "p1"
        }])))
        .expect(1)
        .mount(&app.server)
        .await;

    let body = json!({ "title": "Chair yoga", "date": "2026-11-03", "capacity": 8 });
    let (status, body) = app.post_auth("/api/classes", &body.to_string(), "tok").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(common::json_body(&body)["professional_id"], "p1");
}

#[tokio::test]
async fn test_create_class_without_professional_record() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    app.mock_table("GET", "professionals", 200, json!([])).await;

    let body = json!({ "title": "Chair yoga", "date": "2026-11-03" });
    let (status, body) = app.post_auth("/api/classes", &body.to_string(), "tok").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        common::json_body(&body)["error"]["message"],
        "Professional profile not found. Complete your registration first."
    );
}

#[tokio::test]
async fn test_create_class_requires_title() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;

    let body = json!({ "date": "2026-11-03" });
    let (status, body) = app.post_auth("/api/classes", &body.to_string(), "tok").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("title is required"));
}

#[tokio::test]
async fn test_update_class_of_other_professional_is_forbidden() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/classes"))
        .and(query_param("select", "professional_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "professional_id": "p9" }])))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/professionals"))
        .and(query_param("id", "eq.p9"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&app.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/classes"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    let (status, body) = app
        .put_auth("/api/classes/c1", &json!({ "title": "Mine now" }).to_string(), "tok")
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(common::error_code(&body), "FORBIDDEN");
}

#[tokio::test]
async fn test_update_unknown_class() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    app.mock_table("GET", "classes", 200, json!([])).await;

    let (status, _) = app
        .put_auth("/api/classes/c404", &json!({ "title": "x" }).to_string(), "tok")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_own_class_is_scoped_to_owner() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/classes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "professional_id": "p1" }])))
        .mount(&app.server)
        .await;
    app.mock_table("GET", "professionals", 200, json!([{ "id": "p1" }]))
        .await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/classes"))
        .and(query_param("id", "eq.c1"))
        .and(query_param("professional_id", "eq.p1"))
        .and(body_json(json!({ "capacity": 12 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "c1",
            "title": "Chair yoga",
            "capacity": 12,
            "professional_id": "p1"
        }])))
        .expect(1)
        .mount(&app.server)
        .await;

    let (status, body) = app
        .put_auth("/api/classes/c1", &json!({ "capacity": 12 }).to_string(), "tok")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::json_body(&body)["capacity"], 12);
}

#[tokio::test]
async fn test_delete_own_class() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    app.mock_table("GET", "classes", 200, json!([{ "professional_id": "p1" }]))
        .await;
    app.mock_table("GET", "professionals", 200, json!([{ "id": "p1" }]))
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/classes"))
        .and(query_param("id", "eq.c1"))
        .and(query_param("professional_id", "eq.p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "c1" }])))
        .expect(1)
        .mount(&app.server)
        .await;

    let (status, body) = app.delete_auth("/api/classes/c1", "tok").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_class_of_other_professional_is_forbidden() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    app.mock_table("GET", "classes", 200, json!([{ "professional_id": "p9" }]))
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/professionals"))
        .and(query_param("id", "eq.p9"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&app.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/classes"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    let (status, body) = app.delete_auth("/api/classes/c1", "tok").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        common::json_body(&body)["error"]["message"],
        "You do not have permission to modify this class"
    );
}

#[tokio::test]
async fn test_list_classes_passes_naive_timestamps_through() {
    let app = common::TestApp::new().await;
    app.mock_user("tok", "u1").await;
    app.mock_table(
        "GET",
        "classes",
        200,
        json!([{ "id": "c1", "title": "Yoga", "created_at": "2024-03-01T10:00:00" }]),
    )
    .await;

    let (status, body) = app.get_auth("/api/classes", "tok").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::json_body(&body)[0]["created_at"], "2024-03-01T10:00:00");
}
