//! Enrollment API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::services::EnrollmentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use fitsenior_shared::types::{CreateEnrollmentRequest, Enrollment};

/// Create enrollment routes
pub fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_my_enrollments).post(enroll))
        .route("/class/:id", get(list_class_enrollments))
        .route("/:id", delete(cancel_enrollment))
}

/// GET /enrollments - The caller's enrollments with class details
async fn list_my_enrollments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Enrollment>>, ApiError> {
    let enrollments = EnrollmentService::list_mine(state.db(), &auth).await?;
    Ok(Json(enrollments))
}

/// GET /enrollments/class/:id - Students enrolled in a class
async fn list_class_enrollments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(class_id): Path<String>,
) -> Result<Json<Vec<Enrollment>>, ApiError> {
    let enrollments = EnrollmentService::list_for_class(state.db(), &class_id).await?;
    Ok(Json(enrollments))
}

/// POST /enrollments - Join a class
async fn enroll(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<CreateEnrollmentRequest>,
) -> Result<(StatusCode, Json<Enrollment>), ApiError> {
    let enrollment = EnrollmentService::enroll(state.db(), &auth, req).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// DELETE /enrollments/:id - Leave a class
async fn cancel_enrollment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    EnrollmentService::cancel(state.db(), &auth, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
