//! Class API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::services::ClassService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fitsenior_shared::types::{Class, ClassDetail, CreateClassRequest, UpdateClassRequest};

/// Create class routes
pub fn class_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classes).post(create_class))
        .route("/:id", get(get_class).put(update_class).delete(delete_class))
}

/// GET /classes - All classes with their professional's name
async fn list_classes(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<Vec<Class>>, ApiError> {
    let classes = ClassService::list_classes(state.db()).await?;
    Ok(Json(classes))
}

/// GET /classes/:id - One class and its enrollment count
async fn get_class(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ClassDetail>, ApiError> {
    let class = ClassService::get_class(state.db(), &id).await?;
    Ok(Json(class))
}

/// POST /classes - Create a class as the caller's professional record
async fn create_class(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<CreateClassRequest>,
) -> Result<(StatusCode, Json<Class>), ApiError> {
    let class = ClassService::create_class(state.db(), &auth, req).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// PUT /classes/:id - Update a class the caller owns
async fn update_class(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateClassRequest>,
) -> Result<Json<Class>, ApiError> {
    let class = ClassService::update_class(state.db(), &auth, &id, req).await?;
    Ok(Json(class))
}

/// DELETE /classes/:id
async fn delete_class(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ClassService::delete_class(state.db(), &auth, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
