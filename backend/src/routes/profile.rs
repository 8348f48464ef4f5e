//! Caller profile API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitsenior_shared::types::{Profile, UpdateProfileRequest};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

/// GET /me - Get the caller's profile
async fn get_profile(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Profile>, ApiError> {
    let profile = ProfileService::get_profile(state.db(), &auth).await?;
    Ok(Json(profile))
}

/// PUT /me - Update name or avatar
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    let profile = ProfileService::update_profile(state.db(), &auth, req).await?;
    Ok(Json(profile))
}
