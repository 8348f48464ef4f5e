//! Forum API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::services::ForumService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitsenior_shared::types::{
    CreatePostRequest, CreateReplyRequest, ForumPost, ForumPostDetail, ForumPostSummary, ForumReply,
};

/// Create forum routes
pub fn forum_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id", get(get_post).delete(delete_post))
        .route("/posts/:id/replies", post(create_reply))
}

/// GET /forum/posts - Posts with author and reply count, newest first
async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<ForumPostSummary>>, ApiError> {
    let posts = ForumService::list_posts(state.db()).await?;
    Ok(Json(posts))
}

/// GET /forum/posts/:id - A post and its replies
async fn get_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ForumPostDetail>, ApiError> {
    let post = ForumService::get_post(state.db(), &id).await?;
    Ok(Json(post))
}

async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<ForumPost>), ApiError> {
    let post = ForumService::create_post(state.db(), &auth, req).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn create_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    ApiJson(req): ApiJson<CreateReplyRequest>,
) -> Result<(StatusCode, Json<ForumReply>), ApiError> {
    let reply = ForumService::reply(state.db(), &auth, &post_id, req).await?;
    Ok((StatusCode::CREATED, Json(reply)))
}

async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ForumService::delete_post(state.db(), &auth, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
