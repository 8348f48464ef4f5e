//! Direct message API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::services::MessageService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use fitsenior_shared::types::{Message, SendMessageRequest};

/// Create message routes
pub fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(send_message))
        .route("/conversations", get(list_conversations))
        .route("/:id", get(get_thread))
        .route("/:id/read", put(mark_read))
}

/// GET /messages/conversations - Latest message per conversation
async fn list_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Message>>, ApiError> {
    let conversations = MessageService::conversations(state.db(), &auth).await?;
    Ok(Json(conversations))
}

/// GET /messages/:id - Thread with another user, oldest first
async fn get_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let thread = MessageService::thread(state.db(), &auth, &user_id).await?;
    Ok(Json(thread))
}

/// POST /messages - Send a message
async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let message = MessageService::send(state.db(), &auth, req).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// PUT /messages/:id/read - Mark a received message as read
async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let message = MessageService::mark_read(state.db(), &auth, &id).await?;
    Ok(Json(message))
}
