//! Request body extraction
//!
//! `ApiJson` behaves like `axum::Json` but reports an unreadable body through
//! `ApiError`, so clients always get the JSON error envelope.

use crate::error::ApiError;
use axum::extract::{rejection::JsonRejection, FromRequest};

/// JSON request body with `ApiError` as its rejection
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
