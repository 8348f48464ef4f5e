//! Forum service

use super::check_id;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::ForumRepository;
use crate::supabase::SupabaseClient;
use fitsenior_shared::types::{
    CreatePostRequest, CreateReplyRequest, ForumPost, ForumPostDetail, ForumPostSummary, ForumReply,
};
use validator::Validate;

/// Forum service for posts and replies
pub struct ForumService;

impl ForumService {
    pub async fn list_posts(db: &SupabaseClient) -> Result<Vec<ForumPostSummary>, ApiError> {
        Ok(ForumRepository::list_posts(db).await?)
    }

    /// A post with all of its replies
    pub async fn get_post(db: &SupabaseClient, id: &str) -> Result<ForumPostDetail, ApiError> {
        check_id(id, "post")?;

        let post = ForumRepository::find_post(db, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;
        let replies = ForumRepository::list_replies(db, id).await?;

        Ok(ForumPostDetail { post, replies })
    }

    pub async fn create_post(
        db: &SupabaseClient,
        user: &AuthUser,
        req: CreatePostRequest,
    ) -> Result<ForumPost, ApiError> {
        req.validate()?;
        Ok(ForumRepository::create_post(db, &user.id, &req).await?)
    }

    pub async fn reply(
        db: &SupabaseClient,
        user: &AuthUser,
        post_id: &str,
        req: CreateReplyRequest,
    ) -> Result<ForumReply, ApiError> {
        check_id(post_id, "post")?;
        req.validate()?;

        ForumRepository::create_reply(db, post_id, &user.id, &req)
            .await
            .map_err(|e| {
                if e.is_foreign_key_violation() {
                    ApiError::NotFound("Post not found".to_string())
                } else {
                    e.into()
                }
            })
    }

    pub async fn delete_post(db: &SupabaseClient, user: &AuthUser, id: &str) -> Result<(), ApiError> {
        check_id(id, "post")?;

        if ForumRepository::delete_post(db, id, &user.id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound("Post not found".to_string()))
        }
    }
}
