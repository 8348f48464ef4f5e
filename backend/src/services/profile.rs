//! Profile service - business logic for the caller's own profile

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::ProfileRepository;
use crate::supabase::SupabaseClient;
use fitsenior_shared::types::{Profile, UpdateProfileRequest};
use validator::Validate;

/// Profile service for profile operations
pub struct ProfileService;

impl ProfileService {
    /// Get the caller's profile
    pub async fn get_profile(db: &SupabaseClient, user: &AuthUser) -> Result<Profile, ApiError> {
        ProfileRepository::find_by_id(db, &user.id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))
    }

    /// Update the caller's profile with validation
    pub async fn update_profile(
        db: &SupabaseClient,
        user: &AuthUser,
        req: UpdateProfileRequest,
    ) -> Result<Profile, ApiError> {
        req.validate()?;
        if req.is_empty() {
            return Err(ApiError::BadRequest("No fields to update".to_string()));
        }

        ProfileRepository::update(db, &user.id, &req)
            .await?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))
    }
}
