//! Profile repository

use crate::supabase::{SupabaseClient, SupabaseError};
use fitsenior_shared::types::{Profile, UpdateProfileRequest};

pub const PROFILES: &str = "profiles";

/// Profile repository for table operations
pub struct ProfileRepository;

impl ProfileRepository {
    /// Find the profile of a user (profiles are keyed by the auth user id)
    pub async fn find_by_id(db: &SupabaseClient, user_id: &str) -> Result<Option<Profile>, SupabaseError> {
        db.table(PROFILES)
            .select("*")
            .eq("id", user_id)
            .limit(1)
            .execute()
            .await?
            .maybe_single()
    }

    /// Apply the set fields of `changes`; `None` when the profile does not exist
    pub async fn update(
        db: &SupabaseClient,
        user_id: &str,
        changes: &UpdateProfileRequest,
    ) -> Result<Option<Profile>, SupabaseError> {
        db.table(PROFILES)
            .update(changes)
            .eq("id", user_id)
            .select("*")
            .execute()
            .await?
            .maybe_single()
    }
}
