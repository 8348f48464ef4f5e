//! Professional repository
//!
//! Classes are owned through `professionals.user_id`, so every class
//! mutation resolves or checks a professional row first.

use crate::supabase::{SupabaseClient, SupabaseError};
use serde::Deserialize;

pub const PROFESSIONALS: &str = "professionals";

#[derive(Debug, Deserialize)]
struct ProfessionalId {
    id: String,
}

/// Professional repository for table operations
pub struct ProfessionalRepository;

impl ProfessionalRepository {
    /// Professional id registered for an auth user
    pub async fn find_id_by_user(
        db: &SupabaseClient,
        user_id: &str,
    ) -> Result<Option<String>, SupabaseError> {
        let row: Option<ProfessionalId> = db
            .table(PROFESSIONALS)
            .select("id")
            .eq("user_id", user_id)
            .limit(1)
            .execute()
            .await?
            .maybe_single()?;

        Ok(row.map(|r| r.id))
    }

    /// Whether `professional_id` belongs to `user_id`
    pub async fn is_owned_by(
        db: &SupabaseClient,
        professional_id: &str,
        user_id: &str,
    ) -> Result<bool, SupabaseError> {
        let matches = db
            .table(PROFESSIONALS)
            .select("id")
            .eq("id", professional_id)
            .eq("user_id", user_id)
            .limit(1)
            .execute()
            .await?
            .count()?;

        Ok(matches > 0)
    }
}
