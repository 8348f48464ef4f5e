//! Demand repository

use crate::supabase::{Order, SupabaseClient, SupabaseError};
use fitsenior_shared::types::{CreateDemandRequest, Demand, UpdateDemandRequest};
use serde::Serialize;

pub const DEMANDS: &str = "demands";

const COLUMNS: &str = "*, profiles(full_name, avatar_url)";

#[derive(Serialize)]
struct NewDemand<'a> {
    #[serde(flatten)]
    fields: &'a CreateDemandRequest,
    user_id: &'a str,
}

/// Demand repository for table operations
pub struct DemandRepository;

impl DemandRepository {
    /// All demands with their author, newest first
    pub async fn list(db: &SupabaseClient) -> Result<Vec<Demand>, SupabaseError> {
        db.table(DEMANDS)
            .select(COLUMNS)
            .order("created_at", Order::Desc)
            .execute()
            .await?
            .rows()
    }

    pub async fn find_by_id(db: &SupabaseClient, id: &str) -> Result<Option<Demand>, SupabaseError> {
        db.table(DEMANDS)
            .select(COLUMNS)
            .eq("id", id)
            .limit(1)
            .execute()
            .await?
            .maybe_single()
    }

    pub async fn create(
        db: &SupabaseClient,
        user_id: &str,
        fields: &CreateDemandRequest,
    ) -> Result<Demand, SupabaseError> {
        db.table(DEMANDS)
            .insert(&NewDemand { fields, user_id })
            .select("*")
            .execute()
            .await?
            .single()
    }

    /// Update a demand of `user_id`; `None` when nothing matched
    pub async fn update(
        db: &SupabaseClient,
        id: &str,
        user_id: &str,
        changes: &UpdateDemandRequest,
    ) -> Result<Option<Demand>, SupabaseError> {
        db.table(DEMANDS)
            .update(changes)
            .eq("id", id)
            .eq("user_id", user_id)
            .select("*")
            .execute()
            .await?
            .maybe_single()
    }

    /// Delete a demand of `user_id`; false when nothing matched
    pub async fn delete(db: &SupabaseClient, id: &str, user_id: &str) -> Result<bool, SupabaseError> {
        let deleted = db
            .table(DEMANDS)
            .delete()
            .eq("id", id)
            .eq("user_id", user_id)
            .select("id")
            .execute()
            .await?
            .count()?;

        Ok(deleted > 0)
    }
}
