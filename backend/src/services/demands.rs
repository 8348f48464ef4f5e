//! Demand service - requests for an activity that is not offered yet

use super::check_id;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::DemandRepository;
use crate::supabase::SupabaseClient;
use fitsenior_shared::types::{CreateDemandRequest, Demand, UpdateDemandRequest};
use validator::Validate;

/// Demand service for demand operations
pub struct DemandService;

impl DemandService {
    pub async fn list_demands(db: &SupabaseClient) -> Result<Vec<Demand>, ApiError> {
        Ok(DemandRepository::list(db).await?)
    }

    pub async fn get_demand(db: &SupabaseClient, id: &str) -> Result<Demand, ApiError> {
        check_id(id, "demand")?;

        DemandRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Demand not found".to_string()))
    }

    pub async fn create_demand(
        db: &SupabaseClient,
        user: &AuthUser,
        req: CreateDemandRequest,
    ) -> Result<Demand, ApiError> {
        req.validate()?;
        Ok(DemandRepository::create(db, &user.id, &req).await?)
    }

    /// Update one of the caller's demands
    pub async fn update_demand(
        db: &SupabaseClient,
        user: &AuthUser,
        id: &str,
        req: UpdateDemandRequest,
    ) -> Result<Demand, ApiError> {
        check_id(id, "demand")?;
        req.validate()?;
        if req.is_empty() {
            return Err(ApiError::BadRequest("No fields to update".to_string()));
        }

        DemandRepository::update(db, id, &user.id, &req)
            .await?
            .ok_or_else(|| ApiError::NotFound("Demand not found".to_string()))
    }

    pub async fn delete_demand(db: &SupabaseClient, user: &AuthUser, id: &str) -> Result<(), ApiError> {
        check_id(id, "demand")?;

        if DemandRepository::delete(db, id, &user.id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound("Demand not found".to_string()))
        }
    }
}
