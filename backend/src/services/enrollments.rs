//! Enrollment service
//!
//! Joining a class runs three checks before the insert: the caller is not
//! already enrolled, the class exists, and a seat is left. The checks are
//! separate round trips, so two concurrent requests can both pass the
//! capacity check. A duplicate that slips past the first check is still
//! caught when the table's unique index rejects the insert.

use super::check_id;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{ClassRepository, EnrollmentRepository};
use crate::supabase::SupabaseClient;
use fitsenior_shared::types::{CreateEnrollmentRequest, Enrollment};
use tracing::info;
use validator::Validate;

const ALREADY_ENROLLED: &str = "Already enrolled in this class";

/// Enrollment service for enrollment operations
pub struct EnrollmentService;

impl EnrollmentService {
    /// The caller's enrollments, newest first
    pub async fn list_mine(db: &SupabaseClient, user: &AuthUser) -> Result<Vec<Enrollment>, ApiError> {
        Ok(EnrollmentRepository::list_for_user(db, &user.id).await?)
    }

    pub async fn list_for_class(db: &SupabaseClient, class_id: &str) -> Result<Vec<Enrollment>, ApiError> {
        check_id(class_id, "class")?;
        Ok(EnrollmentRepository::list_for_class(db, class_id).await?)
    }

    /// Enroll the caller in a class
    pub async fn enroll(
        db: &SupabaseClient,
        user: &AuthUser,
        req: CreateEnrollmentRequest,
    ) -> Result<Enrollment, ApiError> {
        req.validate()?;
        let class_id = req.class_id.as_deref().unwrap_or_default();
        check_id(class_id, "class")?;

        if EnrollmentRepository::exists(db, &user.id, class_id).await? {
            return Err(ApiError::BadRequest(ALREADY_ENROLLED.to_string()));
        }

        let limits = ClassRepository::find_capacity(db, class_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))?;

        let enrolled = EnrollmentRepository::count_for_class(db, class_id).await?;
        if let Some(limit) = limits.seat_limit() {
            if enrolled >= limit {
                return Err(ApiError::BadRequest("Class is full".to_string()));
            }
        }

        let enrollment = EnrollmentRepository::create(db, &user.id, class_id)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    ApiError::BadRequest(ALREADY_ENROLLED.to_string())
                } else {
                    e.into()
                }
            })?;

        info!(enrollment_id = %enrollment.id, class_id = %class_id, "Enrollment created");
        Ok(enrollment)
    }

    /// Cancel one of the caller's enrollments
    pub async fn cancel(db: &SupabaseClient, user: &AuthUser, id: &str) -> Result<(), ApiError> {
        check_id(id, "enrollment")?;

        if EnrollmentRepository::delete(db, id, &user.id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound("Enrollment not found".to_string()))
        }
    }
}
