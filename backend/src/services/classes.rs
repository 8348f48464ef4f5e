//! Class service
//!
//! A class belongs to a professional record, and the professional record
//! belongs to an auth user. Mutations check that chain before writing and
//! the write itself stays scoped to the owning professional.

use super::check_id;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{ClassRepository, EnrollmentRepository, ProfessionalRepository};
use crate::supabase::SupabaseClient;
use fitsenior_shared::types::{Class, ClassDetail, CreateClassRequest, UpdateClassRequest};
use tracing::info;
use validator::Validate;

/// Class service for class operations
pub struct ClassService;

impl ClassService {
    pub async fn list_classes(db: &SupabaseClient) -> Result<Vec<Class>, ApiError> {
        Ok(ClassRepository::list(db).await?)
    }

    /// A class with its current number of enrollments
    pub async fn get_class(db: &SupabaseClient, id: &str) -> Result<ClassDetail, ApiError> {
        check_id(id, "class")?;

        let class = ClassRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))?;

        let enrollment_count = EnrollmentRepository::count_for_class(db, id).await?;

        Ok(ClassDetail {
            class,
            enrollment_count,
        })
    }

    /// Create a class owned by the caller's professional record
    pub async fn create_class(
        db: &SupabaseClient,
        user: &AuthUser,
        req: CreateClassRequest,
    ) -> Result<Class, ApiError> {
        req.validate()?;

        let professional_id = ProfessionalRepository::find_id_by_user(db, &user.id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(
                    "Professional profile not found. Complete your registration first.".to_string(),
                )
            })?;

        let class = ClassRepository::create(db, &professional_id, &req).await?;
        info!(class_id = %class.id, professional_id = %professional_id, "Class created");
        Ok(class)
    }

    pub async fn update_class(
        db: &SupabaseClient,
        user: &AuthUser,
        id: &str,
        req: UpdateClassRequest,
    ) -> Result<Class, ApiError> {
        check_id(id, "class")?;
        req.validate()?;
        if req.is_empty() {
            return Err(ApiError::BadRequest("No fields to update".to_string()));
        }

        let professional_id = Self::authorize_owner(db, user, id).await?;

        ClassRepository::update(db, id, &professional_id, &req)
            .await?
            .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))
    }

    pub async fn delete_class(db: &SupabaseClient, user: &AuthUser, id: &str) -> Result<(), ApiError> {
        check_id(id, "class")?;

        let professional_id = Self::authorize_owner(db, user, id).await?;

        if ClassRepository::delete(db, id, &professional_id).await? {
            info!(class_id = %id, "Class deleted");
            Ok(())
        } else {
            Err(ApiError::NotFound("Class not found".to_string()))
        }
    }

    /// Resolve the owning professional of class `id` and check it is the caller's
    ///
    /// Missing class is not-found; someone else's class is forbidden.
    async fn authorize_owner(db: &SupabaseClient, user: &AuthUser, id: &str) -> Result<String, ApiError> {
        let owner = ClassRepository::find_owner(db, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))?;

        let forbidden = || ApiError::Forbidden("You do not have permission to modify this class".to_string());

        let professional_id = owner.professional_id.ok_or_else(forbidden)?;
        if !ProfessionalRepository::is_owned_by(db, &professional_id, &user.id).await? {
            return Err(forbidden());
        }

        Ok(professional_id)
    }
}
