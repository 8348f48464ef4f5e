//! Enrollment repository

use crate::supabase::{Order, SupabaseClient, SupabaseError};
use fitsenior_shared::types::Enrollment;
use serde::Serialize;

pub const ENROLLMENTS: &str = "enrollments";

#[derive(Serialize)]
struct NewEnrollment<'a> {
    user_id: &'a str,
    class_id: &'a str,
}

/// Enrollment repository for table operations
pub struct EnrollmentRepository;

impl EnrollmentRepository {
    /// Enrollments of a user with the class and its instructor, newest first
    pub async fn list_for_user(
        db: &SupabaseClient,
        user_id: &str,
    ) -> Result<Vec<Enrollment>, SupabaseError> {
        db.table(ENROLLMENTS)
            .select("*, classes(*, professionals(full_name))")
            .eq("user_id", user_id)
            .order("created_at", Order::Desc)
            .execute()
            .await?
            .rows()
    }

    /// Enrollments of a class with the student's profile
    pub async fn list_for_class(
        db: &SupabaseClient,
        class_id: &str,
    ) -> Result<Vec<Enrollment>, SupabaseError> {
        db.table(ENROLLMENTS)
            .select("*, profiles(full_name, avatar_url)")
            .eq("class_id", class_id)
            .execute()
            .await?
            .rows()
    }

    pub async fn exists(
        db: &SupabaseClient,
        user_id: &str,
        class_id: &str,
    ) -> Result<bool, SupabaseError> {
        let found = db
            .table(ENROLLMENTS)
            .select("id")
            .eq("user_id", user_id)
            .eq("class_id", class_id)
            .limit(1)
            .execute()
            .await?
            .count()?;

        Ok(found > 0)
    }

    pub async fn count_for_class(db: &SupabaseClient, class_id: &str) -> Result<usize, SupabaseError> {
        db.table(ENROLLMENTS)
            .select("id")
            .eq("class_id", class_id)
            .execute()
            .await?
            .count()
    }

    pub async fn create(
        db: &SupabaseClient,
        user_id: &str,
        class_id: &str,
    ) -> Result<Enrollment, SupabaseError> {
        db.table(ENROLLMENTS)
            .insert(&NewEnrollment { user_id, class_id })
            .select("*")
            .execute()
            .await?
            .single()
    }

    /// Delete an enrollment of `user_id`; false when nothing matched
    pub async fn delete(db: &SupabaseClient, id: &str, user_id: &str) -> Result<bool, SupabaseError> {
        let deleted = db
            .table(ENROLLMENTS)
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
