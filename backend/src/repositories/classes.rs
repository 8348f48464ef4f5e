//! Class repository

use crate::supabase::{Order, SupabaseClient, SupabaseError};
use fitsenior_shared::types::{Class, CreateClassRequest, UpdateClassRequest};
use serde::{Deserialize, Serialize};

pub const CLASSES: &str = "classes";

const LIST_COLUMNS: &str = "*, professionals(full_name)";
const DETAIL_COLUMNS: &str = "*, professionals(full_name, user_id)";

/// Owning professional of a class
#[derive(Debug, Clone, Deserialize)]
pub struct ClassOwner {
    pub professional_id: Option<String>,
}

/// Seat limits of a class
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassCapacity {
    pub capacity: Option<i32>,
    pub max_students: Option<i32>,
}

impl ClassCapacity {
    /// `capacity` when set and positive, otherwise `max_students`
    ///
    /// A zero or negative `capacity` counts as unset. A negative
    /// `max_students` leaves no seats.
    pub fn seat_limit(&self) -> Option<usize> {
        self.capacity
            .filter(|c| *c > 0)
            .or(self.max_students)
            .map(|limit| limit.max(0) as usize)
    }
}

#[derive(Serialize)]
struct NewClass<'a> {
    #[serde(flatten)]
    fields: &'a CreateClassRequest,
    professional_id: &'a str,
}

/// Class repository for table operations
pub struct ClassRepository;

impl ClassRepository {
    /// All classes with their instructor's name, oldest first
    pub async fn list(db: &SupabaseClient) -> Result<Vec<Class>, SupabaseError> {
        db.table(CLASSES)
            .select(LIST_COLUMNS)
            .order("created_at", Order::Asc)
            .execute()
            .await?
            .rows()
    }

    pub async fn find_by_id(db: &SupabaseClient, id: &str) -> Result<Option<Class>, SupabaseError> {
        db.table(CLASSES)
            .select(DETAIL_COLUMNS)
            .eq("id", id)
            .limit(1)
            .execute()
            .await?
            .maybe_single()
    }

    pub async fn find_owner(db: &SupabaseClient, id: &str) -> Result<Option<ClassOwner>, SupabaseError> {
        db.table(CLASSES)
            .select("professional_id")
            .eq("id", id)
            .limit(1)
            .execute()
            .await?
            .maybe_single()
    }

    pub async fn find_capacity(
        db: &SupabaseClient,
        id: &str,
    ) -> Result<Option<ClassCapacity>, SupabaseError> {
        db.table(CLASSES)
            .select("capacity, max_students")
            .eq("id", id)
            .limit(1)
            .execute()
            .await?
            .maybe_single()
    }

    pub async fn create(
        db: &SupabaseClient,
        professional_id: &str,
        fields: &CreateClassRequest,
    ) -> Result<Class, SupabaseError> {
        db.table(CLASSES)
            .insert(&NewClass {
                fields,
                professional_id,
            })
            .select("*")
            .execute()
            .await?
            .single()
    }

    /// Update a class only while it still belongs to `professional_id`
    pub async fn update(
        db: &SupabaseClient,
        id: &str,
        professional_id: &str,
        changes: &UpdateClassRequest,
    ) -> Result<Option<Class>, SupabaseError> {
        db.table(CLASSES)
            .update(changes)
            .eq("id", id)
            .eq("professional_id", professional_id)
            .select("*")
            .execute()
            .await?
            .maybe_single()
    }

    /// Delete a class only while it still belongs to `professional_id`
    pub async fn delete(
        db: &SupabaseClient,
        id: &str,
        professional_id: &str,
    ) -> Result<bool, SupabaseError> {
        let deleted = db
            .table(CLASSES)
            .delete()
            .eq("id", id)
            .eq("professional_id", professional_id)
            .select("id")
            .execute()
            .await?
            .count()?;

        Ok(deleted > 0)
    }
}
