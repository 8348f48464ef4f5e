//! API request and response types
//!
//! Row types mirror the columns the gateway reads from the hosted tables.
//! Embedded joins keep the table name PostgREST uses for them (`profiles`,
//! `professionals`, `classes`) so clients see the same shape the backend
//! returns. Timestamps stay the strings the service sent, whatever the
//! column type.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Embedded Joins
// ============================================================================

/// Author fields embedded from `profiles`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Instructor fields embedded from `professionals`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalSummary {
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

// ============================================================================
// Profile Types
// ============================================================================

/// Row of the `profiles` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Profile update request (PUT /me)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2048))]
    pub avatar_url: Option<String>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.avatar_url.is_none()
    }
}

// ============================================================================
// Class Types
// ============================================================================

/// Difficulty level of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Row of the `classes` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    #[serde(default)]
    pub professional_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub max_students: Option<i32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<ClassLevel>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professionals: Option<ProfessionalSummary>,
}

/// Class with its current enrollment count (GET /classes/{id})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDetail {
    #[serde(flatten)]
    pub class: Class,
    pub enrollment_count: usize,
}

/// Class creation request (POST /classes)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateClassRequest {
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(required, length(min = 1))]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub max_students: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<ClassLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

/// Class update request (PUT /classes/{id})
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateClassRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub max_students: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<ClassLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

impl UpdateClassRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.duration.is_none()
            && self.capacity.is_none()
            && self.max_students.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.level.is_none()
            && self.activity.is_none()
            && self.schedule.is_none()
    }
}

// ============================================================================
// Enrollment Types
// ============================================================================

/// Lifecycle state of an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Enrolled,
    Cancelled,
    Completed,
}

/// Row of the `enrollments` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub user_id: String,
    pub class_id: String,
    #[serde(default)]
    pub status: Option<EnrollmentStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Embedded class, present on the "my enrollments" listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Class>,
    /// Embedded student, present on the per-class listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<ProfileSummary>,
}

/// Enrollment request (POST /enrollments)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateEnrollmentRequest {
    #[validate(required, length(min = 1))]
    pub class_id: Option<String>,
}

// ============================================================================
// Demand Types
// ============================================================================

/// Row of the `demands` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub num_interested: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<ProfileSummary>,
}

/// Demand creation request (POST /demands)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateDemandRequest {
    #[validate(required, length(min = 1, max = 200))]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub num_interested: Option<i32>,
}

/// Demand update request (PUT /demands/{id})
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDemandRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub num_interested: Option<i32>,
}

impl UpdateDemandRequest {
    pub fn is_empty(&self) -> bool {
        self.activity.is_none()
            && self.location.is_none()
            && self.neighborhood.is_none()
            && self.schedule.is_none()
            && self.description.is_none()
            && self.num_interested.is_none()
    }
}

// ============================================================================
// Forum Types
// ============================================================================

/// Row of the `forum_posts` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<ProfileSummary>,
}

/// Forum listing entry with the number of replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPostSummary {
    #[serde(flatten)]
    pub post: ForumPost,
    pub reply_count: i64,
}

/// Row of the `forum_replies` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumReply {
    pub id: String,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<ProfileSummary>,
}

/// A post together with its replies, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPostDetail {
    #[serde(flatten)]
    pub post: ForumPost,
    pub replies: Vec<ForumReply>,
}

/// Post creation request (POST /forum/posts)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(required, length(min = 1, max = 10000))]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub category: Option<String>,
}

/// Reply creation request (POST /forum/posts/{id}/replies)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(required, length(min = 1, max = 10000))]
    pub content: Option<String>,
}

// ============================================================================
// Message Types
// ============================================================================

/// Row of the `messages` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<ProfileSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<ProfileSummary>,
}

impl Message {
    /// The other participant of this message, seen from `user_id`
    pub fn counterpart(&self, user_id: &str) -> &str {
        if self.sender_id == user_id {
            &self.recipient_id
        } else {
            &self.sender_id
        }
    }
}

/// Direct message request (POST /messages)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(required, length(min = 1))]
    pub recipient_id: Option<String>,
    #[validate(required, length(min = 1, max = 5000))]
    pub content: Option<String>,
}
