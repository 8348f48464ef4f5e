//! Supabase access layer
//!
//! A thin PostgREST query builder over `reqwest`. The client is built once at
//! startup and shared through `AppState`; every query is a single HTTP round
//! trip with no retries.

mod client;
mod response;

pub use client::{Order, SupabaseClient, TableQuery};
pub use response::{handle_response, PostgrestError, PostgrestResult};

use thiserror::Error;

/// PostgreSQL error code for a unique constraint violation
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL error code for a foreign key violation
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errors raised while talking to the backend service
#[derive(Error, Debug)]
pub enum SupabaseError {
    /// The service answered with an error body
    #[error("{message}")]
    Upstream {
        code: Option<String>,
        message: String,
    },

    #[error("Request to backend service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON exchanged with backend service: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SupabaseError {
    /// Whether the service rejected a write because of a unique index
    pub fn is_unique_violation(&self) -> bool {
        self.has_code(UNIQUE_VIOLATION)
    }

    /// Whether the service rejected a write that references a missing row
    pub fn is_foreign_key_violation(&self) -> bool {
        self.has_code(FOREIGN_KEY_VIOLATION)
    }

    fn has_code(&self, expected: &str) -> bool {
        matches!(self, SupabaseError::Upstream { code: Some(code), .. } if code == expected)
    }
}
