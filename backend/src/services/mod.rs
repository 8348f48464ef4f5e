//! Business logic services
//!
//! Services encapsulate the per-resource rules (ownership, duplicate and
//! capacity checks, conversation grouping) and coordinate the repository
//! calls a request needs. Each step is its own round trip; a failure aborts
//! the request without undoing earlier steps.

pub mod classes;
pub mod demands;
pub mod enrollments;
pub mod forum;
pub mod messages;
pub mod profile;

pub use classes::ClassService;
pub use demands::DemandService;
pub use enrollments::EnrollmentService;
pub use forum::ForumService;
pub use messages::MessageService;
pub use profile::ProfileService;

use crate::error::ApiError;
use fitsenior_shared::validation::validate_identifier;

/// Reject identifiers that cannot be a row id
pub(crate) fn check_id(id: &str, what: &str) -> Result<(), ApiError> {
    validate_identifier(id).map_err(|_| ApiError::Validation(format!("Invalid {} ID", what)))
}
