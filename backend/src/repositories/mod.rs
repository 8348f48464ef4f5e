//! Table repositories
//!
//! Provides data access over the hosted PostgREST API, one repository per
//! table. Repositories only build queries and decode rows; ownership and
//! capacity rules live in the services.

pub mod classes;
pub mod demands;
pub mod enrollments;
pub mod forum;
pub mod messages;
pub mod professionals;
pub mod profiles;

pub use classes::{ClassCapacity, ClassOwner, ClassRepository};
pub use demands::DemandRepository;
pub use enrollments::EnrollmentRepository;
pub use forum::ForumRepository;
pub use messages::MessageRepository;
pub use professionals::ProfessionalRepository;
pub use profiles::ProfileRepository;
