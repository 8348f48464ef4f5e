//! FitSenior Shared Library
//!
//! Request and response schemas exchanged between the API gateway and its
//! clients, plus the validation helpers applied at the boundary.

pub mod types;
pub mod validation;

// Re-export commonly used items
pub use types::*;
