//! Authentication module
//!
//! Bearer tokens are validated by the hosted auth service; this crate never
//! issues or decodes tokens itself.

mod middleware;
mod verifier;

pub use verifier::{bearer_token, AuthUser, AuthVerifier};
