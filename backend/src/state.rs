//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Built once**: HTTP clients are created at startup and injected here
//! 2. **Cheap cloning**: All fields are wrapped in Arc
//! 3. **Immutable after creation**: State is read-only during request handling

use crate::auth::AuthVerifier;
use crate::config::AppConfig;
use crate::supabase::SupabaseClient;
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Shared application state
///
/// - `db`: PostgREST client authenticated with the service key
/// - `auth`: token verifier authenticated with the anon key
/// - `config`: settings loaded at startup
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SupabaseClient>,
    pub auth: Arc<AuthVerifier>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the clients described by `config`
    pub fn new(config: AppConfig) -> Result<Self> {
        let service_key = SecretString::new(config.supabase_service_key.expose_secret().clone());
        let anon_key = SecretString::new(config.supabase_anon_key.expose_secret().clone());

        let db = SupabaseClient::new(&config.supabase_url, service_key)?;
        let auth = AuthVerifier::new(&config.supabase_url, anon_key, config.auth_timeout())?;

        Ok(Self::from_parts(db, auth, config))
    }

    /// Assemble state from already constructed clients
    pub fn from_parts(db: SupabaseClient, auth: AuthVerifier, config: AppConfig) -> Self {
        Self {
            db: Arc::new(db),
            auth: Arc::new(auth),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the table client
    #[inline]
    pub fn db(&self) -> &SupabaseClient {
        &self.db
    }

    /// Get a reference to the token verifier
    #[inline]
    pub fn auth(&self) -> &AuthVerifier {
        &self.auth
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
