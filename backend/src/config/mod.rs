//! Configuration management for the FitSenior gateway
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (e.g. SUPABASE_URL, BACKEND_PORT)
//!
//! The three Supabase settings have no default: the process refuses to start
//! without them.

use anyhow::Result;
use secrecy::SecretString;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Base URL of the Supabase project, e.g. `https://xyz.supabase.co`
    pub supabase_url: String,
    /// Public key sent as `apikey` when validating user tokens
    pub supabase_anon_key: SecretString,
    /// Service role key used for table access
    pub supabase_service_key: SecretString,
    pub backend_host: String,
    pub backend_port: u16,
    pub api_prefix: String,
    pub allowed_origins: Vec<String>,
    pub auth_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables; ALLOWED_ORIGINS is comma-separated
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .set_default("backend_host", "0.0.0.0")?
            .set_default("backend_port", 8000)?
            .set_default("api_prefix", "/api")?
            .set_default("allowed_origins", vec!["*"])?
            .set_default("auth_timeout_secs", 10)?
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(
                config::Environment::default()
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins"),
            )
            .build()?;

        let mut loaded: Self = config.try_deserialize()?;
        loaded.normalize();
        Ok(loaded)
    }

    /// Settings for `supabase_url` with every optional value at its default
    pub fn for_project(supabase_url: &str, anon_key: &str, service_key: &str) -> Self {
        let mut config = Self {
            supabase_url: supabase_url.to_string(),
            supabase_anon_key: SecretString::new(anon_key.to_string()),
            supabase_service_key: SecretString::new(service_key.to_string()),
            backend_host: "0.0.0.0".to_string(),
            backend_port: 8000,
            api_prefix: "/api".to_string(),
            allowed_origins: vec!["*".to_string()],
            auth_timeout_secs: 10,
        };
        config.normalize();
        config
    }

    /// Trim trailing slashes and blank origins
    pub fn normalize(&mut self) {
        self.supabase_url = self.supabase_url.trim_end_matches('/').to_string();

        self.allowed_origins = self
            .allowed_origins
            .iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();
        if self.allowed_origins.is_empty() {
            self.allowed_origins.push("*".to_string());
        }

        if !self.api_prefix.starts_with('/') {
            self.api_prefix.insert(0, '/');
        }
        while self.api_prefix.len() > 1 && self.api_prefix.ends_with('/') {
            self.api_prefix.pop();
        }
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Whether CORS should accept any origin
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    /// Deadline applied to the token introspection call
    pub fn auth_timeout(&self) -> Duration {
        Duration::from_secs(self.auth_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(origins: Vec<&str>, prefix: &str) -> AppConfig {
        AppConfig {
            supabase_url: "https://project.supabase.co/".to_string(),
            supabase_anon_key: SecretString::new("anon".to_string()),
            supabase_service_key: SecretString::new("service".to_string()),
            backend_host: "127.0.0.1".to_string(),
            backend_port: 8000,
            api_prefix: prefix.to_string(),
            allowed_origins: origins.into_iter().map(String::from).collect(),
            auth_timeout_secs: 10,
        }
    }

    #[test]
    fn test_normalize_trims_origins() {
        let mut config = config_with(vec![" http://a.test ", "", "http://b.test"], "/api");
        config.normalize();
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert!(!config.allows_any_origin());
        assert_eq!(config.supabase_url, "https://project.supabase.co");
    }

    #[test]
    fn test_normalize_defaults_to_wildcard() {
        let mut config = config_with(vec![" "], "/api");
        config.normalize();
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_normalize_prefix() {
        let mut config = config_with(vec!["*"], "api/");
        config.normalize();
        assert_eq!(config.api_prefix, "/api");
    }

    #[test]
    fn test_for_project_defaults() {
        let config = AppConfig::for_project("http://127.0.0.1:54321/", "anon", "service");
        assert_eq!(config.supabase_url, "http://127.0.0.1:54321");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.backend_port, 8000);
        assert!(config.allows_any_origin());
        assert_eq!(config.auth_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = config_with(vec!["*"], "/api");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("service\""));
        assert!(debug.contains("REDACTED"));
    }
}
