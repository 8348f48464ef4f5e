//! Token introspection against Supabase Auth
//!
//! Every protected request pays one round trip to `/auth/v1/user`; nothing
//! is cached and failures are not retried.

use crate::error::ApiError;
use anyhow::anyhow;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Identity returned by the auth service for a valid token
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Extract the token from an `Authorization` header value
///
/// Anything other than `Bearer <non-empty token>` is rejected.
pub fn bearer_token(header: Option<&str>) -> Result<&str, ApiError> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Missing or malformed bearer token".to_string()))
}

/// Validates bearer tokens with the auth service
pub struct AuthVerifier {
    http: reqwest::Client,
    user_url: String,
    anon_key: SecretString,
}

impl std::fmt::Debug for AuthVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthVerifier")
            .field("user_url", &self.user_url)
            .finish_non_exhaustive()
    }
}

impl AuthVerifier {
    /// Create a verifier for the project at `base_url`
    ///
    /// `timeout` bounds the whole introspection call.
    pub fn new(
        base_url: &str,
        anon_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fitsenior-backend/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            user_url: format!("{}/auth/v1/user", base_url.trim_end_matches('/')),
            anon_key,
        })
    }

    /// Resolve the identity behind `token`
    pub async fn verify(&self, token: &str) -> Result<AuthUser, ApiError> {
        let response = self
            .http
            .get(&self.user_url)
            .bearer_auth(token)
            .header("apikey", self.anon_key.expose_secret().as_str())
            .send()
            .await
            .map_err(|e| {
                warn!("Auth service unreachable: {}", e);
                ApiError::Internal(anyhow!("auth service request failed: {}", e))
            })?;

        if response.status().as_u16() != 200 {
            debug!(status = response.status().as_u16(), "Token rejected by auth service");
            return Err(ApiError::Unauthorized("Invalid or expired token".to_string()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        identity_from_payload(payload)
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))
    }
}

/// The user object is either wrapped in `user` or is the payload itself
fn identity_from_payload(payload: Value) -> Option<AuthUser> {
    let user = match payload {
        Value::Object(mut map) => match map.remove("user") {
            Some(user @ Value::Object(_)) => user,
            _ if map.contains_key("id") => Value::Object(map),
            _ => return None,
        },
        _ => return None,
    };

    serde_json::from_value::<AuthUser>(user)
        .ok()
        .filter(|user| !user.id.is_empty())
}
