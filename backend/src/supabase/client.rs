//! PostgREST client and query builder

use super::response::{PostgrestError, PostgrestResult};
use super::SupabaseError;
use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, warn};

/// Sort direction for `order`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Handle to the project's REST endpoint, authenticated with the service key
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
    service_key: SecretString,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("rest_url", &self.rest_url)
            .finish_non_exhaustive()
    }
}

impl SupabaseClient {
    /// Build a client for `base_url` (the project URL, without `/rest/v1`)
    pub fn new(base_url: &str, service_key: SecretString) -> Result<Self, SupabaseError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fitsenior-backend/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
            service_key,
        })
    }

    /// Start a query against `table`
    pub fn table(&self, table: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: table.to_string(),
            method: Method::GET,
            params: Vec::new(),
            body: None,
        }
    }

    /// Check that the REST endpoint answers
    pub async fn ping(&self) -> Result<(), SupabaseError> {
        let response = self
            .authorize(self.http.get(format!("{}/", self.rest_url)))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SupabaseError::Upstream {
                code: None,
                message: format!("Backend service answered HTTP {}", status.as_u16()),
            })
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.service_key.expose_secret();
        request.header("apikey", key.as_str()).bearer_auth(key)
    }
}

/// A single PostgREST request under construction
///
/// Filters are plain equality (`eq`) or a raw `or` expression; the caller is
/// responsible for only interpolating validated identifiers into `or`.
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    method: Method,
    params: Vec<(String, String)>,
    body: Option<Result<Value, serde_json::Error>>,
}

impl<'a> TableQuery<'a> {
    /// Columns to return, including embedded joins such as `*, profiles(full_name)`
    pub fn select(mut self, columns: &str) -> Self {
        self.params.retain(|(key, _)| key != "select");
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    /// Keep rows where `column` equals `value`
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Keep rows matching any of the comma-separated conditions
    pub fn or(mut self, conditions: &str) -> Self {
        self.params.push(("or".to_string(), format!("({})", conditions)));
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.params
            .push(("order".to_string(), format!("{}.{}", column, order.as_str())));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    /// Insert one row; the created row is returned
    pub fn insert<T: Serialize>(mut self, row: &T) -> Self {
        self.method = Method::POST;
        self.body = Some(serde_json::to_value([row]));
        self
    }

    /// Update matching rows with `patch`; the updated rows are returned
    pub fn update<T: Serialize>(mut self, patch: &T) -> Self {
        self.method = Method::PATCH;
        self.body = Some(serde_json::to_value(patch));
        self
    }

    /// Delete matching rows; the deleted rows are returned
    pub fn delete(mut self) -> Self {
        self.method = Method::DELETE;
        self
    }

    /// Send the request
    ///
    /// Only transport and serialization failures are returned as `Err`; an
    /// error answered by the service is carried in the result.
    pub async fn execute(self) -> Result<PostgrestResult, SupabaseError> {
        let url = format!("{}/{}", self.client.rest_url, self.table);
        debug!(table = %self.table, method = %self.method, "Executing PostgREST request");

        let mut request = self
            .client
            .authorize(self.client.http.request(self.method.clone(), &url))
            .query(&self.params);

        if self.method != Method::GET {
            request = request.header("Prefer", "return=representation");
        }
        if let Some(body) = self.body {
            request = request.json(&body?);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            let data = if text.trim().is_empty() {
                None
            } else {
                Some(serde_json::from_str(&text)?)
            };
            return Ok(PostgrestResult {
                status: status.as_u16(),
                data,
                error: None,
            });
        }

        let error = serde_json::from_str::<PostgrestError>(&text).unwrap_or_else(|_| PostgrestError {
            code: None,
            message: if text.trim().is_empty() {
                format!("Backend service answered HTTP {}", status.as_u16())
            } else {
                text.clone()
            },
            details: None,
            hint: None,
        });
        warn!(
            table = %self.table,
            status = status.as_u16(),
            code = ?error.code,
            "PostgREST request failed"
        );

        Ok(PostgrestResult {
            status: status.as_u16(),
            data: None,
            error: Some(error),
        })
    }
}
