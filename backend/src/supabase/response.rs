//! Query results and their normalization

use super::SupabaseError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Error body returned by PostgREST
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostgrestError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub details: Option<Value>,
    #[serde(default)]
    pub hint: Option<Value>,
}

/// Outcome of one PostgREST request: either data or an embedded error
#[derive(Debug, Clone, PartialEq)]
pub struct PostgrestResult {
    pub status: u16,
    pub data: Option<Value>,
    pub error: Option<PostgrestError>,
}

/// Raise the embedded error, if any, otherwise hand back the data untouched
///
/// Data may be absent, a single object or a list depending on the query.
pub fn handle_response(result: PostgrestResult) -> Result<Option<Value>, SupabaseError> {
    if let Some(error) = result.error {
        return Err(SupabaseError::Upstream {
            code: error.code,
            message: error.message,
        });
    }
    Ok(result.data)
}

impl PostgrestResult {
    /// Normalize and return the raw payload
    pub fn into_data(self) -> Result<Option<Value>, SupabaseError> {
        handle_response(self)
    }

    /// Normalize and decode the payload as a list of rows
    pub fn rows<T: DeserializeOwned>(self) -> Result<Vec<T>, SupabaseError> {
        match self.into_data()? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<T>, _>>()?),
            Some(object) => Ok(vec![serde_json::from_value(object)?]),
        }
    }

    /// Normalize and decode the first row, if there is one
    pub fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>, SupabaseError> {
        Ok(self.rows::<T>()?.into_iter().next())
    }

    /// Normalize and decode exactly one row, as returned by a mutation
    pub fn single<T: DeserializeOwned>(self) -> Result<T, SupabaseError> {
        self.maybe_single()?.ok_or_else(|| SupabaseError::Upstream {
            code: None,
            message: "Expected one row but the backend service returned none".to_string(),
        })
    }

    /// Normalize and count the returned rows
    pub fn count(self) -> Result<usize, SupabaseError> {
        Ok(self.rows::<Value>()?.len())
    }
}
