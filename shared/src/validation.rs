//! Input validation functions
//!
//! Request schemas derive `validator::Validate`; this module turns the
//! resulting errors into short messages and checks identifiers that end up
//! inside PostgREST filter expressions.

use validator::{ValidationErrors, ValidationErrorsKind};

/// Maximum accepted length of a row identifier
pub const MAX_IDENTIFIER_LEN: usize = 64;

/// Validate a row or user identifier taken from a path or body
///
/// Identifiers are interpolated into `or=(...)` filters, so characters with
/// meaning in that grammar are rejected.
pub fn validate_identifier(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("Identifier cannot be empty".to_string());
    }
    if id.len() > MAX_IDENTIFIER_LEN {
        return Err("Identifier too long".to_string());
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err("Identifier contains invalid characters".to_string());
    }
    Ok(())
}

/// Render validation errors as a single message
///
/// Fields are reported in alphabetical order so the message is stable.
/// A missing required field reads "`field` is required".
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by_key(|(name, _)| *name);

    let messages: Vec<String> = fields
        .into_iter()
        .filter_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => errs.first().map(|err| {
                if let Some(message) = &err.message {
                    format!("{field}: {message}")
                } else {
                    match &*err.code {
                        "required" => format!("{field} is required"),
                        "length" => format!("{field} has an invalid length"),
                        "range" => format!("{field} is out of range"),
                        code => format!("{field} is invalid ({code})"),
                    }
                }
            }),
            _ => Some(format!("{field} is invalid")),
        })
        .collect();

    if messages.is_empty() {
        "Invalid request".to_string()
    } else {
        messages.join("; ")
    }
}
