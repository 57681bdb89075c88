//! # Error Module
//!
//! Failures of the grouping transform as a whole.
//!
//! Per-record problems are not errors: they end up in
//! [`crate::Grouping::skipped`].

use serde_json::Value;
use thiserror::Error;

/// Message used when the lessons payload is not an array.
pub const INVALID_LESSONS_FORMAT: &str = "Invalid lessons data format received from API.";

/// Errors from the core transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The lessons payload was not a JSON array. `found` names what it was.
    #[error("{}", INVALID_LESSONS_FORMAT)]
    NotASequence { found: &'static str },
}

impl Error {
    /// Error for a lessons payload that is not an array.
    pub fn not_a_sequence(payload: &Value) -> Self {
        Self::NotASequence {
            found: json_kind(payload),
        }
    }
}

/// Name of the JSON type of `value`, for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
