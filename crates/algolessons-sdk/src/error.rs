//! SDK error types.

use thiserror::Error;

pub use algolessons_core::INVALID_LESSONS_FORMAT;

/// Message shown when a lessons failure carries no message of its own.
pub const FALLBACK_LESSONS_MESSAGE: &str =
    "Could not fetch lessons from the server. Please try again later.";

/// Errors from the algolessons SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON for the expected type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a non-success status.
    #[error("Failed to {action}: {reason} ({status})")]
    Status {
        action: &'static str,
        status: u16,
        reason: String,
    },

    /// Response was JSON but not the expected shape.
    #[error("{0}")]
    MalformedPayload(String),

    /// Grouping the lessons payload failed.
    #[error(transparent)]
    Grouping(#[from] algolessons_core::Error),

    /// Base URL could not be used to build endpoint URLs.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The credential could not be obtained.
    #[error("Auth error: {0}")]
    Auth(String),
}

impl Error {
    /// HTTP status, when the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
