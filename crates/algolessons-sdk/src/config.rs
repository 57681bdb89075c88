//! Client configuration.

use std::time::Duration;

/// Base URL used when none is configured: the local development API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Settings a [`crate::LessonsClient`] is built from.
///
/// `Default` gives [`DEFAULT_BASE_URL`] and no request timeout, leaving
/// limits to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix of the API, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
