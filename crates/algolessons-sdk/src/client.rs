//! HTTP client for the lessons/quizzes API.

use crate::auth::TokenProvider;
use crate::config::ClientConfig;
use crate::error::{Error, INVALID_LESSONS_FORMAT};
use crate::types::{Quiz, QuizProgress};
use algolessons_core::{Grouping, PresentationTable, group_payload};
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Response, Url};
use serde_json::Value;
use tracing::debug;

/// HTTP client for the algolessons API.
///
/// Every method performs exactly one request. Nothing is retried, cached
/// or deduplicated.
#[derive(Debug, Clone)]
pub struct LessonsClient {
    config: ClientConfig,
    base: Url,
    client: reqwest::Client,
}

impl LessonsClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the base URL does not parse or cannot
    /// carry a path, or [`Error::Http`] if the HTTP client fails to build.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl(config.base_url));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            config,
            base,
            client,
        })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base}/seg/seg/...`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // =========================================================================
    // LESSONS
    // =========================================================================

    /// Fetch the flat lesson list.
    ///
    /// Returns the array elements untouched; grouping is left to
    /// [`algolessons_core::group_payload`] or [`Self::fetch_lesson_categories`].
    ///
    /// # Errors
    ///
    /// - [`Error::Status`] on a non-success status
    /// - [`Error::Json`] if the body is not JSON
    /// - [`Error::MalformedPayload`] if the body is JSON but not an array
    pub async fn fetch_lessons(&self) -> Result<Vec<Value>, Error> {
        let url = self.endpoint(&["api", "lessons"])?;
        debug!(%url, "fetching lessons");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;
        let resp = ensure_success(resp, "fetch lessons")?;

        let body = resp.bytes().await?;
        match serde_json::from_slice::<Value>(&body)? {
            Value::Array(items) => {
                debug!(count = items.len(), "lessons received");
                Ok(items)
            }
            _ => Err(Error::MalformedPayload(INVALID_LESSONS_FORMAT.to_string())),
        }
    }

    /// Fetch lessons and group them by category.
    pub async fn fetch_lesson_categories(
        &self,
        table: &PresentationTable,
    ) -> Result<Grouping, Error> {
        let items = self.fetch_lessons().await?;
        Ok(group_payload(&Value::Array(items), table)?)
    }

    // =========================================================================
    // QUIZZES
    // =========================================================================

    /// Fetch all quizzes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] on a non-success status, [`Error::Json`] if the
    /// body is not a JSON array.
    pub async fn fetch_quizzes(&self) -> Result<Vec<Quiz>, Error> {
        let url = self.endpoint(&["api", "quizzes"])?;
        debug!(%url, "fetching quizzes");

        let resp = self.client.get(url).send().await?;
        let resp = ensure_success(resp, "fetch quizzes")?;
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch one quiz.
    ///
    /// Any non-success status means "no such quiz" and yields `Ok(None)`.
    /// An empty id names no quiz and yields `Ok(None)` without a request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure, [`Error::Json`] if a
    /// success body is not JSON.
    pub async fn fetch_quiz_by_id(&self, quiz_id: &str) -> Result<Option<Quiz>, Error> {
        if quiz_id.is_empty() {
            return Ok(None);
        }
        let url = self.endpoint(&["api", "quizzes", quiz_id])?;
        debug!(%url, "fetching quiz");

        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            debug!(quiz_id, status = resp.status().as_u16(), "quiz not found");
            return Ok(None);
        }
        let body = resp.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }

    // =========================================================================
    // PROGRESS
    // =========================================================================

    /// Save quiz progress, authorizing with a token from `auth`.
    ///
    /// The provider is asked for a token once per call.
    ///
    /// # Errors
    ///
    /// Whatever the provider returns, otherwise as
    /// [`Self::save_quiz_progress_with_token`].
    pub async fn save_quiz_progress<P>(&self, progress: &QuizProgress, auth: &P) -> Result<(), Error>
    where
        P: TokenProvider,
    {
        let token = auth.token().await?;
        self.save_quiz_progress_with_token(progress, &token).await
    }

    /// Save quiz progress with an already obtained token.
    ///
    /// Sends one `POST /api/user/progress/{quizId}` with the progress as JSON
    /// body and `Authorization: Bearer {token}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] on a non-success status.
    pub async fn save_quiz_progress_with_token(
        &self,
        progress: &QuizProgress,
        token: &str,
    ) -> Result<(), Error> {
        let url = self.endpoint(&["api", "user", "progress", progress.quiz_id.as_str()])?;
        debug!(%url, quiz_id = %progress.quiz_id, "saving quiz progress");

        let resp = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(progress)
            .send()
            .await?;
        ensure_success(resp, "save progress")?;
        Ok(())
    }
}

fn ensure_success(resp: Response, action: &'static str) -> Result<Response, Error> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    Err(Error::Status {
        action,
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}
