//! # Algolessons SDK
//!
//! Type-safe wrappers for the lessons/quizzes HTTP API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use algolessons_sdk::{ClientConfig, LessonsClient, StaticToken, QuizProgress};
//! use algolessons_core::PresentationTable;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), algolessons_sdk::Error> {
//!     let client = LessonsClient::new(ClientConfig::default())?;
//!
//!     // Lessons, grouped by category
//!     let grouping = client.fetch_lesson_categories(&PresentationTable::new()).await?;
//!     println!("{} categories", grouping.categories.len());
//!
//!     // One quiz, or None when the API has no such quiz
//!     let quiz = client.fetch_quiz_by_id("sorting-basics").await?;
//!
//!     // Progress, authorized with a bearer token
//!     let progress = QuizProgress::new("sorting-basics").with_field("score", 8);
//!     client.save_quiz_progress(&progress, &StaticToken::new("secret")).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoints
//!
//! ```text
//!   GET  {base}/api/lessons
//!   GET  {base}/api/quizzes
//!   GET  {base}/api/quizzes/{quizId}
//!   POST {base}/api/user/progress/{quizId}   Authorization: Bearer {token}
//! ```

mod auth;
mod client;
mod config;
mod error;
mod types;

pub use auth::{StaticToken, TokenProvider};
pub use client::LessonsClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, FALLBACK_LESSONS_MESSAGE, INVALID_LESSONS_FORMAT};
pub use types::{Quiz, QuizProgress};

// Re-export algolessons_core for convenience
pub use algolessons_core;
