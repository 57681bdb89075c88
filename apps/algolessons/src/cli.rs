//! # CLI Commands
//!
//! One function per subcommand. Each returns the text to print so the binary
//! stays a thin shell around them.

use crate::page::LessonsPage;
use algolessons_core::{Error as CoreError, PresentationTable};
use algolessons_sdk::{
    ClientConfig, Error as SdkError, LessonsClient, Quiz, QuizProgress, StaticToken,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Sdk(#[from] SdkError),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The lessons page raised an error notification.
    #[error("{title}: {description}")]
    LoadFailed { title: String, description: String },

    #[error("No token configured (use --token or ALGOLESSONS_TOKEN)")]
    MissingToken,

    #[error("Failed to format output: {0}")]
    Output(serde_json::Error),
}

// =============================================================================
// HELPERS
// =============================================================================

/// Build the client configuration from resolved CLI values.
pub fn client_config(base_url: &str, timeout_secs: Option<u64>) -> ClientConfig {
    let config = ClientConfig::new(base_url);
    match timeout_secs {
        Some(secs) => config.with_timeout(Duration::from_secs(secs)),
        None => config,
    }
}

fn read_json(path: &Path) -> Result<Value, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

fn to_pretty<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut output = serde_json::to_string_pretty(value).map_err(CliError::Output)?;
    output.push('\n');
    Ok(output)
}

/// Render a settled page, or turn its notification into an error.
fn render_page(page: &LessonsPage, json: bool) -> Result<String, CliError> {
    if let Some(note) = page.notifications().last() {
        return Err(CliError::LoadFailed {
            title: note.title.clone(),
            description: note.description.clone(),
        });
    }
    if json {
        to_pretty(page.state())
    } else {
        Ok(page.to_text())
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// `lessons`: fetch, group and show the lessons page.
pub async fn cmd_lessons(config: &ClientConfig, json: bool) -> Result<String, CliError> {
    let client = LessonsClient::new(config.clone())?;
    let mut page = LessonsPage::new(PresentationTable::new());
    page.load(&client).await;
    render_page(&page, json)
}

/// `group <file>`: group a lessons JSON file without touching the network.
pub fn cmd_group(file: &Path, json: bool) -> Result<String, CliError> {
    let payload = match read_json(file)? {
        Value::Array(items) => Ok(items),
        other => Err(SdkError::from(CoreError::not_a_sequence(&other))),
    };
    let mut page = LessonsPage::new(PresentationTable::new());
    page.complete(payload);
    render_page(&page, json)
}

/// `quizzes`: list all quizzes.
pub async fn cmd_quizzes(config: &ClientConfig, json: bool) -> Result<String, CliError> {
    let client = LessonsClient::new(config.clone())?;
    let quizzes = client.fetch_quizzes().await?;

    if json {
        return to_pretty(&quizzes);
    }
    if quizzes.is_empty() {
        return Ok("No quizzes available.\n".to_string());
    }
    Ok(quizzes.iter().map(quiz_line).collect())
}

fn quiz_line(quiz: &Quiz) -> String {
    format!(
        "{}\t{}\n",
        quiz.id().unwrap_or("-"),
        quiz.title().unwrap_or("(untitled)")
    )
}

/// `quiz <id>`: show one quiz. A missing quiz is reported, not an error.
pub async fn cmd_quiz(config: &ClientConfig, quiz_id: &str, json: bool) -> Result<String, CliError> {
    let client = LessonsClient::new(config.clone())?;
    match client.fetch_quiz_by_id(quiz_id).await? {
        Some(quiz) => to_pretty(&quiz),
        None if json => Ok("null\n".to_string()),
        None => Ok(format!("Quiz '{}' not found.\n", quiz_id)),
    }
}

/// `save-progress <file>`: POST a progress JSON file.
pub async fn cmd_save_progress(
    config: &ClientConfig,
    file: &Path,
    token: Option<&str>,
) -> Result<String, CliError> {
    let token = token.ok_or(CliError::MissingToken)?;
    let progress: QuizProgress =
        serde_json::from_value(read_json(file)?).map_err(|source| CliError::InvalidJson {
            path: file.to_path_buf(),
            source,
        })?;

    let client = LessonsClient::new(config.clone())?;
    client
        .save_quiz_progress(&progress, &StaticToken::new(token))
        .await?;
    Ok(format!("Saved progress for quiz '{}'.\n", progress.quiz_id))
}
