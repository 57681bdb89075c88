//! Integration tests for algolessons CLI commands.
//!
//! Uses tempfile for file-based commands and wiremock for the API.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use algolessons::cli::{
    CliError, client_config, cmd_group, cmd_lessons, cmd_quiz, cmd_quizzes, cmd_save_progress,
};
use algolessons::page::{EMPTY_PAGE_TEXT, LOAD_ERROR_TITLE, PAGE_TITLE};
use algolessons_sdk::{ClientConfig, FALLBACK_LESSONS_MESSAGE, INVALID_LESSONS_FORMAT};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Create a sample lessons JSON file.
fn create_lessons_json(dir: &TempDir) -> PathBuf {
    write_file(
        dir,
        "lessons.json",
        r#"[
            {"slug": "bubble-sort", "title": "Bubble Sort", "category": "Sorting", "description": "d"},
            {"slug": "bfs", "title": "BFS", "category": "Graphs", "description": "d", "visualizerPath": "/visualizer/bfs"},
            {"slug": "", "title": "Broken", "category": "Sorting", "description": "d"},
            {"slug": "merge-sort", "title": "Merge Sort", "category": "Sorting", "description": "d"}
        ]"#,
    )
}

fn config_for(server: &MockServer) -> ClientConfig {
    client_config(&server.uri(), None)
}

// =============================================================================
// CONFIG TESTS
// =============================================================================

#[test]
fn test_client_config_without_timeout() {
    let config = client_config("http://api.test", None);
    assert_eq!(config.base_url, "http://api.test");
    assert!(config.timeout.is_none());
}

#[test]
fn test_client_config_with_timeout() {
    let config = client_config("http://api.test", Some(10));
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

// =============================================================================
// GROUP COMMAND TESTS
// =============================================================================

#[test]
fn test_group_text_output() {
    let temp = create_temp_dir();
    let file = create_lessons_json(&temp);

    let output = cmd_group(&file, false).unwrap();

    assert!(output.starts_with(PAGE_TITLE));
    let sorting = output.find("[book-open] Sorting").unwrap();
    let graphs = output.find("[book-open] Graphs").unwrap();
    assert!(sorting < graphs);

    let bubble = output.find("Bubble Sort").unwrap();
    let merge = output.find("Merge Sort").unwrap();
    assert!(bubble < merge);
    assert!(!output.contains("Broken"));
    assert!(output.contains("(visualizer: /visualizer/bfs)"));
}

#[test]
fn test_group_json_output() {
    let temp = create_temp_dir();
    let file = create_lessons_json(&temp);

    let output = cmd_group(&file, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["state"], "populated");
    assert_eq!(value["categories"][0]["title"], "Sorting");
    assert_eq!(value["categories"][0]["lessons"].as_array().unwrap().len(), 2);
    assert_eq!(value["categories"][1]["lessons"][0]["visualizerPath"], "/visualizer/bfs");
}

#[test]
fn test_group_empty_array() {
    let temp = create_temp_dir();
    let file = write_file(&temp, "empty.json", "[]");

    let output = cmd_group(&file, false).unwrap();
    assert!(output.contains(EMPTY_PAGE_TEXT));
}

#[test]
fn test_group_non_array_fails_with_notification() {
    let temp = create_temp_dir();
    let file = write_file(&temp, "object.json", r#"{"lessons": []}"#);

    match cmd_group(&file, false).unwrap_err() {
        CliError::LoadFailed { title, description } => {
            assert_eq!(title, LOAD_ERROR_TITLE);
            assert_eq!(description, INVALID_LESSONS_FORMAT);
        }
        other => panic!("Expected LoadFailed, got: {:?}", other),
    }
}

#[test]
fn test_group_invalid_json() {
    let temp = create_temp_dir();
    let file = write_file(&temp, "bad.json", "not valid json");

    let result = cmd_group(&file, false);
    assert!(matches!(result, Err(CliError::InvalidJson { .. })));
}

#[test]
fn test_group_missing_file() {
    let temp = create_temp_dir();
    let result = cmd_group(&temp.path().join("nope.json"), false);
    assert!(matches!(result, Err(CliError::Io { .. })));
}

// =============================================================================
// LESSONS COMMAND TESTS
// =============================================================================

#[tokio::test]
async fn test_lessons_command_groups_fetched_lessons() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/lessons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"slug": "a", "title": "A", "category": "X", "description": ""},
            {"slug": "b", "title": "B", "category": "Y", "description": ""},
            {"slug": "c", "title": "C", "category": "X", "description": ""}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = cmd_lessons(&config_for(&mock_server), false).await.unwrap();

    let x = output.find("[book-open] X").unwrap();
    let y = output.find("[book-open] Y").unwrap();
    assert!(x < y);
    assert!(output.contains("A  → /lessons/a"));
    assert!(output.contains("C  → /lessons/c"));
}

#[tokio::test]
async fn test_lessons_command_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/lessons"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    match cmd_lessons(&config_for(&mock_server), false).await.unwrap_err() {
        CliError::LoadFailed { title, description } => {
            assert_eq!(title, LOAD_ERROR_TITLE);
            assert_eq!(
                description,
                "Failed to fetch lessons: Internal Server Error (500)"
            );
            assert_ne!(description, FALLBACK_LESSONS_MESSAGE);
        }
        other => panic!("Expected LoadFailed, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_lessons_command_bad_base_url() {
    let config = client_config("not a url", None);
    let result = cmd_lessons(&config, false).await;
    assert!(matches!(result, Err(CliError::Sdk(_))));
}

// =============================================================================
// QUIZ COMMAND TESTS
// =============================================================================

#[tokio::test]
async fn test_quizzes_command_lists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/quizzes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "sorting", "title": "Sorting Basics"},
            {"id": "graphs"}
        ])))
        .mount(&mock_server)
        .await;

    let output = cmd_quizzes(&config_for(&mock_server), false).await.unwrap();
    assert_eq!(output, "sorting\tSorting Basics\ngraphs\t(untitled)\n");
}

#[tokio::test]
async fn test_quizzes_command_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/quizzes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let output = cmd_quizzes(&config_for(&mock_server), false).await.unwrap();
    assert_eq!(output, "No quizzes available.\n");
}

#[tokio::test]
async fn test_quiz_command_not_found_is_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/quizzes/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let output = cmd_quiz(&config, "ghost", false).await.unwrap();
    assert_eq!(output, "Quiz 'ghost' not found.\n");

    let json = cmd_quiz(&config, "ghost", true).await.unwrap();
    assert_eq!(json, "null\n");
}

#[tokio::test]
async fn test_quiz_command_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/quizzes/sorting"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "sorting",
            "title": "Sorting Basics"
        })))
        .mount(&mock_server)
        .await;

    let output = cmd_quiz(&config_for(&mock_server), "sorting", false)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["title"], "Sorting Basics");
}

// =============================================================================
// SAVE-PROGRESS COMMAND TESTS
// =============================================================================

#[tokio::test]
async fn test_save_progress_posts_file_with_token() {
    let mock_server = MockServer::start().await;
    let temp = create_temp_dir();
    let file = write_file(&temp, "progress.json", r#"{"quizId": "sorting", "score": 9}"#);

    Mock::given(method("POST"))
        .and(path("/api/user/progress/sorting"))
        .and(header("authorization", "Bearer cli-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = cmd_save_progress(&config_for(&mock_server), &file, Some("cli-token"))
        .await
        .unwrap();
    assert_eq!(output, "Saved progress for quiz 'sorting'.\n");
}

#[tokio::test]
async fn test_save_progress_requires_token() {
    let temp = create_temp_dir();
    let file = write_file(&temp, "progress.json", r#"{"quizId": "sorting"}"#);

    let result = cmd_save_progress(&client_config("http://127.0.0.1:1", None), &file, None).await;
    assert!(matches!(result, Err(CliError::MissingToken)));
}

#[tokio::test]
async fn test_save_progress_requires_quiz_id() {
    let temp = create_temp_dir();
    let file = write_file(&temp, "progress.json", r#"{"score": 1}"#);

    let result =
        cmd_save_progress(&client_config("http://127.0.0.1:1", None), &file, Some("t")).await;
    assert!(matches!(result, Err(CliError::InvalidJson { .. })));
}

#[tokio::test]
async fn test_save_progress_server_rejects() {
    let mock_server = MockServer::start().await;
    let temp = create_temp_dir();
    let file = write_file(&temp, "progress.json", r#"{"quizId": "sorting"}"#);

    Mock::given(method("POST"))
        .and(path("/api/user/progress/sorting"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = cmd_save_progress(&config_for(&mock_server), &file, Some("expired"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to save progress: Unauthorized (401)");
}
