//! # Lessons Page
//!
//! State of the lessons page across one mount.
//!
//! ```text
//!   new() ──► Loading ──load()──► Populated(categories)
//!                          │
//!                          ├────► Empty                 (no lessons)
//!                          └────► Empty + Notification  (any failure)
//! ```
//!
//! The page owns its state. Only the completion of a load writes it; rendering
//! only reads it.

use algolessons_core::{Grouping, LessonCategory, PresentationTable, group_payload};
use algolessons_sdk::{Error, FALLBACK_LESSONS_MESSAGE, LessonsClient};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

pub const PAGE_TITLE: &str = "Algorithm Lessons";
pub const PAGE_INTRO: &str = "Explore our comprehensive curriculum covering essential algorithm concepts and techniques.\nLearn at your own pace through interactive lessons and examples.";
pub const LOADING_TEXT: &str = "Loading lessons...";
pub const EMPTY_PAGE_TEXT: &str = "No lessons available at the moment, or an error occurred.";
pub const EMPTY_CATEGORY_TEXT: &str = "No lessons found in this category.";
pub const LOAD_ERROR_TITLE: &str = "Error Loading Lessons";

// =============================================================================
// STATE
// =============================================================================

/// What the page is showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "categories", rename_all = "snake_case")]
pub enum PageState {
    Loading,
    Populated(Vec<LessonCategory>),
    /// No lessons, either because there are none or because loading failed.
    Empty,
}

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A user-facing message raised by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    /// The notification raised when lessons cannot be loaded.
    pub fn load_failed(err: &Error) -> Self {
        let message = err.to_string();
        let description = if message.trim().is_empty() {
            FALLBACK_LESSONS_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            title: LOAD_ERROR_TITLE.to_string(),
            description,
            variant: NotificationVariant::Destructive,
        }
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// The lessons page.
#[derive(Debug)]
pub struct LessonsPage {
    table: PresentationTable,
    state: PageState,
    notifications: Vec<Notification>,
}

impl LessonsPage {
    /// A freshly mounted page, in the loading state.
    pub fn new(table: PresentationTable) -> Self {
        Self {
            table,
            state: PageState::Loading,
            notifications: Vec::new(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == PageState::Loading
    }

    /// Categories currently shown; empty unless populated.
    pub fn categories(&self) -> &[LessonCategory] {
        match &self.state {
            PageState::Populated(categories) => categories,
            PageState::Loading | PageState::Empty => &[],
        }
    }

    /// Notifications raised so far.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Fetch lessons once and settle the page.
    pub async fn load(&mut self, client: &LessonsClient) {
        self.state = PageState::Loading;
        let result = client.fetch_lessons().await;
        self.complete(result);
    }

    /// Settle the page from the outcome of a lessons fetch.
    pub fn complete(&mut self, result: Result<Vec<Value>, Error>) {
        let grouping = result.and_then(|items| {
            group_payload(&Value::Array(items), &self.table).map_err(Error::from)
        });
        match grouping {
            Ok(grouping) => self.populate(grouping),
            Err(err) => self.fail(&err),
        }
    }

    fn populate(&mut self, grouping: Grouping) {
        for skipped in &grouping.skipped {
            warn!(
                index = skipped.index,
                reason = %skipped.reason,
                record = %skipped.record,
                "Skipping invalid lesson item from API"
            );
        }
        info!(
            categories = grouping.categories.len(),
            lessons = grouping.lesson_count(),
            skipped = grouping.skipped.len(),
            "lessons loaded"
        );

        self.state = if grouping.is_empty() {
            PageState::Empty
        } else {
            PageState::Populated(grouping.categories)
        };
    }

    fn fail(&mut self, err: &Error) {
        error!(error = %err, "Error fetching and processing lessons");
        self.state = PageState::Empty;
        self.notifications.push(Notification::load_failed(err));
    }

    /// Plain-text rendering of the page.
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(PAGE_TITLE);
        output.push('\n');
        output.push_str(PAGE_INTRO);
        output.push_str("\n\n");

        match &self.state {
            PageState::Loading => {
                output.push_str(LOADING_TEXT);
                output.push('\n');
            }
            PageState::Empty => {
                output.push_str(EMPTY_PAGE_TEXT);
                output.push('\n');
            }
            PageState::Populated(categories) => {
                for category in categories {
                    output.push_str(&format!(
                        "[{}] {}\n",
                        category.presentation.icon.name(),
                        category.title
                    ));
                    output.push_str(&format!("    {}\n", category.description));

                    if category.lessons.is_empty() {
                        output.push_str(&format!("    {}\n", EMPTY_CATEGORY_TEXT));
                    }
                    for lesson in &category.lessons {
                        output.push_str(&format!(
                            "  - {}  → {}",
                            lesson.title,
                            lesson.lesson_route()
                        ));
                        if let Some(viz) = lesson.visualizer_route() {
                            output.push_str(&format!("  (visualizer: {})", viz));
                        }
                        output.push('\n');
                    }
                    output.push('\n');
                }
            }
        }

        output
    }
}

// =============================================================================
// TESTS
// =============================================================================
