//! # Grouping Module
//!
//! Flat lesson records → ordered categories.
//!
//! Ordering rules:
//! - a category appears at the position of its first valid lesson
//! - lessons inside a category keep their input order
//! - invalid records never create or touch a category
//!
//! Category positions are tracked in a `BTreeMap` next to the output `Vec`,
//! so the result depends only on input order.

use crate::error::Error;
use crate::lesson::{LessonDisplay, MissingField, RawLesson};
use crate::presentation::{Presentation, PresentationTable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// One category with its lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonCategory {
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub presentation: Presentation,
    pub lessons: Vec<LessonDisplay>,
}

/// Why a record was left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// A required field was absent or empty.
    Missing(MissingField),
    /// The element was not a lesson object at all.
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "missing {}", field),
            Self::Malformed(detail) => write!(f, "malformed record: {}", detail),
        }
    }
}

/// A record excluded from the grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLesson {
    /// Position in the input sequence.
    pub index: usize,
    pub reason: SkipReason,
    /// The record as received.
    pub record: Value,
}

/// Result of grouping one lessons payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    /// Categories in first-encounter order.
    pub categories: Vec<LessonCategory>,
    /// Records that failed validation, in input order.
    pub skipped: Vec<SkippedLesson>,
}

impl Grouping {
    /// Check if no category was produced.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total lessons across all categories.
    pub fn lesson_count(&self) -> usize {
        self.categories.iter().map(|c| c.lessons.len()).sum()
    }

    /// Category with the given label.
    pub fn category(&self, title: &str) -> Option<&LessonCategory> {
        self.categories.iter().find(|c| c.title == title)
    }

    /// First lesson with the given slug, along with its category.
    pub fn find_lesson(&self, slug: &str) -> Option<(&LessonCategory, &LessonDisplay)> {
        self.categories.iter().find_map(|category| {
            category
                .lessons
                .iter()
                .find(|lesson| lesson.slug == slug)
                .map(|lesson| (category, lesson))
        })
    }
}

/// Description synthesized for a category.
pub fn category_description(category: &str) -> String {
    format!("Explore concepts related to {}.", category)
}

// =============================================================================
// TRANSFORM
// =============================================================================

struct Grouper<'a> {
    table: &'a PresentationTable,
    positions: BTreeMap<String, usize>,
    grouping: Grouping,
}

impl<'a> Grouper<'a> {
    fn new(table: &'a PresentationTable) -> Self {
        Self {
            table,
            positions: BTreeMap::new(),
            grouping: Grouping::default(),
        }
    }

    fn push(&mut self, index: usize, raw: &RawLesson, record: impl FnOnce() -> Value) {
        match raw.validate() {
            Ok(lesson) => {
                let position = match self.positions.get(&lesson.category) {
                    Some(&position) => position,
                    None => {
                        let position = self.grouping.categories.len();
                        self.grouping.categories.push(LessonCategory {
                            title: lesson.category.clone(),
                            description: category_description(&lesson.category),
                            presentation: self.table.resolve(&lesson.category).clone(),
                            lessons: Vec::new(),
                        });
                        self.positions.insert(lesson.category.clone(), position);
                        position
                    }
                };
                if let Some(category) = self.grouping.categories.get_mut(position) {
                    category.lessons.push(LessonDisplay::from(lesson));
                }
            }
            Err(field) => self.skip(index, SkipReason::Missing(field), record()),
        }
    }

    fn skip(&mut self, index: usize, reason: SkipReason, record: Value) {
        self.grouping.skipped.push(SkippedLesson {
            index,
            reason,
            record,
        });
    }

    fn finish(self) -> Grouping {
        self.grouping
    }
}

/// Group typed raw records.
pub fn group_lessons<I>(records: I, table: &PresentationTable) -> Grouping
where
    I: IntoIterator<Item = RawLesson>,
{
    let mut grouper = Grouper::new(table);
    for (index, raw) in records.into_iter().enumerate() {
        grouper.push(index, &raw, || {
            serde_json::to_value(&raw).unwrap_or(Value::Null)
        });
    }
    grouper.finish()
}

/// Group a lessons payload as returned by the API.
///
/// Fails as a whole when `payload` is not an array. Elements that do not
/// decode as a lesson object are skipped like records with missing fields.
pub fn group_payload(payload: &Value, table: &PresentationTable) -> Result<Grouping, Error> {
    let items = payload
        .as_array()
        .ok_or_else(|| Error::not_a_sequence(payload))?;

    let mut grouper = Grouper::new(table);
    for (index, item) in items.iter().enumerate() {
        match RawLesson::deserialize(item) {
            Ok(raw) => grouper.push(index, &raw, || item.clone()),
            Err(e) => grouper.skip(index, SkipReason::Malformed(e.to_string()), item.clone()),
        }
    }
    Ok(grouper.finish())
}

// =============================================================================
// TESTS
// =============================================================================
