//! # Lesson Module
//!
//! The three shapes a lesson takes on its way to the screen:
//!
//! - [`RawLesson`]: what `GET /api/lessons` returns, every field optional
//! - [`Lesson`]: a record that passed validation
//! - [`LessonDisplay`]: the subset shown inside a category

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// RAW LESSON (wire format)
// =============================================================================

/// A lesson record exactly as received from the API.
///
/// Fields are optional so that incomplete records still deserialize and can be
/// reported individually instead of failing the whole payload. The optional
/// fields never reject a record: a non-string value reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLesson {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "string_or_none"
    )]
    pub visualizer_path: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl RawLesson {
    /// Create a raw lesson with the three required fields set.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            slug: Some(slug.into()),
            title: Some(title.into()),
            category: Some(category.into()),
            description: None,
            visualizer_path: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the visualizer path.
    #[must_use]
    pub fn with_visualizer(mut self, path: impl Into<String>) -> Self {
        self.visualizer_path = Some(path.into());
        self
    }

    /// Validate the record.
    ///
    /// Slug, title and category must be present and non-empty, checked in that
    /// order. An empty visualizer path is treated as absent.
    pub fn validate(&self) -> Result<Lesson, MissingField> {
        let slug = non_empty(&self.slug).ok_or(MissingField::Slug)?;
        let title = non_empty(&self.title).ok_or(MissingField::Title)?;
        let category = non_empty(&self.category).ok_or(MissingField::Category)?;

        Ok(Lesson {
            slug,
            title,
            category,
            description: self.description.clone().unwrap_or_default(),
            visualizer_path: non_empty(&self.visualizer_path),
        })
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|s| !s.is_empty()).map(str::to_owned)
}

/// The required field a raw lesson was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    Slug,
    Title,
    Category,
}

impl MissingField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::Title => "title",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// VALIDATED LESSON
// =============================================================================

/// A lesson with non-empty slug, title and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualizer_path: Option<String>,
}

// =============================================================================
// DISPLAY RECORD
// =============================================================================

/// A lesson as listed inside its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDisplay {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualizer_path: Option<String>,
}

impl LessonDisplay {
    /// Route of the lesson page.
    pub fn lesson_route(&self) -> String {
        format!("/lessons/{}", self.slug)
    }

    /// Route of the interactive visualizer, if the lesson has one.
    pub fn visualizer_route(&self) -> Option<&str> {
        self.visualizer_path.as_deref()
    }
}

impl From<Lesson> for LessonDisplay {
    fn from(lesson: Lesson) -> Self {
        Self {
            title: lesson.title,
            slug: lesson.slug,
            visualizer_path: lesson.visualizer_path,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
