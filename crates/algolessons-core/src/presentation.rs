//! # Presentation Module
//!
//! Icon and styling attributes attached to each category.
//!
//! Lookup goes through a [`PresentationTable`]: a category either has an
//! explicit entry or falls back to the table's default entry. The icon is a
//! closed enum, so there is nothing to type-check when it is drawn.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Icon color applied when a category has no entry of its own.
pub const DEFAULT_ICON_COLOR: &str = "text-blue-500";

/// Background class applied when a category has no entry of its own.
pub const DEFAULT_BG_CLASS: &str = "bg-blue-50";

/// Icons a category header can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    BookOpen,
    Code,
    Play,
}

impl Icon {
    /// Stable name of the icon.
    pub fn name(self) -> &'static str {
        match self {
            Self::BookOpen => "book-open",
            Self::Code => "code",
            Self::Play => "play",
        }
    }
}

/// Presentation attributes of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub icon: Icon,
    pub icon_color: String,
    pub bg_class: String,
}

impl Presentation {
    /// Create a presentation entry.
    pub fn new(icon: Icon, icon_color: impl Into<String>, bg_class: impl Into<String>) -> Self {
        Self {
            icon,
            icon_color: icon_color.into(),
            bg_class: bg_class.into(),
        }
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new(Icon::BookOpen, DEFAULT_ICON_COLOR, DEFAULT_BG_CLASS)
    }
}

/// Category label → presentation, with a default entry.
///
/// The default table has no per-category entries, so every category gets
/// [`Presentation::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationTable {
    default: Presentation,
    entries: BTreeMap<String, Presentation>,
}

impl PresentationTable {
    /// Create a table with only the default entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default entry.
    #[must_use]
    pub fn with_default(mut self, presentation: Presentation) -> Self {
        self.default = presentation;
        self
    }

    /// Add an entry for one category label.
    #[must_use]
    pub fn with_entry(mut self, category: impl Into<String>, presentation: Presentation) -> Self {
        self.entries.insert(category.into(), presentation);
        self
    }

    /// Presentation for `category`, or the default entry.
    pub fn resolve(&self, category: &str) -> &Presentation {
        self.entries.get(category).unwrap_or(&self.default)
    }

    /// Number of per-category entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no per-category entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
