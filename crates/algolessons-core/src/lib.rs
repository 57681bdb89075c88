//! # Algolessons Core
//!
//! Lesson data model and the category grouping transform.
//!
//! The API serves lessons as a flat list. This crate turns that list into an
//! ordered list of categories, each carrying its lessons and presentation
//! attributes:
//!
//! ```text
//!   [ {slug:a, category:X}, {slug:b, category:Y}, {slug:c, category:X} ]
//!                               │
//!                        group_payload()
//!                               │
//!                               ▼
//!   [ X { lessons: [a, c] },  Y { lessons: [b] } ]   + skipped records
//! ```
//!
//! The crate performs no I/O and no logging. Records that fail validation are
//! returned in [`Grouping::skipped`] so the caller decides how to report them.

pub mod error;
pub mod grouping;
pub mod lesson;
pub mod presentation;

pub use error::{Error, INVALID_LESSONS_FORMAT};
pub use grouping::{
    Grouping, LessonCategory, SkipReason, SkippedLesson, category_description, group_lessons,
    group_payload,
};
pub use lesson::{Lesson, LessonDisplay, MissingField, RawLesson};
pub use presentation::{
    DEFAULT_BG_CLASS, DEFAULT_ICON_COLOR, Icon, Presentation, PresentationTable,
};
