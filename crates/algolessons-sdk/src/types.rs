//! Quiz request/response types.
//!
//! Both are pass-through JSON: the API owns their shape. Only the fields the
//! client needs to address requests are typed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A quiz as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quiz(pub Value);

impl Quiz {
    /// The `id` field, if present and a string.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// The `title` field, if present and a string.
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// A user's progress on one quiz.
///
/// `quizId` addresses the POST; every other field is forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgress {
    pub quiz_id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl QuizProgress {
    pub fn new(quiz_id: impl Into<String>) -> Self {
        Self {
            quiz_id: quiz_id.into(),
            fields: Map::new(),
        }
    }

    /// Add a field to the forwarded payload.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}
