//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its wire shape.
//! - Convert loosely shaped persisted records into valid tasks.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is trimmed and never empty.
//! - `created_at` is epoch milliseconds and only breaks ties; board order is
//!   the order of the backing collection.

use crate::model::quadrant::Quadrant;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Freshly created tasks use UUID v4 text, but any non-empty string loaded
/// from storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation failures for task construction and edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming whitespace.
    BlankText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "task text must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// One actionable item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub quadrant: Quadrant,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates an open task with a generated id, stamped with the current time.
    pub fn new(quadrant: Quadrant, text: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(TaskId::generate(), quadrant, text, now_epoch_ms())
    }

    /// Creates an open task with caller-provided identity and timestamp.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: TaskId,
        quadrant: Quadrant,
        text: &str,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        Ok(Self {
            id,
            text: normalize_text(text)?,
            quadrant,
            completed: false,
            created_at,
        })
    }

    /// Replaces the text, keeping the old value when `text` is blank.
    pub fn set_text(&mut self, text: &str) -> Result<(), TaskValidationError> {
        self.text = normalize_text(text)?;
        Ok(())
    }
}

/// Trims `text` and rejects it when nothing is left.
pub fn normalize_text(text: &str) -> Result<String, TaskValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::BlankText);
    }
    Ok(trimmed.to_string())
}

/// Loosely shaped persisted task.
///
/// Every field is optional and decoded leniently: a field of the wrong JSON
/// type reads as absent instead of failing the record. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub quadrant: Option<String>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub completed: Option<bool>,
    #[serde(deserialize_with = "lenient::epoch_ms")]
    pub created_at: Option<i64>,
}

impl TaskRecord {
    /// Decodes one stored element; non-object elements yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Whether the record converts to a task without any default filling.
    ///
    /// Records that are not canonical change shape on conversion and must be
    /// written back so that generated ids survive the next load.
    pub fn is_canonical(&self) -> bool {
        let id_present = self.id.as_deref().is_some_and(|id| !id.trim().is_empty());
        let text_clean = self
            .text
            .as_deref()
            .is_some_and(|text| !text.is_empty() && text.trim() == text);
        let quadrant_known = self.quadrant.as_deref().and_then(Quadrant::from_id).is_some();
        id_present
            && text_clean
            && quadrant_known
            && self.completed.is_some()
            && self.created_at.is_some()
    }

    /// Fills missing fields with defaults.
    ///
    /// Returns `None` for records without usable text. Missing ids get a
    /// fresh id; missing or unknown quadrants fall back to
    /// `Quadrant::default()`.
    pub fn into_task(self) -> Option<Task> {
        Task::try_from(self).ok()
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let text = normalize_text(record.text.as_deref().unwrap_or_default())?;
        let id = match record.id {
            Some(id) if !id.trim().is_empty() => TaskId(id),
            _ => TaskId::generate(),
        };
        let quadrant = record
            .quadrant
            .as_deref()
            .and_then(Quadrant::from_id)
            .unwrap_or_default();
        Ok(Self {
            id,
            text,
            quadrant,
            completed: record.completed.unwrap_or(false),
            created_at: record.created_at.unwrap_or(0),
        })
    }
}

/// Field decoders that never fail on a well-formed JSON value.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
        Option::<Value>::deserialize(deserializer)
    }

    /// Strings as-is; numbers in their JSON text form.
    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match any(deserializer)? {
            Some(Value::String(value)) => Some(value),
            Some(Value::Number(value)) => Some(value.to_string()),
            _ => None,
        })
    }

    /// Booleans, plus `"true"`/`"false"` text.
    pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        Ok(match any(deserializer)? {
            Some(Value::Bool(value)) => Some(value),
            Some(Value::String(value)) => value.trim().parse().ok(),
            _ => None,
        })
    }

    /// Integers, finite floats (truncated) and numeric text.
    pub fn epoch_ms<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(match any(deserializer)? {
            Some(Value::Number(value)) => value.as_i64().or_else(|| {
                value
                    .as_f64()
                    .filter(|ms| ms.is_finite() && ms.abs() < i64::MAX as f64)
                    .map(|ms| ms as i64)
            }),
            Some(Value::String(value)) => value.trim().parse().ok(),
            _ => None,
        })
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Clocks set before the epoch yield `0`.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
