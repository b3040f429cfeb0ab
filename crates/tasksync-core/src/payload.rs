// Rust guideline compliant 2026-10-18

//! Payload model for hook input.
//!
//! The payload is kept as a dynamic JSON object so unknown fields survive
//! untouched; typed accessors cover the handful of keys the hook reads.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Key holding the triggering event label.
pub const EVENT_KEY: &str = "event";

/// Key holding the task list.
pub const TASK_LIST_KEY: &str = "task_list";

/// Key injected with the processing timestamp.
pub const PROCESSED_AT_KEY: &str = "processed_at";

/// Label used when the payload carries no event.
pub const DEFAULT_EVENT: &str = "Unknown Event";

/// Rendering used for a completed task without a subject.
pub const MISSING_SUBJECT: &str = "(no subject)";

/// Top-level JSON object received by the hook.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Parses a payload from raw JSON text.
    ///
    /// # Arguments
    ///
    /// * `input` - The JSON document read from stdin
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text is not valid JSON (`Error::InvalidJson`)
    /// - The document is not a JSON object (`Error::UnexpectedShape`)
    pub fn parse(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input).map_err(Error::InvalidJson)?;
        Self::from_value(value)
    }

    /// Wraps an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnexpectedShape` if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::UnexpectedShape(format!(
                "payload must be a JSON object, got {}",
                kind(&other)
            ))),
        }
    }

    /// Sets `processed_at`, replacing any existing value.
    pub fn annotate(&mut self, timestamp: impl Into<String>) {
        self.fields
            .insert(PROCESSED_AT_KEY.to_string(), Value::String(timestamp.into()));
    }

    /// Returns the processing timestamp if one has been set.
    #[must_use]
    pub fn processed_at(&self) -> Option<&str> {
        self.fields.get(PROCESSED_AT_KEY).and_then(Value::as_str)
    }

    /// Returns the event label, or `Unknown Event` when absent.
    #[must_use]
    pub fn event(&self) -> String {
        self.fields
            .get(EVENT_KEY)
            .map_or_else(|| DEFAULT_EVENT.to_string(), display_value)
    }

    /// Returns the raw task entries in input order.
    ///
    /// A missing `task_list` yields an empty slice.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnexpectedShape` if `task_list` is present but not an array.
    pub fn task_list(&self) -> Result<&[Value]> {
        match self.fields.get(TASK_LIST_KEY) {
            None => Ok(&[][..]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(other) => Err(Error::UnexpectedShape(format!(
                "task_list must be an array, got {}",
                kind(other)
            ))),
        }
    }

    /// Borrows the underlying object.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Borrowed view of one task entry.
#[derive(Debug, Clone, Copy)]
pub struct TaskRef<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> TaskRef<'a> {
    /// Views a task list entry.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnexpectedShape` if the entry is not an object.
    pub fn from_value(value: &'a Value) -> Result<Self> {
        value
            .as_object()
            .map(|fields| Self { fields })
            .ok_or_else(|| {
                Error::UnexpectedShape(format!("task must be a JSON object, got {}", kind(value)))
            })
    }

    /// Returns the parsed status, if the task has a string `status`.
    #[must_use]
    pub fn status(&self) -> Option<TaskStatus> {
        self.fields
            .get("status")
            .and_then(Value::as_str)
            .map(TaskStatus::from)
    }

    /// Returns true only for a status of exactly `"completed"`.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status() == Some(TaskStatus::Completed)
    }

    /// Returns the raw subject value.
    #[must_use]
    pub fn subject(&self) -> Option<&'a Value> {
        self.fields.get("subject")
    }

    /// Returns the subject rendered for display.
    #[must_use]
    pub fn subject_label(&self) -> String {
        self.subject()
            .map_or_else(|| MISSING_SUBJECT.to_string(), display_value)
    }
}

/// Status vocabulary used by the task manager that emits these payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// Not started.
    Pending,
    /// Being worked on.
    InProgress,
    /// Finished.
    Completed,
    /// Waiting on something else.
    Blocked,
    /// Abandoned.
    Cancelled,
    /// Any other label, kept verbatim.
    Other(String),
}

impl TaskStatus {
    /// Returns the wire label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Cancelled => "cancelled",
            TaskStatus::Other(label) => label,
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(label: &str) -> Self {
        match label {
            "pending" => TaskStatus::Pending,
            "in_progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            "blocked" => TaskStatus::Blocked,
            "cancelled" => TaskStatus::Cancelled,
            other => TaskStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strings render bare; everything else renders as JSON text.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
