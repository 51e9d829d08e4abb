//! Task records
//!
//! A task is `pending` until `done` is called, then `completed` forever.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tracked task, as stored in `tasks.json`.
///
/// Field order here is the key order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Lifecycle state derived from `done`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// Glyph used in human list output
    pub fn glyph(self) -> &'static str {
        match self {
            TaskStatus::Pending => "○",
            TaskStatus::Completed => "✓",
        }
    }
}

impl Task {
    /// Create a pending task. `name` must already be trimmed and non-empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            done: false,
            created_at: now,
            completed_at: None,
        }
    }

    pub fn status(&self) -> TaskStatus {
        if self.done {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }

    /// Transition to completed. Returns false (and changes nothing) if the
    /// task was already completed.
    pub fn complete(&mut self, now: DateTime<Utc>) -> bool {
        if self.done {
            return false;
        }
        self.done = true;
        self.completed_at = Some(now);
        true
    }

    /// Whether `id` refers to this task (surrounding whitespace and ASCII
    /// case are ignored).
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id.trim())
    }
}
