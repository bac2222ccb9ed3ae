//! Task records and the in-memory task store.
//!
//! A task carries its own estimated duration, but the focus timer is global
//! and never reads it.

mod store;

pub use store::{CompleteOutcome, TaskStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Shortest estimate accepted for a task, in minutes.
pub const MIN_TASK_DURATION_MIN: u32 = 5;
/// Longest estimate accepted for a task, in minutes.
pub const MAX_TASK_DURATION_MIN: u32 = 240;
/// Estimate used when the caller does not supply one.
pub const DEFAULT_TASK_DURATION_MIN: u32 = 30;

/// Opaque task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to tell tasks apart on screen.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }

    /// Whether the hyphen-free form of this id starts with `prefix`.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.replace('-', "").to_ascii_lowercase();
        !prefix.is_empty() && self.0.simple().to_string().starts_with(&prefix)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One checklist entry inside a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStep {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// A unit of work on the board.
///
/// `progress` is 100 exactly when `completed` is set; the store only
/// enforces this on the completion transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// Percentage 0..=100.
    pub progress: u8,
    /// Estimated duration in minutes.
    pub duration_min: u32,
    #[serde(default)]
    pub steps: Vec<TaskStep>,
    pub created_at: DateTime<Utc>,
    /// Focus time accrued while this task was tracked.
    #[serde(default)]
    pub time_spent_secs: u64,
}

impl Task {
    fn new(title: String, duration_min: u32) -> Self {
        Self {
            id: TaskId::new(),
            title,
            completed: false,
            progress: 0,
            duration_min,
            steps: Vec::new(),
            created_at: Utc::now(),
            time_spent_secs: 0,
        }
    }

    /// Number of checked steps.
    pub fn steps_done(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }
}
