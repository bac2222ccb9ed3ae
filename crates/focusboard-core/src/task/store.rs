use serde::Serialize;

use super::{Task, TaskId, TaskStep, MAX_TASK_DURATION_MIN, MIN_TASK_DURATION_MIN};
use crate::error::ValidationError;

/// Result of a completion request on an existing task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// The task was open and is now complete.
    Completed,
    /// The task had already been completed before this call.
    AlreadyCompleted,
}

/// Ordered in-memory task collection, most recent first.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Look a task up by 1-based display position or by id prefix.
    ///
    /// A bare number is always a position, so an out-of-range number finds
    /// nothing. Prefix with `#` to match an id that starts with digits.
    /// Ambiguous prefixes resolve to nothing.
    pub fn resolve(&self, query: &str) -> Option<TaskId> {
        let query = query.trim();
        if let Some(prefix) = query.strip_prefix('#') {
            return self.resolve_prefix(prefix);
        }
        if let Ok(pos) = query.parse::<usize>() {
            return pos
                .checked_sub(1)
                .and_then(|i| self.tasks.get(i))
                .map(|task| task.id);
        }
        self.resolve_prefix(query)
    }

    fn resolve_prefix(&self, query: &str) -> Option<TaskId> {
        let mut hits = self.tasks.iter().filter(|t| t.id.matches_prefix(query));
        match (hits.next(), hits.next()) {
            (Some(task), None) => Some(task.id),
            _ => None,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Create a task at the front of the list.
    pub fn add(&mut self, title: &str, duration_min: u32) -> Result<&Task, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if !(MIN_TASK_DURATION_MIN..=MAX_TASK_DURATION_MIN).contains(&duration_min) {
            return Err(ValidationError::TaskDurationOutOfRange {
                got: duration_min,
                min: MIN_TASK_DURATION_MIN,
                max: MAX_TASK_DURATION_MIN,
            });
        }
        self.tasks.insert(0, Task::new(title.to_string(), duration_min));
        Ok(&self.tasks[0])
    }

    /// Remove a task. Returns `None` if it was not present.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    /// Mark a task done. Returns `None` if it was not present.
    pub fn complete(&mut self, id: TaskId) -> Option<CompleteOutcome> {
        let task = self.get_mut(id)?;
        let outcome = if task.completed {
            CompleteOutcome::AlreadyCompleted
        } else {
            CompleteOutcome::Completed
        };
        task.completed = true;
        task.progress = 100;
        Some(outcome)
    }

    /// Append an unchecked step. `Ok(None)` when the task is gone.
    pub fn add_step(
        &mut self,
        id: TaskId,
        text: &str,
    ) -> Result<Option<&TaskStep>, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyStepText);
        }
        let Some(task) = self.get_mut(id) else {
            return Ok(None);
        };
        task.steps.push(TaskStep {
            text: text.to_string(),
            completed: false,
        });
        Ok(task.steps.last())
    }

    /// Flip a step's checkbox and return its new value.
    pub fn toggle_step(&mut self, id: TaskId, index: usize) -> Option<bool> {
        let step = self.get_mut(id)?.steps.get_mut(index)?;
        step.completed = !step.completed;
        Some(step.completed)
    }

    /// Add focus time to a task. No-op for unknown ids.
    pub fn record_time(&mut self, id: TaskId, secs: u64) {
        if let Some(task) = self.get_mut(id) {
            task.time_spent_secs = task.time_spent_secs.saturating_add(secs);
        }
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}
