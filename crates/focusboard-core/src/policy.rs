//! Behavior switches for the two ambiguous transitions.

use serde::{Deserialize, Serialize};

/// What completing an already-completed task does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Repeat completions change nothing and award nothing.
    #[default]
    Idempotent,
    /// Every completion awards points and extends the streak.
    Repeatable,
}

/// What choosing a new focus length does to a session in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationChangePolicy {
    /// Apply at once and reset the timer, discarding the running session.
    #[default]
    Reset,
    /// While running, hold the new length until the next reset.
    Defer,
}
