use serde::{Deserialize, Serialize};

use crate::task::TaskId;

/// Everything a front end can ask the application to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    AddTask {
        title: String,
        /// Falls back to the configured default estimate.
        #[serde(default)]
        duration_min: Option<u32>,
    },
    DeleteTask {
        task_id: TaskId,
    },
    CompleteTask {
        task_id: TaskId,
    },
    AddStep {
        task_id: TaskId,
        text: String,
    },
    ToggleStep {
        task_id: TaskId,
        index: usize,
    },
    /// Choose which task accrues focus time while the timer runs.
    TrackTask {
        task_id: Option<TaskId>,
    },
    StartTimer,
    PauseTimer,
    ToggleTimer,
    ResetTimer,
    /// One beat of the 1-second tick source.
    Tick,
    ChangeDuration {
        minutes: u32,
    },
    ToggleFocusMode,
    ShowCalmDown,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddTask { .. } => "add_task",
            Command::DeleteTask { .. } => "delete_task",
            Command::CompleteTask { .. } => "complete_task",
            Command::AddStep { .. } => "add_step",
            Command::ToggleStep { .. } => "toggle_step",
            Command::TrackTask { .. } => "track_task",
            Command::StartTimer => "start_timer",
            Command::PauseTimer => "pause_timer",
            Command::ToggleTimer => "toggle_timer",
            Command::ResetTimer => "reset_timer",
            Command::Tick => "tick",
            Command::ChangeDuration { .. } => "change_duration",
            Command::ToggleFocusMode => "toggle_focus_mode",
            Command::ShowCalmDown => "show_calm_down",
        }
    }
}
