use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::TaskId;

/// Every state change in the system produces an Event.
/// Front ends subscribe to them through the shell's observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskAdded {
        task_id: TaskId,
        title: String,
        duration_min: u32,
        at: DateTime<Utc>,
    },
    TaskDeleted {
        task_id: TaskId,
        at: DateTime<Utc>,
    },
    TaskCompleted {
        task_id: TaskId,
        title: String,
        /// Points this completion added to the total.
        points_awarded: u32,
        at: DateTime<Utc>,
    },
    StepAdded {
        task_id: TaskId,
        index: usize,
        text: String,
        at: DateTime<Utc>,
    },
    StepToggled {
        task_id: TaskId,
        index: usize,
        completed: bool,
        at: DateTime<Utc>,
    },
    /// The task that accrues focus time changed (`None` = no task).
    TaskTracked {
        task_id: Option<TaskId>,
        at: DateTime<Utc>,
    },
    StatsUpdated {
        points: u32,
        streak: u32,
        level: u32,
        at: DateTime<Utc>,
    },
    TimerStarted {
        time_left_secs: u32,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        time_left_secs: u32,
        at: DateTime<Utc>,
    },
    TimerTicked {
        time_left_secs: u32,
        progress_pct: u8,
        at: DateTime<Utc>,
    },
    /// A focus session ran to zero. The timer has already been reset.
    TimerCompleted {
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    DurationChanged {
        minutes: u32,
        /// True when the change waits for the running session to end.
        deferred: bool,
        at: DateTime<Utc>,
    },
    FocusModeChanged {
        enabled: bool,
        message: String,
        at: DateTime<Utc>,
    },
    CalmDownShown {
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Snake-case name of the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::TaskAdded { .. } => "task_added",
            Event::TaskDeleted { .. } => "task_deleted",
            Event::TaskCompleted { .. } => "task_completed",
            Event::StepAdded { .. } => "step_added",
            Event::StepToggled { .. } => "step_toggled",
            Event::TaskTracked { .. } => "task_tracked",
            Event::StatsUpdated { .. } => "stats_updated",
            Event::TimerStarted { .. } => "timer_started",
            Event::TimerPaused { .. } => "timer_paused",
            Event::TimerTicked { .. } => "timer_ticked",
            Event::TimerCompleted { .. } => "timer_completed",
            Event::TimerReset { .. } => "timer_reset",
            Event::DurationChanged { .. } => "duration_changed",
            Event::FocusModeChanged { .. } => "focus_mode_changed",
            Event::CalmDownShown { .. } => "calm_down_shown",
        }
    }
}
