//! Application shell: one controller owns all state and turns commands into
//! events.
//!
//! Every command runs to completion before the next one is accepted, so the
//! state never needs locking. Observers see each emitted event in order,
//! after the state change it describes.

mod command;
mod observer;

pub use command::Command;
pub use observer::Observer;

use chrono::{Local, Utc};
use serde::Serialize;

use crate::calm::{self, CalmDownGuide};
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::policy::CompletionPolicy;
use crate::stats::AppStats;
use crate::storage::Config;
use crate::task::{CompleteOutcome, TaskId, TaskStore, DEFAULT_TASK_DURATION_MIN};
use crate::timer::{FocusDuration, FocusTimer};

const FOCUS_ON_MESSAGE: &str = "Focus Mode ON - Minimize distractions!";
const FOCUS_OFF_MESSAGE: &str = "Focus Mode OFF";

/// All mutable application state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppState {
    pub tasks: TaskStore,
    pub timer: FocusTimer,
    pub stats: AppStats,
    pub focus_mode: bool,
    pub tracked_task: Option<TaskId>,
}

pub struct Controller {
    state: AppState,
    completion: CompletionPolicy,
    default_task_duration: u32,
    observers: Vec<Box<dyn Observer>>,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            completion: CompletionPolicy::default(),
            default_task_duration: DEFAULT_TASK_DURATION_MIN,
            observers: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            state: AppState {
                timer: config.timer(),
                ..AppState::default()
            },
            completion: config.tasks.completion,
            default_task_duration: config.tasks.default_duration_min,
            observers: Vec::new(),
        }
    }

    pub fn with_completion_policy(mut self, policy: CompletionPolicy) -> Self {
        self.completion = policy;
        self
    }

    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.state.tasks
    }

    pub fn timer(&self) -> &FocusTimer {
        &self.state.timer
    }

    pub fn stats(&self) -> &AppStats {
        &self.state.stats
    }

    pub fn completion_policy(&self) -> CompletionPolicy {
        self.completion
    }

    pub fn default_task_duration(&self) -> u32 {
        self.default_task_duration
    }

    pub fn calm_down(&self) -> &'static CalmDownGuide {
        calm::guide()
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Apply one command and notify observers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Validation`] for rejected input. The state
    /// is unchanged and no observer is called in that case.
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<Event>> {
        tracing::debug!(command = command.name(), "dispatch");
        let events = self.apply(command)?;
        for event in &events {
            for observer in &mut self.observers {
                observer.notify(event);
            }
        }
        Ok(events)
    }

    fn apply(&mut self, command: Command) -> Result<Vec<Event>, ValidationError> {
        let state = &mut self.state;
        let events = match command {
            Command::AddTask {
                title,
                duration_min,
            } => {
                let task = state
                    .tasks
                    .add(&title, duration_min.unwrap_or(self.default_task_duration))?;
                vec![Event::TaskAdded {
                    task_id: task.id,
                    title: task.title.clone(),
                    duration_min: task.duration_min,
                    at: Utc::now(),
                }]
            }
            Command::DeleteTask { task_id } => {
                if state.tasks.remove(task_id).is_none() {
                    return Ok(Vec::new());
                }
                let mut events = vec![Event::TaskDeleted {
                    task_id,
                    at: Utc::now(),
                }];
                if state.tracked_task == Some(task_id) {
                    state.tracked_task = None;
                    events.push(Event::TaskTracked {
                        task_id: None,
                        at: Utc::now(),
                    });
                }
                events
            }
            Command::CompleteTask { task_id } => self.complete_task(task_id),
            Command::AddStep { task_id, text } => {
                let Some(step) = state.tasks.add_step(task_id, &text)? else {
                    return Ok(Vec::new());
                };
                let text = step.text.clone();
                let index = state
                    .tasks
                    .get(task_id)
                    .map(|t| t.steps.len().saturating_sub(1))
                    .unwrap_or_default();
                vec![Event::StepAdded {
                    task_id,
                    index,
                    text,
                    at: Utc::now(),
                }]
            }
            Command::ToggleStep { task_id, index } => state
                .tasks
                .toggle_step(task_id, index)
                .map(|completed| Event::StepToggled {
                    task_id,
                    index,
                    completed,
                    at: Utc::now(),
                })
                .into_iter()
                .collect(),
            Command::TrackTask { task_id } => {
                if task_id.is_some_and(|id| state.tasks.get(id).is_none()) {
                    return Ok(Vec::new());
                }
                state.tracked_task = task_id;
                vec![Event::TaskTracked {
                    task_id,
                    at: Utc::now(),
                }]
            }
            Command::StartTimer => state.timer.start().into_iter().collect(),
            Command::PauseTimer => state.timer.pause().into_iter().collect(),
            Command::ToggleTimer => state.timer.toggle().into_iter().collect(),
            Command::ResetTimer => vec![state.timer.reset()],
            Command::Tick => {
                let Some(event) = state.timer.tick() else {
                    return Ok(Vec::new());
                };
                if let Some(id) = state.tracked_task {
                    state.tasks.record_time(id, 1);
                }
                if let Event::TimerCompleted { duration_secs, .. } = &event {
                    tracing::info!(duration_secs = *duration_secs, "focus session completed");
                }
                vec![event]
            }
            Command::ChangeDuration { minutes } => {
                let duration = FocusDuration::try_from(minutes)?;
                vec![state.timer.change_duration(duration)]
            }
            Command::ToggleFocusMode => {
                state.focus_mode = !state.focus_mode;
                let message = if state.focus_mode {
                    FOCUS_ON_MESSAGE
                } else {
                    FOCUS_OFF_MESSAGE
                };
                vec![Event::FocusModeChanged {
                    enabled: state.focus_mode,
                    message: message.to_string(),
                    at: Utc::now(),
                }]
            }
            Command::ShowCalmDown => vec![Event::CalmDownShown { at: Utc::now() }],
        };
        Ok(events)
    }

    fn complete_task(&mut self, task_id: TaskId) -> Vec<Event> {
        let state = &mut self.state;
        let Some(outcome) = state.tasks.complete(task_id) else {
            return Vec::new();
        };
        if outcome == CompleteOutcome::AlreadyCompleted
            && self.completion == CompletionPolicy::Idempotent
        {
            return Vec::new();
        }
        let title = state
            .tasks
            .get(task_id)
            .map(|t| t.title.clone())
            .unwrap_or_default();
        let points_awarded = state.stats.record_completion(Local::now().date_naive());
        tracing::info!(
            task = %task_id.short(),
            points = state.stats.points,
            streak = state.stats.streak,
            "task completed"
        );
        vec![
            Event::TaskCompleted {
                task_id,
                title,
                points_awarded,
                at: Utc::now(),
            },
            Event::StatsUpdated {
                points: state.stats.points,
                streak: state.stats.streak,
                level: state.stats.level().level,
                at: Utc::now(),
            },
        ]
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
