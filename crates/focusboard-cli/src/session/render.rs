//! Turns controller events into terminal lines.

use focusboard_core::{calm, format_clock, Config, Event, Observer};

/// Prints one message per event that deserves one.
pub struct Renderer {
    notifications: bool,
    bell: bool,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            notifications: config.notifications.enabled,
            bell: config.notifications.bell,
        }
    }

    pub fn render(&self, event: &Event) -> Option<String> {
        let line = match event {
            Event::TaskAdded { title, .. } => format!("Task added: {title}"),
            Event::TaskDeleted { .. } => "Task deleted".to_string(),
            Event::TaskCompleted { points_awarded, .. } => {
                format!("Great job! You earned {points_awarded} points!")
            }
            Event::StatsUpdated {
                points,
                streak,
                level,
                ..
            } => format!("Total Points: {points}  Streak: {streak}  Level: {level}"),
            Event::StepAdded { index, text, .. } => format!("Step {} added: {text}", index + 1),
            Event::StepToggled {
                index, completed, ..
            } => {
                let mark = if *completed { "checked" } else { "unchecked" };
                format!("Step {} {mark}", index + 1)
            }
            Event::TaskTracked { task_id, .. } => match task_id {
                Some(id) => format!("Tracking focus time on {}", id.short()),
                None => "No task tracked".to_string(),
            },
            Event::TimerStarted { time_left_secs, .. } => {
                format!("Focus started: {} left", format_clock(*time_left_secs))
            }
            Event::TimerPaused { time_left_secs, .. } => {
                format!("Paused at {}", format_clock(*time_left_secs))
            }
            // Once a minute is enough for a scrolling terminal.
            Event::TimerTicked {
                time_left_secs,
                progress_pct,
                ..
            } if time_left_secs % 60 == 0 => format!(
                "{} remaining ({progress_pct}%)",
                format_clock(*time_left_secs)
            ),
            Event::TimerTicked { .. } => return None,
            Event::TimerCompleted { .. } => {
                if !self.notifications {
                    return None;
                }
                let bell = if self.bell { "\x07" } else { "" };
                format!("{bell}Focus Complete! Great job! You completed a focus session!\nTime for a break!")
            }
            Event::TimerReset { duration_secs, .. } => {
                format!("Timer reset to {}", format_clock(*duration_secs))
            }
            Event::DurationChanged {
                minutes, deferred, ..
            } => {
                if *deferred {
                    format!("Focus duration will change to {minutes} min after this session")
                } else {
                    format!("Focus duration set to {minutes} min")
                }
            }
            Event::FocusModeChanged { message, .. } => message.clone(),
            Event::CalmDownShown { .. } => calm::guide().render(),
        };
        Some(line)
    }
}

impl Observer for Renderer {
    fn notify(&mut self, event: &Event) {
        if let Some(line) = self.render(event) {
            println!("{line}");
        }
    }
}
