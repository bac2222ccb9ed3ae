//! Focus timer state machine.
//!
//! The timer does not own a clock. The caller arms a 1-second tick source
//! while [`FocusTimer::is_running`] is true and calls `tick()` on each beat.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Idle            (pause keeps time_left)
//! Running -> Completed -> Idle       (time_left hit zero, auto-reset)
//! any -> Idle                        (reset, change_duration)
//! ```
//!
//! ## Usage
//!
//! ```
//! use focusboard_core::{FocusDuration, FocusTimer};
//!
//! let mut timer = FocusTimer::new(FocusDuration::Fifteen);
//! timer.start();
//! timer.tick();
//! assert_eq!(timer.time_left_secs(), 899);
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::duration::{format_clock, FocusDuration};
use crate::events::Event;
use crate::policy::DurationChangePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    /// Transient: set while a finished session is being reported, then
    /// replaced by `Idle` within the same `tick()`.
    Completed,
}

/// Countdown for one focus session at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    duration: FocusDuration,
    time_left_secs: u32,
    state: TimerState,
    /// Length chosen while running under [`DurationChangePolicy::Defer`].
    #[serde(default)]
    pending: Option<FocusDuration>,
    #[serde(default)]
    policy: DurationChangePolicy,
}

impl FocusTimer {
    /// Create an idle timer with a full session ready.
    pub fn new(duration: FocusDuration) -> Self {
        Self {
            duration,
            time_left_secs: duration.secs(),
            state: TimerState::Idle,
            pending: None,
            policy: DurationChangePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DurationChangePolicy) -> Self {
        self.policy = policy;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn duration(&self) -> FocusDuration {
        self.duration
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration.secs()
    }

    pub fn time_left_secs(&self) -> u32 {
        self.time_left_secs
    }

    pub fn pending_duration(&self) -> Option<FocusDuration> {
        self.pending
    }

    pub fn policy(&self) -> DurationChangePolicy {
        self.policy
    }

    /// Elapsed share of the session, rounded to a whole percent in 0..=100.
    pub fn progress_pct(&self) -> u8 {
        let total = self.duration_secs();
        if total == 0 {
            return 0;
        }
        let elapsed = total.saturating_sub(self.time_left_secs);
        let pct = (f64::from(elapsed) / f64::from(total) * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_clock(self.time_left_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.is_running() {
            return None;
        }
        self.state = TimerState::Running;
        Some(Event::TimerStarted {
            time_left_secs: self.time_left_secs,
            duration_secs: self.duration_secs(),
            at: Utc::now(),
        })
    }

    /// Stop counting but keep the remaining time.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.state = TimerState::Idle;
        Some(Event::TimerPaused {
            time_left_secs: self.time_left_secs,
            at: Utc::now(),
        })
    }

    /// Start when idle, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stop and refill. A deferred duration change takes effect here.
    pub fn reset(&mut self) -> Event {
        if let Some(next) = self.pending.take() {
            self.duration = next;
        }
        self.state = TimerState::Idle;
        self.time_left_secs = self.duration.secs();
        Event::TimerReset {
            duration_secs: self.duration_secs(),
            at: Utc::now(),
        }
    }

    /// Advance one second. Returns `None` unless the timer is running.
    ///
    /// When the countdown reaches zero the timer resets itself and the
    /// returned event is `TimerCompleted`, exactly once per session.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.time_left_secs = self.time_left_secs.saturating_sub(1);
        if self.time_left_secs == 0 {
            self.state = TimerState::Completed;
            let duration_secs = self.duration_secs();
            self.reset();
            return Some(Event::TimerCompleted {
                duration_secs,
                at: Utc::now(),
            });
        }
        Some(Event::TimerTicked {
            time_left_secs: self.time_left_secs,
            progress_pct: self.progress_pct(),
            at: Utc::now(),
        })
    }

    pub fn change_duration(&mut self, duration: FocusDuration) -> Event {
        let deferred = self.policy == DurationChangePolicy::Defer && self.is_running();
        if deferred {
            self.pending = Some(duration);
        } else {
            self.pending = None;
            self.duration = duration;
            self.reset();
        }
        Event::DurationChanged {
            minutes: duration.minutes(),
            deferred,
            at: Utc::now(),
        }
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(FocusDuration::default())
    }
}
