//! Points, streak and level bookkeeping.
//!
//! The streak is a cumulative count of completed tasks. Nothing ever
//! decays or clears it during a run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Points granted for each completed task.
pub const POINTS_PER_TASK: u32 = 10;
/// Points needed to climb one level.
pub const POINTS_PER_LEVEL: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStats {
    pub points: u32,
    pub streak: u32,
    /// Completions on `last_completed_on`.
    pub completed_today: u32,
    pub last_completed_on: Option<NaiveDate>,
}

/// Where the current points sit within the level ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Starts at 1.
    pub level: u32,
    pub level_points: u32,
    pub points_to_next_level: u32,
    /// 0..=99
    pub percent: u8,
}

impl AppStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one completed task. Returns the points awarded.
    pub fn record_completion(&mut self, today: NaiveDate) -> u32 {
        self.points = self.points.saturating_add(POINTS_PER_TASK);
        self.streak = self.streak.saturating_add(1);
        self.completed_today = match self.last_completed_on {
            Some(day) if day == today => self.completed_today.saturating_add(1),
            _ => 1,
        };
        self.last_completed_on = Some(today);
        POINTS_PER_TASK
    }

    /// Completions credited on `today`, zero if the last one was earlier.
    pub fn completed_on(&self, today: NaiveDate) -> u32 {
        if self.last_completed_on == Some(today) {
            self.completed_today
        } else {
            0
        }
    }

    pub fn level(&self) -> LevelProgress {
        let level_points = self.points % POINTS_PER_LEVEL;
        LevelProgress {
            level: self.points / POINTS_PER_LEVEL + 1,
            level_points,
            points_to_next_level: POINTS_PER_LEVEL - level_points,
            percent: (level_points * 100 / POINTS_PER_LEVEL) as u8,
        }
    }
}
