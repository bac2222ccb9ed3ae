use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// The focus session lengths offered by the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FocusDuration {
    Fifteen,
    #[default]
    TwentyFive,
    FortyFive,
    Sixty,
}

impl FocusDuration {
    pub const ALL: [FocusDuration; 4] = [
        FocusDuration::Fifteen,
        FocusDuration::TwentyFive,
        FocusDuration::FortyFive,
        FocusDuration::Sixty,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            FocusDuration::Fifteen => 15,
            FocusDuration::TwentyFive => 25,
            FocusDuration::FortyFive => 45,
            FocusDuration::Sixty => 60,
        }
    }

    pub fn secs(self) -> u32 {
        self.minutes() * 60
    }
}

impl TryFrom<u32> for FocusDuration {
    type Error = ValidationError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.minutes() == minutes)
            .ok_or(ValidationError::UnsupportedFocusDuration(minutes))
    }
}

impl From<FocusDuration> for u32 {
    fn from(d: FocusDuration) -> u32 {
        d.minutes()
    }
}

impl fmt::Display for FocusDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

/// Render seconds as zero-padded `MM:SS`.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
