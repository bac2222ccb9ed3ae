mod duration;
mod engine;

pub use duration::{format_clock, FocusDuration};
pub use engine::{FocusTimer, TimerState};
