//! # Focusboard Core Library
//!
//! This library provides the state and transition logic for Focusboard, a
//! personal task board with a built-in focus timer. Every front end (the
//! `focusboard` terminal session today) is a thin layer that feeds
//! [`Command`]s into a [`Controller`] and renders the [`Event`]s it emits.
//!
//! ## Architecture
//!
//! - **Task Store**: ordered, in-memory task records (most recent first)
//! - **Focus Timer**: a tick-driven countdown state machine; the caller owns
//!   the 1-second tick source and calls `tick()`
//! - **Shell**: the [`Controller`] owning all state and dispatching commands
//! - **Storage**: TOML preferences only; tasks and stats live for one run
//!
//! ## Key Components
//!
//! - [`TaskStore`]: task collection and its operations
//! - [`FocusTimer`]: countdown state machine
//! - [`AppStats`]: points, streak and levels
//! - [`Controller`]: command dispatch and observer notification
//! - [`Config`]: user preferences

pub mod calm;
pub mod error;
pub mod events;
pub mod policy;
pub mod shell;
pub mod stats;
pub mod storage;
pub mod task;
pub mod timer;

pub use calm::{CalmDownGuide, Exercise};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use policy::{CompletionPolicy, DurationChangePolicy};
pub use shell::{AppState, Command, Controller, Observer};
pub use stats::{AppStats, LevelProgress};
pub use storage::Config;
pub use task::{CompleteOutcome, Task, TaskId, TaskStep, TaskStore};
pub use timer::{format_clock, FocusDuration, FocusTimer, TimerState};
