//! Integration tests for the command shell.
//!
//! These drive a `Controller` the way a front end does: commands in,
//! events out, state read back through the public queries.

use std::cell::RefCell;
use std::rc::Rc;

use focusboard_core::{
    Command, Config, Controller, CoreError, DurationChangePolicy, Event, TimerState,
    ValidationError,
};

fn add_task(ctl: &mut Controller, title: &str, minutes: u32) -> focusboard_core::TaskId {
    let events = ctl
        .dispatch(Command::AddTask {
            title: title.to_string(),
            duration_min: Some(minutes),
        })
        .unwrap();
    match &events[0] {
        Event::TaskAdded { task_id, .. } => *task_id,
        other => panic!("Expected TaskAdded, got {other:?}"),
    }
}

#[test]
fn test_write_report_scenario() {
    let mut ctl = Controller::new();
    let id = add_task(&mut ctl, "Write report", 30);

    assert_eq!(ctl.tasks().len(), 1);
    let task = ctl.tasks().get(id).unwrap();
    assert_eq!(task.duration_min, 30);
    assert_eq!(task.progress, 0);
    assert!(!task.completed);

    ctl.dispatch(Command::CompleteTask { task_id: id }).unwrap();
    assert_eq!(ctl.stats().points, 10);
    assert_eq!(ctl.stats().streak, 1);
    assert_eq!(ctl.tasks().get(id).unwrap().progress, 100);
    assert!(ctl.tasks().get(id).unwrap().completed);
}

#[test]
fn test_blank_title_leaves_store_unchanged() {
    let mut ctl = Controller::new();
    add_task(&mut ctl, "existing", 30);

    for title in ["", "   ", "\t\n"] {
        let result = ctl.dispatch(Command::AddTask {
            title: title.to_string(),
            duration_min: Some(30),
        });
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::EmptyTitle))
        ));
    }
    assert_eq!(ctl.tasks().len(), 1);
}

#[test]
fn test_double_delete_is_noop() {
    let mut ctl = Controller::new();
    let keep = add_task(&mut ctl, "keep", 30);
    let gone = add_task(&mut ctl, "gone", 30);

    assert_eq!(
        ctl.dispatch(Command::DeleteTask { task_id: gone }).unwrap().len(),
        1
    );
    assert!(ctl
        .dispatch(Command::DeleteTask { task_id: gone })
        .unwrap()
        .is_empty());
    assert_eq!(ctl.tasks().len(), 1);
    assert!(ctl.tasks().get(keep).is_some());
}

#[test]
fn test_complete_after_delete_awards_nothing() {
    let mut ctl = Controller::new();
    let id = add_task(&mut ctl, "gone", 30);
    ctl.dispatch(Command::DeleteTask { task_id: id }).unwrap();
    assert!(ctl
        .dispatch(Command::CompleteTask { task_id: id })
        .unwrap()
        .is_empty());
    assert_eq!(ctl.stats().points, 0);
}

#[test]
fn test_fifteen_minute_session_completes_once() {
    let mut ctl = Controller::new();
    ctl.dispatch(Command::ChangeDuration { minutes: 15 }).unwrap();
    ctl.dispatch(Command::StartTimer).unwrap();

    let completions = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&completions);
    ctl.subscribe(move |event: &Event| {
        if matches!(event, Event::TimerCompleted { .. }) {
            *counter.borrow_mut() += 1;
        }
    });

    for n in 1..900 {
        ctl.dispatch(Command::Tick).unwrap();
        assert_eq!(ctl.timer().time_left_secs(), 900 - n);
    }
    assert_eq!(*completions.borrow(), 0);

    ctl.dispatch(Command::Tick).unwrap();
    assert_eq!(*completions.borrow(), 1);
    assert_eq!(ctl.timer().time_left_secs(), 900);
    assert_eq!(ctl.timer().state(), TimerState::Idle);

    // Idle timer ignores further ticks.
    ctl.dispatch(Command::Tick).unwrap();
    assert_eq!(*completions.borrow(), 1);
}

#[test]
fn test_partial_session_progress() {
    let mut ctl = Controller::new();
    ctl.dispatch(Command::StartTimer).unwrap();
    for _ in 0..375 {
        ctl.dispatch(Command::Tick).unwrap();
    }
    assert_eq!(ctl.timer().time_left_secs(), 1500 - 375);
    assert_eq!(ctl.timer().progress_pct(), 25);
    assert_eq!(ctl.timer().display(), "18:45");
}

#[test]
fn test_change_duration_resets_in_every_state() {
    let mut ctl = Controller::new();

    ctl.dispatch(Command::ChangeDuration { minutes: 45 }).unwrap();
    assert_eq!(ctl.timer().time_left_secs(), 2700);

    ctl.dispatch(Command::StartTimer).unwrap();
    ctl.dispatch(Command::Tick).unwrap();
    ctl.dispatch(Command::ChangeDuration { minutes: 45 }).unwrap();
    assert_eq!(ctl.timer().time_left_secs(), 2700);
    assert_eq!(ctl.timer().state(), TimerState::Idle);

    ctl.dispatch(Command::StartTimer).unwrap();
    ctl.dispatch(Command::Tick).unwrap();
    ctl.dispatch(Command::PauseTimer).unwrap();
    ctl.dispatch(Command::ChangeDuration { minutes: 45 }).unwrap();
    assert_eq!(ctl.timer().time_left_secs(), 2700);
    assert_eq!(ctl.timer().state(), TimerState::Idle);
}

#[test]
fn test_config_policies_reach_controller() {
    let mut config = Config::default();
    config.update("timer.on_duration_change", "defer").unwrap();
    config.update("tasks.completion", "repeatable").unwrap();
    config.update("tasks.default_duration_min", "45").unwrap();

    let mut ctl = Controller::from_config(&config);
    assert_eq!(ctl.timer().policy(), DurationChangePolicy::Defer);

    let events = ctl
        .dispatch(Command::AddTask {
            title: "estimate from config".into(),
            duration_min: None,
        })
        .unwrap();
    assert!(matches!(events[0], Event::TaskAdded { duration_min: 45, .. }));

    let id = ctl.tasks().tasks()[0].id;
    ctl.dispatch(Command::CompleteTask { task_id: id }).unwrap();
    ctl.dispatch(Command::CompleteTask { task_id: id }).unwrap();
    assert_eq!(ctl.stats().points, 20);

    ctl.dispatch(Command::StartTimer).unwrap();
    ctl.dispatch(Command::ChangeDuration { minutes: 60 }).unwrap();
    assert!(ctl.timer().is_running());
    ctl.dispatch(Command::ResetTimer).unwrap();
    assert_eq!(ctl.timer().time_left_secs(), 3600);
}

#[test]
fn test_events_serialize_for_front_ends() {
    let mut ctl = Controller::new();
    add_task(&mut ctl, "json", 30);
    let events = ctl.dispatch(Command::ToggleTimer).unwrap();
    let json = serde_json::to_string(&events).unwrap();
    assert!(json.contains(r#""type":"TimerStarted""#));
    let state = serde_json::to_value(ctl.state()).unwrap();
    assert_eq!(state["tasks"][0]["title"], "json");
    assert_eq!(state["timer"]["state"], "running");
}
