//! Property tests for the focus timer.

use focusboard_core::{DurationChangePolicy, Event, FocusDuration, FocusTimer, TimerState};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Start,
    Pause,
    Reset,
    Tick(u16),
    Change(FocusDuration),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Start),
        Just(Op::Pause),
        Just(Op::Reset),
        (1u16..1200).prop_map(Op::Tick),
        prop::sample::select(FocusDuration::ALL.to_vec()).prop_map(Op::Change),
    ]
}

fn policy() -> impl Strategy<Value = DurationChangePolicy> {
    prop_oneof![
        Just(DurationChangePolicy::Reset),
        Just(DurationChangePolicy::Defer)
    ]
}

proptest! {
    #[test]
    fn time_left_never_exceeds_duration(ops in prop::collection::vec(op(), 0..40), policy in policy()) {
        let mut timer = FocusTimer::new(FocusDuration::Fifteen).with_policy(policy);
        for op in ops {
            match op {
                Op::Start => { timer.start(); }
                Op::Pause => { timer.pause(); }
                Op::Reset => { timer.reset(); }
                Op::Tick(n) => { for _ in 0..n { timer.tick(); } }
                Op::Change(d) => { timer.change_duration(d); }
            }
            prop_assert!(timer.time_left_secs() <= timer.duration_secs());
            prop_assert!(timer.time_left_secs() > 0);
            prop_assert!(timer.progress_pct() <= 100);
            prop_assert_ne!(timer.state(), TimerState::Completed);
        }
    }

    #[test]
    fn n_ticks_leave_duration_minus_n(n in 0u32..900) {
        let mut timer = FocusTimer::new(FocusDuration::Fifteen);
        timer.start();
        for _ in 0..n {
            timer.tick();
        }
        prop_assert_eq!(timer.time_left_secs(), 900 - n);
        let expected = (f64::from(n) / 900.0 * 100.0).round() as u8;
        prop_assert_eq!(timer.progress_pct(), expected);
    }

    #[test]
    fn completion_reported_once_per_session(extra in 0u32..300) {
        let mut timer = FocusTimer::new(FocusDuration::Fifteen);
        timer.start();
        let completions = (0..900 + extra)
            .filter_map(|_| timer.tick())
            .filter(|e| matches!(e, Event::TimerCompleted { .. }))
            .count();
        prop_assert_eq!(completions, 1);
        prop_assert_eq!(timer.time_left_secs(), 900);
    }
}
