//! Interactive board session.
//!
//! A single task owns the controller. It waits on two sources: prompt lines
//! from stdin and the 1-second ticker, which is armed only while the focus
//! timer runs.

mod input;
mod render;
mod ticker;

use std::time::Duration;

use focusboard_core::{
    calm, Command, Config, Controller, CoreError, Event, TaskId, TimerState,
    ValidationError,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use input::{Input, HELP};
use render::Renderer;
use ticker::Ticker;

enum Mode {
    Normal,
    /// The add-task prompt stays open until a title arrives or is cancelled.
    AwaitingTitle { minutes: Option<u32> },
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    controller: Controller,
    mode: Mode,
    manual_clock: bool,
    show_tips: bool,
}

impl Session {
    pub fn new(mut controller: Controller, config: &Config, manual_clock: bool) -> Self {
        controller.subscribe(Renderer::new(config));
        Self {
            controller,
            mode: Mode::Normal,
            manual_clock,
            show_tips: config.ui.show_tips,
        }
    }

    pub async fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.greet();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut ticker = Ticker::new(Duration::from_secs(1));

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if self.handle_line(&line) == Flow::Quit {
                        break;
                    }
                }
                _ = ticker.tick(), if ticker.is_armed() => {
                    self.dispatch(Command::Tick);
                }
            }
            if !self.manual_clock {
                ticker.follow(self.controller.timer().is_running());
            }
        }

        ticker.disarm();
        println!("Bye!");
        Ok(())
    }

    fn greet(&self) {
        println!("Focusboard - Ready to focus!");
        if self.show_tips {
            print!("{}", calm::render_tips());
        }
        println!("Type 'help' for commands.");
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        if let Mode::AwaitingTitle { minutes } = std::mem::replace(&mut self.mode, Mode::Normal) {
            if line.trim().eq_ignore_ascii_case("cancel") {
                println!("Cancelled.");
            } else {
                self.add_task(line, minutes);
            }
            return Flow::Continue;
        }

        match input::parse(line) {
            Ok(Some(input)) => self.execute(input),
            Ok(None) => Flow::Continue,
            Err(message) => {
                println!("{message}");
                Flow::Continue
            }
        }
    }

    fn execute(&mut self, input: Input) -> Flow {
        match input {
            Input::Add { title, minutes } => match title {
                Some(title) => self.add_task(&title, minutes),
                None => self.prompt_title(minutes),
            },
            Input::Delete(query) => {
                if let Some(task_id) = self.resolve(&query) {
                    self.dispatch(Command::DeleteTask { task_id });
                }
            }
            Input::Done(query) => {
                if let Some(task_id) = self.resolve(&query) {
                    if self.dispatch(Command::CompleteTask { task_id }).is_empty() {
                        println!("Task already completed.");
                    }
                }
            }
            Input::Step { task, text } => {
                if let Some(task_id) = self.resolve(&task) {
                    self.dispatch(Command::AddStep { task_id, text });
                }
            }
            Input::Check { task, step } => {
                if let Some(task_id) = self.resolve(&task) {
                    let index = step - 1;
                    if self
                        .dispatch(Command::ToggleStep { task_id, index })
                        .is_empty()
                    {
                        println!("Task has no step {step}");
                    }
                }
            }
            Input::Track(None) => {
                self.dispatch(Command::TrackTask { task_id: None });
            }
            Input::Track(Some(query)) => {
                if let Some(task_id) = self.resolve(&query) {
                    self.dispatch(Command::TrackTask {
                        task_id: Some(task_id),
                    });
                }
            }
            Input::Start => {
                if self.dispatch(Command::StartTimer).is_empty() {
                    println!("Timer is already running");
                }
            }
            Input::Pause => {
                if self.dispatch(Command::PauseTimer).is_empty() {
                    println!("Timer is not running");
                }
            }
            Input::Toggle => {
                self.dispatch(Command::ToggleTimer);
            }
            Input::Reset => {
                self.dispatch(Command::ResetTimer);
            }
            Input::Tick(n) => {
                for _ in 0..n {
                    self.dispatch(Command::Tick);
                }
            }
            Input::Duration(minutes) => {
                self.dispatch(Command::ChangeDuration { minutes });
            }
            Input::Focus => {
                self.dispatch(Command::ToggleFocusMode);
            }
            Input::Calm => {
                self.dispatch(Command::ShowCalmDown);
            }
            Input::List => self.print_tasks(),
            Input::Stats => self.print_stats(),
            Input::Status => self.print_status(),
            Input::Help => println!("{HELP}"),
            Input::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn add_task(&mut self, title: &str, minutes: Option<u32>) {
        let result = self.controller.dispatch(Command::AddTask {
            title: title.to_string(),
            duration_min: minutes,
        });
        match result {
            Ok(_) => {}
            Err(CoreError::Validation(ValidationError::EmptyTitle)) => {
                println!("Task title cannot be empty.");
                self.prompt_title(minutes);
            }
            Err(e) => println!("{e}"),
        }
    }

    fn prompt_title(&mut self, minutes: Option<u32>) {
        println!("Task title (or 'cancel'):");
        self.mode = Mode::AwaitingTitle { minutes };
    }

    /// Dispatch and report rejected input on the terminal.
    fn dispatch(&mut self, command: Command) -> Vec<Event> {
        match self.controller.dispatch(command) {
            Ok(events) => events,
            Err(e) => {
                println!("{e}");
                Vec::new()
            }
        }
    }

    fn resolve(&self, query: &str) -> Option<TaskId> {
        let found = self.controller.tasks().resolve(query);
        if found.is_none() {
            println!("No task matches '{query}'");
        }
        found
    }

    fn print_tasks(&self) {
        let tasks = self.controller.tasks().tasks();
        if tasks.is_empty() {
            println!("No tasks yet. Add one with 'add <title>'.");
            return;
        }
        let tracked = self.controller.state().tracked_task;
        for (pos, task) in tasks.iter().enumerate() {
            let mark = if task.completed { "x" } else { " " };
            let pin = if tracked == Some(task.id) { " *" } else { "" };
            println!(
                "{:>2}. [{mark}] {}  ({} min, {}%, {}/{} steps, {} spent)  #{}{pin}",
                pos + 1,
                task.title,
                task.duration_min,
                task.progress,
                task.steps_done(),
                task.steps.len(),
                format_spent(task.time_spent_secs),
                task.id.short(),
            );
            for (n, step) in task.steps.iter().enumerate() {
                let mark = if step.completed { "x" } else { " " };
                println!("      {}. [{mark}] {}", n + 1, step.text);
            }
        }
    }

    fn print_stats(&self) {
        let stats = self.controller.stats();
        let level = stats.level();
        println!(
            "Points: {}  Streak: {}  Level: {} ({}/100, {} to next)",
            stats.points, stats.streak, level.level, level.level_points, level.points_to_next_level
        );
        let today = chrono::Local::now().date_naive();
        println!("Completed today: {}", stats.completed_on(today));
    }

    fn print_status(&self) {
        let timer = self.controller.timer();
        let state = match timer.state() {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Completed => "completed",
        };
        println!(
            "{} {state} {}% of {} min",
            timer.display(),
            timer.progress_pct(),
            timer.duration().minutes()
        );
        if let Some(next) = timer.pending_duration() {
            println!("Next session: {next}");
        }
        let focus = if self.controller.state().focus_mode {
            "on"
        } else {
            "off"
        };
        println!("Focus mode: {focus}");
    }
}

fn format_spent(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Controller::new(), &Config::default(), true)
    }

    #[test]
    fn empty_title_keeps_prompt_open() {
        let mut s = session();
        s.handle_line("add");
        assert!(matches!(s.mode, Mode::AwaitingTitle { .. }));
        s.handle_line("   ");
        assert!(matches!(s.mode, Mode::AwaitingTitle { .. }));
        assert!(s.controller.tasks().is_empty());
        s.handle_line("Write report");
        assert!(matches!(s.mode, Mode::Normal));
        assert_eq!(s.controller.tasks().tasks()[0].title, "Write report");
    }

    #[test]
    fn cancel_closes_prompt() {
        let mut s = session();
        s.handle_line("add --min 45");
        s.handle_line("cancel");
        assert!(matches!(s.mode, Mode::Normal));
        assert!(s.controller.tasks().is_empty());
    }

    #[test]
    fn prompt_keeps_requested_minutes() {
        let mut s = session();
        s.handle_line("add --min 45");
        s.handle_line("Plan week");
        assert_eq!(s.controller.tasks().tasks()[0].duration_min, 45);
    }

    #[test]
    fn done_by_position_awards_points() {
        let mut s = session();
        s.handle_line("add Write report");
        s.handle_line("done 1");
        assert_eq!(s.controller.stats().points, 10);
        s.handle_line("done 1");
        assert_eq!(s.controller.stats().points, 10);
    }

    #[test]
    fn manual_ticks_complete_session() {
        let mut s = session();
        s.handle_line("duration 15");
        s.handle_line("start");
        s.handle_line("tick 899");
        assert_eq!(s.controller.timer().time_left_secs(), 1);
        s.handle_line("tick");
        assert_eq!(s.controller.timer().time_left_secs(), 900);
        assert!(!s.controller.timer().is_running());
    }

    #[test]
    fn past_the_end_position_touches_nothing() {
        let mut s = session();
        s.handle_line("add one");
        s.handle_line("add two");
        s.handle_line("done 3");
        s.handle_line("del 3");
        assert_eq!(s.controller.tasks().len(), 2);
        assert_eq!(s.controller.stats().points, 0);
    }

    #[test]
    fn id_prefix_needs_hash_marker() {
        let mut s = session();
        s.handle_line("add one");
        let id = s.controller.tasks().tasks()[0].id;
        s.handle_line(&format!("done #{}", id.short()));
        assert!(s.controller.tasks().tasks()[0].completed);
    }

    #[test]
    fn oversized_tick_count_is_rejected() {
        let mut s = session();
        s.handle_line("start");
        s.handle_line("tick 4000000000");
        assert_eq!(s.controller.timer().time_left_secs(), 25 * 60);
        assert!(s.controller.timer().is_running());
    }

    #[test]
    fn quit_ends_session() {
        let mut s = session();
        assert_eq!(s.handle_line("quit"), Flow::Quit);
        assert_eq!(s.handle_line("list"), Flow::Continue);
    }

    #[test]
    fn spent_time_format() {
        assert_eq!(format_spent(0), "0:00");
        assert_eq!(format_spent(3725), "62:05");
    }
}
