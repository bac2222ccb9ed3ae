//! Parsing of prompt lines into session inputs.

use indoc::indoc;

/// One line typed at the board prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `add [title...] [--min N]`; no title opens the title prompt.
    Add {
        title: Option<String>,
        minutes: Option<u32>,
    },
    Delete(String),
    Done(String),
    Step {
        task: String,
        text: String,
    },
    /// 1-based step number.
    Check {
        task: String,
        step: usize,
    },
    Track(Option<String>),
    Start,
    Pause,
    Toggle,
    Reset,
    Tick(u32),
    Duration(u32),
    Focus,
    Calm,
    List,
    Stats,
    Status,
    Help,
    Quit,
}

/// Longest run of manual ticks accepted at once: one 60-minute session.
pub const MAX_TICKS: u32 = 3600;

pub const HELP: &str = indoc! {"
    Commands:
      add [title] [--min N]   add a task (prompts for a title if omitted)
      del <task>              delete a task
      done <task>             complete a task
      step <task> <text>      add a step to a task
      check <task> <n>        toggle step n of a task
      track [task]            accrue focus time on a task (no arg: stop)
      list                    show tasks
      start | pause | toggle  control the focus timer
      reset                   stop and refill the timer
      tick [n]                advance the timer n seconds (at most 3600)
      duration <15|25|45|60>  choose the focus length
      focus                   toggle focus mode
      calm                    breathing and grounding exercises
      stats | status          show points or timer state
      help | quit
    <task> is a list position, or # followed by the start of a task id."};

/// Parse a prompt line. `Ok(None)` for blank lines.
pub fn parse(line: &str) -> Result<Option<Input>, String> {
    let line = line.trim();
    let Some((verb, rest)) = split_word(line) else {
        return Ok(None);
    };

    let input = match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => parse_add(rest)?,
        "del" | "delete" | "rm" => Input::Delete(require(rest, "del <task>")?.to_string()),
        "done" | "complete" => Input::Done(require(rest, "done <task>")?.to_string()),
        "step" => {
            let (task, text) = split_word(rest).ok_or("usage: step <task> <text>")?;
            Input::Step {
                task: task.to_string(),
                text: text.to_string(),
            }
        }
        "check" => {
            let (task, n) = split_word(rest).ok_or("usage: check <task> <n>")?;
            let step = n
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or("usage: check <task> <n>")?;
            Input::Check {
                task: task.to_string(),
                step,
            }
        }
        "track" => Input::Track(split_word(rest).map(|(task, _)| task.to_string())),
        "start" => Input::Start,
        "pause" => Input::Pause,
        "toggle" => Input::Toggle,
        "reset" => Input::Reset,
        "tick" => {
            let n = if rest.is_empty() {
                1
            } else {
                rest.parse::<u32>()
                    .map_err(|_| format!("cannot parse '{rest}' as a count"))?
            };
            if n > MAX_TICKS {
                return Err(format!("tick accepts at most {MAX_TICKS} seconds at once"));
            }
            Input::Tick(n)
        }
        "duration" | "dur" => {
            let minutes = require(rest, "duration <15|25|45|60>")?
                .parse::<u32>()
                .map_err(|_| format!("cannot parse '{rest}' as minutes"))?;
            Input::Duration(minutes)
        }
        "focus" => Input::Focus,
        "calm" => Input::Calm,
        "list" | "ls" => Input::List,
        "stats" => Input::Stats,
        "status" => Input::Status,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };
    Ok(Some(input))
}

fn parse_add(rest: &str) -> Result<Input, String> {
    let mut title = Vec::new();
    let mut minutes = None;
    let mut words = rest.split_whitespace();
    while let Some(word) = words.next() {
        if word == "--min" {
            let value = words.next().ok_or("--min needs a number of minutes")?;
            minutes = Some(
                value
                    .parse::<u32>()
                    .map_err(|_| format!("cannot parse '{value}' as minutes"))?,
            );
        } else {
            title.push(word);
        }
    }
    Ok(Input::Add {
        title: (!title.is_empty()).then(|| title.join(" ")),
        minutes,
    })
}

fn split_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    match s.split_once(char::is_whitespace) {
        Some((head, tail)) => Some((head, tail.trim())),
        None => Some((s, "")),
    }
}

fn require<'a>(rest: &'a str, usage: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("usage: {usage}"))
    } else {
        Ok(rest)
    }
}
