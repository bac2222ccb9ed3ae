//! Basic CLI E2E tests.
//!
//! Tests drive the built binary with piped stdin and an isolated config
//! directory, then check what it printed.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command with `input` on stdin and return (stdout, stderr, code).
fn run_cli(config_dir: &Path, args: &[&str], input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_focusboard"))
        .args(args)
        .env("FOCUSBOARD_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait on CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, stderr, code)
}

fn board(input: &str) -> String {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(dir.path(), &["run", "--manual-clock"], input);
    assert_eq!(code, 0, "session failed: {stderr}");
    stdout
}

#[test]
fn test_session_greets_and_quits() {
    let out = board("quit\n");
    assert!(out.contains("Ready to focus!"));
    assert!(out.contains("Tips for Success:"));
    assert!(out.contains("Bye!"));
}

#[test]
fn test_eof_ends_session() {
    let out = board("list\n");
    assert!(out.contains("No tasks yet."));
    assert!(out.contains("Bye!"));
}

#[test]
fn test_add_and_complete_task() {
    let out = board("add Write report\ndone 1\nstats\nlist\nquit\n");
    assert!(out.contains("Task added: Write report"));
    assert!(out.contains("Great job! You earned 10 points!"));
    assert!(out.contains("Total Points: 10  Streak: 1  Level: 1"));
    assert!(out.contains("Points: 10  Streak: 1"));
    assert!(out.contains("[x] Write report  (30 min, 100%"));
}

#[test]
fn test_second_completion_awards_nothing() {
    let out = board("add Write report\ndone 1\ndone 1\nquit\n");
    assert_eq!(out.matches("You earned").count(), 1);
    assert!(out.contains("Task already completed."));
}

#[test]
fn test_blank_title_reprompts() {
    let out = board("add\n   \nPlan week\nlist\nquit\n");
    assert!(out.contains("Task title cannot be empty."));
    assert_eq!(out.matches("Task title (or 'cancel'):").count(), 2);
    assert!(out.contains("Task added: Plan week"));
}

#[test]
fn test_steps_are_checked_off() {
    let out = board(
        "add Write report\nstep 1 outline\nstep 1 draft\nstep 1 edit\nstep 1 send\ncheck 1 1\nlist\nquit\n",
    );
    assert!(out.contains("Step 4 added: send"));
    assert!(out.contains("Step 1 checked"));
    assert!(out.contains("      1. [x] outline"));
    assert!(out.contains("(30 min, 0%, 1/4 steps"));
}

#[test]
fn test_focus_session_completes_once() {
    let out = board("duration 15\nstart\ntick 899\nstatus\ntick\nstatus\nquit\n");
    assert!(out.contains("Focus duration set to 15 min"));
    assert!(out.contains("00:01 running"));
    assert_eq!(out.matches("Focus Complete!").count(), 1);
    assert!(out.contains("Time for a break!"));
    assert!(out.contains("15:00 idle 0% of 15 min"));
}

#[test]
fn test_unsupported_duration_rejected() {
    let out = board("duration 20\nstatus\nquit\n");
    assert!(out.contains("20"));
    assert!(out.contains("25:00 idle 0% of 25 min"));
}

#[test]
fn test_focus_mode_and_calm() {
    let out = board("focus\nfocus\ncalm\nquit\n");
    assert!(out.contains("Focus Mode ON - Minimize distractions!"));
    assert!(out.contains("Focus Mode OFF"));
    assert!(out.contains("Box Breathing"));
}

#[test]
fn test_unknown_task_reported() {
    let out = board("done 3\nquit\n");
    assert!(out.contains("No task matches '3'"));
}

#[test]
fn test_calm_command() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["calm"], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("5-4-3-2-1 Grounding"));
}

#[test]
fn test_config_get_set() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "timer.focus_minutes"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "25");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "timer.focus_minutes", "45"], "");
    assert_eq!(code, 0);
    assert!(dir.path().join("config.toml").exists());

    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "timer.focus_minutes"], "");
    assert_eq!(stdout.trim(), "45");

    let (stdout, _, code) = run_cli(dir.path(), &["run", "--manual-clock"], "status\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("45:00 idle"));
}

#[test]
fn test_config_rejects_bad_value() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "set", "timer.focus_minutes", "20"], "");
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));

    let (_, stderr, code) = run_cli(dir.path(), &["config", "get", "timer.nope"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_list_json() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "list"], "");
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["tasks"]["completion"], "idempotent");
}
