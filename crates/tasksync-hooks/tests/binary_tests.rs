// Rust guideline compliant 2026-10-18

//! End-to-end tests for the `tasksync-hook` binary.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_hook(home: &Path, input: &str) -> Output {
    run_hook_with_args(home, input, &[])
}

fn run_hook_with_args(home: &Path, input: &str, args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tasksync-hook"))
        .args(args)
        .env("HOME", home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tasksync-hook");

    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(input.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for tasksync-hook")
}

fn home_with_claude_dir() -> TempDir {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::create_dir(temp_dir.path().join(".claude")).expect("create .claude dir");
    temp_dir
}

#[test]
fn hook_logs_completed_tasks_and_writes_backup() {
    let home = home_with_claude_dir();
    let input = r#"{"event":"TaskUpdate","task_list":[{"subject":"A","status":"completed"},{"subject":"B","status":"pending"}]}"#;

    let output = run_hook(home.path(), input);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "[*] Syncing 2 tasks from event: TaskUpdate\n[✔] Task Finished: A\n"
    );

    let backup = fs::read_to_string(home.path().join(".claude/last_task_sync.json"))
        .expect("read backup");
    let value: serde_json::Value = serde_json::from_str(&backup).expect("backup JSON");
    assert_eq!(value["event"], "TaskUpdate");
    assert!(value["processed_at"].is_string());
}

#[test]
fn hook_is_silent_on_empty_input() {
    let home = home_with_claude_dir();

    let output = run_hook(home.path(), "");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(!home.path().join(".claude/last_task_sync.json").exists());
}

#[test]
fn hook_reports_invalid_json_and_exits_zero() {
    let home = home_with_claude_dir();

    let output = run_hook(home.path(), "not json");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: Received invalid JSON from Claude Code\n"
    );
    assert!(!home.path().join(".claude/last_task_sync.json").exists());
}

#[test]
fn hook_reports_missing_backup_dir_and_exits_zero() {
    let home = TempDir::new().expect("temp dir");

    let output = run_hook(home.path(), r#"{"event":"TaskUpdate"}"#);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("Error in sync script: "),
        "unexpected stderr: {}",
        stderr
    );
    assert!(!home.path().join(".claude").exists());
}

#[test]
fn hook_ignores_unknown_arguments() {
    let home = home_with_claude_dir();
    let input = r#"{"event":"TaskUpdate","task_list":[{"subject":"A","status":"completed"}]}"#;

    let output = run_hook_with_args(home.path(), input, &["--session", "abc", "extra"]);

    assert!(
        output.status.success(),
        "expected success, got status: {:?}",
        output.status.code()
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "[*] Syncing 1 tasks from event: TaskUpdate\n[✔] Task Finished: A\n"
    );
    assert!(home.path().join(".claude/last_task_sync.json").exists());
}

#[test]
fn hook_with_invalid_log_level_still_syncs() {
    let home = home_with_claude_dir();

    let output = run_hook_with_args(home.path(), r#"{"event":"TaskUpdate"}"#, &["--log-level", "loud"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.ends_with("[*] Syncing 0 tasks from event: TaskUpdate\n"), "unexpected stderr: {}", stderr);
}
