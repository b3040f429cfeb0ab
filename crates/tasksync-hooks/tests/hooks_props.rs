// Rust guideline compliant 2026-10-18

//! Property-based tests for the task sync hook.
//!
//! For any task list, the hook prints one summary line followed by one line
//! per completed task, in input order.

use chrono::NaiveDate;
use proptest::prelude::*;
use serde_json::json;
use tasksync_core::{Config, FixedClock, LogSink};
use tasksync_hooks::{task_sync_hook, HookContext, HookOutcome};
use tempfile::TempDir;

/// Generates status labels, including near-misses of `completed`.
fn arb_status() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("completed".to_string())),
        Just(Some("pending".to_string())),
        Just(Some("in_progress".to_string())),
        Just(Some("Completed".to_string())),
        Just(Some("completed ".to_string())),
        Just(None),
    ]
}

/// Generates (subject, status) pairs.
fn arb_tasks() -> impl Strategy<Value = Vec<(String, Option<String>)>> {
    prop::collection::vec(
        (prop::string::string_regex("[A-Za-z0-9 ]{1,20}").unwrap(), arb_status()),
        0..12,
    )
}

proptest! {
    #[test]
    fn prop_logs_completed_tasks_in_order(event in "[A-Za-z]{1,16}", tasks in arb_tasks()) {
        let temp_dir = TempDir::new().unwrap();
        let task_list: Vec<_> = tasks
            .iter()
            .map(|(subject, status)| match status {
                Some(status) => json!({"subject": subject, "status": status}),
                None => json!({"subject": subject}),
            })
            .collect();
        let input = json!({"event": event, "task_list": task_list}).to_string();

        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(12, 0, 0).unwrap(),
        );
        let mut ctx = HookContext::new(
            Config::with_backup_path(temp_dir.path().join("last_task_sync.json")),
            clock,
            LogSink::new(Vec::new()),
        );
        let outcome = task_sync_hook(&input, &mut ctx).unwrap();
        let output = String::from_utf8(ctx.sink.into_inner()).unwrap();

        let expected_completed: Vec<String> = tasks
            .iter()
            .filter(|(_, status)| status.as_deref() == Some("completed"))
            .map(|(subject, _)| subject.clone())
            .collect();

        let mut expected = format!("[*] Syncing {} tasks from event: {}\n", tasks.len(), event);
        for subject in &expected_completed {
            expected.push_str(&format!("[✔] Task Finished: {}\n", subject));
        }
        prop_assert_eq!(output, expected);

        match outcome {
            HookOutcome::Synced { report, .. } => {
                prop_assert_eq!(report.task_count, tasks.len());
                prop_assert_eq!(report.completed, expected_completed);
            }
            other => prop_assert!(false, "unexpected outcome: {:?}", other),
        }
    }
}
