// Rust guideline compliant 2026-10-18

//! Tasksync Hooks
//!
//! This crate provides the task sync hook:
//! - Payload processing (parse, timestamp, back up, sync)
//! - Diagnostic rendering for failed runs
//! - Tracing setup for the hook binary

pub mod logging;
pub mod task_sync;

pub use logging::{init_tracing, parse_log_level, LogError, LogOptions};
pub use task_sync::{diagnostic_message, run_hook, task_sync_hook, HookContext, HookOutcome};
