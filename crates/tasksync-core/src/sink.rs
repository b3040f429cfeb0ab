// Rust guideline compliant 2026-10-18

//! Sync destinations for processed payloads.
//!
//! `LogSink` is the only implementation: it reports what would be sent to an
//! external tracker as diagnostic lines. A real tracker client would be another
//! `TaskSink` accepting the same payload.

use crate::payload::{Payload, TaskRef};
use crate::Result;
use std::io::Write;

/// Summary of one sync pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Event label the payload was emitted for.
    pub event: String,
    /// Number of entries in `task_list`.
    pub task_count: usize,
    /// Display subjects of completed tasks, in input order.
    pub completed: Vec<String>,
}

/// Destination that receives annotated payloads.
pub trait TaskSink {
    /// Syncs one payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload has an unexpected shape or the
    /// destination cannot be written.
    fn sync(&mut self, payload: &Payload) -> Result<SyncReport>;
}

impl<S: TaskSink + ?Sized> TaskSink for &mut S {
    fn sync(&mut self, payload: &Payload) -> Result<SyncReport> {
        (**self).sync(payload)
    }
}

/// Placeholder sink that logs the summary and completed tasks.
#[derive(Debug)]
pub struct LogSink<W> {
    out: W,
}

impl<W: Write> LogSink<W> {
    /// Creates a sink writing diagnostic lines to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TaskSink for LogSink<W> {
    fn sync(&mut self, payload: &Payload) -> Result<SyncReport> {
        let tasks = payload.task_list()?;
        let event = payload.event();

        writeln!(
            self.out,
            "[*] Syncing {} tasks from event: {}",
            tasks.len(),
            event
        )?;

        let mut completed = Vec::new();
        for value in tasks {
            let task = TaskRef::from_value(value)?;
            if let Some(status) = task.status() {
                tracing::debug!(status = %status, "task");
            }
            if task.is_completed() {
                let subject = task.subject_label();
                writeln!(self.out, "[✔] Task Finished: {}", subject)?;
                completed.push(subject);
            }
        }
        self.out.flush()?;

        tracing::info!(
            event = %event,
            task_count = tasks.len(),
            completed = completed.len(),
            "tasks synced"
        );

        Ok(SyncReport {
            event,
            task_count: tasks.len(),
            completed,
        })
    }
}
