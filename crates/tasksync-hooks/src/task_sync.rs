// Rust guideline compliant 2026-10-18

//! Task sync hook implementation.
//!
//! Reads one JSON payload, stamps it with `processed_at`, writes the backup
//! snapshot and hands it to the configured sink. Failures are returned to the
//! caller; `run_hook` turns them into a single diagnostic line.

use std::io::{Read, Write};
use std::path::PathBuf;
use tasksync_core::{
    format_timestamp, BackupStore, Clock, Config, Error, Payload, Result, SyncReport, TaskSink,
};

/// Diagnostic printed when stdin is not valid JSON.
pub const INVALID_JSON_MESSAGE: &str = "Error: Received invalid JSON from Claude Code";

/// Dependencies for one hook run.
#[derive(Debug)]
pub struct HookContext<C, S> {
    /// Backup location.
    pub config: Config,
    /// Source of the `processed_at` timestamp.
    pub clock: C,
    /// Destination for the annotated payload.
    pub sink: S,
}

impl<C: Clock, S: TaskSink> HookContext<C, S> {
    /// Bundles the hook dependencies.
    pub fn new(config: Config, clock: C, sink: S) -> Self {
        Self {
            config,
            clock,
            sink,
        }
    }
}

/// Result of a hook run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Input was empty; nothing was written.
    Skipped,
    /// Payload was backed up and synced.
    Synced {
        /// What the sink reported.
        report: SyncReport,
        /// Where the snapshot was written.
        backup_path: PathBuf,
    },
    /// The run failed; the diagnostic line has already been emitted.
    Failed(String),
}

/// Processes one hook payload.
///
/// # Arguments
///
/// * `input` - The complete stdin contents
/// * `ctx` - Config, clock and sink for this run
///
/// # Returns
///
/// `HookOutcome::Skipped` for empty input, `HookOutcome::Synced` otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The input is not valid JSON or not a JSON object
/// - The backup file cannot be written (including a missing parent directory)
/// - The task list or a task entry has an unexpected shape
/// - The sink cannot write its output
pub fn task_sync_hook<C: Clock, S: TaskSink>(
    input: &str,
    ctx: &mut HookContext<C, S>,
) -> Result<HookOutcome> {
    if input.is_empty() {
        tracing::debug!("empty input, skipping");
        return Ok(HookOutcome::Skipped);
    }

    let mut payload = Payload::parse(input)?;
    payload.annotate(format_timestamp(ctx.clock.now()));

    let store = BackupStore::new(ctx.config.backup_path.clone())?;
    store.write(&payload)?;

    let report = ctx.sink.sync(&payload)?;
    Ok(HookOutcome::Synced {
        report,
        backup_path: store.path().to_path_buf(),
    })
}

/// Runs the hook end to end without ever failing.
///
/// Reads `input` to its end, processes it, and writes a diagnostic line to
/// `diagnostics` if anything goes wrong.
pub fn run_hook<R, W, C, S>(
    mut input: R,
    mut diagnostics: W,
    ctx: &mut HookContext<C, S>,
) -> HookOutcome
where
    R: Read,
    W: Write,
    C: Clock,
    S: TaskSink,
{
    let result = read_input(&mut input).and_then(|text| task_sync_hook(&text, ctx));
    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            let message = diagnostic_message(&err);
            tracing::warn!(error = %err, "task sync failed");
            let _ = writeln!(diagnostics, "{}", message);
            let _ = diagnostics.flush();
            HookOutcome::Failed(message)
        }
    }
}

/// Renders the user-facing diagnostic for a failed run.
#[must_use]
pub fn diagnostic_message(err: &Error) -> String {
    if err.is_invalid_json() {
        INVALID_JSON_MESSAGE.to_string()
    } else {
        format!("Error in sync script: {}", err)
    }
}

fn read_input<R: Read>(input: &mut R) -> Result<String> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(text)
}
