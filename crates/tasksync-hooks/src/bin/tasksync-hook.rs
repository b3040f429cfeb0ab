// Rust guideline compliant 2026-10-18

//! CLI entry point for the task sync hook.
//!
//! Always exits successfully; failures are reported on stderr. Arguments the
//! hook does not recognize fall back to the defaults.

use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tasksync_core::{Config, LogSink, Payload, SystemClock};
use tasksync_hooks::{diagnostic_message, init_tracing, run_hook, HookContext, LogOptions};

#[derive(Parser, Debug)]
#[command(
    name = "tasksync-hook",
    version,
    about = "Back up a task update payload from stdin and log completed tasks",
    long_about = "Reads a JSON payload from stdin, stamps it with processed_at, writes it to ~/.claude/last_task_sync.json and logs completed tasks to stderr."
)]
struct Cli {
    /// Tracing level (off, error, warn, info, debug)
    #[arg(long, default_value = "off")]
    log_level: String,

    /// Write tracing output as JSON to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Default for Cli {
    fn default() -> Self {
        let options = LogOptions::default();
        Self {
            log_level: options.log_level,
            log_file: options.log_file,
        }
    }
}

/// Hook runners may append arguments of their own; only help and version
/// requests end the process early.
fn parse_args() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => Cli::default(),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    let options = LogOptions {
        log_level: cli.log_level,
        log_file: cli.log_file,
    };
    let _guard = match init_tracing(&options) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Warning: tracing disabled: {}", err);
            None
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            report_without_config(&err);
            return Ok(());
        }
    };

    let mut ctx = HookContext::new(config, SystemClock, LogSink::new(io::stderr()));
    let outcome = run_hook(io::stdin().lock(), io::stderr(), &mut ctx);
    tracing::debug!(?outcome, "hook finished");
    Ok(())
}

/// Mirrors the normal run order: empty input stays silent and malformed input
/// is reported before the unresolved backup path.
fn report_without_config(err: &tasksync_core::Error) {
    let mut text = String::new();
    let message = match io::stdin().lock().read_to_string(&mut text) {
        Ok(0) => return,
        Ok(_) => match Payload::parse(&text) {
            Err(parse_err) => diagnostic_message(&parse_err),
            Ok(_) => diagnostic_message(err),
        },
        Err(read_err) => diagnostic_message(&read_err.into()),
    };
    let _ = writeln!(io::stderr(), "{}", message);
}
