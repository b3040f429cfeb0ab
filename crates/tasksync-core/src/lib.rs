// Rust guideline compliant 2026-10-18

//! Tasksync Core Library
//!
//! This crate provides the building blocks for the task sync hook:
//! - Payload model (dynamic JSON object with typed task views)
//! - Backup store (pretty JSON snapshot, whole-file replace)
//! - Task sinks (the sync destination seam and its logging placeholder)
//! - Clock and timestamp formatting
//! - Configuration and error types

pub mod backup;
pub mod clock;
pub mod config;
pub mod error;
pub mod payload;
pub mod sink;

pub use backup::BackupStore;
pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use payload::{Payload, TaskRef, TaskStatus};
pub use sink::{LogSink, SyncReport, TaskSink};
