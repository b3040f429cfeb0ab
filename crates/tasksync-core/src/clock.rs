// Rust guideline compliant 2026-10-18

//! Timestamp helpers for Tasksync.

use chrono::{Local, NaiveDateTime};

/// Source of the processing timestamp.
pub trait Clock {
    /// Returns the current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Renders a local timestamp as ISO-8601 without an offset.
///
/// # Arguments
///
/// * `at` - The local date and time to render
///
/// # Returns
///
/// A string such as `2026-10-18T09:30:00.000000`.
#[must_use]
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
