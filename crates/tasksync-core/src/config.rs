// Rust guideline compliant 2026-10-18

//! Configuration for the task sync hook.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Directory under the home directory that holds the backup file.
pub const BACKUP_DIR: &str = ".claude";

/// File name of the last-sync backup.
pub const BACKUP_FILE: &str = "last_task_sync.json";

/// Configuration for hook behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the annotated payload snapshot is written.
    pub backup_path: PathBuf,
}

impl Config {
    /// Loads the default configuration for the current user.
    ///
    /// The backup path is `<home>/.claude/last_task_sync.json`.
    ///
    /// # Returns
    ///
    /// A Config pointing at the user's backup file.
    ///
    /// # Errors
    ///
    /// Returns `Error::HomeNotFound` if the home directory cannot be resolved.
    pub fn load() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
        Ok(Self::for_home(&home))
    }

    /// Builds the configuration rooted at an explicit home directory.
    ///
    /// # Arguments
    ///
    /// * `home` - Home directory to resolve the backup path against
    #[must_use]
    pub fn for_home(home: &Path) -> Self {
        Self::with_backup_path(home.join(BACKUP_DIR).join(BACKUP_FILE))
    }

    /// Builds a configuration with an explicit backup path.
    #[must_use]
    pub fn with_backup_path(backup_path: impl Into<PathBuf>) -> Self {
        Self {
            backup_path: backup_path.into(),
        }
    }
}
