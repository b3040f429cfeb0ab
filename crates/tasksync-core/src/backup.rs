// Rust guideline compliant 2026-10-18

//! Backup store for the last synced payload.
//!
//! Each write replaces the whole file. The document is staged in a uniquely
//! named sibling temp file and renamed over the target, so readers see either
//! the old or the new snapshot and the last writer wins. Missing parent
//! directories are not created.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes and reads the JSON backup snapshot.
#[derive(Debug, Clone)]
pub struct BackupStore {
    path: PathBuf,
}

impl BackupStore {
    /// Creates a store for the given backup file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the backup file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Backup path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns the backup file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the snapshot with 2-space indentation, replacing any prior file.
    ///
    /// Each call stages into its own temp file, so concurrent writers never
    /// clobber each other's staging file; the last rename wins. An existing
    /// target is resolved through symlinks and keeps its permissions.
    ///
    /// # Arguments
    ///
    /// * `value` - The annotated payload, or any serializable document
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory does not exist or is not writable
    /// - Serialization fails
    /// - The rename over the target fails
    pub fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let target = self.resolve_target();
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.annotate(e))?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;

        if let Ok(metadata) = std::fs::metadata(&target) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }

        temp.persist(&target).map_err(|e| self.annotate(e.error))?;

        tracing::debug!(path = %target.display(), "backup written");
        Ok(())
    }

    /// Reads the last snapshot back.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or does not contain valid JSON.
    pub fn read(&self) -> Result<Value> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.annotate(e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Follows a symlinked target so the link itself survives the rename.
    fn resolve_target(&self) -> PathBuf {
        std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn annotate(&self, err: std::io::Error) -> Error {
        Error::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {}", self.path.display(), err),
        ))
    }
}
