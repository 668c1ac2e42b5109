//! Local Export Storage - Implementation of ExportStorage on the filesystem.
//!
//! # Atomic Writes
//!
//! 1. Write content to `{filename}.tmp`
//! 2. Sync to disk
//! 3. Rename to `{filename}`
//!
//! A failed step removes the `.tmp` file again. A crash mid-write leaves at
//! most a stray `.tmp` file, never a truncated workbook.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::ports::{ExportStorage, StorageError};

/// Stores exported workbooks in one directory.
#[derive(Debug, Clone)]
pub struct LocalExportStorage {
    base_path: PathBuf,
}

impl LocalExportStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Accepts only a bare file name.
    fn validate_filename(filename: &str) -> Result<(), StorageError> {
        let invalid = filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\', '\0']);
        if invalid {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }
        Ok(())
    }

    fn ensure_base_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).map_err(|e| {
            StorageError::io(format!(
                "Failed to create export directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }

    /// Steps 1-3 of an atomic write.
    fn write_and_rename(
        temp_path: &Path,
        final_path: &Path,
        content: &[u8],
    ) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path).map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content).map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        drop(file);

        fs::rename(temp_path, final_path).map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })
    }
}

impl ExportStorage for LocalExportStorage {
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, StorageError> {
        Self::validate_filename(filename)?;
        self.ensure_base_dir()?;

        let temp_path = self.base_path.join(format!("{}.tmp", filename));
        let final_path = self.base_path.join(filename);

        if let Err(e) = Self::write_and_rename(&temp_path, &final_path, content) {
            if temp_path.exists() {
                if let Err(cleanup) = fs::remove_file(&temp_path) {
                    warn!(path = %temp_path.display(), error = %cleanup, "Failed to remove temp file");
                }
            }
            return Err(e);
        }

        info!(path = %final_path.display(), bytes = content.len(), "Saved export");

        Ok(final_path)
    }
}
