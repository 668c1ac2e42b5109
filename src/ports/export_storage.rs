//! Export Storage Port - Where finished workbooks are kept.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for persisting an exported workbook.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial file on failure)
/// - Reject filenames that would escape the storage location
/// - Overwrite an existing file of the same name
pub trait ExportStorage: Send + Sync {
    /// Store `content` under `filename`.
    ///
    /// # Returns
    ///
    /// The path where the file was written.
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, StorageError>;
}

/// Errors from export storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Invalid export filename: {0}")]
    InvalidFilename(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

impl StorageError {
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageFailed, err.to_string())
    }
}
