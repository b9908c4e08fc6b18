//! Storage error types

use proteome_core::RecordKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-specific error types; every variant aborts the load
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Missing {kind} batch: {}", .path.display())]
    MissingBatch { kind: RecordKind, path: PathBuf },

    /// `position` is the line number for JSON Lines, the element index
    /// (1-based) for JSON arrays
    #[error("Malformed {kind} record at {}:{position}: {source}", .path.display())]
    MalformedRecord {
        kind: RecordKind,
        path: PathBuf,
        position: usize,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Build error: {0}")]
    Build(#[from] proteome_core::Error),
}
