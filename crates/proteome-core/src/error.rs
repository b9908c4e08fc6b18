//! Error types for Proteome Core

use thiserror::Error;

/// Result type alias using Proteome's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Proteome error types
///
/// Resolution misses are not errors: lookups return `None` or an empty
/// slice. Only the build pass can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {kind} record at position {position}: {reason}")]
    InvalidRecord {
        kind: RecordKind,
        position: usize,
        reason: String,
    },
}

impl Error {
    pub fn invalid_record(kind: RecordKind, position: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            kind,
            position,
            reason: reason.into(),
        }
    }
}

/// The four record batches consumed by the build pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Protein,
    GoTerm,
    Edge,
    IdRecord,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::GoTerm => "GO term",
            Self::Edge => "edge",
            Self::IdRecord => "identifier",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
