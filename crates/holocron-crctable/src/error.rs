//! Error types for CRC table decoding.

use holocron_common::ErrorKind;
use thiserror::Error;

/// Errors that can occur when decoding a CRC string table.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] holocron_common::Error),

    /// Container error (missing form or chunk, malformed container).
    #[error("{0}")]
    Iff(#[from] holocron_iff::Error),

    /// A chunk holds fewer entries than the DATA chunk declares.
    #[error("{chunk} chunk holds {found} entries, expected {expected}")]
    CountMismatch {
        chunk: &'static str,
        expected: usize,
        found: usize,
    },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Common(e) => e.kind(),
            Error::Iff(e) => e.kind(),
            Error::CountMismatch { .. } => ErrorKind::Format,
        }
    }
}

/// Result type for CRC table operations.
pub type Result<T> = std::result::Result<T, Error>;
