//! Error types for STF decoding.

use holocron_common::ErrorKind;
use thiserror::Error;

/// Errors that can occur when reading a string table.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error other than the file being absent.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] holocron_common::Error),

    /// An entry runs past the end of the buffer.
    #[error("{section} entry {index} at offset {offset} runs past the end of the file")]
    Truncated {
        section: &'static str,
        index: usize,
        offset: usize,
    },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::Common(e) => e.kind(),
            Error::Truncated { .. } => ErrorKind::Format,
        }
    }
}

/// Result type for STF operations.
pub type Result<T> = std::result::Result<T, Error>;
