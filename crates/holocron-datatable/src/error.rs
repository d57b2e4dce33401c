//! Error types for datatable decoding.

use holocron_common::{ErrorKind, Tag};
use thiserror::Error;

/// Errors that can occur when decoding a datatable.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] holocron_common::Error),

    /// Container error (missing form or chunk, malformed container).
    #[error("{0}")]
    Iff(#[from] holocron_iff::Error),

    /// A `DTII` version other than `0001`.
    #[error("unsupported datatable version: {0}")]
    UnsupportedVersion(Tag),

    /// A type code whose leading character is not recognised.
    #[error("unknown column type code: {0:?}")]
    UnknownTypeCode(String),

    /// A chunk holds fewer entries than the column count declares.
    #[error("{chunk} chunk holds {found} entries, expected {expected}")]
    CountMismatch {
        chunk: &'static str,
        expected: usize,
        found: usize,
    },

    /// Bytes left over after a chunk's declared entries.
    #[error("{chunk} chunk has {remaining} unread bytes after {count} entries")]
    TrailingBytes {
        chunk: &'static str,
        count: usize,
        remaining: usize,
    },

    /// A negative row count.
    #[error("negative row count: {0}")]
    NegativeRowCount(i32),

    /// Rows declared for a table with no columns.
    #[error("{0} rows declared but the table has no columns")]
    RowsWithoutColumns(usize),

    /// The ROWS chunk ends inside a row.
    #[error("row {row} truncated at column '{column}'")]
    RowTruncated { row: usize, column: String },

    /// JSON serialization error.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Common(e) => e.kind(),
            Error::Iff(e) => e.kind(),
            Error::UnsupportedVersion(_) => ErrorKind::NotSupported,
            _ => ErrorKind::Format,
        }
    }
}

/// Result type for datatable operations.
pub type Result<T> = std::result::Result<T, Error>;
