//! Error types for IFF parsing and navigation.

use holocron_common::{ErrorKind, Tag};
use thiserror::Error;

/// Errors that can occur when parsing or navigating an IFF container.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] holocron_common::Error),

    /// Fewer bytes remain than a node header needs.
    #[error("truncated node header at offset {offset}: {available} bytes remain")]
    TruncatedHeader { offset: usize, available: usize },

    /// A node declares more payload than remains in its parent.
    #[error("node '{tag}' at offset {offset} declares {declared} bytes but only {available} remain")]
    Truncated {
        tag: Tag,
        offset: usize,
        declared: usize,
        available: usize,
    },

    /// A form too small to hold its own subtype.
    #[error("form at offset {offset} declares size {size}, smaller than its subtype")]
    FormTooSmall { offset: usize, size: u32 },

    /// Forms nested deeper than the parser accepts.
    #[error("forms nested deeper than {max} levels at offset {offset}")]
    TooDeep { max: usize, offset: usize },

    /// No matching form under the cursor.
    #[error("form '{name}' (occurrence {occurrence}) not found")]
    FormNotFound { name: String, occurrence: usize },

    /// No matching chunk under the cursor.
    #[error("chunk '{name}' (occurrence {occurrence}) not found")]
    ChunkNotFound { name: String, occurrence: usize },

    /// Tried to descend while positioned on a chunk.
    #[error("cannot enter '{name}': cursor is inside chunk '{chunk}'")]
    InsideChunk { name: String, chunk: Tag },

    /// Chunk data requested while not positioned on a chunk.
    #[error("cursor is not positioned on a chunk")]
    NotInChunk,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Common(e) => e.kind(),
            Error::FormNotFound { .. }
            | Error::ChunkNotFound { .. }
            | Error::InsideChunk { .. }
            | Error::NotInChunk => ErrorKind::NotFound,
            Error::TruncatedHeader { .. }
            | Error::Truncated { .. }
            | Error::FormTooSmall { .. }
            | Error::TooDeep { .. } => ErrorKind::Format,
        }
    }
}

/// Result type for IFF operations.
pub type Result<T> = std::result::Result<T, Error>;
