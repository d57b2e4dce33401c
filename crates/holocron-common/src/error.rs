//! Error types for holocron-common.

use thiserror::Error;

/// Broad classification of a decode failure.
///
/// Every decoder crate maps its own error enum onto one of these so callers
/// can decide policy (skip an optional file, abort a startup path) without
/// matching on format-specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A requested form or chunk is absent. Usually the wrong file or version.
    NotFound,
    /// Declared sizes or counts disagree with the buffer contents.
    Format,
    /// A recognised but unhandled format version.
    NotSupported,
    /// The underlying file could not be read.
    Io,
}

/// Common error type for Holocron operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// Invalid tag text (must be exactly four ASCII bytes).
    #[error("invalid tag: {0:?}")]
    InvalidTag(String),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Missing null terminator in string.
    #[error("string missing null terminator")]
    MissingNullTerminator,
}

impl Error {
    /// Classify this error.
    ///
    /// Every byte-level failure means the buffer disagrees with its own
    /// declared sizes.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Format
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
