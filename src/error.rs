//! Error types for the unvocab library.

use crate::model::SourceKind;
use std::io;
use thiserror::Error;

/// Result type alias for unvocab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the unvocab library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes could not be decoded into text.
    #[error("Unreadable input: {0}")]
    UnreadableInput(String),

    /// Parsing completed but produced zero valid pairs.
    #[error("No vocabulary pairs found; expected {}", .kind.expected_layout())]
    EmptyExtraction {
        /// Which extractor produced the empty batch.
        kind: SourceKind,
    },

    /// The document structure itself failed to open or parse.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// The document exceeds the configured page cap.
    #[error("Document has {pages} pages, exceeding the configured limit of {limit}")]
    PageLimit { limit: usize, pages: usize },

    /// Extraction did not finish within the configured deadline.
    #[cfg(feature = "async")]
    #[error("Extraction timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The input format is not recognized.
    #[error("Unknown input format")]
    UnknownFormat,

    /// The input format was recognized but support for it is not compiled in.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
