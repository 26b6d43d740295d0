//! Input kind detection for uploaded files.

use crate::error::{Error, Result};

/// Magic bytes for PDF documents.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Supported input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A PDF document with a text layer.
    Pdf,
    /// Two-column delimited text.
    Csv,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Pdf => write!(f, "PDF"),
            InputKind::Csv => write!(f, "CSV"),
        }
    }
}

/// Detects the input kind from raw bytes.
///
/// PDF is recognized by its magic prefix; anything else that decodes as
/// NUL-free text is treated as CSV. Binary data that is neither fails
/// with [`Error::UnknownFormat`].
pub fn detect_kind(data: &[u8]) -> Result<InputKind> {
    if data.is_empty() {
        return Err(Error::UnknownFormat);
    }

    if data.starts_with(PDF_MAGIC) {
        return Ok(InputKind::Pdf);
    }

    match crate::csv::decode_text(data) {
        Ok(text) if !text.contains('\0') => Ok(InputKind::Csv),
        _ => Err(Error::UnknownFormat),
    }
}
