//! # unvocab
//!
//! Heuristic extraction of vocabulary word lists — (term, definition)
//! pairs — from loosely structured sources: two-column CSV text and the
//! text layer of numbered vocabulary-list PDFs.
//!
//! Terms are English; definitions are Korean. The extractor tolerates
//! noisy formatting, part-of-speech annotations, advertising boilerplate,
//! and inconsistent delimiters, selecting the first genuinely Korean
//! segment of each entry. Per-entry noise is dropped silently; only a
//! batch with zero pairs is reported as a failure.
//!
//! ## Quick Start
//!
//! ```
//! use unvocab::{extract_csv_str, ExtractOptions};
//!
//! fn main() -> unvocab::Result<()> {
//!     let batch = extract_csv_str("apple,사과\nbanana,바나나", &ExtractOptions::default())?;
//!     assert_eq!(batch.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `pdf` (default): PDF text-layer reading via lopdf
//! - `async`: Async I/O support with Tokio

pub mod assemble;
pub mod clean;
pub mod csv;
pub mod detect;
pub mod error;
pub mod model;
pub mod options;
pub mod pdf;

#[cfg(feature = "async")]
pub mod async_api;

// Re-exports
pub use assemble::{IdGenerator, SequentialIds, TimestampIds};
pub use clean::curate::AdFilter;
pub use detect::{detect_kind, InputKind};
pub use error::{Error, Result};
pub use model::{SourceKind, VocabularyBatch, VocabularyPair, WordSet, WordSetBundle};
pub use options::ExtractOptions;

use std::path::Path;

/// Extracts vocabulary pairs from CSV text.
pub fn extract_csv_str(text: &str, options: &ExtractOptions) -> Result<VocabularyBatch> {
    csv::extract_csv(text, options)
}

/// Extracts vocabulary pairs from raw CSV file bytes.
pub fn extract_csv_bytes(bytes: &[u8], options: &ExtractOptions) -> Result<VocabularyBatch> {
    csv::extract_csv_bytes(bytes, options)
}

/// Reads a CSV file and extracts vocabulary pairs.
pub fn extract_csv_file(path: impl AsRef<Path>, options: &ExtractOptions) -> Result<VocabularyBatch> {
    let data = std::fs::read(path)?;
    csv::extract_csv_bytes(&data, options)
}

/// Opens a PDF file and extracts vocabulary pairs.
#[cfg(feature = "pdf")]
pub fn extract_pdf_file(path: impl AsRef<Path>, options: &ExtractOptions) -> Result<VocabularyBatch> {
    pdf::extract_pdf_file(path, options)
}

/// Extracts vocabulary pairs from in-memory PDF bytes.
#[cfg(feature = "pdf")]
pub fn extract_pdf_bytes(data: &[u8], options: &ExtractOptions) -> Result<VocabularyBatch> {
    pdf::extract_pdf_bytes(data, options)
}

/// Extracts vocabulary pairs from raw bytes, auto-detecting the kind.
pub fn extract_bytes(data: &[u8], options: &ExtractOptions) -> Result<VocabularyBatch> {
    match detect_kind(data)? {
        #[cfg(feature = "pdf")]
        InputKind::Pdf => pdf::extract_pdf_bytes(data, options),
        #[cfg(not(feature = "pdf"))]
        InputKind::Pdf => Err(Error::UnsupportedFormat(
            "PDF support requires the 'pdf' feature".into(),
        )),
        InputKind::Csv => csv::extract_csv_bytes(data, options),
    }
}

/// Reads a file and extracts vocabulary pairs, auto-detecting the kind.
pub fn extract_file(path: impl AsRef<Path>, options: &ExtractOptions) -> Result<VocabularyBatch> {
    let data = std::fs::read(path)?;
    extract_bytes(&data, options)
}

/// Builder for configuring vocabulary extraction.
///
/// # Example
///
/// ```
/// use unvocab::Unvocab;
///
/// let batch = Unvocab::new()
///     .skip_comments()
///     .extract_csv_str("# curated\napple,사과")?;
/// assert_eq!(batch.len(), 1);
/// # Ok::<(), unvocab::Error>(())
/// ```
pub struct Unvocab {
    options: ExtractOptions,
}

impl Default for Unvocab {
    fn default() -> Self {
        Self::new()
    }
}

impl Unvocab {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Skips CSV rows whose term starts with `#`.
    pub fn skip_comments(mut self) -> Self {
        self.options = self.options.skip_comments();
        self
    }

    /// Sets the page cap for PDF reading (0 = unlimited).
    pub fn with_max_pages(mut self, pages: usize) -> Self {
        self.options = self.options.with_max_pages(pages);
        self
    }

    /// Sets the definition length cap, in characters.
    pub fn with_max_definition_len(mut self, chars: usize) -> Self {
        self.options = self.options.with_max_definition_len(chars);
        self
    }

    /// Sets the minimum cleaned definition length, in characters.
    pub fn with_min_definition_len(mut self, chars: usize) -> Self {
        self.options = self.options.with_min_definition_len(chars);
        self
    }

    /// Returns the accumulated options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extracts vocabulary pairs from CSV text.
    pub fn extract_csv_str(&self, text: &str) -> Result<VocabularyBatch> {
        csv::extract_csv(text, &self.options)
    }

    /// Extracts vocabulary pairs from flattened PDF text.
    pub fn extract_pdf_text(&self, text: &str) -> Result<VocabularyBatch> {
        pdf::extract_pdf_text(text, &self.options)
    }

    /// Opens a PDF file and extracts vocabulary pairs.
    #[cfg(feature = "pdf")]
    pub fn extract_pdf_file(&self, path: impl AsRef<Path>) -> Result<VocabularyBatch> {
        pdf::extract_pdf_file(path, &self.options)
    }

    /// Extracts vocabulary pairs from raw bytes, auto-detecting the kind.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<VocabularyBatch> {
        extract_bytes(data, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_csv_str_convenience() {
        let batch = extract_csv_str("apple,사과", &ExtractOptions::default()).unwrap();
        assert_eq!(batch.source, SourceKind::Csv);
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_extract_bytes_routes_text_to_csv() {
        let batch = extract_bytes("apple,사과".as_bytes(), &ExtractOptions::default()).unwrap();
        assert_eq!(batch.source, SourceKind::Csv);
    }

    #[test]
    fn test_builder_options_accumulate() {
        let builder = Unvocab::new().skip_comments().with_max_pages(10);
        assert!(builder.options().skip_comments);
        assert_eq!(builder.options().max_pages, 10);
    }

    #[test]
    fn test_builder_extracts_pdf_text() {
        let batch = Unvocab::new()
            .extract_pdf_text("1. apple 사과 2. banana 바나나")
            .unwrap();
        assert_eq!(batch.source, SourceKind::Pdf);
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_extract_csv_file_roundtrip() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "apple,사과\nbanana,바나나").unwrap();
        let batch = extract_csv_file(file.path(), &ExtractOptions::default()).unwrap();
        assert_eq!(batch.len(), 2);
    }
}
