//! PDF vocabulary extraction.
//!
//! Scans the flattened text layer of a vocabulary-list PDF for numbered
//! entries (`1. word ... 뜻 ...`) and cleans each entry's trailing block
//! into a definition. Per-entry noise — duplicate terms, blocks whose
//! cleaned definition is too short — is silently dropped; only a fully
//! empty result is reported as a failure.

mod reader;
mod scan;

#[cfg(feature = "pdf")]
pub use reader::LopdfSource;
pub use reader::{read_all_pages, PageTextSource};
pub use scan::{EntryScanner, RawEntry};

use crate::assemble::{assemble, IdGenerator, SequentialIds};
use crate::clean::clean_definition;
use crate::error::{Error, Result};
use crate::model::{SourceKind, VocabularyBatch};
use crate::options::ExtractOptions;
use std::collections::HashSet;

/// Extracts vocabulary pairs from flattened PDF text with a
/// caller-supplied id generator.
///
/// A term already seen earlier in the scan is skipped entirely; its raw
/// block is discarded without being cleaned.
pub fn extract_pdf_text_with_ids<I: IdGenerator>(
    text: &str,
    options: &ExtractOptions,
    ids: &mut I,
) -> Result<VocabularyBatch> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for entry in EntryScanner::new(text) {
        if entry.term.is_empty() || seen.contains(&entry.term) {
            continue;
        }
        let definition = clean_definition(entry.raw_block, options.max_definition_len);
        if definition.chars().count() < options.min_definition_len {
            continue;
        }
        seen.insert(entry.term.clone());
        candidates.push((entry.term, definition));
    }

    let batch = assemble(SourceKind::Pdf, candidates, options.max_definition_len, ids);
    if batch.is_empty() {
        return Err(Error::EmptyExtraction {
            kind: SourceKind::Pdf,
        });
    }
    Ok(batch)
}

/// Extracts vocabulary pairs from flattened PDF text using sequential ids.
pub fn extract_pdf_text(text: &str, options: &ExtractOptions) -> Result<VocabularyBatch> {
    extract_pdf_text_with_ids(text, options, &mut SequentialIds::new())
}

/// Reads every page from a source in order, then extracts.
pub fn extract_pdf_source<S: PageTextSource + ?Sized>(
    source: &mut S,
    options: &ExtractOptions,
) -> Result<VocabularyBatch> {
    let text = read_all_pages(source, options)?;
    extract_pdf_text(&text, options)
}

/// Opens a PDF from an in-memory byte buffer and extracts.
#[cfg(feature = "pdf")]
pub fn extract_pdf_bytes(data: &[u8], options: &ExtractOptions) -> Result<VocabularyBatch> {
    let mut source = LopdfSource::from_bytes(data)?;
    extract_pdf_source(&mut source, options)
}

/// Opens a PDF file and extracts.
#[cfg(feature = "pdf")]
pub fn extract_pdf_file(
    path: impl AsRef<std::path::Path>,
    options: &ExtractOptions,
) -> Result<VocabularyBatch> {
    let mut source = LopdfSource::open(path)?;
    extract_pdf_source(&mut source, options)
}
