//! Page text collaborator for PDF sources.
//!
//! The library never walks PDF structure itself; it consumes per-page
//! text-layer content through [`PageTextSource`], strictly in page order.
//! Reading order is load-bearing: page N+1 is only read after page N, and
//! the concatenation is what the entry scanner sees.

use crate::error::{Error, Result};
use crate::options::ExtractOptions;

/// Source of per-page text-layer content.
pub trait PageTextSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text-layer content of page `index` (0-based), in reading order.
    fn page_text(&mut self, index: usize) -> Result<String>;
}

/// Reads every page in order into one flattened string, pages separated
/// by a newline.
///
/// With a non-zero [`ExtractOptions::max_pages`], documents over the cap
/// fail with [`Error::PageLimit`] before any page is read.
pub fn read_all_pages<S: PageTextSource + ?Sized>(
    source: &mut S,
    options: &ExtractOptions,
) -> Result<String> {
    let pages = source.page_count();
    if options.max_pages > 0 && pages > options.max_pages {
        return Err(Error::PageLimit {
            limit: options.max_pages,
            pages,
        });
    }

    let mut full_text = String::new();
    for index in 0..pages {
        full_text.push_str(&source.page_text(index)?);
        full_text.push('\n');
    }
    Ok(full_text)
}

/// Page source backed by lopdf.
#[cfg(feature = "pdf")]
pub struct LopdfSource {
    document: lopdf::Document,
    page_numbers: Vec<u32>,
}

#[cfg(feature = "pdf")]
impl LopdfSource {
    /// Opens a document from a file path.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let document = lopdf::Document::load(path)
            .map_err(|e| Error::MalformedDocument(e.to_string()))?;
        Ok(Self::from_document(document))
    }

    /// Opens a document from an in-memory byte buffer.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = lopdf::Document::load_mem(data)
            .map_err(|e| Error::MalformedDocument(e.to_string()))?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: lopdf::Document) -> Self {
        let page_numbers = document.get_pages().keys().copied().collect();
        Self {
            document,
            page_numbers,
        }
    }
}

#[cfg(feature = "pdf")]
impl PageTextSource for LopdfSource {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&mut self, index: usize) -> Result<String> {
        let page = self
            .page_numbers
            .get(index)
            .copied()
            .ok_or_else(|| Error::UnreadableInput(format!("page {index} out of range")))?;
        self.document
            .extract_text(&[page])
            .map_err(|e| Error::UnreadableInput(e.to_string()))
    }
}
