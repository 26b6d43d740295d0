//! Options for controlling extraction behavior.

use crate::model::MAX_DEFINITION_CHARS;

/// Options for controlling vocabulary extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Skip CSV rows whose term starts with `#` (curated sources carry
    /// comment rows).
    pub skip_comments: bool,

    /// Maximum number of PDF pages to read (0 = unlimited). Exceeding the
    /// cap fails with [`Error::PageLimit`](crate::Error::PageLimit) rather
    /// than reading a runaway document to the end.
    pub max_pages: usize,

    /// Hard cap on definition length, in characters.
    pub max_definition_len: usize,

    /// Minimum cleaned definition length, in characters. Shorter results
    /// are treated as noise and the entry is dropped.
    pub min_definition_len: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            skip_comments: false,
            max_pages: 0,
            max_definition_len: MAX_DEFINITION_CHARS,
            min_definition_len: 2,
        }
    }
}

impl ExtractOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for curated CSV sources: comment rows are skipped.
    pub fn curated() -> Self {
        Self {
            skip_comments: true,
            ..Self::default()
        }
    }

    /// Skips rows whose term starts with `#`.
    pub fn skip_comments(mut self) -> Self {
        self.skip_comments = true;
        self
    }

    /// Sets the page cap for PDF reading (0 = unlimited).
    pub fn with_max_pages(mut self, pages: usize) -> Self {
        self.max_pages = pages;
        self
    }

    /// Sets the definition length cap, in characters.
    pub fn with_max_definition_len(mut self, chars: usize) -> Self {
        self.max_definition_len = chars;
        self
    }

    /// Sets the minimum cleaned definition length, in characters.
    pub fn with_min_definition_len(mut self, chars: usize) -> Self {
        self.min_definition_len = chars;
        self
    }
}
