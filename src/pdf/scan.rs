//! Numbered-entry scanning over flattened PDF text.

use regex::Regex;
use std::sync::LazyLock;

/// Start of a numbered dictionary entry: `<integer>.<ws><term-token>`,
/// where a term token is one or more Latin letters or hyphens.
static RE_ENTRY_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*([A-Za-z-]+)").unwrap());

/// Boundary marking the next entry. Whitespace after the period is
/// required here, so numeric fragments inside a definition do not cut
/// the current entry short.
static RE_NEXT_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+[A-Za-z-]+").unwrap());

/// One candidate dictionary entry found in PDF text, before cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// The matched term token, lowercased and trimmed.
    pub term: String,
    /// Everything after the term up to the next numbered marker or end
    /// of text.
    pub raw_block: &'a str,
}

/// Position-advancing scanner yielding numbered entries lazily.
///
/// Each scanner owns its own position, so independent scans over the
/// same text share no state and re-running is side-effect free.
#[derive(Debug, Clone)]
pub struct EntryScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> EntryScanner<'a> {
    /// Creates a scanner at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for EntryScanner<'a> {
    type Item = RawEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = RE_ENTRY_START.captures_at(self.text, self.pos)?;
        let term = caps.get(1)?;
        let block_start = caps.get(0)?.end();

        let block_end = RE_NEXT_ENTRY
            .find_at(self.text, block_start)
            .map(|m| m.start())
            .unwrap_or(self.text.len());

        self.pos = block_end;
        Some(RawEntry {
            term: term.as_str().trim().to_lowercase(),
            raw_block: &self.text[block_start..block_end],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<(String, String)> {
        EntryScanner::new(text)
            .map(|e| (e.term, e.raw_block.to_string()))
            .collect()
    }

    #[test]
    fn test_two_entries_bounded_by_next_marker() {
        let entries = scan("1. apple 사과\t N. 2. banana 바나나");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "apple");
        assert_eq!(entries[0].1, " 사과\t N. ");
        assert_eq!(entries[1].0, "banana");
        assert_eq!(entries[1].1, " 바나나");
    }

    #[test]
    fn test_terms_are_lowercased() {
        let entries = scan("1. Apple 사과");
        assert_eq!(entries[0].0, "apple");
    }

    #[test]
    fn test_hyphenated_terms() {
        let entries = scan("1. well-known 유명한 2. other 기타");
        assert_eq!(entries[0].0, "well-known");
    }

    #[test]
    fn test_no_space_after_period() {
        let entries = scan("1.apple 사과");
        assert_eq!(entries[0].0, "apple");
    }

    #[test]
    fn test_last_entry_runs_to_end() {
        let entries = scan("1. apple 사과 2. banana 바나나 노랗다");
        assert_eq!(entries[1].1, " 바나나 노랗다");
    }

    #[test]
    fn test_no_entries_in_plain_text() {
        assert!(scan("plain prose with no markers").is_empty());
    }

    #[test]
    fn test_scanner_is_restartable() {
        let text = "1. apple 사과 2. banana 바나나";
        let first = scan(text);
        let second = scan(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bare_number_without_term_is_not_a_boundary() {
        // "3. " with no following term token does not end the entry.
        let entries = scan("1. apple 사과 3. 2. banana 바나나");
        assert_eq!(entries.len(), 2);
        assert!(entries[0].1.contains("3."));
    }
}
