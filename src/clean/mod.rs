//! Definition cleanup pipeline.
//!
//! An ordered sequence of independent text transforms that turns the raw
//! noisy block following a scanned term into a usable Korean definition:
//!
//! 1. Unicode NFC normalization
//! 2. Korean segment selection (tab-delimited first, regex fallback)
//! 3. Part-of-speech marker stripping
//! 4. Length capping
//!
//! Each transform is total (string in, string out). The composed result
//! may legitimately be empty, meaning "discard this entry"; emptiness is
//! never an error at this layer.

pub mod curate;

use crate::assemble::truncate_chars;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// First run of Hangul syllables plus adjoining space/parens/slash/comma
/// characters. Fallback when no tab-delimited segment qualifies; the run
/// must contain at least one actual syllable.
static RE_KOREAN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s/(),]*[가-힣][가-힣\s/(),]*").unwrap());

/// Leading part-of-speech marker: noun/verb abbreviations plus the Korean
/// adjective/adverb and countability tags vocabulary books use.
static RE_LEADING_POS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(N\.|V\.|형\.|부\.|가산N\.|불가산N\.)\s*").unwrap());

/// Trailing over-capture: a definition running into a `N.`/`V.` tag means
/// the scanner grabbed the start of the next entry's annotations.
static RE_TRAILING_POS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+[NV]\.\s+.*$").unwrap());

/// Returns true when the text contains at least one Hangul syllable.
pub fn contains_hangul(s: &str) -> bool {
    s.chars().any(|c| ('\u{AC00}'..='\u{D7A3}').contains(&c))
}

/// Unicode NFC normalization. Text layers produced by some PDF tooling
/// carry decomposed jamo, which would defeat the syllable checks below.
pub fn normalize(s: &str) -> String {
    s.nfc().collect()
}

/// Selects the first candidate segment holding genuine Korean text.
///
/// Tab-delimited segments are tried in order; when none contains a
/// Hangul syllable, the first Korean run anywhere in the block is taken
/// instead. Returns an empty string when the block has no Korean at all.
pub fn select_korean_segment(block: &str) -> String {
    for part in block.split('\t') {
        let part = part.trim();
        if contains_hangul(part) {
            return part.to_string();
        }
    }
    RE_KOREAN_RUN
        .find(block)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Strips one leading part-of-speech marker and any trailing grammar-tag
/// over-capture from a selected segment.
pub fn strip_pos_markers(segment: &str) -> String {
    let s = RE_LEADING_POS.replace(segment, "");
    let s = RE_TRAILING_POS.replace(&s, "");
    s.trim().to_string()
}

/// Runs the full pipeline over one raw definition block.
///
/// The result is capped at `max_chars` characters; empty output means the
/// entry is noise and should be dropped by the caller.
pub fn clean_definition(raw_block: &str, max_chars: usize) -> String {
    let normalized = normalize(raw_block);
    let segment = select_korean_segment(&normalized);
    let stripped = strip_pos_markers(&segment);
    truncate_chars(&stripped, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_hangul() {
        assert!(contains_hangul("사과"));
        assert!(contains_hangul("apple 사과"));
        assert!(!contains_hangul("apple"));
        assert!(!contains_hangul(""));
    }

    #[test]
    fn test_normalize_composes_jamo() {
        // Decomposed 사과 (ᄉ+ᅡ+ᄀ+ᅪ) composes into syllables.
        let decomposed = "\u{1109}\u{1161}\u{1100}\u{116A}";
        let normalized = normalize(decomposed);
        assert_eq!(normalized, "사과");
        assert!(contains_hangul(&normalized));
        assert!(!contains_hangul(decomposed));
    }

    #[test]
    fn test_tab_segment_selected_first() {
        assert_eq!(select_korean_segment("apple stuff\t사과\t더 많은 뜻"), "사과");
    }

    #[test]
    fn test_tabless_block_is_one_segment() {
        // Without tabs the whole block is the only candidate segment.
        assert_eq!(
            select_korean_segment("  noise 사과, 능금 trailing  "),
            "noise 사과, 능금 trailing"
        );
    }

    #[test]
    fn test_no_korean_yields_empty() {
        assert_eq!(select_korean_segment("nothing here"), "");
        assert_eq!(select_korean_segment("punct only (), /"), "");
    }

    #[test]
    fn test_leading_pos_marker_stripped() {
        assert_eq!(strip_pos_markers("N. 사과"), "사과");
        assert_eq!(strip_pos_markers("가산N. 사과"), "사과");
        assert_eq!(strip_pos_markers("형. 빠른"), "빠른");
    }

    #[test]
    fn test_trailing_grammar_tag_cut() {
        assert_eq!(strip_pos_markers("사과, 능금 N. 다음 단어"), "사과, 능금");
        assert_eq!(strip_pos_markers("달리다 V. another"), "달리다");
    }

    #[test]
    fn test_clean_definition_pipeline() {
        assert_eq!(clean_definition(" 사과\t N. ", 200), "사과");
        assert_eq!(clean_definition("garbage only", 200), "");
    }

    #[test]
    fn test_clean_definition_caps_length() {
        let long = format!("\t{}", "가".repeat(300));
        assert_eq!(clean_definition(&long, 200).chars().count(), 200);
    }
}
