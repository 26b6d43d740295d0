//! CSV vocabulary extraction.
//!
//! Converts two-column delimited text into a vocabulary batch: column 1
//! is the term, column 2 the definition. Rows missing either side are
//! skipped; batch-level emptiness is the only reported failure.

mod decode;
mod line;

pub use decode::decode_text;
pub use line::{escape_cell, split_line};

use crate::assemble::{assemble, IdGenerator, SequentialIds};
use crate::error::{Error, Result};
use crate::model::{SourceKind, VocabularyBatch};
use crate::options::ExtractOptions;

/// Extracts vocabulary pairs from CSV text with a caller-supplied id
/// generator.
///
/// Lines are split on CRLF or LF, trimmed, and blank lines dropped. A row
/// is accepted only when both term and definition are non-empty after
/// trimming; with [`ExtractOptions::skip_comments`] set, rows whose term
/// starts with `#` are skipped as comments.
pub fn extract_csv_with_ids<I: IdGenerator>(
    text: &str,
    options: &ExtractOptions,
    ids: &mut I,
) -> Result<VocabularyBatch> {
    let mut candidates = Vec::new();

    for raw in text.lines() {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let fields = split_line(raw);
        let term = fields.first().map(String::as_str).unwrap_or("");
        let definition = fields.get(1).map(String::as_str).unwrap_or("");
        if term.is_empty() || definition.is_empty() {
            continue;
        }
        if options.skip_comments && term.starts_with('#') {
            continue;
        }
        candidates.push((term.to_string(), definition.to_string()));
    }

    let batch = assemble(SourceKind::Csv, candidates, options.max_definition_len, ids);
    if batch.is_empty() {
        return Err(Error::EmptyExtraction {
            kind: SourceKind::Csv,
        });
    }
    Ok(batch)
}

/// Extracts vocabulary pairs from CSV text using sequential ids.
pub fn extract_csv(text: &str, options: &ExtractOptions) -> Result<VocabularyBatch> {
    extract_csv_with_ids(text, options, &mut SequentialIds::new())
}

/// Decodes raw file bytes, then extracts vocabulary pairs.
pub fn extract_csv_bytes(bytes: &[u8], options: &ExtractOptions) -> Result<VocabularyBatch> {
    let text = decode_text(bytes)?;
    extract_csv(&text, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_and_order_preserved() {
        let text = "apple,사과\nbanana,바나나\ncherry,체리";
        let batch = extract_csv(text, &ExtractOptions::default()).unwrap();
        assert_eq!(batch.len(), 3);
        let terms: Vec<_> = batch.iter().map(|p| p.term.as_str()).collect();
        assert_eq!(terms, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_quoted_comma_preserved_in_term() {
        let batch = extract_csv("\"a, b\",뜻", &ExtractOptions::default()).unwrap();
        assert_eq!(batch.pairs[0].term, "a, b");
        assert_eq!(batch.pairs[0].definition, "뜻");
    }

    #[test]
    fn test_blank_lines_and_crlf_handled() {
        let text = "apple,사과\r\n\r\n  \nbanana,바나나\r\n";
        let batch = extract_csv(text, &ExtractOptions::default()).unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_rows_missing_a_side_are_skipped() {
        let text = "apple,사과\nnodefinition,\n,고아\nbanana,바나나";
        let batch = extract_csv(text, &ExtractOptions::default()).unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_comment_rows_skipped_in_curated_mode() {
        let text = "# day 1\napple,사과\n#banana,바나나";
        let batch = extract_csv(text, &ExtractOptions::curated()).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.pairs[0].term, "apple");
    }

    #[test]
    fn test_comment_rows_kept_without_curated_mode() {
        // The live upload path treats `#` terms as ordinary data.
        let text = "#tag,해시태그";
        let batch = extract_csv(text, &ExtractOptions::default()).unwrap();
        assert_eq!(batch.pairs[0].term, "#tag");
    }

    #[test]
    fn test_duplicate_terms_first_wins() {
        let text = "apple,사과\nbanana,바나나\napple,능금";
        let batch = extract_csv(text, &ExtractOptions::default()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.pairs[0].definition, "사과");
    }

    #[test]
    fn test_empty_extraction_is_reported() {
        let err = extract_csv("\n\n,\n", &ExtractOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyExtraction {
                kind: SourceKind::Csv
            }
        ));
        assert!(err.to_string().contains("two-column"));
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let text = "apple,사과\nbanana,바나나";
        let a = extract_csv(text, &ExtractOptions::default()).unwrap();
        let b = extract_csv(text, &ExtractOptions::default()).unwrap();
        assert_eq!(a.pairs, b.pairs);
    }

    #[test]
    fn test_bytes_entry_point_decodes_utf8() {
        let batch =
            extract_csv_bytes("apple,사과".as_bytes(), &ExtractOptions::default()).unwrap();
        assert_eq!(batch.len(), 1);
    }
}
