//! Vocabulary pairs and extraction batches.

use serde::{Deserialize, Serialize};

/// Maximum definition length in characters. Anything longer is almost
/// certainly scanner over-capture, not a genuine long definition.
pub const MAX_DEFINITION_CHARS: usize = 200;

/// The kind of source document a batch was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Two-column delimited text (column 1: term, column 2: definition).
    Csv,
    /// Flattened text layer of a numbered vocabulary-list PDF.
    Pdf,
}

impl SourceKind {
    /// Describes the layout this extractor expects. Used in
    /// empty-extraction error messages so the user can correct the input.
    pub fn expected_layout(&self) -> &'static str {
        match self {
            SourceKind::Csv => "two-column CSV (column 1: term, column 2: definition)",
            SourceKind::Pdf => "numbered entries like `1. word<TAB>meaning`",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Csv => write!(f, "CSV"),
            SourceKind::Pdf => write!(f, "PDF"),
        }
    }
}

/// One cleaned (term, definition) pair.
///
/// Invariant: both fields are non-empty and trimmed; `definition` is at
/// most [`MAX_DEFINITION_CHARS`] characters; `id` is unique within the
/// batch that produced the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyPair {
    /// Batch-unique identifier.
    pub id: String,
    /// The foreign-language word being studied.
    pub term: String,
    /// The localized-language meaning of the term.
    pub definition: String,
}

/// Ordered sequence of pairs produced by one extraction run over one
/// source document. Terms are unique; first occurrence wins.
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyBatch {
    /// Where this batch came from.
    pub source: SourceKind,
    /// The extracted pairs, in source order.
    pub pairs: Vec<VocabularyPair>,
}

impl VocabularyBatch {
    /// Returns the number of pairs in the batch.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the batch holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = &VocabularyPair> {
        self.pairs.iter()
    }

    /// Renders the batch as two-column CSV text, one pair per line.
    pub fn to_csv(&self) -> String {
        self.pairs
            .iter()
            .map(|p| {
                format!(
                    "{},{}",
                    crate::csv::escape_cell(&p.term),
                    crate::csv::escape_cell(&p.definition)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serializes the pairs as a JSON array of `{term, definition}` objects.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.pairs).unwrap_or_else(|_| "[]".to_string())
    }
}

impl IntoIterator for VocabularyBatch {
    type Item = VocabularyPair;
    type IntoIter = std::vec::IntoIter<VocabularyPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(id: &str, term: &str, definition: &str) -> VocabularyPair {
        VocabularyPair {
            id: id.to_string(),
            term: term.to_string(),
            definition: definition.to_string(),
        }
    }

    #[test]
    fn test_batch_to_csv_escapes_commas() {
        let batch = VocabularyBatch {
            source: SourceKind::Csv,
            pairs: vec![pair("word-0", "a, b", "뜻"), pair("word-1", "plain", "의미")],
        };
        let csv = batch.to_csv();
        assert_eq!(csv, "\"a, b\",뜻\nplain,의미");
    }

    #[test]
    fn test_batch_json_shape() {
        let batch = VocabularyBatch {
            source: SourceKind::Pdf,
            pairs: vec![pair("word-0", "apple", "사과")],
        };
        let json = batch.to_json();
        assert!(json.contains("\"term\": \"apple\""));
        assert!(json.contains("\"definition\": \"사과\""));
    }

    #[test]
    fn test_expected_layout_per_kind() {
        assert!(SourceKind::Csv.expected_layout().contains("two-column"));
        assert!(SourceKind::Pdf.expected_layout().contains("numbered"));
    }
}
