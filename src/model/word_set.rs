//! Word-set bundles written by the batch extraction tool.

use super::VocabularyPair;
use serde::{Deserialize, Serialize};

/// A named vocabulary set covering one study day.
///
/// `created_at` is an ISO 8601 timestamp supplied by the caller; the
/// library itself never reads the clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSet {
    /// Bundle-unique identifier.
    pub id: String,
    /// 1-based study day number.
    pub day: u32,
    /// Display name, usually the source file stem.
    pub name: String,
    /// The words in this set.
    pub words: Vec<VocabularyPair>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

impl WordSet {
    /// Creates a word set from one extraction batch.
    pub fn new(
        id: impl Into<String>,
        day: u32,
        name: impl Into<String>,
        words: Vec<VocabularyPair>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            day,
            name: name.into(),
            words,
            created_at: created_at.into(),
        }
    }
}

/// Top-level JSON shape the batch tool writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSetBundle {
    /// All extracted sets, in day order.
    pub word_sets: Vec<WordSet>,
}
