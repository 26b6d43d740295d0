//! Batch assembly: id assignment, term deduplication, normalization.

use crate::model::{SourceKind, VocabularyBatch, VocabularyPair};
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// Capability for assigning batch-unique pair ids.
///
/// Extraction functions take a generator so callers control determinism;
/// the default is a per-batch monotonic counter.
pub trait IdGenerator {
    /// Returns the id for the pair at `index` within the batch.
    fn next_id(&mut self, index: usize) -> String;
}

/// Deterministic per-batch counter. Two runs over identical input produce
/// identical batches, ids included.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: usize,
}

impl SequentialIds {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, _index: usize) -> String {
        let id = format!("word-{}", self.counter);
        self.counter += 1;
        id
    }
}

/// Wall-clock strategy producing the historical `word-<millis>-<index>`
/// layout. Uniqueness holds only because every id in a batch is assigned
/// before any pair is handed to the caller.
#[derive(Debug)]
pub struct TimestampIds {
    millis: u128,
}

impl TimestampIds {
    /// Captures the current wall-clock time for the whole batch.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self { millis }
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self, index: usize) -> String {
        format!("word-{}-{}", self.millis, index)
    }
}

/// Assembles raw (term, definition) candidates into a valid batch.
///
/// Trims both fields, drops pairs with an empty side, deduplicates terms
/// keeping the first occurrence in source order, truncates overlong
/// definitions, and assigns ids.
pub fn assemble<I: IdGenerator>(
    source: SourceKind,
    candidates: Vec<(String, String)>,
    max_definition_len: usize,
    ids: &mut I,
) -> VocabularyBatch {
    let mut seen: HashSet<String> = HashSet::new();
    let mut pairs = Vec::with_capacity(candidates.len());

    for (term, definition) in candidates {
        let term = term.trim().to_string();
        let definition = definition.trim().to_string();
        if term.is_empty() || definition.is_empty() {
            continue;
        }
        if !seen.insert(term.clone()) {
            continue;
        }
        let definition = truncate_chars(&definition, max_definition_len);
        let index = pairs.len();
        pairs.push(VocabularyPair {
            id: ids.next_id(index),
            term,
            definition,
        });
    }

    VocabularyBatch { source, pairs }
}

/// Hard-truncates to at most `max` characters, on a character boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
