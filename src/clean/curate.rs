//! Aggressive cleanup for one-time CSV curation.
//!
//! The live upload path (the parent module) only strips part-of-speech
//! markers. Curated source documents additionally carry advertising
//! slogans stamped across every page and English grammar hints embedded
//! in parentheses; this pass removes both and rejects rows left with no
//! genuine definition.
//!
//! The advertising phrase list is corpus-specific configuration, not
//! core logic: [`AdFilter::builtin`] matches the tutoring-brand strings
//! observed in the source documents, and callers can supply their own
//! list (or none) for other corpora.

use super::contains_hangul;
use crate::csv::{escape_cell, split_line};
use crate::error::{Error, Result};
use crate::model::SourceKind;
use regex::Regex;
use std::sync::LazyLock;

/// Curated definitions are capped shorter than live ones; anything this
/// long is boilerplate that survived the filters.
const CURATED_MAX_CHARS: usize = 120;

/// Part-of-speech and grammar tags removed wherever they appear.
static RE_POS_TAGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bV\.\s*",
        r"(?i)\bN\.\s*",
        r"형\s*\.\s*",
        r"부\s*\.\s*",
        r"\b불가산\s*",
        r"\b가산\s*",
        r"\b전\.\s*",
        r"(?i)\bcf\.\s*",
        r"\b자\s*$",
        r"\b타\s*$",
        r"\s*\.\s*$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Residual tags stripped from an already-selected segment. Unlike
/// [`RE_POS_TAGS`] this set leaves trailing periods alone so curated
/// ellipses survive.
static RE_RESIDUAL_TAGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bV\.\s*",
        r"(?i)\bN\.\s*",
        r"형\s*\.\s*",
        r"부\s*\.\s*",
        r"전\s*\.\s*",
        r"\b불가산\s*",
        r"\b가산\s*",
        r"(?i)\bcf\.\s*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// English grammar hints embedded in parentheses: preposition usage,
/// pluralization, clause and infinitive patterns.
static RE_PAREN_HINTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\s*\(\s*(?:for|about|to|of|with|in|into|from|at)\s*[^)]*\)",
        r"\s*\((?:pl\.|종종\s*pl\.)\)",
        r"\s*\(\s*[\w\s/]+절\s*\)",
        r"\s*\(\s*\+\s*to\s+부정사\s*\)",
        r"\s*\(\s*-ing\s*\)",
        r"\s*\(\s*보통\s*수동형으로\s*\)",
        r"\s*\(\s*타동사\s*\)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// A segment consisting solely of grammar markers carries no meaning.
static RE_ONLY_POS_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*(?:V\.|N\.|형\.?|부\.?|가산|불가산|전\.|cf\.)\s*)*$").unwrap()
});

/// At least two consecutive syllables marks a genuine Korean word.
static RE_KOREAN_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[가-힣]{2,}").unwrap());

static RE_TRAILING_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*$").unwrap());

static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// A cleaned result that is a bare grammar label (whitespace ignored)
/// has no genuine definition.
static RE_ONLY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(가산|불가산|전|cf\.?|V\.?|N\.?)$|^형\.?$|^부\.?$").unwrap()
});

/// Removable advertising/brand phrase patterns.
///
/// `phrases` run over the raw cell before any other cleanup; `remnants`
/// run over the selected segment to catch fragments the first pass left
/// behind.
#[derive(Debug, Clone)]
pub struct AdFilter {
    phrases: Vec<Regex>,
    remnants: Vec<Regex>,
}

impl AdFilter {
    /// The slogans observed in the source corpus.
    pub fn builtin() -> Self {
        let phrases = [
            r"\s*신토익\s*단기간\s*고득점\s*청주\s*&\s*대전\s*홍쌤토익\s*",
            "\\s*홍쌤토익[^\"]*",
            "\\s*신토익[^\"\\s,]*",
            r"\s*홍쌤\s*",
            "\\s*단기간\\s*고득점[^\"\\s,]*",
        ];
        let remnants = [
            r"\s*신토익[^가-힣]*",
            r"\s*단기간\s*고득점[^가-힣]*",
            r"\s*홍쌤[^가-힣]*",
            r"\s*청주\s*&\s*대전\s*",
        ];
        Self {
            phrases: phrases.iter().map(|p| Regex::new(p).unwrap()).collect(),
            remnants: remnants.iter().map(|p| Regex::new(p).unwrap()).collect(),
        }
    }

    /// A filter that removes nothing.
    pub fn none() -> Self {
        Self {
            phrases: Vec::new(),
            remnants: Vec::new(),
        }
    }

    /// Builds a filter from literal phrases.
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled_phrases = Vec::new();
        let mut compiled_remnants = Vec::new();
        for phrase in phrases {
            let escaped = regex::escape(phrase.as_ref());
            compiled_phrases.push(Regex::new(&format!(r"\s*{escaped}\s*")).unwrap());
            compiled_remnants.push(Regex::new(&format!(r"\s*{escaped}[^가-힣]*")).unwrap());
        }
        Self {
            phrases: compiled_phrases,
            remnants: compiled_remnants,
        }
    }

    fn strip_phrases(&self, text: &str) -> String {
        let mut s = text.to_string();
        for re in &self.phrases {
            s = re.replace_all(&s, " ").into_owned();
        }
        s.trim().to_string()
    }

    fn strip_remnants(&self, text: &str) -> String {
        let mut s = text.to_string();
        for re in &self.remnants {
            s = re.replace_all(&s, " ").into_owned();
        }
        s
    }
}

impl Default for AdFilter {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Removes part-of-speech tags and parenthesized grammar hints, then
/// collapses whitespace.
fn strip_pos_and_grammar(text: &str) -> String {
    let mut s = text.to_string();
    for re in RE_POS_TAGS.iter() {
        s = re.replace_all(&s, " ").into_owned();
    }
    for re in RE_PAREN_HINTS.iter() {
        s = re.replace_all(&s, " ").into_owned();
    }
    RE_MULTI_SPACE.replace_all(&s, " ").trim().to_string()
}

/// Residual tag and slogan fragments on an already-selected segment.
fn strip_remaining_junk(text: &str, filter: &AdFilter) -> String {
    let mut s = text.to_string();
    for re in RE_RESIDUAL_TAGS.iter() {
        s = re.replace_all(&s, " ").into_owned();
    }
    s = filter.strip_remnants(&s);
    RE_MULTI_SPACE.replace_all(&s, " ").trim().to_string()
}

/// Picks the first segment carrying a genuine Korean word, skipping
/// segments that are only grammar markers. Falls back to the whole
/// cleaned block when no segment qualifies.
fn extract_main_meaning(raw: &str, filter: &AdFilter) -> String {
    let no_ad = filter.strip_phrases(raw);
    let no_pos = strip_pos_and_grammar(&no_ad);

    for seg in no_pos.split(['\n', '/']) {
        let seg = seg.trim();
        if seg.is_empty() || RE_ONLY_POS_SEGMENT.is_match(seg) {
            continue;
        }
        if !RE_KOREAN_WORD.is_match(seg) {
            continue;
        }
        let meaning = RE_TRAILING_PAREN.replace(seg, "");
        let meaning = RE_MULTI_SPACE.replace_all(&meaning, " ");
        let meaning = meaning.trim();
        if meaning.chars().count() > 1 && contains_hangul(meaning) {
            let meaning = strip_remaining_junk(meaning, filter);
            return truncate_with_ellipsis(&meaning, CURATED_MAX_CHARS);
        }
    }

    let collapsed = RE_MULTI_SPACE.replace_all(no_pos.trim(), " ");
    let fallback = strip_remaining_junk(&collapsed, filter);
    fallback.chars().take(CURATED_MAX_CHARS).collect()
}

fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

/// Aggressively cleans one raw definition cell.
///
/// Returns `None` when no genuine definition survives: advertising-only
/// rows, rows with no Korean text, and rows reduced to a bare grammar
/// label are all rejected.
pub fn curate_definition(raw: &str, filter: &AdFilter) -> Option<String> {
    let meaning = extract_main_meaning(raw, filter);
    let cleaned = strip_remaining_junk(&meaning, filter);
    if cleaned.is_empty() || !contains_hangul(&cleaned) {
        return None;
    }
    let compact: String = cleaned.chars().filter(|c| !c.is_whitespace()).collect();
    if RE_ONLY_LABEL.is_match(&compact) {
        return None;
    }
    Some(cleaned)
}

/// Runs the curation pass over whole CSV text.
///
/// Every row's definition cell is cleaned; rows whose term is empty or
/// whose definition does not survive are dropped. Returns the rewritten
/// two-column CSV, or [`Error::EmptyExtraction`] when nothing survived.
pub fn curate_csv(text: &str, filter: &AdFilter) -> Result<String> {
    let mut out = Vec::new();

    for raw in text.lines() {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let fields = split_line(raw);
        let term = fields.first().map(String::as_str).unwrap_or("");
        if term.is_empty() {
            continue;
        }
        let cell = fields.get(1).map(String::as_str).unwrap_or("");
        let Some(definition) = curate_definition(cell, filter) else {
            continue;
        };
        out.push(format!("{},{}", escape_cell(term), escape_cell(&definition)));
    }

    if out.is_empty() {
        return Err(Error::EmptyExtraction {
            kind: SourceKind::Csv,
        });
    }
    Ok(out.join("\n"))
}
