use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::readability::split_sentences;

/// Fragments this short are treated as noise, not summary material.
const MIN_SUMMARY_SENTENCE_CHARS: usize = 20;

const CONCEPT_MARKERS: [&str; 2] = ["Definition", "Key"];

static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:#|\*\*)").unwrap());
static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•]").unwrap());
static RE_NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());
static RE_PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Layout hints. The marker flags only look at the very start of the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureFlags {
    pub has_headings: bool,
    pub has_bullet_points: bool,
    pub has_numbered_lists: bool,
    pub paragraph_count: usize,
}

impl StructureFlags {
    pub fn detect(text: &str) -> Self {
        Self {
            has_headings: RE_HEADING.is_match(text),
            has_bullet_points: RE_BULLET.is_match(text),
            has_numbered_lists: RE_NUMBERED.is_match(text),
            paragraph_count: RE_PARAGRAPH_BREAK
                .split(text)
                .filter(|block| !block.trim().is_empty())
                .count(),
        }
    }
}

/// First `max_sentences` substantial sentences, joined with ". " and closed
/// with a period. Returns an empty string when nothing qualifies.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let picked: Vec<&str> = split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SUMMARY_SENTENCE_CHARS)
        .take(max_sentences)
        .collect();

    if picked.is_empty() {
        return String::new();
    }

    let mut summary = picked.join(". ");
    summary.push('.');
    summary
}

/// Lines that look like definitions or key points, trimmed, in document order.
pub fn extract_concepts(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .filter(|line| {
            line.contains(':') || CONCEPT_MARKERS.iter().any(|marker| line.contains(marker))
        })
        .map(|line| line.trim().to_string())
        .take(limit)
        .collect()
}
