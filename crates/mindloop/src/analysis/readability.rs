use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{DifficultyBand, ReadingLevel};

const TECHNICAL_TERMS: [&str; 8] = [
    "methodology",
    "framework",
    "implementation",
    "optimization",
    "analysis",
    "evaluation",
    "systematic",
    "comprehensive",
];

static RE_SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());
static RE_SILENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());
static RE_LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").unwrap());
static RE_VOWEL_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

/// Non-blank fragments between runs of `.`, `!` and `?`, untrimmed.
pub fn split_sentences(text: &str) -> Vec<&str> {
    RE_SENTENCE_END
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Words per sentence. Zero when the text has no sentences.
pub fn average_sentence_length(text: &str) -> f64 {
    let sentences = split_sentences(text).len();
    if sentences == 0 {
        return 0.0;
    }
    text.split_whitespace().count() as f64 / sentences as f64
}

/// Heuristic syllable count. Words of three characters or fewer (including
/// the empty string) count as one syllable; nothing counts as zero.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let trimmed = RE_SILENT_SUFFIX.replace(&word, "");
    let trimmed = RE_LEADING_Y.replace(&trimmed, "");

    match RE_VOWEL_GROUP.find_iter(&trimmed).count() {
        0 => 1,
        n => n,
    }
}

pub fn average_syllables_per_word(text: &str) -> f64 {
    let mut words = 0usize;
    let mut syllables = 0usize;
    for word in text.split_whitespace() {
        words += 1;
        syllables += count_syllables(word);
    }

    if words == 0 {
        return 0.0;
    }
    syllables as f64 / words as f64
}

/// Flesch reading ease: higher is easier.
pub fn flesch_reading_ease(text: &str) -> f64 {
    206.835 - 1.015 * average_sentence_length(text) - 84.6 * average_syllables_per_word(text)
}

pub fn reading_level(text: &str) -> ReadingLevel {
    ReadingLevel::from_flesch_score(flesch_reading_ease(text))
}

/// Raw inputs of the difficulty score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultySignals {
    pub avg_sentence_length: f64,
    /// Whitespace tokens longer than six characters.
    pub complex_word_count: usize,
    /// How many of the technical vocabulary terms occur anywhere in the text.
    pub technical_term_hits: usize,
}

impl DifficultySignals {
    pub fn measure(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            avg_sentence_length: average_sentence_length(text),
            complex_word_count: text
                .split_whitespace()
                .filter(|w| w.chars().count() > 6)
                .count(),
            technical_term_hits: TECHNICAL_TERMS
                .iter()
                .filter(|term| lower.contains(*term))
                .count(),
        }
    }

    pub fn score(&self) -> f64 {
        self.avg_sentence_length * 0.3
            + self.complex_word_count as f64 * 0.4
            + self.technical_term_hits as f64 * 0.3
    }

    pub fn band(&self) -> DifficultyBand {
        DifficultyBand::from_score(self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllables_short_words() {
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables(""), 1);
        assert_eq!(count_syllables("the"), 1);
    }

    #[test]
    fn test_syllables_vowel_groups() {
        assert_eq!(count_syllables("water"), 2);
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("computer"), 3);
    }

    #[test]
    fn test_syllables_silent_endings() {
        // "make" -> "ma"
        assert_eq!(count_syllables("make"), 1);
        // "jumped" -> "jump"
        assert_eq!(count_syllables("jumped"), 1);
        // "boxes" -> "bo"
        assert_eq!(count_syllables("boxes"), 1);
    }

    #[test]
    fn test_syllables_leading_y_and_case() {
        assert_eq!(count_syllables("Yellow"), 2);
        assert_eq!(count_syllables("YELLOW"), count_syllables("yellow"));
    }

    #[test]
    fn test_syllables_no_vowels_counts_one() {
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("pfft!"), 1);
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("One. Two!! Three?  ...  ");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[1].trim(), "Two");
    }

    #[test]
    fn test_average_sentence_length() {
        assert!((average_sentence_length("A b c. D e f.") - 3.0).abs() < 1e-9);
        assert_eq!(average_sentence_length(""), 0.0);
        assert_eq!(average_sentence_length("..."), 0.0);
    }

    #[test]
    fn test_flesch_simple_text_is_easy() {
        let level = reading_level("The cat sat. The dog ran. We had fun.");
        assert_eq!(level, ReadingLevel::VeryEasy);
    }

    #[test]
    fn test_flesch_dense_text_is_difficult() {
        let text = "Comprehensive methodological evaluation necessitates systematic \
                    operationalization of multidimensional institutional considerations";
        assert_eq!(reading_level(text), ReadingLevel::Difficult);
    }

    #[test]
    fn test_signals_measure() {
        let text = "The framework supports systematic analysis. Simple words here.";
        let signals = DifficultySignals::measure(text);

        assert!((signals.avg_sentence_length - 4.0).abs() < 1e-9);
        // framework, supports, systematic, analysis.
        assert_eq!(signals.complex_word_count, 4);
        // framework, analysis, systematic
        assert_eq!(signals.technical_term_hits, 3);
        assert!((signals.score() - (1.2 + 1.6 + 0.9)).abs() < 1e-9);
        assert_eq!(signals.band(), DifficultyBand::Beginner);
    }

    #[test]
    fn test_technical_terms_case_insensitive() {
        let signals = DifficultySignals::measure("METHODOLOGY and Optimization");
        assert_eq!(signals.technical_term_hits, 2);
    }

    #[test]
    fn test_band_rises_with_complex_words() {
        let mut text = String::from("Short.");
        let mut bands = Vec::new();
        for _ in 0..80 {
            text.push_str(" complicated");
            bands.push(DifficultySignals::measure(&text).band());
        }
        assert_eq!(bands.first(), Some(&DifficultyBand::Beginner));
        assert_eq!(bands.last(), Some(&DifficultyBand::Advanced));
        assert!(bands.windows(2).all(|w| w[0] <= w[1]));
    }
}
