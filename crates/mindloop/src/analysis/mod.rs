//! Lexical statistics and semantic signals derived from extracted text.

pub mod readability;
pub mod structure;
pub mod terms;
pub mod topics;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::schema::AnalysisConfig;

pub use readability::{count_syllables, DifficultySignals};
pub use structure::StructureFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyBand {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyBand {
    pub fn from_score(score: f64) -> Self {
        if score < 15.0 {
            Self::Beginner
        } else if score < 25.0 {
            Self::Intermediate
        } else {
            Self::Advanced
        }
    }
}

impl std::fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Flesch reading-ease bucket, easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadingLevel {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    #[serde(rename = "Easy")]
    Easy,
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    #[serde(rename = "Difficult")]
    Difficult,
}

impl ReadingLevel {
    pub fn from_flesch_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else {
            Self::Difficult
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
        }
    }
}

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the curriculum stages know about a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisProfile {
    pub word_count: usize,
    /// Ranked by descending frequency, ties in first-seen order.
    pub key_terms: Vec<String>,
    pub topics: Vec<String>,
    pub difficulty: DifficultyBand,
    pub reading_level: ReadingLevel,
    pub summary: String,
    pub structure: StructureFlags,
    pub concepts: Vec<String>,
}

impl AnalysisProfile {
    /// Name used for level titles: the top key term, or "Document Content".
    pub fn primary_topic(&self) -> &str {
        self.key_terms
            .first()
            .map(String::as_str)
            .unwrap_or("Document Content")
    }
}

pub struct ContentAnalyzer {
    config: AnalysisConfig,
}

impl ContentAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Builds the profile for `text`. Only topic selection draws from `rng`.
    pub fn analyze<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> AnalysisProfile {
        let signals = DifficultySignals::measure(text);

        let profile = AnalysisProfile {
            word_count: terms::count_words(text),
            key_terms: terms::extract_key_terms(
                text,
                self.config.max_key_terms,
                self.config.min_term_length,
            ),
            topics: topics::identify_topics(
                rng,
                self.config.topic_probability,
                self.config.max_topics,
            ),
            difficulty: signals.band(),
            reading_level: readability::reading_level(text),
            summary: structure::summarize(text, self.config.summary_sentences),
            structure: StructureFlags::detect(text),
            concepts: structure::extract_concepts(text, self.config.max_concepts),
        };

        debug!(
            word_count = profile.word_count,
            key_terms = profile.key_terms.len(),
            difficulty = %profile.difficulty,
            score = signals.score(),
            reading_level = %profile.reading_level,
            "Analyzed content"
        );

        profile
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
