//! Level ladder and question models built from an analysis profile.

pub mod levels;
pub mod questions;

use serde::{Deserialize, Serialize};

pub use levels::build_levels;
pub use questions::{allowed_archetypes, points_for, question_count_for, QuestionSynthesizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelBand {
    Explorer,
    Challenger,
    Masters,
}

impl LevelBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explorer => "explorer",
            Self::Challenger => "challenger",
            Self::Masters => "masters",
        }
    }
}

impl std::fmt::Display for LevelBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    Unlocked,
    Locked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: LevelBand,
    pub status: LockState,
    pub estimated_minutes: u32,
    pub points: u32,
    /// 1-based position in the ladder.
    pub order: u32,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Level {
    pub fn estimated_time_label(&self) -> String {
        format!("{} min", self.estimated_minutes)
    }

    pub fn is_unlocked(&self) -> bool {
        self.status == LockState::Unlocked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    MultipleChoice,
    TrueFalse,
    FillBlank,
    ShortAnswer,
    Essay,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::TrueFalse => "true-false",
            Self::FillBlank => "fill-blank",
            Self::ShortAnswer => "short-answer",
            Self::Essay => "essay",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer data for each archetype. Serialized with a `type` tag so the
/// flattened question reads `{"type": "true-false", "options": [...], ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionBody {
    #[serde(rename_all = "camelCase")]
    MultipleChoice {
        options: Vec<String>,
        correct_answer: usize,
    },
    #[serde(rename_all = "camelCase")]
    TrueFalse {
        options: Vec<String>,
        correct_answer: usize,
    },
    #[serde(rename_all = "camelCase")]
    FillBlank { correct_answer: String },
    #[serde(rename_all = "camelCase")]
    ShortAnswer { sample_answer: String },
    #[serde(rename_all = "camelCase")]
    Essay { min_words: u32 },
}

impl QuestionBody {
    pub fn archetype(&self) -> Archetype {
        match self {
            Self::MultipleChoice { .. } => Archetype::MultipleChoice,
            Self::TrueFalse { .. } => Archetype::TrueFalse,
            Self::FillBlank { .. } => Archetype::FillBlank,
            Self::ShortAnswer { .. } => Archetype::ShortAnswer,
            Self::Essay { .. } => Archetype::Essay,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(flatten)]
    pub body: QuestionBody,
    pub explanation: String,
    pub points: u32,
    pub difficulty: LevelBand,
    /// The key term this question is about.
    pub topic: String,
    pub ai_generated: bool,
    pub confidence: f64,
}

impl Question {
    pub fn archetype(&self) -> Archetype {
        self.body.archetype()
    }
}
