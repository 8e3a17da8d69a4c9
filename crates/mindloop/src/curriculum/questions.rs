use rand::seq::SliceRandom;
use rand::Rng;

use crate::analysis::AnalysisProfile;

use super::{Archetype, Level, LevelBand, Question, QuestionBody};

const FALLBACK_TERM: &str = "concept";

pub fn question_count_for(band: LevelBand) -> usize {
    match band {
        LevelBand::Explorer => 8,
        LevelBand::Challenger => 12,
        LevelBand::Masters => 6,
    }
}

pub fn points_for(band: LevelBand) -> u32 {
    match band {
        LevelBand::Explorer => 10,
        LevelBand::Challenger => 20,
        LevelBand::Masters => 30,
    }
}

pub fn allowed_archetypes(band: LevelBand) -> &'static [Archetype] {
    match band {
        LevelBand::Explorer => &[
            Archetype::MultipleChoice,
            Archetype::TrueFalse,
            Archetype::FillBlank,
        ],
        LevelBand::Challenger => &[
            Archetype::MultipleChoice,
            Archetype::ShortAnswer,
            Archetype::FillBlank,
        ],
        LevelBand::Masters => &[
            Archetype::Essay,
            Archetype::ShortAnswer,
            Archetype::MultipleChoice,
        ],
    }
}

/// Prompt, answer data and explanation for `archetype` about `term`.
pub fn render_template(archetype: Archetype, term: &str) -> (String, QuestionBody, String) {
    match archetype {
        Archetype::MultipleChoice => (
            format!("Which of the following best describes {}?", term),
            QuestionBody::MultipleChoice {
                options: vec![
                    format!("The primary definition of {}", term),
                    format!("An alternative interpretation of {}", term),
                    "A related but different concept".to_string(),
                    "An opposite or contrasting idea".to_string(),
                ],
                correct_answer: 0,
            },
            format!(
                "{} is a key concept that plays an important role in understanding the subject matter.",
                term
            ),
        ),
        Archetype::TrueFalse => (
            format!("True or False: {} is fundamental to this topic.", term),
            QuestionBody::TrueFalse {
                options: vec!["True".to_string(), "False".to_string()],
                correct_answer: 0,
            },
            format!("{} is indeed a fundamental concept in this area of study.", term),
        ),
        Archetype::FillBlank => (
            format!(
                "Complete the statement: The main purpose of {} is to _______.",
                term
            ),
            QuestionBody::FillBlank {
                correct_answer: "provide essential functionality and understanding".to_string(),
            },
            format!("{} serves a crucial role in the overall framework.", term),
        ),
        Archetype::ShortAnswer => (
            format!("Explain the significance of {} in practical applications.", term),
            QuestionBody::ShortAnswer {
                sample_answer: format!(
                    "{} is significant because it provides the foundation for understanding and implementing key concepts in real-world scenarios.",
                    term
                ),
            },
            "This question tests your ability to connect theoretical concepts with practical applications."
                .to_string(),
        ),
        Archetype::Essay => (
            format!(
                "Analyze the role of {} and its impact on the broader subject area.",
                term
            ),
            QuestionBody::Essay { min_words: 150 },
            "This essay question evaluates your comprehensive understanding and analytical thinking skills."
                .to_string(),
        ),
    }
}

/// Per-question confidence in [0.80, 1.00], two decimals.
pub fn sample_confidence<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw: f64 = rng.gen_range(0.8..=1.0);
    (raw * 100.0).round() / 100.0
}

#[derive(Debug, Default, Clone, Copy)]
pub struct QuestionSynthesizer;

impl QuestionSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Exactly `question_count_for(level.difficulty)` questions, cycling
    /// through the profile's key terms.
    pub fn generate_questions<R: Rng + ?Sized>(
        &self,
        level: &Level,
        profile: &AnalysisProfile,
        rng: &mut R,
    ) -> Vec<Question> {
        let band = level.difficulty;
        let allowed = allowed_archetypes(band);
        let count = question_count_for(band);

        (0..count)
            .map(|i| {
                let term = if profile.key_terms.is_empty() {
                    FALLBACK_TERM
                } else {
                    profile.key_terms[i % profile.key_terms.len()].as_str()
                };

                let archetype = allowed
                    .choose(rng)
                    .copied()
                    .unwrap_or(Archetype::MultipleChoice);
                let (prompt, body, explanation) = render_template(archetype, term);

                Question {
                    id: format!("q_{}_{}", level.id, i),
                    prompt,
                    body,
                    explanation,
                    points: points_for(band),
                    difficulty: band,
                    topic: term.to_string(),
                    ai_generated: true,
                    confidence: sample_confidence(rng),
                }
            })
            .collect()
    }

    /// Fills every level's question list in place.
    pub fn populate<R: Rng + ?Sized>(&self, levels: &mut [Level], profile: &AnalysisProfile, rng: &mut R) {
        for level in levels.iter_mut() {
            level.questions = self.generate_questions(level, profile, rng);
        }
    }
}
