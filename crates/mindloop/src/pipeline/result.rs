use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisProfile, DifficultyBand, ReadingLevel, StructureFlags};
use crate::config::schema::SUPPORTED_EXTENSIONS;
use crate::curriculum::Level;
use crate::processor::TextSource;

const BASE_CONFIDENCE: f64 = 0.85;
const MAX_CONFIDENCE: f64 = 0.98;

/// Overall confidence for a run, derived from the profile only.
pub fn overall_confidence(profile: &AnalysisProfile) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if profile.word_count > 1000 {
        confidence += 0.05;
    }
    if profile.key_terms.len() > 10 {
        confidence += 0.03;
    }
    if profile.structure.has_headings {
        confidence += 0.02;
    }
    if profile.topics.len() > 3 {
        confidence += 0.02;
    }

    (confidence.min(MAX_CONFIDENCE) * 100.0).round() / 100.0
}

/// "2.3s"
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.1}s", elapsed.as_secs_f64())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    pub word_count: usize,
    pub reading_level: ReadingLevel,
    pub topics: Vec<String>,
}

/// Everything one run produced. Returned only when every stage succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    pub success: bool,
    pub file_name: String,
    pub file_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub processing_time: String,
    #[serde(skip)]
    pub elapsed: Duration,
    pub confidence: f64,
    pub levels: Vec<Level>,
    pub total_questions: usize,
    pub key_terms: Vec<String>,
    pub difficulty: DifficultyBand,
    pub summary: String,
    pub metadata: ResultMetadata,
    pub structure: StructureFlags,
    pub concepts: Vec<String>,
    pub text_source: TextSource,
    pub processed_at: DateTime<Utc>,
}

impl PipelineResult {
    pub fn question_count(&self) -> usize {
        self.levels.iter().map(|l| l.questions.len()).sum()
    }
}

/// Feature flags shown to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub text_extraction: bool,
    pub multiple_formats: bool,
    pub question_generation: bool,
    pub difficulty_assessment: bool,
    pub key_term_extraction: bool,
    pub topic_identification: bool,
    pub reading_level_analysis: bool,
    pub structure_analysis: bool,
    pub offline_processing: bool,
    pub real_time_processing: bool,
    pub supported_formats: Vec<String>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            text_extraction: true,
            multiple_formats: true,
            question_generation: true,
            difficulty_assessment: true,
            key_term_extraction: true,
            topic_identification: true,
            reading_level_analysis: true,
            structure_analysis: true,
            offline_processing: true,
            real_time_processing: true,
            supported_formats: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub initialized: bool,
    pub resources_loaded: bool,
    pub runs_in_flight: usize,
    pub version: String,
}
