//! Content analysis against the fixture documents.

mod common;

use common::fixture_text;
use mindloop::analysis::readability::{flesch_reading_ease, split_sentences};
use mindloop::analysis::terms::extract_key_terms;
use mindloop::config::AnalysisConfig;
use mindloop::{ContentAnalyzer, DifficultyBand, ReadingLevel};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn analyze(text: &str, seed: u64) -> mindloop::AnalysisProfile {
    ContentAnalyzer::default().analyze(text, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn test_study_guide_profile() {
    let text = fixture_text("study-guide.txt");
    let profile = analyze(&text, 1);

    assert_eq!(profile.key_terms[0], "cell");
    assert_eq!(profile.key_terms.len(), 15);
    assert_eq!(profile.difficulty, DifficultyBand::Beginner);

    assert!(profile.structure.has_headings);
    assert!(!profile.structure.has_bullet_points);
    assert!(!profile.structure.has_numbered_lists);
    assert_eq!(profile.structure.paragraph_count, 5);

    assert_eq!(
        profile.concepts,
        vec![
            "Key idea: structure determines function inside every cell.",
            "Definition of organelle - a specialised compartment with its own job.",
            "Nucleus: stores the genetic instructions of the cell.",
            "Mitochondria: release energy from food molecules for the cell.",
        ]
    );
    assert!(profile.summary.starts_with("# Cell Biology Study Guide"));
    assert!(profile.summary.ends_with('.'));
}

#[test]
fn test_photosynthesis_profile() {
    let text = fixture_text("photosynthesis.txt");
    let profile = analyze(&text, 1);

    assert_eq!(profile.word_count, 50);
    assert_eq!(profile.key_terms[0], "from");
    assert!(!profile.structure.has_headings);
    assert_eq!(profile.structure.paragraph_count, 1);
    assert!(profile.concepts.is_empty());
    assert_eq!(split_sentences(&text).len(), 5);
}

#[test]
fn test_research_methods_is_advanced() {
    let text = fixture_text("research-methods.txt");
    let profile = analyze(&text, 1);

    assert_eq!(profile.difficulty, DifficultyBand::Advanced);
    assert_eq!(profile.key_terms[0], "evaluation");
    assert_eq!(profile.reading_level, ReadingLevel::Difficult);
    assert!(flesch_reading_ease(&text) < 30.0);
}

#[test]
fn test_analysis_is_idempotent_apart_from_topics() {
    let text = fixture_text("study-guide.txt");

    let a = analyze(&text, 10);
    let b = analyze(&text, 11);

    assert_eq!(a.word_count, b.word_count);
    assert_eq!(a.key_terms, b.key_terms);
    assert_eq!(a.difficulty, b.difficulty);
    assert_eq!(a.reading_level, b.reading_level);
    assert_eq!(a.summary, b.summary);
    assert_eq!(a.structure, b.structure);
    assert_eq!(a.concepts, b.concepts);
}

#[test]
fn test_same_seed_same_topics() {
    let text = fixture_text("photosynthesis.txt");
    assert_eq!(analyze(&text, 5).topics, analyze(&text, 5).topics);
}

#[test]
fn test_config_limits_are_applied() {
    let text = fixture_text("study-guide.txt");
    let analyzer = ContentAnalyzer::new(AnalysisConfig {
        max_key_terms: 3,
        max_concepts: 2,
        summary_sentences: 1,
        max_topics: 0,
        ..AnalysisConfig::default()
    });

    let profile = analyzer.analyze(&text, &mut StdRng::seed_from_u64(0));

    assert_eq!(profile.key_terms, extract_key_terms(&text, 3, 4));
    assert_eq!(profile.concepts.len(), 2);
    assert!(profile.topics.is_empty());
    assert_eq!(profile.summary.matches(". ").count(), 0);
}

#[test]
fn test_empty_text_profile() {
    let profile = analyze("", 0);

    assert_eq!(profile.word_count, 0);
    assert!(profile.key_terms.is_empty());
    assert_eq!(profile.summary, "");
    assert_eq!(profile.structure.paragraph_count, 0);
    assert_eq!(profile.difficulty, DifficultyBand::Beginner);
    assert_eq!(profile.primary_topic(), "Document Content");
}
