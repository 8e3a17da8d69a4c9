//! Property-based tests using proptest

use std::collections::HashSet;

use mindloop::analysis::readability::count_syllables;
use mindloop::analysis::structure::summarize;
use mindloop::analysis::terms::{extract_key_terms, tokenize_terms};
use mindloop::analysis::topics::identify_topics;
use mindloop::curriculum::{allowed_archetypes, build_levels, question_count_for, QuestionSynthesizer};
use mindloop::{ContentAnalyzer, DifficultyBand};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn word_soup() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,9}", 0..80).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_key_terms_are_ranked_and_bounded(
        text in word_soup(),
        limit in 0usize..20,
        min_length in 1usize..6
    ) {
        let terms = extract_key_terms(&text, limit, min_length);

        prop_assert!(terms.len() <= limit);
        let unique: HashSet<&String> = terms.iter().collect();
        prop_assert_eq!(unique.len(), terms.len());

        let tokens: Vec<String> = tokenize_terms(&text).collect();
        let count = |term: &str| tokens.iter().filter(|t| t.as_str() == term).count();
        for term in &terms {
            prop_assert!(term.chars().count() >= min_length);
        }
        for pair in terms.windows(2) {
            prop_assert!(count(&pair[0]) >= count(&pair[1]));
        }
    }

    #[test]
    fn test_difficulty_band_is_monotonic(a in 0.0f64..60.0, b in 0.0f64..60.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(DifficultyBand::from_score(low) <= DifficultyBand::from_score(high));
    }

    #[test]
    fn test_syllables_at_least_one(word in "[A-Za-z]{0,15}") {
        prop_assert!(count_syllables(&word) >= 1);
    }

    #[test]
    fn test_summary_is_empty_or_closed(text in "[A-Za-z .!?]{0,200}", n in 1usize..5) {
        let summary = summarize(&text, n);
        prop_assert!(summary.is_empty() || summary.ends_with('.'));
    }

    #[test]
    fn test_topics_respect_limit(seed in any::<u64>(), probability in 0.0f64..=1.0, limit in 0usize..10) {
        let topics = identify_topics(&mut StdRng::seed_from_u64(seed), probability, limit);
        prop_assert!(topics.len() <= limit.min(8));
        let unique: HashSet<&String> = topics.iter().collect();
        prop_assert_eq!(unique.len(), topics.len());
    }

    #[test]
    fn test_generated_questions_follow_band_rules(text in word_soup(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let profile = ContentAnalyzer::default().analyze(&text, &mut rng);

        let mut levels = build_levels(&profile, "prop");
        QuestionSynthesizer::new().populate(&mut levels, &profile, &mut rng);

        let expected = if profile.difficulty == DifficultyBand::Advanced { 4 } else { 3 };
        prop_assert_eq!(levels.len(), expected);

        for level in &levels {
            prop_assert_eq!(level.questions.len(), question_count_for(level.difficulty));
            for question in &level.questions {
                prop_assert!(allowed_archetypes(level.difficulty).contains(&question.archetype()));
                prop_assert!((0.8..=1.0).contains(&question.confidence));
                if profile.key_terms.is_empty() {
                    prop_assert_eq!(question.topic.as_str(), "concept");
                } else {
                    prop_assert!(profile.key_terms.contains(&question.topic));
                }
            }
        }
    }
}
