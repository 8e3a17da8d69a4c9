use rand::Rng;

pub const TOPIC_VOCABULARY: [&str; 8] = [
    "fundamentals",
    "methodology",
    "applications",
    "best practices",
    "analysis",
    "implementation",
    "evaluation",
    "optimization",
];

/// Tags the document with vocabulary entries, each kept independently with
/// `probability`, truncated to `limit`. Always draws once per entry so a
/// seeded generator advances by the same amount regardless of `limit`.
pub fn identify_topics<R: Rng + ?Sized>(rng: &mut R, probability: f64, limit: usize) -> Vec<String> {
    let probability = probability.clamp(0.0, 1.0);

    let kept: Vec<&str> = TOPIC_VOCABULARY
        .iter()
        .copied()
        .filter(|_| rng.gen_bool(probability))
        .collect();

    kept.into_iter().take(limit).map(String::from).collect()
}
