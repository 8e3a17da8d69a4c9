use std::collections::HashMap;

/// Whitespace-separated token count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lowercased word tokens with every non-word character treated as a
/// separator. Word characters are alphanumerics and `_`.
pub fn tokenize_terms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Up to `limit` terms of at least `min_length` characters, most frequent
/// first. Equal counts keep the order in which terms first appeared.
pub fn extract_key_terms(text: &str, limit: usize, min_length: usize) -> Vec<String> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokenize_terms(text) {
        if token.chars().count() < min_length {
            continue;
        }
        match index.get(&token) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .map(|(term, _)| term)
        .collect()
}
