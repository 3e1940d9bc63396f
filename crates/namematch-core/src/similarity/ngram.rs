//! Character n-gram cosine similarity.

use ahash::AHashMap;

use super::empty_rule;

/// Character n-grams of `text`. Strings shorter than `n` produce a single
/// gram covering the whole string.
fn ngram_counts(text: &str, n: usize) -> AHashMap<String, f64> {
    let chars: Vec<char> = text.chars().collect();
    let n = n.max(1).min(chars.len());
    let mut counts = AHashMap::new();
    if n == 0 {
        return counts;
    }
    for window in chars.windows(n) {
        *counts.entry(window.iter().collect::<String>()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine similarity of the lowercase character n-gram frequency vectors.
pub fn cosine_similarity(a: &str, b: &str, n: usize) -> f64 {
    if let Some(score) = empty_rule(a, b) {
        return score;
    }
    let left = ngram_counts(&a.to_lowercase(), n);
    let right = ngram_counts(&b.to_lowercase(), n);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    // Grams are visited in sorted order so the sums do not depend on
    // hash iteration order or argument order
    let sorted = |counts: &AHashMap<String, f64>| -> Vec<(String, f64)> {
        let mut grams: Vec<(String, f64)> = counts.iter().map(|(g, c)| (g.clone(), *c)).collect();
        grams.sort_by(|x, y| x.0.cmp(&y.0));
        grams
    };
    let norm = |grams: &[(String, f64)]| grams.iter().map(|(_, c)| c * c).sum::<f64>().sqrt();

    let left_sorted = sorted(&left);
    let right_sorted = sorted(&right);
    let dot: f64 = left_sorted
        .iter()
        .filter_map(|(gram, count)| right.get(gram).map(|other| count * other))
        .sum();
    let denom = norm(&left_sorted) * norm(&right_sorted);
    if denom == 0.0 {
        return 0.0;
    }
    (dot / denom).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings() {
        let sim = cosine_similarity("Ivanov", "ivanov", 3);
        assert!((sim - 1.0).abs() < 1e-9, "got {}", sim);
    }

    #[test]
    fn repeated_grams_are_counted() {
        // "abab" has ab x2, ba x1
        let sim = cosine_similarity("abab", "ab", 2);
        let expected = 2.0 / 5.0f64.sqrt();
        assert!((sim - expected).abs() < 1e-9, "got {}", sim);
    }

    #[test]
    fn empty_strings() {
        assert_eq!(cosine_similarity("", "", 3), 1.0);
        assert_eq!(cosine_similarity("abc", "", 3), 0.0);
    }

    #[test]
    fn short_strings_use_whole_string() {
        assert_eq!(cosine_similarity("ab", "ab", 3), 1.0);
        assert_eq!(cosine_similarity("ab", "cd", 3), 0.0);
    }

    #[test]
    fn partial_overlap() {
        // "ivanov" and "ivanova" share every trigram of the shorter string
        let sim = cosine_similarity("ivanov", "ivanova", 3);
        let expected = 4.0 / (4.0f64.sqrt() * 5.0f64.sqrt());
        assert!((sim - expected).abs() < 1e-9, "got {}", sim);
    }

    #[test]
    fn symmetric() {
        assert_eq!(
            cosine_similarity("petrov ivan", "ivan petrov", 2),
            cosine_similarity("ivan petrov", "petrov ivan", 2)
        );
    }
}
