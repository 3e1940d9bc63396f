//! Edit-distance metrics on top of strsim.

use strsim::{jaro, levenshtein};

use super::{common_prefix_len, empty_rule, SHORT_STRING_CHARS};

const PREFIX_BONUS: f64 = 0.1;
const WINKLER_BOOST_THRESHOLD: f64 = 0.7;
const WINKLER_MAX_PREFIX: usize = 4;

/// Short strings carry too little signal for partial credit.
#[inline]
fn short_string_rule(a: &str, b: &str) -> Option<f64> {
    if a.chars().count() <= SHORT_STRING_CHARS || b.chars().count() <= SHORT_STRING_CHARS {
        Some(if a == b { 1.0 } else { 0.0 })
    } else {
        None
    }
}

/// Normalized Levenshtein similarity with a common-prefix bonus.
///
/// `1 - distance / max_len`, plus `0.1` per shared leading character,
/// capped at `1.0`. Case-insensitive.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    if let Some(score) = empty_rule(a, b) {
        return score;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if let Some(score) = short_string_rule(&a, &b) {
        return score;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = levenshtein(&a, &b);
    let base = 1.0 - distance as f64 / max_len as f64;
    let bonus = common_prefix_len(&a, &b) as f64 * PREFIX_BONUS;
    (base + bonus).min(1.0)
}

/// Jaro-Winkler similarity. The prefix boost only applies once the Jaro
/// score reaches `0.7`. Case-insensitive.
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    if let Some(score) = empty_rule(a, b) {
        return score;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return 1.0;
    }
    if let Some(score) = short_string_rule(&a, &b) {
        return score;
    }

    let base = jaro(&a, &b);
    if base < WINKLER_BOOST_THRESHOLD {
        return base;
    }
    let prefix = common_prefix_len(&a, &b).min(WINKLER_MAX_PREFIX);
    (base + prefix as f64 * PREFIX_BONUS * (1.0 - base)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_identity_and_empty() {
        assert_eq!(levenshtein_similarity("ivanov", "ivanov"), 1.0);
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("", "ivanov"), 0.0);
    }

    #[test]
    fn test_levenshtein_short_strings_exact_only() {
        assert_eq!(levenshtein_similarity("Li", "li"), 1.0);
        assert_eq!(levenshtein_similarity("Li", "Lee"), 0.0);
        assert_eq!(levenshtein_similarity("Ann", "Anna"), 0.0);
    }

    #[test]
    fn test_levenshtein_prefix_bonus_capped() {
        // one substitution at the end, long shared prefix
        assert_eq!(levenshtein_similarity("ivanov", "ivanoff"), 1.0);
        let score = levenshtein_similarity("petrov", "sidorov");
        assert!(score > 0.0 && score < 0.6, "got {}", score);
    }

    #[test]
    fn test_levenshtein_case_insensitive() {
        assert_eq!(
            levenshtein_similarity("IVANOV", "ivanova"),
            levenshtein_similarity("ivanov", "ivanova")
        );
    }

    #[test]
    fn test_jaro_winkler() {
        assert_eq!(jaro_winkler_similarity("Sergey", "sergey"), 1.0);
        let close = jaro_winkler_similarity("sergey", "sergei");
        assert!(close > 0.9, "got {}", close);
        let far = jaro_winkler_similarity("sergey", "mikhail");
        assert!(far < 0.7, "got {}", far);
    }

    #[test]
    fn test_jaro_winkler_short() {
        assert_eq!(jaro_winkler_similarity("Ivan", "Ivan"), 1.0);
        assert_eq!(jaro_winkler_similarity("Al", "Ali"), 0.0);
    }

    #[test]
    fn test_bounded() {
        for (a, b) in [("aaaa", "aaab"), ("abcd", "dcba"), ("long name", "lang nome")] {
            let l = levenshtein_similarity(a, b);
            let j = jaro_winkler_similarity(a, b);
            assert!((0.0..=1.0).contains(&l));
            assert!((0.0..=1.0).contains(&j));
        }
    }
}
