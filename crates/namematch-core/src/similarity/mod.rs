//! String similarity metrics
//!
//! Every metric returns a score in `[0.0, 1.0]`, treats two empty inputs as
//! identical and one empty input as completely different.
//!
//! - [`levenshtein_similarity`] / [`jaro_winkler_similarity`]: edit-based,
//!   with a strict equality rule for very short strings
//! - [`phonetic_similarity`]: word-level Soundex and near-spelling matches
//! - [`double_metaphone_similarity`]: word-level Double Metaphone codes
//! - [`cosine_similarity`]: character n-gram vectors

mod edit;
mod ngram;
mod phonetic;

pub use edit::{jaro_winkler_similarity, levenshtein_similarity};
pub use ngram::cosine_similarity;
pub use phonetic::{double_metaphone_similarity, phonetic_similarity, soundex};

/// Strings at or below this many characters must match exactly.
pub(crate) const SHORT_STRING_CHARS: usize = 3;

/// Number of leading characters two lowercase strings share.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// Apply the shared empty-input rules. `None` means both inputs are
/// non-empty and the metric should be computed.
#[inline]
pub(crate) fn empty_rule(a: &str, b: &str) -> Option<f64> {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Some(1.0),
        (true, false) | (false, true) => Some(0.0),
        (false, false) => None,
    }
}

/// Symmetric word-level match ratio: matched words over the larger word
/// count, taking the better of both directions.
pub(crate) fn word_match_ratio<T>(left: &[T], right: &[T], matches: impl Fn(&T, &T) -> bool) -> f64 {
    let max = left.len().max(right.len());
    if max == 0 {
        return 0.0;
    }
    let forward = left
        .iter()
        .filter(|l| right.iter().any(|r| matches(l, r)))
        .count();
    let backward = right
        .iter()
        .filter(|r| left.iter().any(|l| matches(l, r)))
        .count();
    forward.max(backward) as f64 / max as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix_len("ivanov", "ivanova"), 6);
        assert_eq!(common_prefix_len("abc", "xbc"), 0);
        assert_eq!(common_prefix_len("", "abc"), 0);
    }

    #[test]
    fn test_empty_rule() {
        assert_eq!(empty_rule("", ""), Some(1.0));
        assert_eq!(empty_rule("", "a"), Some(0.0));
        assert_eq!(empty_rule("a", "b"), None);
    }

    #[test]
    fn test_word_match_ratio_symmetric() {
        let a = ["x", "y"];
        let b = ["x"];
        let eq = |l: &&str, r: &&str| l == r;
        assert_eq!(word_match_ratio(&a, &b, eq), 0.5);
        assert_eq!(word_match_ratio(&b, &a, eq), 0.5);
    }
}
