//! Sound-alike metrics: Soundex with near-spelling fallback, and Double
//! Metaphone via rphonetic. Cyrillic words are romanized (GOST) before
//! coding.

use rphonetic::DoubleMetaphone;
use strsim::levenshtein;

use super::{empty_rule, word_match_ratio};
use crate::translit::{is_cyrillic, transliterate, Standard};

const FIRST_LETTER_BONUS: f64 = 0.1;
const CLOSE_MAX_LEN_DIFF: usize = 2;
const CLOSE_MAX_DISTANCE: usize = 2;

fn soundex_code(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// Four-character Soundex code. Returns `"0000"` when the word does not
/// start with a letter.
pub fn soundex(word: &str) -> String {
    let upper = word.to_uppercase();
    let mut chars = upper.chars();
    let first = match chars.next() {
        Some(c) if c.is_alphabetic() => c,
        _ => return "0000".to_string(),
    };

    let mut code = String::with_capacity(4);
    code.push(first);
    let mut prev: Option<char> = None;
    for c in chars {
        if code.chars().count() >= 4 {
            break;
        }
        if c == 'H' || c == 'W' {
            continue;
        }
        // Unmapped letters (vowels) are skipped without resetting the run
        let Some(digit) = soundex_code(c) else {
            continue;
        };
        if prev != Some(digit) {
            code.push(digit);
        }
        prev = Some(digit);
    }
    while code.chars().count() < 4 {
        code.push('0');
    }
    code
}

fn romanized(word: &str) -> String {
    if is_cyrillic(word) {
        transliterate(word, Standard::Gost)
    } else {
        word.to_string()
    }
}

fn phonetically_close(a: &str, b: &str) -> bool {
    let (Some(fa), Some(fb)) = (a.chars().next(), b.chars().next()) else {
        return false;
    };
    if fa != fb {
        return false;
    }
    let (la, lb) = (a.chars().count(), b.chars().count());
    la.abs_diff(lb) <= CLOSE_MAX_LEN_DIFF && levenshtein(a, b) <= CLOSE_MAX_DISTANCE
}

struct PhoneticWord {
    lower: String,
    code: String,
}

/// Word-level phonetic similarity.
///
/// Two words match when they are equal ignoring case, share a Soundex
/// code, or are close spellings of each other (same first letter, length
/// and edit distance within 2). The ratio of matched words gets a `0.1`
/// bonus when the first words start with the same letter.
pub fn phonetic_similarity(a: &str, b: &str) -> f64 {
    if let Some(score) = empty_rule(a, b) {
        return score;
    }

    let encode = |text: &str| -> Vec<PhoneticWord> {
        text.split_whitespace()
            .map(|w| {
                let lower = w.to_lowercase();
                let code = soundex(&romanized(&lower));
                PhoneticWord { lower, code }
            })
            .collect()
    };
    let left = encode(a);
    let right = encode(b);

    let mut score = word_match_ratio(&left, &right, |l, r| {
        l.lower == r.lower || l.code == r.code || phonetically_close(&l.lower, &r.lower)
    });

    let first_l = left.first().and_then(|w| w.lower.chars().next());
    let first_r = right.first().and_then(|w| w.lower.chars().next());
    if first_l.is_some() && first_l == first_r {
        score += FIRST_LETTER_BONUS;
    }
    score.min(1.0)
}

/// Word-level Double Metaphone similarity: the share of words whose
/// primary or alternate codes coincide.
pub fn double_metaphone_similarity(a: &str, b: &str) -> f64 {
    if let Some(score) = empty_rule(a, b) {
        return score;
    }

    let encoder = DoubleMetaphone::default();
    let encode = |text: &str| -> Vec<(String, String)> {
        text.split_whitespace()
            .map(|w| {
                let ascii: String = romanized(&w.to_lowercase())
                    .chars()
                    .filter(|c| c.is_ascii_alphabetic())
                    .collect();
                if ascii.is_empty() {
                    return (String::new(), String::new());
                }
                let result = encoder.double_metaphone(&ascii);
                (result.primary(), result.alternate())
            })
            .collect()
    };
    let left = encode(a);
    let right = encode(b);

    word_match_ratio(&left, &right, |(p1, a1), (p2, a2)| {
        if p1.is_empty() || p2.is_empty() {
            return false;
        }
        p1 == p2 || p1 == a2 || (!a1.is_empty() && (a1 == p2 || a1 == a2))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_soundex_classic() {
        assert_eq!(soundex("Robert"), "R163");
        assert_eq!(soundex("Rupert"), "R163");
        assert_eq!(soundex("Ashcraft"), "A261");
        assert_eq!(soundex("Lee"), "L000");
    }

    #[test]
    fn test_soundex_non_letter() {
        assert_eq!(soundex("1abc"), "0000");
        assert_eq!(soundex(""), "0000");
    }

    #[test]
    fn test_phonetic_identity_and_empty() {
        assert_eq!(phonetic_similarity("ivan petrov", "ivan petrov"), 1.0);
        assert_eq!(phonetic_similarity("", ""), 1.0);
        assert_eq!(phonetic_similarity("ivan", ""), 0.0);
    }

    #[test]
    fn test_phonetic_cyrillic_against_latin() {
        let score = phonetic_similarity("Иванов", "Ivanov");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_phonetic_close_spelling() {
        assert!(phonetic_similarity("Smit", "Smith") >= 1.0);
        let unrelated = phonetic_similarity("Ivanov", "Kuznetsov");
        assert!(unrelated < 0.5, "got {}", unrelated);
    }

    #[test]
    fn test_phonetic_symmetric() {
        let pairs = [("ivan petrov", "petrov"), ("anna maria", "maria ann")];
        for (a, b) in pairs {
            assert_eq!(phonetic_similarity(a, b), phonetic_similarity(b, a));
        }
    }

    #[test]
    fn test_double_metaphone() {
        assert_eq!(double_metaphone_similarity("Smith", "Smyth"), 1.0);
        assert_eq!(double_metaphone_similarity("Ivanov Ivan", "Ivanov Ivan"), 1.0);
        assert_eq!(double_metaphone_similarity("Иванов", "Ivanov"), 1.0);
        assert_eq!(double_metaphone_similarity("", ""), 1.0);
        assert_eq!(double_metaphone_similarity("Ivan", ""), 0.0);
    }

    #[test]
    fn test_double_metaphone_symmetric() {
        let a = "ivan ivanovich ivanov";
        let b = "ivanov";
        assert_eq!(
            double_metaphone_similarity(a, b),
            double_metaphone_similarity(b, a)
        );
    }
}
