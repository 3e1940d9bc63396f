//! Part alignment
//!
//! Scores two part sequences by pairing every part of the first with its
//! best unused counterpart in the second. The pairing is greedy by row:
//! rows are visited in order and each takes the highest remaining column,
//! so earlier parts win ties. It is not a globally optimal assignment.

use crate::config::MetricWeights;
use crate::names::is_initial;
use crate::similarity::{
    double_metaphone_similarity, jaro_winkler_similarity, levenshtein_similarity,
    phonetic_similarity,
};

/// Cells above this count as a strong alignment.
const STRONG_MATCH: f64 = 0.7;
const TYPO_BONUS: f64 = 0.1;

const SHORT_PART_CHARS: usize = 2;
const SHORT_CONTAINED: f64 = 0.6;
const SHORT_NOT_CONTAINED: f64 = 0.4;

/// Weighted blend of the four lexical metrics for two full parts, with a
/// bonus for near-identical spellings.
pub(crate) fn lexical_score(a: &str, b: &str, weights: &MetricWeights) -> f64 {
    let lev = levenshtein_similarity(a, b);
    let jw = jaro_winkler_similarity(a, b);
    let phonetic = phonetic_similarity(a, b);
    let dm = double_metaphone_similarity(a, b);

    let mut score = lev * weights.levenshtein
        + jw * weights.jaro_winkler
        + phonetic * weights.phonetic
        + dm * weights.double_metaphone;
    if lev > 0.8 || jw > 0.85 {
        score += TYPO_BONUS;
    }
    score.min(1.0)
}

fn cell_score(a: &str, b: &str, weights: &MetricWeights) -> f64 {
    let (a_initial, b_initial) = (is_initial(a), is_initial(b));
    if !a_initial && !b_initial {
        return lexical_score(a, b, weights);
    }

    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    if a_initial && b_initial {
        return if a_lower == b_lower { 1.0 } else { 0.1 };
    }

    let (initial, full) = if a_initial {
        (a_lower, b_lower)
    } else {
        (b_lower, a_lower)
    };
    if full.starts_with(initial.as_str()) {
        0.98
    } else {
        0.1
    }
}

/// A lone short token against a multi-part name.
fn short_name_guard<S: AsRef<str>>(parts1: &[S], parts2: &[S]) -> Option<f64> {
    let is_short = |parts: &[S]| {
        parts.len() == 1 && parts[0].as_ref().chars().count() <= SHORT_PART_CHARS
    };
    let (short, long) = if is_short(parts1) && parts2.len() > 1 {
        (parts1, parts2)
    } else if is_short(parts2) && parts1.len() > 1 {
        (parts2, parts1)
    } else {
        return None;
    };

    let needle = short[0].as_ref().to_lowercase();
    let contained = long
        .iter()
        .any(|part| part.as_ref().to_lowercase().contains(needle.as_str()));
    Some(if contained {
        SHORT_CONTAINED
    } else {
        SHORT_NOT_CONTAINED
    })
}

/// Similarity of two part sequences in `[0, 1]`.
pub fn compare_name_parts<S: AsRef<str>>(parts1: &[S], parts2: &[S], weights: &MetricWeights) -> f64 {
    if parts1.is_empty() || parts2.is_empty() {
        return 0.0;
    }
    if let Some(score) = short_name_guard(parts1, parts2) {
        return score;
    }

    let matrix: Vec<Vec<f64>> = parts1
        .iter()
        .map(|p1| {
            parts2
                .iter()
                .map(|p2| cell_score(p1.as_ref(), p2.as_ref(), weights))
                .collect()
        })
        .collect();

    let mut used = vec![false; parts2.len()];
    let mut total = 0.0;
    let mut strong = 0usize;
    for row in &matrix {
        let mut best = -1.0;
        let mut best_col = None;
        for (col, &score) in row.iter().enumerate() {
            if !used[col] && score > best {
                best = score;
                best_col = Some(col);
            }
        }
        if let Some(col) = best_col {
            used[col] = true;
            total += best;
            if best > STRONG_MATCH {
                strong += 1;
            }
        }
    }

    let (n1, n2) = (parts1.len(), parts2.len());
    let max_parts = n1.max(n2);
    let mut score = total / max_parts as f64;

    if matches!((n1, n2), (3, 2) | (2, 3)) {
        // Missing patronymic
        if strong >= 2 {
            score *= 1.1;
        }
    } else if n1 == 3 || n2 == 3 {
        match strong {
            1 => score *= 0.6,
            2 => score *= 0.9,
            _ => {}
        }
    }
    if strong == max_parts && strong > 1 {
        score *= 1.05;
    }
    score.clamp(0.0, 1.0)
}
