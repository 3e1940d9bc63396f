//! Initials resolution
//!
//! Names written with initials ("Иванов И.", "J. Smith") are settled by
//! letter matching instead of the scoring pipeline. Letters are matched as
//! a multiset: each candidate letter can be consumed once.

use tracing::debug;

use super::result::{MatchResult, MatchType};
use crate::names::{extract_initials, first_letters, has_initials};
use crate::translit::{all_transliterations, is_cyrillic, Standard};

const DIRECT_SCORE: u8 = 92;
/// Cyrillic initials that are too common to confirm an identity alone
const AMBIGUOUS_CYRILLIC: [char; 4] = ['И', 'С', 'П', 'А'];
const AMBIGUOUS_SCORE: u8 = 75;
const TRANSLIT_FULL_SCORE: u8 = 90;
const TRANSLIT_PARTIAL_SCORE: u8 = 80;
const BOTH_FULL_SCORE: u8 = 90;
const BOTH_BASE_SCORE: u8 = 70;
const BOTH_PER_MATCH: u8 = 5;

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Count letters of `wanted` found in `pool`, consuming pool entries.
fn multiset_matches<T>(wanted: &[T], pool: &[T], eq: impl Fn(&T, &T) -> bool) -> usize {
    let mut available: Vec<&T> = pool.iter().collect();
    let mut matches = 0;
    for w in wanted {
        if let Some(pos) = available.iter().position(|p| eq(w, *p)) {
            available.remove(pos);
            matches += 1;
        }
    }
    matches
}

/// The letter itself plus the first letter of each romanization.
fn letter_candidates(c: char, standards: &[Standard]) -> Vec<char> {
    let mut candidates = vec![lower(c)];
    for latin in all_transliterations(&c.to_string(), standards) {
        if let Some(first) = latin.chars().next().map(lower) {
            if !candidates.contains(&first) {
                candidates.push(first);
            }
        }
    }
    candidates
}

fn resolved(name1: &str, name2: &str, score: u8, match_type: MatchType, phonetic: f64) -> MatchResult {
    MatchResult {
        score,
        match_type,
        levenshtein_score: 0.9,
        jaro_winkler_score: 0.9,
        phonetic_score: phonetic,
        double_metaphone_score: 1.0,
        ..MatchResult::no_match()
    }
    .with_pair(name1.trim(), name2.trim())
}

/// Settle the comparison from initials. `None` means initials were absent
/// or did not match and the regular pipeline should continue.
pub(crate) fn resolve_initials(name1: &str, name2: &str, standards: &[Standard]) -> Option<MatchResult> {
    let (has1, has2) = (has_initials(name1), has_initials(name2));
    match (has1, has2) {
        (false, false) => None,
        (true, true) => both_sides(name1, name2),
        _ => {
            let (initials_name, full_name) = if has1 { (name1, name2) } else { (name2, name1) };
            one_side(name1, name2, initials_name, full_name, standards)
        }
    }
}

fn one_side(
    name1: &str,
    name2: &str,
    initials_name: &str,
    full_name: &str,
    standards: &[Standard],
) -> Option<MatchResult> {
    let initials = extract_initials(initials_name);
    if initials.is_empty() {
        return None;
    }
    let letters = first_letters(full_name);

    let direct = multiset_matches(&initials, &letters, |a, b| lower(*a) == lower(*b));
    if direct == initials.len() {
        let ambiguous = is_cyrillic(initials_name)
            && initials.iter().any(|c| AMBIGUOUS_CYRILLIC.contains(&upper(*c)));
        debug!(initials = initials.len(), ambiguous, "initials matched directly");
        return Some(if ambiguous {
            resolved(name1, name2, AMBIGUOUS_SCORE, MatchType::PossibleMatch, 1.0)
        } else {
            resolved(name1, name2, DIRECT_SCORE, MatchType::Match, 1.0)
        });
    }

    if is_cyrillic(initials_name) == is_cyrillic(full_name) {
        return None;
    }

    let wanted: Vec<Vec<char>> = initials.iter().map(|c| letter_candidates(*c, standards)).collect();
    let pool: Vec<Vec<char>> = letters.iter().map(|c| letter_candidates(*c, standards)).collect();
    let translit = multiset_matches(&wanted, &pool, |w, p| w.iter().any(|c| p.contains(c)));
    debug!(initials = initials.len(), translit, "initials matched across scripts");

    match translit {
        0 => None,
        n if n == initials.len() => Some(resolved(
            name1,
            name2,
            TRANSLIT_FULL_SCORE,
            MatchType::Match,
            0.9,
        )),
        _ => Some(resolved(
            name1,
            name2,
            TRANSLIT_PARTIAL_SCORE,
            MatchType::PossibleMatch,
            0.9,
        )),
    }
}

fn both_sides(name1: &str, name2: &str) -> Option<MatchResult> {
    let initials1: Vec<char> = extract_initials(name1).into_iter().map(lower).collect();
    let initials2: Vec<char> = extract_initials(name2).into_iter().map(lower).collect();
    if initials1.is_empty() || initials2.is_empty() {
        return None;
    }

    let matches = multiset_matches(&initials1, &initials2, |a, b| a == b);
    debug!(matches, "initials compared on both sides");
    if matches == 0 {
        return None;
    }
    if matches == initials1.len() && matches == initials2.len() {
        return Some(resolved(name1, name2, BOTH_FULL_SCORE, MatchType::Match, 0.8));
    }
    let score = BOTH_BASE_SCORE
        .saturating_add(BOTH_PER_MATCH.saturating_mul(matches.min(u8::MAX as usize) as u8))
        .min(100);
    Some(resolved(name1, name2, score, MatchType::PossibleMatch, 0.8))
}
