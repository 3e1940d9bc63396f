//! Cross-script scoring
//!
//! The Cyrillic side is expanded into transliterations (with typo
//! variants) and each one is scored against every Latin variation. A
//! case-insensitive equality short-circuits the search.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::align::compare_name_parts;
use super::result::{MatchResult, MatchType};
use super::NameMatcher;
use crate::names::normalize_name_parts;
use crate::similarity::{
    cosine_similarity, double_metaphone_similarity, jaro_winkler_similarity,
    levenshtein_similarity, phonetic_similarity,
};
use crate::translit::all_transliterations_with_typos;

const TRANSLIT_EXACT_SCORE: u8 = 95;
/// Best combined similarity must exceed this to settle the comparison.
const ACCEPT_SIMILARITY: f64 = 0.7;
const FULL_NAME_PARTS: usize = 3;

const PART_WEIGHT: f64 = 0.6;
const STRING_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone)]
struct Candidate {
    similarity: f64,
    cyrillic: String,
    translit: String,
    latin: String,
}

/// Search result for one Cyrillic variation.
#[derive(Debug)]
enum Outcome {
    Exact { cyrillic: String, latin: String },
    Best(Option<Candidate>),
}

fn part_count(name: &str) -> usize {
    name.split_whitespace().count()
}

fn full_names(variations: &[String]) -> Vec<String> {
    variations
        .iter()
        .filter(|v| part_count(v) == FULL_NAME_PARTS)
        .cloned()
        .collect()
}

/// Short variations are reported as the first full (three-part) form.
fn promote_to_full(variation: String, full: &[String]) -> String {
    match full.first() {
        Some(first) if part_count(&variation) < FULL_NAME_PARTS => first.clone(),
        _ => variation,
    }
}

/// Equal-weight string blend used alongside part alignment.
fn string_similarity(a: &str, b: &str) -> f64 {
    levenshtein_similarity(a, b) * 0.3
        + jaro_winkler_similarity(a, b) * 0.3
        + phonetic_similarity(a, b) * 0.2
        + double_metaphone_similarity(a, b) * 0.2
}

/// Weaker totals are damped further.
fn damp(total: f64) -> f64 {
    if total >= 0.9 {
        total
    } else if total > 0.8 {
        total * 0.95
    } else if total > 0.7 {
        total * 0.9
    } else {
        total * 0.8
    }
}

/// First exact outcome wins; otherwise the highest similarity, earliest
/// on ties.
fn reduce(outcomes: impl Iterator<Item = Outcome>) -> Outcome {
    let mut best: Option<Candidate> = None;
    for outcome in outcomes {
        match outcome {
            exact @ Outcome::Exact { .. } => return exact,
            Outcome::Best(Some(candidate)) => {
                if candidate.similarity > best.as_ref().map_or(0.0, |b| b.similarity) {
                    best = Some(candidate);
                }
            }
            Outcome::Best(None) => {}
        }
    }
    Outcome::Best(best)
}

impl NameMatcher {
    fn search_variation(&self, cyrillic: &str, latin_variations: &[String]) -> Outcome {
        let translits = all_transliterations_with_typos(
            cyrillic,
            &self.config.transliteration_standards,
            self.config.max_transliteration_variants,
        );
        let latin_parts: Vec<Vec<String>> = latin_variations
            .iter()
            .map(|l| normalize_name_parts(l))
            .collect();

        let mut best: Option<Candidate> = None;
        for translit in &translits {
            let translit_lower = translit.to_lowercase();
            let translit_parts = normalize_name_parts(translit);
            for (latin, parts) in latin_variations.iter().zip(&latin_parts) {
                if translit_lower == latin.to_lowercase() {
                    return Outcome::Exact {
                        cyrillic: cyrillic.to_string(),
                        latin: latin.clone(),
                    };
                }
                if translit_parts.len().abs_diff(parts.len()) > 1 {
                    continue;
                }

                let part = compare_name_parts(&translit_parts, parts, &self.config.weights);
                let total = damp(PART_WEIGHT * part + STRING_WEIGHT * string_similarity(translit, latin));
                if total > best.as_ref().map_or(0.0, |b| b.similarity) {
                    best = Some(Candidate {
                        similarity: total,
                        cyrillic: cyrillic.to_string(),
                        translit: translit.clone(),
                        latin: latin.clone(),
                    });
                }
            }
        }
        Outcome::Best(best)
    }

    /// `None` when no pair clears the acceptance bar; the caller then
    /// falls back to same-script scoring.
    pub(super) fn compare_cross_script(
        &self,
        name1: &str,
        name2: &str,
        name1_cyrillic: bool,
    ) -> Option<MatchResult> {
        let (cyrillic_name, latin_name) = if name1_cyrillic {
            (name1, name2)
        } else {
            (name2, name1)
        };

        let mut cyrillic_vars = self.variations(cyrillic_name);
        let mut latin_vars = self.variations(latin_name);
        let cyrillic_full = full_names(&cyrillic_vars);
        let latin_full = full_names(&latin_vars);
        if !cyrillic_full.is_empty() && !latin_full.is_empty() {
            cyrillic_vars = cyrillic_full.clone();
            latin_vars = latin_full.clone();
        }
        cyrillic_vars.truncate(self.config.max_cross_script_variations);
        latin_vars.truncate(self.config.max_cross_script_variations);

        #[cfg(feature = "parallel")]
        let outcome = reduce(
            cyrillic_vars
                .par_iter()
                .map(|v| self.search_variation(v, &latin_vars))
                .collect::<Vec<_>>()
                .into_iter(),
        );
        #[cfg(not(feature = "parallel"))]
        let outcome = reduce(
            cyrillic_vars
                .iter()
                .map(|v| self.search_variation(v, &latin_vars)),
        );

        let order = |cyrillic: String, latin: String| {
            if name1_cyrillic {
                (cyrillic, latin)
            } else {
                (latin, cyrillic)
            }
        };

        match outcome {
            Outcome::Exact { cyrillic, latin } => {
                let cyrillic = promote_to_full(cyrillic, &cyrillic_full);
                let latin = promote_to_full(latin, &latin_full);
                debug!(cyrillic = %cyrillic, latin = %latin, "transliteration matched exactly");
                let (best1, best2) = order(cyrillic, latin);
                Some(
                    MatchResult {
                        score: TRANSLIT_EXACT_SCORE,
                        match_type: MatchType::Match,
                        levenshtein_score: 0.95,
                        jaro_winkler_score: 0.95,
                        phonetic_score: 1.0,
                        double_metaphone_score: 1.0,
                        ..MatchResult::no_match()
                    }
                    .with_pair(best1, best2),
                )
            }
            Outcome::Best(Some(best)) if best.similarity > ACCEPT_SIMILARITY => {
                let score = (best.similarity * 100.0).trunc().clamp(0.0, 100.0) as u8;
                let match_type = if score >= self.config.thresholds.match_ {
                    MatchType::Match
                } else {
                    MatchType::PossibleMatch
                };
                debug!(
                    similarity = best.similarity,
                    score,
                    match_type = %match_type,
                    "cross-script comparison"
                );
                let (t, l) = (best.translit.as_str(), best.latin.as_str());
                let result = MatchResult {
                    score,
                    match_type,
                    levenshtein_score: levenshtein_similarity(t, l),
                    jaro_winkler_score: jaro_winkler_similarity(t, l),
                    phonetic_score: phonetic_similarity(t, l),
                    double_metaphone_score: double_metaphone_similarity(t, l),
                    cosine_score: cosine_similarity(t, l, self.config.ngram_size),
                    ..MatchResult::no_match()
                };
                let (best1, best2) = order(best.cyrillic, best.latin);
                Some(result.with_pair(best1, best2))
            }
            Outcome::Best(best) => {
                debug!(
                    similarity = best.map_or(0.0, |b| b.similarity),
                    "cross-script search inconclusive"
                );
                None
            }
        }
    }
}
