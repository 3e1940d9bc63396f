//! Same-script scoring: best variation pair by part alignment, then a
//! weighted fusion of every metric plus attribute bonuses.

use tracing::debug;

use super::align::compare_name_parts;
use super::result::{Attributes, MatchResult, MatchType};
use super::{classify, NameMatcher};
use crate::config::AttributeRule;
use crate::names::normalize_name_parts;
use crate::similarity::{
    cosine_similarity, double_metaphone_similarity, jaro_winkler_similarity,
    levenshtein_similarity, phonetic_similarity,
};

/// Attribute metric (clamped to 1.0) and flat bonus points for the
/// attributes that matched. Unknown attributes are ignored.
pub(crate) fn attribute_score(rules: &[AttributeRule], attributes: Option<&Attributes>) -> (f64, f64) {
    let Some(attributes) = attributes else {
        return (0.0, 0.0);
    };
    let (metric, bonus) = rules
        .iter()
        .filter(|rule| attributes.get(&rule.name).copied().unwrap_or(false))
        .fold((0.0, 0.0), |(metric, bonus), rule| {
            (metric + rule.score, bonus + rule.bonus_points)
        });
    (metric.clamp(0.0, 1.0), bonus)
}

/// Round half up onto the 0-100 scale.
pub(crate) fn to_percent(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    (raw + 0.5).floor().clamp(0.0, 100.0) as u8
}

impl NameMatcher {
    pub(super) fn compare_same_script(
        &self,
        name1: &str,
        name2: &str,
        attributes: Option<&Attributes>,
    ) -> MatchResult {
        let limit = self.config.max_variations;
        let vars1: Vec<String> = self.variations(name1).into_iter().take(limit).collect();
        let vars2: Vec<String> = self.variations(name2).into_iter().take(limit).collect();

        let parts2: Vec<Vec<String>> = vars2.iter().map(|v| normalize_name_parts(v)).collect();
        let mut best_score = 0.0;
        let mut best: Option<(&str, &str)> = None;
        for var1 in &vars1 {
            let parts1 = normalize_name_parts(var1);
            for (var2, parts2) in vars2.iter().zip(&parts2) {
                let score = compare_name_parts(&parts1, parts2, &self.config.weights);
                if score > best_score {
                    best_score = score;
                    best = Some((var1.as_str(), var2.as_str()));
                }
            }
        }

        let Some((best1, best2)) = best else {
            debug!("no aligned variation pair");
            return MatchResult::no_match();
        };

        let weights = &self.config.weights;
        let lev = levenshtein_similarity(best1, best2);
        let jw = jaro_winkler_similarity(best1, best2);
        let phonetic = phonetic_similarity(best1, best2);
        let dm = double_metaphone_similarity(best1, best2);
        let cosine = cosine_similarity(best1, best2, self.config.ngram_size);
        let (attrs, bonus) = attribute_score(&self.config.attribute_rules, attributes);

        let weighted = lev * weights.levenshtein
            + jw * weights.jaro_winkler
            + phonetic * weights.phonetic
            + dm * weights.double_metaphone
            + cosine * weights.cosine
            + attrs * weights.additional_attributes;
        let score = to_percent(weighted * 100.0 + bonus);
        let match_type = classify(&self.config.thresholds, score);
        debug!(
            alignment = best_score,
            score,
            match_type = %match_type,
            "same-script comparison"
        );

        MatchResult {
            score,
            match_type,
            levenshtein_score: lev,
            jaro_winkler_score: jw,
            phonetic_score: phonetic,
            double_metaphone_score: dm,
            cosine_score: cosine,
            additional_attributes_score: attrs,
            ..MatchResult::no_match()
        }
        .with_pair(best1, best2)
    }
}
