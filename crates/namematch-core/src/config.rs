//! Matcher configuration
//!
//! A single concrete configuration shape. Every field has a default, so a
//! partial JSON document deserializes cleanly; [`MatchConfig::sanitized`]
//! then repairs out-of-range values instead of rejecting them.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::translit::Standard;

/// Default number of cached comparison results.
pub const DEFAULT_CACHE_SIZE: usize = 1000;
/// Default cache entry lifetime (15 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 15 * 60;
/// Default n-gram size for cosine similarity.
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// Weights of the individual similarity metrics.
///
/// The lexical four are used by part alignment and by the final fusion;
/// cosine and attribute weights only take part in the final fusion.
/// Weights are applied as given, never renormalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricWeights {
    pub levenshtein: f64,
    pub jaro_winkler: f64,
    pub phonetic: f64,
    pub double_metaphone: f64,
    pub cosine: f64,
    pub additional_attributes: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            levenshtein: 0.2,
            jaro_winkler: 0.3,
            phonetic: 0.3,
            double_metaphone: 0.2,
            cosine: 0.0,
            additional_attributes: 0.0,
        }
    }
}

impl MetricWeights {
    fn sanitized(self) -> Self {
        let defaults = Self::default();
        let fix = |value: f64, fallback: f64| {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            levenshtein: fix(self.levenshtein, defaults.levenshtein),
            jaro_winkler: fix(self.jaro_winkler, defaults.jaro_winkler),
            phonetic: fix(self.phonetic, defaults.phonetic),
            double_metaphone: fix(self.double_metaphone, defaults.double_metaphone),
            cosine: fix(self.cosine, defaults.cosine),
            additional_attributes: fix(self.additional_attributes, defaults.additional_attributes),
        }
    }
}

/// Score thresholds on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub exact: u8,
    #[serde(rename = "match")]
    pub match_: u8,
    pub possible: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            exact: 100,
            match_: 90,
            possible: 70,
        }
    }
}

impl Thresholds {
    fn sanitized(self) -> Self {
        let exact = self.exact.min(100);
        let match_ = self.match_.min(exact);
        let possible = self.possible.min(match_);
        Self {
            exact,
            match_,
            possible,
        }
    }
}

/// How a matching attribute contributes to the same-script score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRule {
    pub name: String,
    /// Contribution to the attribute metric (the metric is clamped to 1.0)
    pub score: f64,
    /// Flat points added to the 0-100 score
    pub bonus_points: f64,
}

impl AttributeRule {
    pub fn new(name: impl Into<String>, score: f64, bonus_points: f64) -> Self {
        Self {
            name: name.into(),
            score,
            bonus_points,
        }
    }
}

fn default_attribute_rules() -> Vec<AttributeRule> {
    vec![
        AttributeRule::new("birth_date", 1.0, 10.0),
        AttributeRule::new("country", 0.5, 5.0),
        AttributeRule::new("citizenship", 0.7, 7.0),
    ]
}

/// Full matcher configuration. Supplied once per matcher, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub weights: MetricWeights,
    pub thresholds: Thresholds,
    pub ngram_size: usize,

    pub enable_caching: bool,
    pub max_cache_size: usize,
    pub cache_ttl_secs: u64,

    pub enable_transliteration: bool,
    pub transliteration_standards: Vec<Standard>,
    pub enable_name_part_permutation: bool,

    /// Variations kept per name on the same-script path
    pub max_variations: usize,
    /// Variations kept per name on the cross-script path
    pub max_cross_script_variations: usize,
    /// Transliterations (typo-expanded) kept per Cyrillic variation
    pub max_transliteration_variants: usize,

    pub attribute_rules: Vec<AttributeRule>,

    pub enable_audit_log: bool,
    /// Processing-time target in milliseconds. Not enforced.
    pub max_process_time_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: MetricWeights::default(),
            thresholds: Thresholds::default(),
            ngram_size: DEFAULT_NGRAM_SIZE,
            enable_caching: true,
            max_cache_size: DEFAULT_CACHE_SIZE,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            enable_transliteration: true,
            transliteration_standards: Standard::ALL.to_vec(),
            enable_name_part_permutation: true,
            max_variations: 5,
            max_cross_script_variations: 12,
            max_transliteration_variants: 24,
            attribute_rules: default_attribute_rules(),
            enable_audit_log: false,
            max_process_time_ms: 100,
        }
    }
}

impl MatchConfig {
    /// Parse a (possibly partial) JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MatchConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Load a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Replace malformed values with safe defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.weights = self.weights.sanitized();
        self.thresholds = self.thresholds.sanitized();

        if self.ngram_size == 0 {
            self.ngram_size = defaults.ngram_size;
        }
        if self.max_cache_size == 0 {
            self.max_cache_size = defaults.max_cache_size;
        }
        if self.cache_ttl_secs == 0 {
            self.cache_ttl_secs = defaults.cache_ttl_secs;
        }
        if self.max_variations == 0 {
            self.max_variations = defaults.max_variations;
        }
        if self.max_cross_script_variations == 0 {
            self.max_cross_script_variations = defaults.max_cross_script_variations;
        }
        if self.max_transliteration_variants == 0 {
            self.max_transliteration_variants = defaults.max_transliteration_variants;
        }
        if self.transliteration_standards.is_empty() {
            self.transliteration_standards = defaults.transliteration_standards;
        } else {
            let mut seen = Vec::with_capacity(self.transliteration_standards.len());
            for standard in self.transliteration_standards {
                if !seen.contains(&standard) {
                    seen.push(standard);
                }
            }
            self.transliteration_standards = seen;
        }
        self.attribute_rules
            .retain(|rule| rule.score.is_finite() && rule.bonus_points.is_finite());

        self
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.weights.levenshtein, 0.2);
        assert_eq!(config.weights.jaro_winkler, 0.3);
        assert_eq!(config.weights.phonetic, 0.3);
        assert_eq!(config.weights.double_metaphone, 0.2);
        assert_eq!(config.thresholds, Thresholds::default());
        assert_eq!(config.ngram_size, 3);
        assert!(config.enable_caching);
        assert_eq!(config.max_cache_size, 1000);
        assert_eq!(config.cache_ttl(), Duration::from_secs(900));
    }

    #[test]
    fn test_partial_json() {
        let config = MatchConfig::from_json(r#"{"ngram_size": 2, "weights": {"cosine": 0.1}}"#)
            .unwrap();
        assert_eq!(config.ngram_size, 2);
        assert_eq!(config.weights.cosine, 0.1);
        assert_eq!(config.weights.jaro_winkler, 0.3);
        assert_eq!(config.thresholds.match_, 90);
    }

    #[test]
    fn test_malformed_values_are_repaired() {
        let config = MatchConfig::from_json(
            r#"{"ngram_size": 0, "max_cache_size": 0, "thresholds": {"possible": 95, "match": 90}}"#,
        )
        .unwrap();
        assert_eq!(config.ngram_size, 3);
        assert_eq!(config.max_cache_size, 1000);
        assert!(config.thresholds.possible <= config.thresholds.match_);
    }

    #[test]
    fn test_negative_weight_falls_back() {
        let mut config = MatchConfig::default();
        config.weights.phonetic = -1.0;
        config.weights.cosine = f64::NAN;
        let config = config.sanitized();
        assert_eq!(config.weights.phonetic, 0.3);
        assert_eq!(config.weights.cosine, 0.0);
    }

    #[test]
    fn test_standards_dedup() {
        let config = MatchConfig::from_json(r#"{"transliteration_standards": ["gost", "gost", "iso9"]}"#)
            .unwrap();
        assert_eq!(
            config.transliteration_standards,
            vec![Standard::Gost, Standard::Iso9]
        );
    }

    #[test]
    fn test_invalid_json() {
        assert!(MatchConfig::from_json("{not json").is_err());
    }
}
