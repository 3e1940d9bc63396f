use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Boolean attribute flags supplied with a comparison, e.g.
/// `birth_date -> true` when both records share a birth date.
pub type Attributes = BTreeMap<String, bool>;

/// Classification of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    ExactMatch,
    Match,
    PossibleMatch,
    NoMatch,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::ExactMatch => "exact_match",
            MatchType::Match => "match",
            MatchType::PossibleMatch => "possible_match",
            MatchType::NoMatch => "no_match",
        }
    }

    /// Whether the result counts as a positive identification.
    pub fn is_match(&self) -> bool {
        matches!(self, MatchType::ExactMatch | MatchType::Match)
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing two names. A plain value: built once per
/// comparison and copied out of the cache on hits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub exact_match: bool,
    /// 0-100
    pub score: u8,
    pub match_type: MatchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_match1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_match2: Option<String>,
    pub levenshtein_score: f64,
    pub jaro_winkler_score: f64,
    pub phonetic_score: f64,
    pub double_metaphone_score: f64,
    pub cosine_score: f64,
    pub additional_attributes_score: f64,
    pub processing_time_ms: u64,
    pub from_cache: bool,
}

impl MatchResult {
    /// Score 0, no best pair, all metrics zero.
    pub fn no_match() -> Self {
        Self {
            exact_match: false,
            score: 0,
            match_type: MatchType::NoMatch,
            best_match1: None,
            best_match2: None,
            levenshtein_score: 0.0,
            jaro_winkler_score: 0.0,
            phonetic_score: 0.0,
            double_metaphone_score: 0.0,
            cosine_score: 0.0,
            additional_attributes_score: 0.0,
            processing_time_ms: 0,
            from_cache: false,
        }
    }

    /// Normalized strings are identical.
    pub fn exact(name1: &str, name2: &str) -> Self {
        Self {
            exact_match: true,
            score: 100,
            match_type: MatchType::ExactMatch,
            best_match1: Some(name1.to_string()),
            best_match2: Some(name2.to_string()),
            levenshtein_score: 1.0,
            jaro_winkler_score: 1.0,
            phonetic_score: 1.0,
            double_metaphone_score: 1.0,
            cosine_score: 1.0,
            ..Self::no_match()
        }
    }

    pub(crate) fn with_pair(mut self, best1: impl Into<String>, best2: impl Into<String>) -> Self {
        self.best_match1 = Some(best1.into());
        self.best_match2 = Some(best2.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_match_type_serialization() {
        assert_eq!(
            serde_json::to_string(&MatchType::PossibleMatch).unwrap(),
            "\"possible_match\""
        );
        assert_eq!(
            serde_json::from_str::<MatchType>("\"exact_match\"").unwrap(),
            MatchType::ExactMatch
        );
        assert_eq!(MatchType::NoMatch.to_string(), "no_match");
    }

    #[test]
    fn test_is_match() {
        assert!(MatchType::ExactMatch.is_match());
        assert!(MatchType::Match.is_match());
        assert!(!MatchType::PossibleMatch.is_match());
        assert!(!MatchType::NoMatch.is_match());
    }

    #[test]
    fn test_result_json_shape() {
        let json = serde_json::to_value(MatchResult::no_match()).unwrap();
        assert_eq!(json["match_type"], "no_match");
        assert_eq!(json["score"], 0);
        assert!(json.get("best_match1").is_none());

        let json = serde_json::to_value(MatchResult::exact("ivan", "ivan")).unwrap();
        assert_eq!(json["exact_match"], true);
        assert_eq!(json["best_match2"], "ivan");
    }
}
