//! Name matcher
//!
//! [`NameMatcher`] runs each comparison through a fixed sequence of stages:
//! initials resolution, exact comparison, script routing, then either the
//! cross-script or the same-script scorer. The first stage that produces a
//! result ends the run. Results are cached per matcher and possible matches
//! are audited.

mod align;
mod cross_script;
mod initials;
mod result;
mod same_script;

use std::sync::Arc;
use std::time::Instant;

use ahash::AHashMap;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use tracing::{debug, info, trace};

use crate::audit::{AuditRecord, AuditSink};
use crate::cache::{cache_key, ResultCache};
use crate::config::{MatchConfig, Thresholds};
use crate::names::{name_variations, preprocess};
use crate::translit::is_cyrillic;

pub use align::compare_name_parts;
pub use result::{Attributes, MatchResult, MatchType};

/// Memoized variation lists are dropped wholesale past this many names.
const VARIATION_MEMO_LIMIT: usize = 4096;

/// Comparison stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    InitialsCheck,
    ExactCheck,
    ScriptRouting,
    CrossScript,
    SameScript,
}

pub(crate) fn classify(thresholds: &Thresholds, score: u8) -> MatchType {
    if score >= thresholds.match_ {
        MatchType::Match
    } else if score >= thresholds.possible {
        MatchType::PossibleMatch
    } else {
        MatchType::NoMatch
    }
}

/// Compares person names under one configuration.
///
/// A matcher is safe to share between threads; the cache and the
/// variation memo are internally locked.
pub struct NameMatcher {
    config: MatchConfig,
    cache: Option<ResultCache>,
    variations: RwLock<AHashMap<String, Vec<String>>>,
    audit: Option<Arc<dyn AuditSink>>,
}

impl NameMatcher {
    /// Build a matcher. Out-of-range configuration values are repaired.
    pub fn new(config: MatchConfig) -> Self {
        let config = config.sanitized();
        let cache = config
            .enable_caching
            .then(|| ResultCache::new(config.max_cache_size, config.cache_ttl()));
        Self {
            config,
            cache,
            variations: RwLock::new(AHashMap::new()),
            audit: None,
        }
    }

    /// Send possible matches to `sink` instead of the tracing audit target.
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn cache(&self) -> Option<&ResultCache> {
        self.cache.as_ref()
    }

    /// Compare two names. Never fails: empty or unusable input yields a
    /// `no_match` result with score 0.
    pub fn match_names(
        &self,
        name1: &str,
        name2: &str,
        attributes: Option<&Attributes>,
    ) -> MatchResult {
        let start = Instant::now();
        let key = self
            .cache
            .as_ref()
            .map(|_| cache_key(name1, name2, attributes));

        if let (Some(cache), Some(key)) = (&self.cache, &key) {
            if let Some(mut hit) = cache.get(key) {
                trace!(key = %key, "cache hit");
                hit.from_cache = true;
                return hit;
            }
        }

        let mut result = self.evaluate(name1, name2, attributes);
        result.processing_time_ms = start.elapsed().as_millis().min(u64::MAX as u128) as u64;
        result.from_cache = false;
        if self.config.max_process_time_ms > 0
            && result.processing_time_ms > self.config.max_process_time_ms
        {
            debug!(
                elapsed_ms = result.processing_time_ms,
                budget_ms = self.config.max_process_time_ms,
                "comparison exceeded time budget"
            );
        }

        if let (Some(cache), Some(key)) = (&self.cache, key) {
            cache.put(key, result.clone());
        }
        if result.match_type == MatchType::PossibleMatch {
            self.audit(name1, name2, &result, attributes);
        }
        result
    }

    fn evaluate(&self, name1: &str, name2: &str, attributes: Option<&Attributes>) -> MatchResult {
        let clean1 = preprocess(name1);
        let clean2 = preprocess(name2);
        if clean1.is_empty() || clean2.is_empty() {
            debug!("empty name after preprocessing");
            return MatchResult::no_match();
        }

        let mut stage = Stage::InitialsCheck;
        loop {
            trace!(?stage, "comparison stage");
            stage = match stage {
                Stage::InitialsCheck => {
                    match initials::resolve_initials(
                        name1,
                        name2,
                        &self.config.transliteration_standards,
                    ) {
                        Some(result) => return result,
                        None => Stage::ExactCheck,
                    }
                }
                Stage::ExactCheck => {
                    if clean1 == clean2 {
                        return MatchResult::exact(&clean1, &clean2);
                    }
                    Stage::ScriptRouting
                }
                Stage::ScriptRouting => {
                    let cyrillic1 = is_cyrillic(&clean1);
                    if cyrillic1 != is_cyrillic(&clean2) && self.config.enable_transliteration {
                        Stage::CrossScript
                    } else {
                        Stage::SameScript
                    }
                }
                Stage::CrossScript => {
                    match self.compare_cross_script(&clean1, &clean2, is_cyrillic(&clean1)) {
                        Some(result) => return result,
                        None => Stage::SameScript,
                    }
                }
                Stage::SameScript => {
                    return self.compare_same_script(&clean1, &clean2, attributes);
                }
            };
        }
    }

    /// Variations of a preprocessed name, memoized per matcher.
    fn variations(&self, name: &str) -> Vec<String> {
        if let Some(found) = self.variations.read().get(name) {
            return found.clone();
        }
        let computed = name_variations(name, self.config.enable_name_part_permutation);
        let mut memo = self.variations.write();
        if memo.len() >= VARIATION_MEMO_LIMIT {
            memo.clear();
        }
        memo.insert(name.to_string(), computed.clone());
        computed
    }

    fn audit(&self, name1: &str, name2: &str, result: &MatchResult, attributes: Option<&Attributes>) {
        if let Some(sink) = &self.audit {
            sink.record(AuditRecord::new(name1, name2, result, attributes));
        } else if self.config.enable_audit_log {
            let record = AuditRecord::new(name1, name2, result, attributes);
            match serde_json::to_string(&record) {
                Ok(json) => info!(target: "namematch::audit", record = %json, "possible match"),
                Err(e) => debug!(error = %e, "failed to serialize audit record"),
            }
        }
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

lazy_static! {
    static ref DEFAULT_MATCHER: NameMatcher = NameMatcher::default();
}

/// One-shot comparison. Without a configuration the process-wide default
/// matcher (and its cache) is used; with one, a fresh matcher is built.
pub fn match_names(
    name1: &str,
    name2: &str,
    attributes: Option<&Attributes>,
    config: Option<MatchConfig>,
) -> MatchResult {
    match config {
        Some(config) => NameMatcher::new(config).match_names(name1, name2, attributes),
        None => DEFAULT_MATCHER.match_names(name1, name2, attributes),
    }
}
