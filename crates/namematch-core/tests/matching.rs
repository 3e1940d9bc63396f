//! End-to-end behavior of the public matching API.

use std::time::Duration;

use namematch_core::names::{name_variations, permutations};
use namematch_core::similarity::{
    cosine_similarity, double_metaphone_similarity, jaro_winkler_similarity,
    levenshtein_similarity, phonetic_similarity,
};
use namematch_core::{
    cache_key, match_names, Attributes, MatchConfig, MatchResult, MatchType, NameMatcher,
    ResultCache,
};
use pretty_assertions::assert_eq;

fn uncached() -> NameMatcher {
    NameMatcher::new(MatchConfig {
        enable_caching: false,
        ..MatchConfig::default()
    })
}

const PAIRS: &[(&str, &str)] = &[
    ("Иванов Иван", "Ivanov Ivan"),
    ("Sergey Petrov", "Sergei Petrov"),
    ("Александр Пушкин", "Саша Пушкин"),
    ("John Smith", "Jon Smyth"),
    ("Tymczak", "Timchak"),
];

#[test]
fn metrics_score_identical_strings_as_one() {
    for name in ["ivanov", "Иванов Иван", "o'brien", "x"] {
        assert_eq!(levenshtein_similarity(name, name), 1.0, "{}", name);
        assert_eq!(jaro_winkler_similarity(name, name), 1.0, "{}", name);
        assert_eq!(phonetic_similarity(name, name), 1.0, "{}", name);
        assert_eq!(double_metaphone_similarity(name, name), 1.0, "{}", name);
    }
    assert!((cosine_similarity("ivanov", "ivanov", 3) - 1.0).abs() < 1e-9);
}

#[test]
fn metrics_handle_empty_input() {
    assert_eq!(levenshtein_similarity("", ""), 1.0);
    assert_eq!(levenshtein_similarity("", "ivan"), 0.0);
    assert_eq!(jaro_winkler_similarity("ivan", ""), 0.0);
    assert_eq!(phonetic_similarity("", "ivan"), 0.0);
    assert_eq!(double_metaphone_similarity("", ""), 1.0);
    assert_eq!(cosine_similarity("", "", 3), 1.0);
}

#[test]
fn metrics_are_symmetric_and_bounded() {
    for (a, b) in PAIRS {
        let forward = [
            levenshtein_similarity(a, b),
            jaro_winkler_similarity(a, b),
            phonetic_similarity(a, b),
            double_metaphone_similarity(a, b),
            cosine_similarity(a, b, 3),
        ];
        let backward = [
            levenshtein_similarity(b, a),
            jaro_winkler_similarity(b, a),
            phonetic_similarity(b, a),
            double_metaphone_similarity(b, a),
            cosine_similarity(b, a, 3),
        ];
        for (f, r) in forward.iter().zip(&backward) {
            assert!((f - r).abs() < 1e-9, "{} / {}: {} vs {}", a, b, f, r);
            assert!((0.0..=1.0).contains(f), "{} / {}: {}", a, b, f);
        }
    }
}

#[test]
fn cache_key_ignores_argument_order_and_case() {
    let mut attrs = Attributes::new();
    attrs.insert("birth_date".to_string(), true);
    assert_eq!(
        cache_key("Ivanov Ivan", "PETROV PETR", Some(&attrs)),
        cache_key("petrov petr", "ivanov ivan", Some(&attrs))
    );
}

#[test]
fn comparison_is_deterministic() {
    let matcher = uncached();
    for (a, b) in PAIRS {
        let first = matcher.match_names(a, b, None);
        let second = matcher.match_names(a, b, None);
        assert_eq!(first.score, second.score, "{} / {}", a, b);
        assert_eq!(first.match_type, second.match_type);
        assert_eq!(first.best_match1, second.best_match1);
        assert!(!second.from_cache);
    }
}

#[test]
fn score_agrees_with_match_type() {
    let matcher = uncached();
    let thresholds = matcher.config().thresholds;
    for (a, b) in PAIRS
        .iter()
        .copied()
        .chain([("Иванов Иван", "Смирнов Петр"), ("Иванов И.", "Иванов Иван")])
    {
        let result = matcher.match_names(a, b, None);
        assert!(result.score <= 100);
        match result.match_type {
            MatchType::ExactMatch => assert_eq!(result.score, 100),
            MatchType::Match => assert!(result.score >= thresholds.match_),
            MatchType::PossibleMatch => {
                assert!(result.score >= thresholds.possible && result.score < thresholds.match_)
            }
            MatchType::NoMatch => assert!(result.score < thresholds.possible),
        }
    }
}

#[test]
fn reference_comparisons() {
    let matcher = uncached();

    let exact = matcher.match_names("Иванов Иван", "иванов иван", None);
    assert_eq!(exact.score, 100);
    assert_eq!(exact.match_type, MatchType::ExactMatch);

    let cross = matcher.match_names("Иванов Иван", "Ivanov Ivan", None);
    assert!(cross.score >= 90);
    assert_eq!(cross.match_type, MatchType::Match);

    let initials = matcher.match_names("Иванов И.", "Иванов Иван", None);
    assert!(initials.score >= 70);
    assert_eq!(initials.match_type, MatchType::PossibleMatch);

    let different = matcher.match_names("Иванов Иван", "Смирнов Петр", None);
    assert!(different.score < 70);
    assert_eq!(different.match_type, MatchType::NoMatch);
}

#[test]
fn cross_script_typos_report_the_cyrillic_variant() {
    let matcher = uncached();
    let result = matcher.match_names("Иванов Иван Петрович", "Ivanoff Ivan Petrovitch", None);
    assert!(result.match_type.is_match());
    assert_ne!(result.match_type, MatchType::ExactMatch);
    assert!(result.score >= 90 && result.score < 100, "got {}", result.score);
    let best1 = result.best_match1.unwrap_or_default();
    assert!(best1.contains("иванов") && best1.contains("петрович"), "got {}", best1);
}

#[test]
fn partial_initials_on_both_sides_follow_match_count() {
    let result = uncached().match_names("И. И. И. И. И.", "И. И. И. И. К.", None);
    assert_eq!(result.score, 90);
    assert_eq!(result.match_type, MatchType::PossibleMatch);
}

#[test]
fn empty_names_never_match() {
    let matcher = uncached();
    for (a, b) in [("", "Ivan"), ("Ivan", "  "), ("", "")] {
        let result = matcher.match_names(a, b, None);
        assert_eq!(result, MatchResult {
            processing_time_ms: result.processing_time_ms,
            ..MatchResult::no_match()
        });
    }
}

#[test]
fn free_function_reuses_default_cache() {
    let first = match_names("Sidorov Oleg", "Sidorova Olga", None, None);
    let second = match_names("Sidorova Olga", "Sidorov Oleg", None, None);
    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.score, second.score);
}

#[test]
fn cache_evicts_oldest_and_expires() {
    let cache = ResultCache::new(2, Duration::from_millis(50));
    cache.put("a".to_string(), MatchResult::no_match());
    cache.put("b".to_string(), MatchResult::no_match());
    cache.put("c".to_string(), MatchResult::no_match());
    assert!(cache.get("a").is_none());
    assert!(cache.get("c").is_some());

    std::thread::sleep(Duration::from_millis(80));
    assert!(cache.get("c").is_none());
}

#[test]
fn three_part_permutations_are_order_invariant() {
    let sorted = |mut v: Vec<String>| {
        v.sort();
        v
    };
    let a = sorted(permutations(&["ivanov", "ivan", "petrovich"]));
    let b = sorted(permutations(&["petrovich", "ivanov", "ivan"]));
    assert_eq!(a, b);
    assert_eq!(a.len(), 12);

    let variations = name_variations("ivanov ivan petrovich", true);
    assert_eq!(variations[0], "ivanov ivan petrovich");
    assert!(variations.contains(&"ivan petrovich ivanov".to_string()));
}

#[test]
fn attributes_raise_same_script_score() {
    let matcher = uncached();
    let mut attrs = Attributes::new();
    attrs.insert("birth_date".to_string(), true);
    let plain = matcher.match_names("Petrov Petr", "Petrova Petra", None);
    let boosted = matcher.match_names("Petrov Petr", "Petrova Petra", Some(&attrs));
    assert!(boosted.score > plain.score);
}

#[test]
fn matcher_is_shareable_across_threads() {
    let matcher = std::sync::Arc::new(NameMatcher::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = matcher.clone();
            std::thread::spawn(move || matcher.match_names("Иванов Иван", "Ivanov Ivan", None).score)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 95);
    }
}
