//! Typo expansion for transliterated names.
//!
//! Variants are produced in tiers so the most plausible spellings survive
//! the cap: the inputs themselves, then spelling swaps, then doubled
//! consonants, then dropped vowels.

use ahash::AHashSet;

/// Spelling alternations commonly seen in romanized Slavic names.
const SWAPS: &[(&str, &str)] = &[
    ("y", "i"),
    ("i", "y"),
    ("sh", "sch"),
    ("sch", "sh"),
    ("zh", "j"),
    ("j", "zh"),
    ("ts", "c"),
    ("c", "ts"),
    ("kh", "h"),
    ("h", "kh"),
    ("yu", "iu"),
    ("iu", "yu"),
    ("ya", "ia"),
    ("ia", "ya"),
];

const DOUBLED: &[char] = &['n', 'l', 't', 's', 'r', 'p'];
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

struct Collector {
    seen: AHashSet<String>,
    out: Vec<String>,
    limit: usize,
}

impl Collector {
    fn new(limit: usize) -> Self {
        Self {
            seen: AHashSet::new(),
            out: Vec::new(),
            limit,
        }
    }

    fn full(&self) -> bool {
        self.out.len() >= self.limit
    }

    fn push(&mut self, candidate: String) {
        if self.full() || candidate.trim().is_empty() {
            return;
        }
        if self.seen.insert(candidate.clone()) {
            self.out.push(candidate);
        }
    }
}

/// Swap a word-final "ey" for "ei" and back, word by word.
fn swap_final_ey(text: &str) -> Option<String> {
    let mut changed = false;
    let words: Vec<String> = text
        .split(' ')
        .map(|word| {
            if let Some(stem) = word.strip_suffix("ey") {
                changed = true;
                format!("{}ei", stem)
            } else if let Some(stem) = word.strip_suffix("ei") {
                changed = true;
                format!("{}ey", stem)
            } else {
                word.to_string()
            }
        })
        .collect();
    changed.then(|| words.join(" "))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Expand `bases` with typo variants. The result starts with the bases in
/// order, holds no duplicates or empty strings, and has at most `limit`
/// entries.
pub fn expand_with_typos(bases: &[String], limit: usize) -> Vec<String> {
    let mut collector = Collector::new(limit);

    for base in bases {
        collector.push(base.clone());
    }

    for base in bases {
        if collector.full() {
            break;
        }
        if let Some(swapped) = swap_final_ey(base) {
            collector.push(swapped);
        }
        for (from, to) in SWAPS {
            if base.contains(from) {
                collector.push(base.replace(from, to));
            }
        }
    }

    for base in bases {
        for c in DOUBLED {
            if collector.full() {
                break;
            }
            if base.contains(*c) {
                let doubled: String = [*c, *c].iter().collect();
                collector.push(base.replace(*c, &doubled));
            }
        }
    }

    for base in bases {
        for c in VOWELS {
            if collector.full() {
                break;
            }
            if base.contains(*c) {
                collector.push(collapse_whitespace(&base.replace(*c, "")));
            }
        }
    }

    collector.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bases_come_first() {
        let out = expand_with_typos(&strings(&["ivanov", "yvanov"]), 50);
        assert_eq!(out[0], "ivanov");
        assert_eq!(out[1], "yvanov");
    }

    #[test]
    fn test_common_swaps() {
        let out = expand_with_typos(&strings(&["sergey"]), 50);
        assert!(out.contains(&"sergei".to_string()));
        assert!(out.contains(&"sergey".to_string()));

        let out = expand_with_typos(&strings(&["zhukov"]), 50);
        assert!(out.contains(&"jukov".to_string()));

        let out = expand_with_typos(&strings(&["tsoj"]), 50);
        assert!(out.contains(&"coj".to_string()));
    }

    #[test]
    fn test_word_final_ey_per_word() {
        assert_eq!(
            swap_final_ey("sergey ivanov"),
            Some("sergei ivanov".to_string())
        );
        assert_eq!(swap_final_ey("ivanov"), None);
    }

    #[test]
    fn test_doubling_and_deletion() {
        let out = expand_with_typos(&strings(&["anna"]), 100);
        assert!(out.contains(&"annnna".to_string()));
        assert!(out.contains(&"nn".to_string()));
    }

    #[test]
    fn test_limit_and_uniqueness() {
        let out = expand_with_typos(&strings(&["shchukin sergey"]), 7);
        assert_eq!(out.len(), 7);
        let unique: AHashSet<&String> = out.iter().collect();
        assert_eq!(unique.len(), out.len());
    }

    #[test]
    fn test_no_empty_variants() {
        let out = expand_with_typos(&strings(&["a"]), 100);
        assert_eq!(out, strings(&["a"]));
    }
}
