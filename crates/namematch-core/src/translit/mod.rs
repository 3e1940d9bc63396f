//! Transliteration Engine
//!
//! Cyrillic to Latin under five standards, best-effort Latin to Cyrillic,
//! and a bounded typo expansion used by the cross-script matcher.
//!
//! # Example
//!
//! ```rust
//! use namematch_core::translit::{transliterate, Standard};
//!
//! assert_eq!(transliterate("Иванов", Standard::Gost), "ivanov");
//! assert_eq!(transliterate("Щукин", Standard::Iso9), "ŝukin");
//! ```

mod tables;
mod typos;

use serde::{Deserialize, Serialize};

pub use typos::expand_with_typos;

/// A named Cyrillic romanization scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standard {
    Gost,
    Iso9,
    BgnPcgn,
    Ungegn,
    Ukrainian,
}

impl Standard {
    pub const ALL: [Standard; 5] = [
        Standard::Gost,
        Standard::Iso9,
        Standard::BgnPcgn,
        Standard::Ungegn,
        Standard::Ukrainian,
    ];

    /// Look up a standard by name; unknown names fall back to ISO 9.
    pub fn from_name(name: &str) -> Standard {
        match name.trim().to_lowercase().as_str() {
            "gost" => Standard::Gost,
            "iso9" => Standard::Iso9,
            "bgnpcgn" | "bgn/pcgn" | "bgn_pcgn" => Standard::BgnPcgn,
            "ungegn" => Standard::Ungegn,
            "ukrainian" => Standard::Ukrainian,
            _ => Standard::Iso9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Standard::Gost => "gost",
            Standard::Iso9 => "iso9",
            Standard::BgnPcgn => "bgnpcgn",
            Standard::Ungegn => "ungegn",
            Standard::Ukrainian => "ukrainian",
        }
    }
}

/// Whether a character is Cyrillic, including the Ukrainian letters.
pub fn is_cyrillic_char(c: char) -> bool {
    matches!(c,
        '\u{0400}'..='\u{052F}'
        | '\u{1C80}'..='\u{1C8F}'
        | '\u{2DE0}'..='\u{2DFF}'
        | '\u{A640}'..='\u{A69F}'
    ) || matches!(c, 'і' | 'ї' | 'є' | 'ґ' | 'І' | 'Ї' | 'Є' | 'Ґ')
}

/// Whether the text contains any Cyrillic character.
pub fn is_cyrillic(text: &str) -> bool {
    text.chars().any(is_cyrillic_char)
}

fn is_cyrillic_vowel(c: char) -> bool {
    matches!(
        c,
        'а' | 'е' | 'ё' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я' | 'і' | 'ї' | 'є'
    )
}

/// Transliterate Cyrillic text to lowercase Latin. Non-Cyrillic characters
/// pass through unchanged.
pub fn transliterate(text: &str, standard: Standard) -> String {
    let lower = text.to_lowercase();
    match standard {
        Standard::Gost => map_words(&lower, |word, out| {
            // Adjective endings collapse to a single "y"
            let (stem, ending) = match word.strip_suffix("ий").or_else(|| word.strip_suffix("ый")) {
                Some(stem) if !stem.is_empty() => (stem, "y"),
                _ => (word, ""),
            };
            map_chars(stem, &tables::GOST, out);
            out.push_str(ending);
        }),
        Standard::Iso9 => map_words(&lower, |word, out| map_chars(word, &tables::ISO9, out)),
        Standard::BgnPcgn => map_words(&lower, |word, out| {
            let mut prev: Option<char> = None;
            for c in word.chars() {
                let initial_e = c == 'е'
                    && match prev {
                        None => true,
                        Some(p) => is_cyrillic_vowel(p) || p == 'ь' || p == 'ъ',
                    };
                if initial_e {
                    out.push_str("ye");
                } else {
                    push_mapped(c, &tables::BGN_PCGN, out);
                }
                prev = Some(c);
            }
        }),
        Standard::Ungegn => map_words(&lower, |word, out| map_chars(word, &tables::UNGEGN, out)),
        Standard::Ukrainian => map_words(&lower, |word, out| {
            let word = word.replace("зг", "zgh");
            map_chars(&word, &tables::UKRAINIAN, out);
        }),
    }
}

/// Best-effort Latin to Cyrillic. Multi-character sequences are matched
/// before single letters; unknown characters pass through.
pub fn reverse_transliterate(text: &str, standard: Standard) -> String {
    let table = match standard {
        Standard::Gost => &*tables::GOST_REVERSE,
        Standard::Iso9 => &*tables::ISO9_REVERSE,
        Standard::BgnPcgn => &*tables::BGN_PCGN_REVERSE,
        Standard::Ungegn => &*tables::UNGEGN_REVERSE,
        Standard::Ukrainian => &*tables::UKRAINIAN_REVERSE,
    };

    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len() * 2);
    let mut rest = lower.as_str();
    'scan: while let Some(c) = rest.chars().next() {
        for (latin, cyrillic) in table.iter() {
            if let Some(tail) = rest.strip_prefix(latin) {
                out.push_str(cyrillic);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Every transliteration of `name` under `standards`, deduplicated in
/// standard order. Text without Cyrillic is returned as the only variant.
pub fn all_transliterations(name: &str, standards: &[Standard]) -> Vec<String> {
    if !is_cyrillic(name) {
        return vec![name.to_string()];
    }

    let mut variants: Vec<String> = Vec::with_capacity(standards.len());
    for standard in standards {
        let latin = transliterate(name, *standard);
        if !latin.is_empty() && !variants.contains(&latin) {
            variants.push(latin);
        }
    }
    variants
}

/// [`all_transliterations`] plus typo variants, capped at `limit` entries.
pub fn all_transliterations_with_typos(
    name: &str,
    standards: &[Standard],
    limit: usize,
) -> Vec<String> {
    let variants = all_transliterations(name, standards);
    expand_with_typos(&variants, limit)
}

fn map_words(text: &str, mut per_word: impl FnMut(&str, &mut String)) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (idx, word) in text.split_whitespace().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        per_word(word, &mut out);
    }
    out
}

fn map_chars(word: &str, table: &ahash::AHashMap<char, &'static str>, out: &mut String) {
    for c in word.chars() {
        push_mapped(c, table, out);
    }
}

#[inline]
fn push_mapped(c: char, table: &ahash::AHashMap<char, &'static str>, out: &mut String) {
    match table.get(&c) {
        Some(latin) => out.push_str(latin),
        None => out.push(c),
    }
}
