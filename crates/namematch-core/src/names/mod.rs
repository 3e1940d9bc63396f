//! Name normalization
//!
//! Turns raw input into comparable form: [`preprocess`] canonicalizes the
//! whole string, [`normalize_name_parts`] splits it into ordered parts with
//! initials reduced to their bare letter. Variation generation and the
//! nickname dictionary live in the submodules.

mod nicknames;
mod variations;

pub use nicknames::{alternative_forms, are_name_forms, canonical_names, diminutives};
pub use variations::{name_variations, permutations};

/// Lowercase, turn hyphens into spaces, drop apostrophes and collapse
/// whitespace.
pub fn preprocess(name: &str) -> String {
    let lowered = name.to_lowercase().replace('-', " ").replace(['\'', '’'], "");
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A single-letter name part.
pub fn is_initial(part: &str) -> bool {
    let mut chars = part.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

/// A name carries initials when it contains a period or a one-letter token.
pub fn has_initials(name: &str) -> bool {
    name.contains('.') || name.split_whitespace().any(|t| t.chars().count() == 1)
}

/// Initial letters written in `name`: one-letter tokens, `X.` tokens, and
/// run-together forms such as `И.С.`. Case is preserved.
pub fn extract_initials(name: &str) -> Vec<char> {
    let mut initials = Vec::new();
    for token in name.split_whitespace() {
        let pieces: Vec<&str> = token.split('.').filter(|p| !p.is_empty()).collect();
        let dotted = token.contains('.');
        if !dotted {
            if is_initial(token) {
                initials.extend(token.chars());
            }
            continue;
        }
        // "И." or "И.С." yield letters; "Jr.Smith" is not an initials token
        if !pieces.is_empty() && pieces.iter().all(|p| is_initial(p)) {
            initials.extend(pieces.iter().filter_map(|p| p.chars().next()));
        }
    }
    initials
}

/// First letter of every token.
pub fn first_letters(name: &str) -> Vec<char> {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Split a name into lowercase parts. Period-bearing tokens are split on
/// the period so `и.с.` becomes two initials.
pub fn normalize_name_parts(name: &str) -> Vec<String> {
    let clean = preprocess(name);
    let raw_tokens: Vec<&str> = clean.split_whitespace().collect();

    let mut parts: Vec<String> = Vec::with_capacity(raw_tokens.len());
    for token in &raw_tokens {
        if token.contains('.') {
            parts.extend(
                token
                    .split('.')
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_string),
            );
        } else {
            parts.push((*token).to_string());
        }
    }

    // Never collapse a multi-token name into a single part
    if parts.len() == 1 && raw_tokens.len() > 1 {
        parts = clean
            .replace('.', " ")
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preprocess() {
        assert_eq!(preprocess("  Иванов   Иван "), "иванов иван");
        assert_eq!(preprocess("Salt-Ferrer"), "salt ferrer");
        assert_eq!(preprocess("O'Brien"), "obrien");
        assert_eq!(preprocess("   "), "");
    }

    #[test]
    fn test_has_initials() {
        assert!(has_initials("Иванов И."));
        assert!(has_initials("Ivanov I"));
        assert!(has_initials("Petrov I.S."));
        assert!(!has_initials("Ivanov Ivan"));
    }

    #[test]
    fn test_extract_initials() {
        assert_eq!(extract_initials("Иванов И. С."), vec!['И', 'С']);
        assert_eq!(extract_initials("Петров И.С."), vec!['И', 'С']);
        assert_eq!(extract_initials("J Smith"), vec!['J']);
        assert_eq!(extract_initials("Ivanov Ivan"), Vec::<char>::new());
    }

    #[test]
    fn test_first_letters() {
        assert_eq!(first_letters("Иванов Иван Петрович"), vec!['И', 'И', 'П']);
    }

    #[test]
    fn test_normalize_name_parts() {
        assert_eq!(normalize_name_parts("Иванов Иван"), vec!["иванов", "иван"]);
        assert_eq!(normalize_name_parts("Иванов И."), vec!["иванов", "и"]);
        assert_eq!(
            normalize_name_parts("Petrov I.S."),
            vec!["petrov", "i", "s"]
        );
        assert_eq!(
            normalize_name_parts("Anna-Maria Smith"),
            vec!["anna", "maria", "smith"]
        );
        assert!(normalize_name_parts("  ").is_empty());
    }

    #[test]
    fn test_is_initial() {
        assert!(is_initial("и"));
        assert!(!is_initial("ив"));
        assert!(!is_initial(""));
        assert!(!is_initial("1"));
    }
}
