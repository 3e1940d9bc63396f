//! Name variation generation: reorderings, omissions, initials layouts
//! and nickname substitutions.

use ahash::AHashSet;

use super::{alternative_forms, is_initial, normalize_name_parts};

/// Insertion-ordered set of joined variations.
#[derive(Default)]
struct VariationSet {
    seen: AHashSet<String>,
    ordered: Vec<String>,
}

impl VariationSet {
    fn push_parts<S: AsRef<str>>(&mut self, parts: &[S]) {
        let joined = parts
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        if !joined.is_empty() && self.seen.insert(joined.clone()) {
            self.ordered.push(joined);
        }
    }

    fn extend(&mut self, variations: Vec<String>) {
        for variation in variations {
            if self.seen.insert(variation.clone()) {
                self.ordered.push(variation);
            }
        }
    }
}

/// Reorderings of `parts`, original first.
///
/// Two parts add the swap. Three parts add the other five orders and
/// every two-part subsequence in both orders. Longer names are kept as is.
pub fn permutations<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    let p: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
    let mut set = VariationSet::default();
    set.push_parts(&p);

    match p.as_slice() {
        [a, b] => set.push_parts(&[b, a]),
        [a, b, c] => {
            set.push_parts(&[b, a, c]);
            set.push_parts(&[a, c, b]);
            set.push_parts(&[c, a, b]);
            set.push_parts(&[c, b, a]);
            set.push_parts(&[b, c, a]);

            set.push_parts(&[a, b]);
            set.push_parts(&[b, a]);
            set.push_parts(&[a, c]);
            set.push_parts(&[c, a]);
            set.push_parts(&[b, c]);
            set.push_parts(&[c, b]);
        }
        _ => {}
    }
    set.ordered
}

/// Layouts for names mixing full parts and initials: all full parts then
/// all initials, the reverse, and every full/initial pair in both orders.
fn initials_layouts(parts: &[String]) -> Vec<String> {
    let (initials, full): (Vec<&String>, Vec<&String>) =
        parts.iter().partition(|p| is_initial(p));
    if initials.is_empty() || full.is_empty() {
        return Vec::new();
    }

    let mut set = VariationSet::default();
    let full_first: Vec<&String> = full.iter().chain(initials.iter()).copied().collect();
    let initials_first: Vec<&String> = initials.iter().chain(full.iter()).copied().collect();
    set.push_parts(&full_first);
    set.push_parts(&initials_first);
    for f in &full {
        for i in &initials {
            set.push_parts(&[f, i]);
            set.push_parts(&[i, f]);
        }
    }
    set.ordered
}

/// All variations of `name`, deduplicated, the normalized original first.
///
/// With `allow_permutations` off only the original and its nickname
/// substitutions are produced. Callers truncate the result themselves.
pub fn name_variations(name: &str, allow_permutations: bool) -> Vec<String> {
    let parts = normalize_name_parts(name);
    if parts.is_empty() {
        return Vec::new();
    }

    let mut set = VariationSet::default();
    set.push_parts(&parts);

    if allow_permutations {
        set.extend(permutations(&parts));
        set.extend(initials_layouts(&parts));
    }

    for (idx, part) in parts.iter().enumerate() {
        for form in alternative_forms(part) {
            let mut substituted = parts.clone();
            substituted[idx] = form.to_string();
            if allow_permutations {
                set.extend(permutations(&substituted));
            } else {
                set.push_parts(&substituted);
            }
        }
    }

    set.ordered
}
