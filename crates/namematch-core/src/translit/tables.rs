//! Cyrillic <-> Latin substitution tables, one pair per standard.
//!
//! Forward tables map lowercase Cyrillic letters to Latin output (possibly
//! several characters, possibly empty). Reverse tables are ordered
//! longest-sequence-first so a greedy scan picks digraphs before letters.

use ahash::AHashMap;
use lazy_static::lazy_static;

type Forward = AHashMap<char, &'static str>;
type Reverse = Vec<(&'static str, &'static str)>;

const COMMON: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('з', "z"),
    ('и', "i"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('ы', "y"),
    ('і', "i"),
    ('ґ', "g"),
];

fn forward(specific: &[(char, &'static str)]) -> Forward {
    COMMON
        .iter()
        .chain(specific.iter())
        .map(|&(c, s)| (c, s))
        .collect()
}

fn reverse(pairs: &[(&'static str, &'static str)]) -> Reverse {
    let mut table: Reverse = pairs.to_vec();
    // Longest Latin sequence first, then lexicographic for a stable order
    table.sort_by(|a, b| {
        b.0.chars()
            .count()
            .cmp(&a.0.chars().count())
            .then_with(|| a.0.cmp(b.0))
    });
    table
}

const REVERSE_COMMON: &[(&str, &str)] = &[
    ("a", "а"),
    ("b", "б"),
    ("v", "в"),
    ("g", "г"),
    ("d", "д"),
    ("e", "е"),
    ("z", "з"),
    ("k", "к"),
    ("l", "л"),
    ("m", "м"),
    ("n", "н"),
    ("o", "о"),
    ("p", "п"),
    ("r", "р"),
    ("s", "с"),
    ("t", "т"),
    ("u", "у"),
    ("f", "ф"),
];

fn reverse_with(specific: &[(&'static str, &'static str)]) -> Reverse {
    let mut pairs: Vec<(&'static str, &'static str)> = REVERSE_COMMON.to_vec();
    for &(latin, cyrillic) in specific {
        // Standard-specific entries override the shared ones
        pairs.retain(|(l, _)| *l != latin);
        pairs.push((latin, cyrillic));
    }
    reverse(&pairs)
}

lazy_static! {
    /// GOST 7.79-2000, system B
    pub static ref GOST: Forward = forward(&[
        ('ё', "yo"),
        ('ж', "zh"),
        ('й', "j"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', ""),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
        ('є', "ye"),
        ('ї', "yi"),
    ]);

    /// ISO 9:1995, with diacritics
    pub static ref ISO9: Forward = forward(&[
        ('ё', "ë"),
        ('ж', "ž"),
        ('й', "j"),
        ('х', "h"),
        ('ц', "c"),
        ('ч', "č"),
        ('ш', "š"),
        ('щ', "ŝ"),
        ('ъ', "ʺ"),
        ('ь', "ʹ"),
        ('э', "è"),
        ('ю', "û"),
        ('я', "â"),
        ('є', "ê"),
        ('ї', "ï"),
    ]);

    /// BGN/PCGN romanization
    pub static ref BGN_PCGN: Forward = forward(&[
        ('ё', "ë"),
        ('ж', "zh"),
        ('й', "y"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', ""),
        ('ь', "'"),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
        ('є', "ye"),
        ('ї', "yi"),
    ]);

    /// UNGEGN (GOST 1983 based), with diacritics
    pub static ref UNGEGN: Forward = forward(&[
        ('ё', "ë"),
        ('ж', "ž"),
        ('й', "j"),
        ('х', "h"),
        ('ц', "c"),
        ('ч', "č"),
        ('ш', "š"),
        ('щ', "šč"),
        ('ъ', ""),
        ('ь', ""),
        ('э', "è"),
        ('ю', "ju"),
        ('я', "ja"),
        ('є', "je"),
        ('ї', "ji"),
    ]);

    /// Ukrainian national romanization. Russian-only letters are mapped
    /// best-effort so no Cyrillic survives.
    pub static ref UKRAINIAN: Forward = forward(&[
        ('и', "y"),
        ('й', "y"),
        ('ж', "zh"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ь', ""),
        ('ю', "yu"),
        ('я', "ya"),
        ('є', "ye"),
        ('ї', "yi"),
        ('ё', "yo"),
        ('ъ', ""),
        ('э', "e"),
    ]);

    pub static ref GOST_REVERSE: Reverse = reverse_with(&[
        ("shch", "щ"),
        ("shh", "щ"),
        ("zh", "ж"),
        ("kh", "х"),
        ("ts", "ц"),
        ("cz", "ц"),
        ("ch", "ч"),
        ("sh", "ш"),
        ("yu", "ю"),
        ("ya", "я"),
        ("yo", "ё"),
        ("ye", "е"),
        ("yi", "ї"),
        ("i", "и"),
        ("j", "й"),
        ("y", "ы"),
    ]);

    pub static ref ISO9_REVERSE: Reverse = reverse_with(&[
        ("shch", "щ"),
        ("zh", "ж"),
        ("ch", "ч"),
        ("sh", "ш"),
        ("yu", "ю"),
        ("ya", "я"),
        ("ye", "є"),
        ("yi", "ї"),
        ("ë", "ё"),
        ("ž", "ж"),
        ("i", "и"),
        ("j", "й"),
        ("h", "х"),
        ("c", "ц"),
        ("č", "ч"),
        ("š", "ш"),
        ("ŝ", "щ"),
        ("ʺ", "ъ"),
        ("y", "ы"),
        ("ʹ", "ь"),
        ("è", "э"),
        ("û", "ю"),
        ("â", "я"),
        ("ê", "є"),
        ("ï", "ї"),
    ]);

    pub static ref BGN_PCGN_REVERSE: Reverse = reverse_with(&[
        ("shch", "щ"),
        ("zh", "ж"),
        ("kh", "х"),
        ("ts", "ц"),
        ("ch", "ч"),
        ("sh", "ш"),
        ("ye", "е"),
        ("yu", "ю"),
        ("ya", "я"),
        ("yi", "ї"),
        ("ë", "ё"),
        ("i", "и"),
        ("y", "й"),
        ("'", "ь"),
    ]);

    pub static ref UNGEGN_REVERSE: Reverse = reverse_with(&[
        ("shch", "щ"),
        ("šč", "щ"),
        ("zh", "ж"),
        ("ch", "ч"),
        ("sh", "ш"),
        ("yu", "ю"),
        ("ya", "я"),
        ("ju", "ю"),
        ("ja", "я"),
        ("ë", "ё"),
        ("ž", "ж"),
        ("i", "и"),
        ("j", "й"),
        ("h", "х"),
        ("c", "ц"),
        ("č", "ч"),
        ("š", "ш"),
        ("è", "э"),
        ("y", "ы"),
    ]);

    pub static ref UKRAINIAN_REVERSE: Reverse = reverse_with(&[
        ("shch", "щ"),
        ("zgh", "зг"),
        ("zh", "ж"),
        ("kh", "х"),
        ("ts", "ц"),
        ("ch", "ч"),
        ("sh", "ш"),
        ("yu", "ю"),
        ("ya", "я"),
        ("ye", "є"),
        ("yi", "ї"),
        ("i", "і"),
        ("y", "и"),
    ]);
}
