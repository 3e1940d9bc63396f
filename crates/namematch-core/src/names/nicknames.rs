//! Given-name dictionary: canonical names and their diminutive forms.
//!
//! Lookups work both ways. Results keep dictionary order so variation
//! generation stays deterministic.

use ahash::AHashMap;
use lazy_static::lazy_static;

const NICKNAMES: &[(&str, &[&str])] = &[
    // Russian, male
    ("александр", &["саша", "шура", "саня", "алекс"]),
    ("алексей", &["леша", "лёша", "алеша", "алёша", "лёха", "леха"]),
    ("анатолий", &["толя", "толик"]),
    ("андрей", &["андрюша", "дрюня"]),
    ("антон", &["антоша", "тоша", "тоха"]),
    ("артем", &["тема", "артемка", "тёма"]),
    ("борис", &["боря", "борька"]),
    ("вадим", &["вадик", "вадя"]),
    ("валентин", &["валя", "валик"]),
    ("валерий", &["валера", "валерка"]),
    ("василий", &["вася", "васька", "васек", "васёк"]),
    ("виктор", &["витя", "витька", "витек", "витёк"]),
    ("виталий", &["виталик", "виталя"]),
    ("владимир", &["вова", "володя", "вовка", "вовочка", "владик"]),
    ("владислав", &["влад", "владик", "слава"]),
    ("вячеслав", &["слава", "славик"]),
    ("геннадий", &["гена", "генка", "геша"]),
    ("георгий", &["гоша", "жора", "гера"]),
    ("григорий", &["гриша", "гришка", "гриня"]),
    ("даниил", &["даня", "данька", "данила"]),
    ("денис", &["дениска", "деня"]),
    ("дмитрий", &["дима", "димка", "митя"]),
    ("евгений", &["женя", "женька", "жека"]),
    ("егор", &["егорка", "гоша"]),
    ("иван", &["ваня", "ванька", "ванечка"]),
    ("игорь", &["игорек", "игорёк", "гарик"]),
    ("илья", &["ильюша", "илюша"]),
    ("кирилл", &["кирюша", "кир"]),
    ("константин", &["костя", "костик", "кост"]),
    ("леонид", &["лёня", "леня", "лёнчик", "ленчик"]),
    ("максим", &["макс", "максик", "максимка"]),
    ("михаил", &["миша", "мишка", "миха", "мишаня"]),
    ("никита", &["никитка", "ник", "никитос"]),
    ("николай", &["коля", "колька", "николка", "ник"]),
    ("олег", &["олежка", "олежек", "олежик"]),
    ("павел", &["паша", "пашка", "павлик"]),
    ("петр", &["петя", "петька", "петруха"]),
    ("роман", &["рома", "ромка", "ромчик"]),
    ("сергей", &["серега", "серёга", "сережа", "серёжа"]),
    ("станислав", &["стас", "славик", "слава"]),
    ("степан", &["стёпа", "степа", "стёпка", "степка"]),
    ("тимофей", &["тима", "тимоха", "тимоша"]),
    ("федор", &["федя", "федька", "федюня"]),
    ("юрий", &["юра", "юрка", "юрчик"]),
    ("ярослав", &["яра", "ярик", "слава"]),
    // Russian, female
    ("александра", &["саша", "шура", "саня", "алекс"]),
    ("алена", &["аленка", "аленушка", "алёна", "алёнка", "алёнушка"]),
    ("алина", &["алинка", "аля"]),
    ("анастасия", &["настя", "настенька", "ася"]),
    ("анна", &["аня", "анечка", "анька", "анюта"]),
    ("валентина", &["валя", "валюша", "тина"]),
    ("валерия", &["лера", "лерочка", "валя"]),
    ("вера", &["верочка", "верка"]),
    ("виктория", &["вика", "викуля", "викуся"]),
    ("галина", &["галя", "галочка", "галка"]),
    ("дарья", &["даша", "дашенька", "дашка"]),
    ("евгения", &["женя", "женечка"]),
    ("екатерина", &["катя", "катенька", "катюша", "катерина"]),
    ("елена", &["лена", "леночка", "ленка", "еленка"]),
    ("елизавета", &["лиза", "лизочка", "лизка", "лизавета"]),
    ("ирина", &["ира", "ирочка", "иришка", "иринка"]),
    ("кристина", &["кристи", "крис", "кристинка"]),
    ("лариса", &["лара", "ларочка", "лариска"]),
    ("любовь", &["люба", "любочка", "любаша"]),
    ("людмила", &["люда", "людочка", "мила", "люся"]),
    ("маргарита", &["рита", "риточка", "маргоша"]),
    ("марина", &["мариша", "маришка", "мариночка"]),
    ("мария", &["маша", "машенька", "машка", "маня"]),
    ("надежда", &["надя", "наденька", "надюша"]),
    ("наталья", &["наташа", "наташенька", "наталия", "ната"]),
    ("нина", &["ниночка", "нинуля", "нинуша"]),
    ("оксана", &["ксюша", "оксаночка", "ксана"]),
    ("ольга", &["оля", "оленька", "олечка", "ольчик"]),
    ("полина", &["поля", "полинка", "полюшка"]),
    ("светлана", &["света", "светочка", "светик", "светланка"]),
    ("софья", &["соня", "сонечка", "софа"]),
    ("татьяна", &["таня", "танечка", "танюша"]),
    ("юлия", &["юля", "юленька", "юлька"]),
    ("яна", &["яночка", "янка"]),
    // English
    ("alexander", &["alex", "al", "alec", "sandy", "sasha"]),
    ("anthony", &["tony", "ant", "toni"]),
    ("benjamin", &["ben", "benji", "benny"]),
    ("charles", &["charlie", "chuck", "chaz"]),
    ("christopher", &["chris", "topher", "kit"]),
    ("daniel", &["dan", "danny", "dani"]),
    ("david", &["dave", "davey", "davy"]),
    ("edward", &["ed", "eddie", "ted", "teddy"]),
    ("elizabeth", &["liz", "lizzy", "beth", "betty", "eliza"]),
    ("james", &["jim", "jimmy", "jamie"]),
    ("jennifer", &["jen", "jenny", "jenn"]),
    ("john", &["johnny", "jack", "jock"]),
    ("joseph", &["joe", "joey", "jo"]),
    ("katherine", &["kate", "katie", "kathy", "kat"]),
    ("margaret", &["maggie", "meg", "peggy"]),
    ("matthew", &["matt", "matty"]),
    ("michael", &["mike", "mikey", "mick"]),
    ("nicholas", &["nick", "nicky", "nico"]),
    ("patrick", &["pat", "patty", "paddy"]),
    ("peter", &["pete", "petey"]),
    ("richard", &["rick", "ricky", "dick", "richie"]),
    ("robert", &["rob", "robbie", "bob", "bobby"]),
    ("samuel", &["sam", "sammy"]),
    ("steven", &["steve", "stevie"]),
    ("thomas", &["tom", "tommy"]),
    ("william", &["will", "bill", "billy", "willy"]),
];

lazy_static! {
    static ref FORWARD: AHashMap<&'static str, &'static [&'static str]> =
        NICKNAMES.iter().copied().collect();

    static ref REVERSE: AHashMap<&'static str, Vec<&'static str>> = {
        let mut reverse: AHashMap<&'static str, Vec<&'static str>> = AHashMap::new();
        for (canonical, forms) in NICKNAMES {
            for form in forms.iter() {
                reverse.entry(*form).or_default().push(*canonical);
            }
        }
        reverse
    };
}

/// Diminutives of a canonical given name. Empty when unknown.
pub fn diminutives(name: &str) -> &'static [&'static str] {
    FORWARD.get(name.to_lowercase().as_str()).copied().unwrap_or(&[])
}

/// Canonical names a diminutive may stand for, in dictionary order.
pub fn canonical_names(diminutive: &str) -> Vec<&'static str> {
    REVERSE
        .get(diminutive.to_lowercase().as_str())
        .cloned()
        .unwrap_or_default()
}

/// Every dictionary form reachable from `part` in one step: its
/// diminutives, then the canonical names it abbreviates.
pub fn alternative_forms(part: &str) -> Vec<&'static str> {
    let mut forms: Vec<&'static str> = diminutives(part).to_vec();
    for canonical in canonical_names(part) {
        if !forms.contains(&canonical) {
            forms.push(canonical);
        }
    }
    forms
}

/// Whether two given names are forms of the same name: identical, one a
/// diminutive of the other, or diminutives of a shared canonical name.
pub fn are_name_forms(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return true;
    }
    if diminutives(&a).contains(&b.as_str()) || diminutives(&b).contains(&a.as_str()) {
        return true;
    }
    let left = canonical_names(&a);
    canonical_names(&b).iter().any(|c| left.contains(c))
}
