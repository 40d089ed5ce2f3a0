use std::cmp::Ordering;

/// Latin letters with diacritics (or ligatures) and the base letters they
/// sort with at the primary level. Input is already lowercased.
const LATIN_FOLDS: &[(&str, &str)] = &[
    ("àáâãäåāăą", "a"),
    ("çćĉċč", "c"),
    ("ďđð", "d"),
    ("èéêëēĕėęě", "e"),
    ("ĝğġģ", "g"),
    ("ĥħ", "h"),
    ("ìíîïĩīĭįı", "i"),
    ("ĵ", "j"),
    ("ķ", "k"),
    ("ĺļľŀł", "l"),
    ("ñńņňŉ", "n"),
    ("òóôõöøōŏő", "o"),
    ("ŕŗř", "r"),
    ("śŝşšș", "s"),
    ("ţťŧț", "t"),
    ("ùúûüũūŭůűų", "u"),
    ("ŵ", "w"),
    ("ýÿŷ", "y"),
    ("źżž", "z"),
    ("æ", "ae"),
    ("œ", "oe"),
    ("ß", "ss"),
    ("þ", "th"),
];

/// ASCII punctuation that root collation files under symbols rather than
/// punctuation.
const ASCII_SYMBOLS: &str = "`^+<=>|~$";

/// Primary character classes in root collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

/// Orders names approximately the way a root-locale collator does.
///
/// Levels, compared in turn:
/// 1. base characters: whitespace < punctuation < symbols < digits <
///    letters, with case and Latin diacritics folded away;
/// 2. accents: an unaccented letter sorts before its accented forms;
/// 3. case: lowercase before uppercase.
///
/// Remaining ties fall back to code point order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let key_a = CollationKey::new(a);
    let key_b = CollationKey::new(b);

    key_a
        .primary
        .cmp(&key_b.primary)
        .then_with(|| key_a.accents.cmp(&key_b.accents))
        .then_with(|| key_a.uppercase.cmp(&key_b.uppercase))
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Default)]
struct CollationKey {
    primary: Vec<(CharClass, char)>,
    accents: Vec<bool>,
    uppercase: Vec<bool>,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let mut key = Self::default();

        for ch in text.chars() {
            key.uppercase.push(ch.is_uppercase());

            let mut accented = false;
            for lower in ch.to_lowercase() {
                match fold_latin(lower) {
                    Some(base) => {
                        accented = true;
                        key.primary
                            .extend(base.chars().map(|base_ch| (char_class(base_ch), base_ch)));
                    }
                    None => key.primary.push((char_class(lower), lower)),
                }
            }
            key.accents.push(accented);
        }

        key
    }
}

fn fold_latin(ch: char) -> Option<&'static str> {
    LATIN_FOLDS
        .iter()
        .find(|(variants, _)| variants.contains(ch))
        .map(|(_, base)| *base)
}

fn char_class(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ASCII_SYMBOLS.contains(ch) {
        CharClass::Symbol
    } else if ch.is_ascii_punctuation() {
        CharClass::Punctuation
    } else {
        CharClass::Symbol
    }
}
