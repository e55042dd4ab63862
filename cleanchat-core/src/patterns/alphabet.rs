//! Homoglyph and leetspeak substitution table.
//!
//! Every canonical letter lists its variants exactly once. The rich alphabet
//! renders all of them; the reduced alphabet renders only the ASCII ones, so
//! a reduced class is always a subset of the rich class for the same letter.
//! Both alphabets are built once per process and shared.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Which alphabet a pattern is rendered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// All known Unicode confusables. Used for any input that is not plain ASCII.
    Rich,
    /// ASCII-only subset. Used for the printable-ASCII fast path.
    Reduced,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Rich => write!(f, "rich"),
            Variant::Reduced => write!(f, "reduced"),
        }
    }
}

/// A pattern that can never match. Stands in for rules or buckets that are
/// unavailable in a given variant.
pub const NEVER_MATCH: &str = "(?!)";

/// ASCII word boundary. The engine's `\b` is Unicode-aware, so the Latin
/// bucket spells out the `[A-Za-z0-9_]` boundary it depends on.
pub const WORD_BOUNDARY: &str =
    "(?:(?<![A-Za-z0-9_])(?=[A-Za-z0-9_])|(?<=[A-Za-z0-9_])(?![A-Za-z0-9_]))";

/// Canonical letter table: key, then every variant.
const LETTERS: &[(&str, &[&str])] = &[
    ("a", &["a", "а", "á", "α", "@", "4", "å"]),
    ("b", &["b", "в", "🅱"]),
    ("c", &["c", "с", "ć", "č", "ç", "ḉ", "ĉ", "ɕ", "ċ", "ƈ", "ȼ", "¢", "ς", "©", "ᴄ", "<"]),
    ("e", &["e", "е", "3", "є", "ε", "ę", "ė", "ë", "ê", "€", "é"]),
    ("f", &["f", "ғ", "ƒ", "ꜰ"]),
    ("g", &["g", "ɢ"]),
    ("h", &["h", "н"]),
    (
        "i",
        &[
            "ı", "ι", "i", "!", "1", "í", "ĭ", "ǐ", "î", "ï", "ḯ", "ị", "ȉ", "ì", "ỉ", "ȋ", "ī", "į", "ᶖ",
            "ɨ", "ĩ", "ḭ", "ᴉ", "ᵢ", "¡", "İ", "|", "🕯", "ɪ",
        ],
    ),
    (
        "k",
        &[
            "k", "ĸ", "к", "ḱ", "ǩ", "ķ", "ⱪ", "ꝃ", "ḳ", "ƙ", "ḵ", "ᶄ", "ꝁ", "ꝅ", "ʞ", "κ", "ᴋ",
        ],
    ),
    ("n", &["n", "η", "ɴ", "ñ", "ń"]),
    ("o", &["o", "○", "о", "0", "σ", "õ", "ø", "🍪", "🥚", "°"]),
    ("p", &["p", "р"]),
    ("s", &["s", "ş", "5", "$", "š"]),
    ("ss", &["ss", "ß"]),
    ("t", &["t", "ţ", "ț", "ť", "т", "ᴛ", "^", "7"]),
    (
        "u",
        &[
            "υ", "u", "ú", "ŭ", "ǔ", "û", "ṷ", "ü", "ǘ", "ǚ", "ǜ", "ǖ", "ṳ", "ụ", "ű", "ȕ", "ù", "ủ", "ư",
            "ứ", "ự", "ừ", "ử", "ữ", "ȗ", "ū", "ṻ", "ų", "ᶙ", "ů", "ũ", "ṹ", "ṵ", "ᴜ",
        ],
    ),
    ("x", &["x", "х"]),
    ("ь", &["ь", "Ъ"]),
];

/// Letters that may only stand for a `t`, without the punctuation look-alikes.
const ONLY_T: &str = "tţțťтᴛ";

/// Per-language diacritic fragments, rendered as raw class content so they
/// can be combined inside a larger bracket expression.
const DIACRITICS: &[(&str, &str)] = &[
    ("es_o", "oó"),
    ("es_a", "aá"),
    ("pt_a", "aã"),
    ("ro_a", "aă"),
    ("ro_t", "tț"),
    ("pl_a", "aą"),
    ("pl_e", "eę"),
    ("pl_c", "cć"),
    ("pl_n", "nń"),
    ("pl_l", "lł"),
    ("pl_u", "uó"),
    ("pl_s", "sś"),
    ("de_o", "öo"),
];

/// Letters drawn with several ASCII glyphs (`|)` for `d`, `(_)` for `u`).
const MULTI_GLYPH: &[(&str, &str)] = &[
    ("anyD", r"(?:d|\|\))"),
    ("anyH", r"(?:h|\|-\|)"),
    ("anyK", r"(?:k|\|<)"),
    ("anyL", r"(?:l|\|_)"),
    ("anyN", r"(?:n|\|\\\|)"),
    ("anyO", r"(?:o|0|\(\))"),
    ("anyU", r"(?:u|\|_\||\\/|\(_\))"),
];

const EMOJI_RANGES: &str = "😀-🙏☀-⛿✀-➿🚀-🛶⬀-⯯🌀-🗿";
const REDUCED_EMOJI: &str = "*";

const SEPARATORS_1: &str = r#":;!|`"@#$%^&'*,._=+~\-"#;
const SEPARATORS_2: &str = r"\(\)/\\";
const BRACKETS: &str = r"\(\)\{\}\]\[";

/// Accented Latin letters that count as word characters next to regional words.
const REGIONAL_LETTERS: &str = "ąăãçćıłńęśóöøğüțţťżź";

static RICH: Lazy<Alphabet> = Lazy::new(|| Alphabet::build(Variant::Rich));
static REDUCED: Lazy<Alphabet> = Lazy::new(|| Alphabet::build(Variant::Reduced));

/// Rendered letter classes, separator classes and boundaries for one variant.
#[derive(Debug)]
pub struct Alphabet {
    variant: Variant,
    letters: HashMap<&'static str, String>,
    separators: HashMap<&'static str, String>,
    emoji: &'static str,
    word_start: String,
    word_end: String,
}

impl Alphabet {
    /// The shared rich alphabet.
    pub fn rich() -> &'static Alphabet {
        &RICH
    }

    /// The shared reduced (ASCII) alphabet.
    pub fn reduced() -> &'static Alphabet {
        &REDUCED
    }

    pub fn for_variant(variant: Variant) -> &'static Alphabet {
        match variant {
            Variant::Rich => Self::rich(),
            Variant::Reduced => Self::reduced(),
        }
    }

    fn build(variant: Variant) -> Self {
        let letters = LETTERS
            .iter()
            .map(|(key, variants)| (*key, render_letter(variants, variant)))
            .collect();

        let emoji = match variant {
            Variant::Rich => EMOJI_RANGES,
            Variant::Reduced => REDUCED_EMOJI,
        };
        let s1 = SEPARATORS_1;
        let s2 = format!("{s1}{SEPARATORS_2}");
        let separators = HashMap::from([
            ("sep", format!("[ {emoji}{s2}]")),
            ("sep2", format!("[{emoji}{s2}]")),
            ("sep3", format!("[{emoji}{s1}]")),
            ("sep4", format!("[{emoji}{s1}{BRACKETS}]")),
            ("sep5", format!("[ {emoji}{s1}{BRACKETS}]")),
            ("sep2num", format!("[0-9{emoji}{s2}]")),
        ]);

        let word_break = match variant {
            Variant::Rich => format!("[^a-zA-ZЀ-ӿ{REGIONAL_LETTERS}]"),
            Variant::Reduced => "[^a-zA-Z]".to_string(),
        };

        Alphabet {
            variant,
            letters,
            separators,
            emoji,
            word_start: format!("(?:^|(?<={word_break}))"),
            word_end: format!("(?=$|{word_break})"),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Rendered class for a canonical letter key (`a`, `ss`, `ь`).
    pub fn letter(&self, key: &str) -> Option<&str> {
        self.letters.get(key).map(String::as_str)
    }

    /// Rendered separator class (`sep`, `sep2` .. `sep5`, `sep2num`).
    pub fn separator(&self, name: &str) -> Option<&str> {
        self.separators.get(name).map(String::as_str)
    }

    /// Raw emoji class content, meant to be placed inside a bracket expression.
    pub fn emoji(&self) -> &'static str {
        self.emoji
    }

    /// Zero-width start boundary for the regional bucket.
    pub fn word_start(&self) -> &str {
        &self.word_start
    }

    /// Zero-width end boundary for the regional bucket.
    pub fn word_end(&self) -> &str {
        &self.word_end
    }

    /// Raw class content of the `t`-only class.
    pub fn only_t(&self) -> String {
        self.class_content(ONLY_T)
    }

    /// Raw class content of a named diacritic fragment such as `pl_a`.
    pub fn diacritic(&self, name: &str) -> Option<String> {
        DIACRITICS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, chars)| self.class_content(chars))
    }

    /// Multi-glyph alternation for a letter drawn with ASCII art.
    pub fn multi_glyph(&self, name: &str) -> Option<&'static str> {
        MULTI_GLYPH.iter().find(|(key, _)| *key == name).map(|(_, alt)| *alt)
    }

    fn class_content(&self, chars: &str) -> String {
        chars
            .chars()
            .filter(|c| self.variant == Variant::Rich || c.is_ascii())
            .map(escape_class_char)
            .collect()
    }
}

/// All variants of a canonical letter, regardless of alphabet.
pub fn letter_variants(key: &str) -> Option<&'static [&'static str]> {
    LETTERS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Every canonical letter key.
pub fn letter_keys() -> impl Iterator<Item = &'static str> {
    LETTERS.iter().map(|(k, _)| *k)
}

fn render_letter(variants: &[&str], variant: Variant) -> String {
    let kept: Vec<&str> = variants
        .iter()
        .copied()
        .filter(|v| variant == Variant::Rich || v.is_ascii())
        .collect();

    if kept.is_empty() {
        return NEVER_MATCH.to_string();
    }

    if kept.iter().all(|v| v.chars().count() == 1) {
        let body: String = kept.iter().flat_map(|v| v.chars()).map(escape_class_char).collect();
        format!("[{body}]")
    } else {
        let body: Vec<String> = kept.iter().map(|v| regex::escape(v)).collect();
        format!("(?:{})", body.join("|"))
    }
}

fn escape_class_char(c: char) -> String {
    match c {
        '\\' | '[' | ']' | '^' | '-' => format!("\\{c}"),
        _ => c.to_string(),
    }
}
