//! Expansion of rule templates into concrete regex source.
//!
//! A template is regex text with `{name}` or `{name:arg[:arg[:arg]]}`
//! placeholders. Names resolve against an [`Alphabet`]:
//!
//! * letters: `{a}`, `{c}`, `{ss}` .. the substitution class of that letter
//! * separators: `{sep}`, `{sep2}` .. `{sep5}`, `{sep2num}`, plus `{emoji}`
//!   as raw class content
//! * `{anyD}` .. `{anyU}`: letters drawn with ASCII art
//! * `{onlyT}` and diacritic fragments (`{pl_a}`, `{ro_t}` ..) as raw class content
//! * boundaries: `{wb}` (ASCII word boundary), `{ws}` / `{we}` (regional)
//! * `{spaced:WORD[:SUFFIX[:SEP]]}`: every letter repeated, separator runs
//!   allowed between letters, optional suffix, surrounding underscores
//! * `{letters:WORD}`: every letter replaced by its class and repeated
//! * `{rich:TEXT}`: TEXT in the rich alphabet, nothing in the reduced one
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use regex::Regex;

use super::alphabet::{Alphabet, Variant, WORD_BOUNDARY};
use crate::errors::FilterError;

lazy_static! {
    static ref PLACEHOLDER: Option<Regex> = Regex::new(
        r"\{(\p{L}[\p{L}0-9_]*)(?::([^{}:]*))?(?::([^{}:]*))?(?::([^{}:]*))?\}"
    )
    .ok();
}

/// Expands every placeholder in `template`.
///
/// An unknown placeholder name is an error; the compiler treats it like a
/// rule that fails to compile.
pub fn expand(template: &str, alphabet: &Alphabet) -> Result<String, FilterError> {
    let Some(placeholder) = PLACEHOLDER.as_ref() else {
        return Err(FilterError::Config("placeholder grammar is unavailable".to_string()));
    };

    let mut out = String::with_capacity(template.len() * 4);
    let mut last = 0;
    for caps in placeholder.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let args: Vec<&str> = (2..=4).filter_map(|i| caps.get(i)).map(|m| m.as_str()).collect();

        out.push_str(&template[last..whole.start()]);
        out.push_str(&render(name.as_str(), &args, alphabet)?);
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

fn render(name: &str, args: &[&str], alphabet: &Alphabet) -> Result<String, FilterError> {
    if let Some(class) = alphabet.letter(name) {
        return Ok(class.to_string());
    }
    if let Some(class) = alphabet.separator(name) {
        return Ok(class.to_string());
    }
    if let Some(alt) = alphabet.multi_glyph(name) {
        return Ok(alt.to_string());
    }
    if let Some(fragment) = alphabet.diacritic(name) {
        return Ok(fragment);
    }

    match name {
        "emoji" => Ok(alphabet.emoji().to_string()),
        "onlyT" => Ok(alphabet.only_t()),
        "wb" => Ok(WORD_BOUNDARY.to_string()),
        "ws" => Ok(alphabet.word_start().to_string()),
        "we" => Ok(alphabet.word_end().to_string()),
        "spaced" => {
            let word = required(name, args)?;
            let separator_name = args.get(2).copied().unwrap_or("sep");
            let separator = alphabet
                .separator(separator_name)
                .ok_or_else(|| FilterError::UnknownPlaceholder(separator_name.to_string()))?;
            let suffix = args.get(1).copied().filter(|s| !s.is_empty());
            Ok(spaced(word, suffix, separator, alphabet))
        }
        "letters" => Ok(letter_run(required(name, args)?, alphabet)),
        "rich" => Ok(match alphabet.variant() {
            Variant::Rich => args.first().copied().unwrap_or_default().to_string(),
            Variant::Reduced => String::new(),
        }),
        _ => Err(FilterError::UnknownPlaceholder(name.to_string())),
    }
}

fn required<'a>(name: &str, args: &[&'a str]) -> Result<&'a str, FilterError> {
    args.first()
        .copied()
        .filter(|word| !word.is_empty())
        .ok_or_else(|| FilterError::MissingArgument { name: name.to_string() })
}

fn letter_class(c: char, alphabet: &Alphabet) -> String {
    let mut buf = [0u8; 4];
    let key: &str = c.encode_utf8(&mut buf);
    alphabet
        .letter(key)
        .map(str::to_string)
        .unwrap_or_else(|| regex::escape(key))
}

fn separated(word: &str, separator: &str, alphabet: &Alphabet) -> String {
    let run = format!("{separator}*");
    word.chars()
        .map(|c| format!("{}+", letter_class(c, alphabet)))
        .collect::<Vec<_>>()
        .join(&run)
}

fn spaced(word: &str, suffix: Option<&str>, separator: &str, alphabet: &Alphabet) -> String {
    let mut out = format!("_*{}", separated(word, separator, alphabet));
    if let Some(suffix) = suffix {
        out.push_str(&format!("(?:{})?", separated(suffix, separator, alphabet)));
    }
    out.push_str("_*");
    out
}

fn letter_run(word: &str, alphabet: &Alphabet) -> String {
    word.chars().map(|c| format!("{}+", letter_class(c, alphabet))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::alphabet::NEVER_MATCH;

    fn reduced(template: &str) -> String {
        expand(template, Alphabet::reduced()).unwrap_or_else(|e| panic!("{template}: {e}"))
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(reduced("a{2,}b"), "a{2,}b");
        assert_eq!(reduced(r"\{x\}"), r"\{x\}");
    }

    #[test]
    fn letters_and_fragments_expand() {
        assert_eq!(reduced("{a}ss"), "[a@4]ss");
        assert_eq!(reduced("[{pl_a}{pl_e}]"), "[ae]");
        assert_eq!(expand("[{pl_a}]", Alphabet::rich()).ok().as_deref(), Some("[aą]"));
        assert_eq!(reduced("{anyO}"), r"(?:o|0|\(\))");
    }

    #[test]
    fn cyrillic_letter_placeholder() {
        assert_eq!(expand("бл{ь}", Alphabet::rich()).ok().as_deref(), Some("бл[ьЪ]"));
        assert_eq!(reduced("бл{ь}"), format!("бл{NEVER_MATCH}"));
    }

    #[test]
    fn spaced_word_with_suffix() {
        let sep = Alphabet::reduced().separator("sep").unwrap_or_default().to_string();
        let expected = format!("_*[o0]+{sep}*m+(?:[e3]+)?_*");
        assert_eq!(reduced("{spaced:om:e}"), expected);
    }

    #[test]
    fn spaced_word_with_custom_separator() {
        let sep2 = Alphabet::reduced().separator("sep2").unwrap_or_default().to_string();
        assert_eq!(reduced("{spaced:om::sep2}"), format!("_*[o0]+{sep2}*m+_*"));
    }

    #[test]
    fn letters_directive_repeats_each_class() {
        assert_eq!(reduced("{letters:tho}"), r"[t\^7]+[h]+[o0]+");
    }

    #[test]
    fn rich_directive_is_empty_when_reduced() {
        assert_eq!(reduced("porn{rich:(?![ãó])}"), "porn");
        assert_eq!(
            expand("porn{rich:(?![ãó])}", Alphabet::rich()).ok().as_deref(),
            Some("porn(?![ãó])")
        );
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let err = expand("{nope}", Alphabet::reduced());
        assert!(matches!(err, Err(FilterError::UnknownPlaceholder(name)) if name == "nope"));
        assert!(matches!(
            expand("{spaced}", Alphabet::reduced()),
            Err(FilterError::MissingArgument { .. })
        ));
    }
}
