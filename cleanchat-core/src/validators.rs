//! Input classification helpers.
//!
//! License: MIT OR APACHE 2.0

use crate::patterns::Variant;

/// True when `text` is non-empty and every byte is printable ASCII
/// (`0x20..=0x7E`). Such input can use the reduced, faster matchers.
pub fn is_ascii(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

/// Alphabet to evaluate `text` against. Empty input takes the rich path.
pub fn variant_for(text: &str) -> Variant {
    if is_ascii(text) {
        Variant::Reduced
    } else {
        Variant::Rich
    }
}

/// True when `text` is longer than `max_chars` characters. Stops counting at
/// the first character past the limit.
pub fn exceeds_char_limit(text: &str, max_chars: usize) -> bool {
    text.len() > max_chars && text.chars().nth(max_chars).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_only() {
        assert!(is_ascii("hello world ~!"));
        assert!(!is_ascii(""));
        assert!(!is_ascii("tab\there"));
        assert!(!is_ascii("line\n"));
        assert!(!is_ascii("café"));
        assert!(!is_ascii("\u{7f}"));
    }

    #[test]
    fn variant_selection() {
        assert_eq!(variant_for("plain"), Variant::Reduced);
        assert_eq!(variant_for(""), Variant::Rich);
        assert_eq!(variant_for("привет"), Variant::Rich);
    }

    #[test]
    fn char_limit_counts_characters() {
        assert!(!exceeds_char_limit("ёёё", 3));
        assert!(exceeds_char_limit("ёёёё", 3));
        assert!(!exceeds_char_limit("", 0));
        assert!(exceeds_char_limit("a", 0));
    }
}
