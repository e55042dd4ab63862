//! Masking strategies.
//!
//! A [`Placeholder`] decides what a matched span becomes. [`SameLength`]
//! repeats one character over the span; any `Fn(&str) -> String` closure
//! works too. A [`Masker`] binds a placeholder to a filter so it can be
//! handed around as a single text-to-text function.
//!
//! License: MIT OR APACHE 2.0

use crate::engine::ContentFilter;

/// Produces the replacement text for a matched span.
pub trait Placeholder: Send + Sync {
    fn replacement(&self, matched: &str) -> String;
}

impl<F> Placeholder for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn replacement(&self, matched: &str) -> String {
        self(matched)
    }
}

/// Repeats one character once per character of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SameLength(pub char);

impl Default for SameLength {
    fn default() -> Self {
        SameLength('*')
    }
}

impl Placeholder for SameLength {
    fn replacement(&self, matched: &str) -> String {
        std::iter::repeat(self.0).take(matched.chars().count()).collect()
    }
}

/// A filter bound to a placeholder.
pub struct Masker<'f, P = SameLength> {
    filter: &'f dyn ContentFilter,
    placeholder: P,
}

impl<'f, P: Placeholder> Masker<'f, P> {
    pub fn new(filter: &'f dyn ContentFilter, placeholder: P) -> Self {
        Masker { filter, placeholder }
    }

    /// Full four-bucket masking.
    pub fn mask(&self, text: &str) -> String {
        self.filter.mask_with(text, &self.placeholder)
    }

    /// Single-pass masking with the unbounded union of every rule.
    pub fn mask_partial(&self, text: &str) -> String {
        self.filter.mask_partial_with(text, &self.placeholder)
    }

    pub fn placeholder(&self) -> &P {
        &self.placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_length_counts_chars() {
        assert_eq!(SameLength::default().replacement("bitch"), "*****");
        assert_eq!(SameLength('#').replacement("сука"), "####");
        assert_eq!(SameLength('#').replacement(""), "");
    }

    #[test]
    fn closures_are_placeholders() {
        let fixed = |_: &str| "[censored]".to_string();
        assert_eq!(fixed.replacement("anything"), "[censored]");
    }
}
