// cleanchat-core/src/engine.rs
//! Defines the `ContentFilter` trait.
//!
//! The trait decouples callers (the CLI, the headless helpers, a masker)
//! from the concrete pattern engine, so tests and embedders can substitute
//! their own implementation.
//!
//! License: MIT OR APACHE 2.0

use crate::locator::PatternMatch;
use crate::masker::{Placeholder, SameLength};
use crate::match_span::MatchSpan;

/// Classification, masking and lookup over short user text.
///
/// None of these methods can fail: a rule that cannot be compiled or run is
/// treated as not matching.
pub trait ContentFilter: Send + Sync {
    /// True if any bucket matches anywhere in `text`.
    fn contains_disallowed_content(&self, text: &str) -> bool;

    /// True if the core profanity family matches `text`. Always evaluated
    /// with the rich alphabet.
    fn contains_core_profanity(&self, text: &str) -> bool;

    /// Replaces every match of every bucket, in bucket order, each bucket
    /// seeing the previous bucket's output.
    fn mask_with(&self, text: &str, placeholder: &dyn Placeholder) -> String;

    /// Single pass over the unbounded union of all rules.
    fn mask_partial_with(&self, text: &str, placeholder: &dyn Placeholder) -> String;

    /// The first rule, in bucket then index order, whose own matcher matches.
    fn find_first_matching_pattern(&self, text: &str) -> Option<PatternMatch>;

    /// Every bucket's match spans over the original `text`.
    fn scan(&self, text: &str) -> Vec<MatchSpan>;

    /// Character used by the default same-length masker.
    fn placeholder_char(&self) -> char;

    /// Masks with the default same-length placeholder.
    fn mask(&self, text: &str) -> String {
        self.mask_with(text, &SameLength(self.placeholder_char()))
    }

    /// Partial masking with the default same-length placeholder.
    fn mask_partial(&self, text: &str) -> String {
        self.mask_partial_with(text, &SameLength(self.placeholder_char()))
    }

    /// All-or-nothing masking for identity strings: a name containing
    /// anything disallowed is replaced entirely.
    fn mask_name(&self, name: &str) -> String {
        if self.contains_disallowed_content(name) {
            SameLength(self.placeholder_char()).replacement(name)
        } else {
            name.to_string()
        }
    }
}
