// cleanchat-core/src/headless.rs

//! Process-wide default filter and one-shot helpers over it.
//!
//! The default filter is compiled on first use and shared by every call.
//! Code that needs isolated rules or options should build its own
//! [`ProfanityFilter`] instead.

use log::debug;
use once_cell::sync::Lazy;

use crate::engine::ContentFilter;
use crate::engines::pattern_engine::ProfanityFilter;
use crate::locator::{LocatorEntry, PatternMatch};
use crate::masker::{Masker, Placeholder};

static GLOBAL: Lazy<ProfanityFilter> = Lazy::new(|| {
    debug!("Initializing the process-wide profanity filter.");
    ProfanityFilter::new()
});

/// The shared default filter.
pub fn global() -> &'static ProfanityFilter {
    &GLOBAL
}

pub fn contains_disallowed_content(text: &str) -> bool {
    global().contains_disallowed_content(text)
}

pub fn contains_core_profanity(text: &str) -> bool {
    global().contains_core_profanity(text)
}

/// Masks every match with `*`, one per matched character.
pub fn mask(text: &str) -> String {
    global().mask(text)
}

/// Replaces the whole name with `*` if any part of it is disallowed.
pub fn mask_name(name: &str) -> String {
    global().mask_name(name)
}

pub fn mask_partial(text: &str) -> String {
    global().mask_partial(text)
}

/// A masker over the default filter with a custom placeholder.
pub fn create_masker<P: Placeholder>(placeholder: P) -> Masker<'static, P> {
    global().masker_with(placeholder)
}

pub fn find_first_matching_pattern(text: &str) -> Option<PatternMatch> {
    global().find_first_matching_pattern(text)
}

pub fn list_all_patterns_with_matchers() -> &'static [LocatorEntry] {
    global().list_all_patterns_with_matchers()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_is_shared() {
        assert!(std::ptr::eq(global(), ProfanityFilter::global()));
    }

    #[test]
    fn one_shot_helpers() {
        assert!(!contains_disallowed_content("hello world"));
        assert_eq!(mask("you are a bitch"), "you are a *****");
        assert_eq!(create_masker(|m: &str| format!("<{}>", m.len())).mask("you are a bitch"), "you are a <5>");
    }
}
