// cleanchat-core/src/lib.rs
//! # CleanChat Core Library
//!
//! `cleanchat-core` detects and masks profanity and abusive language in short
//! user-generated text such as chat messages and display names. It ships a
//! compiled-in rule table, compiles it into a handful of matchers once, and
//! answers three questions about a piece of text: does it contain disallowed
//! content, what does it look like with that content masked, and which rule
//! is responsible.
//!
//! Rules are written against a letter-lookalike alphabet so that obfuscated
//! spellings (`b!tch`, `f.u.c.k`, mixed Cyrillic and Latin glyphs) are caught
//! by the same template as the plain word. Two alphabets exist: a rich one
//! for arbitrary Unicode input and a reduced ASCII-only one that is used
//! automatically when the input is plain printable ASCII.
//!
//! ## Modules
//!
//! * `patterns`: The rule table, the lookalike alphabets and template expansion.
//! * `sanitizers`: Compiles rule buckets into matchers with fail-open error handling.
//! * `engine`: Defines the `ContentFilter` trait.
//! * `engines`: Contains `ProfanityFilter`, the regex-backed `ContentFilter`.
//! * `masker`: Placeholder strategies and the `Masker` helper.
//! * `locator`: Per-rule lookup for explaining a match.
//! * `match_span`: Match reporting types and debug logging helpers.
//! * `diagnostics`: Where compile and match failures are reported.
//! * `config`: Tunable limits and the placeholder character, loadable from YAML.
//! * `validators`: Input classification used to pick an alphabet.
//! * `headless`: A process-wide default filter and one-shot helpers.
//!
//! ## Usage Example
//!
//! ```rust
//! use cleanchat_core::{ContentFilter, ProfanityFilter};
//!
//! let filter = ProfanityFilter::new();
//! assert!(filter.contains_disallowed_content("you are a bitch"));
//! assert_eq!(filter.mask("you are a bitch"), "you are a *****");
//! assert!(!filter.contains_disallowed_content("hello world"));
//!
//! // One-shot helpers share a lazily compiled global filter.
//! assert_eq!(cleanchat_core::mask_name("bitch"), "*****");
//! ```
//!
//! ## Error Handling
//!
//! Filtering never fails. A rule that does not compile is reported to the
//! filter's [`DiagnosticSink`] and left out; a match that hits the regex
//! engine's backtracking limit is reported and treated as no match.
//! Configuration loading returns `anyhow::Result`, and [`FilterError`]
//! carries the structured failures.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod locator;
pub mod masker;
pub mod match_span;
pub mod patterns;
pub mod sanitizers;
pub mod validators;

/// Re-exports the filter options and their defaults.
pub use config::{FilterOptions, DEFAULT_BACKTRACK_LIMIT, DEFAULT_MAX_INPUT_CHARS, DEFAULT_SIZE_LIMIT};

/// Re-exports the error type.
pub use errors::FilterError;

/// Re-exports the filter trait and its regex-backed implementation.
pub use engine::ContentFilter;
pub use engines::pattern_engine::{ProfanityFilter, ProfanityFilterBuilder};

/// Re-exports the rule table types.
pub use patterns::{Alphabet, Bucket, PatternLibrary, Rule, Variant};

/// Re-exports diagnostics sinks.
pub use diagnostics::{CompileIssue, DiagnosticSink, LogSink, MemorySink};

/// Re-exports masking types.
pub use masker::{Masker, Placeholder, SameLength};

/// Re-exports match reporting types.
pub use locator::{LocatorEntry, PatternMatch};
pub use match_span::{redact_sensitive, MatchSpan};

/// Re-exports the one-shot helpers over the global filter.
pub use headless::{
    contains_core_profanity,
    contains_disallowed_content,
    create_masker,
    find_first_matching_pattern,
    list_all_patterns_with_matchers,
    mask,
    mask_name,
    mask_partial,
};

// Re-export the compiled matcher for callers inspecting the locator table.
pub use sanitizers::compiler::CompiledMatcher;
