//! Per-rule lookup: which rule is responsible for a match.
//!
//! Every rule gets its own matcher, built from the rich alphabet and wrapped
//! in its bucket's boundary and flags. The table is built on first use and
//! kept for the lifetime of the filter.

use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::config::FilterOptions;
use crate::diagnostics::{CompileIssue, DiagnosticSink};
use crate::match_span::log_located_match_debug;
use crate::patterns::{Alphabet, Bucket, PatternLibrary, Variant};
use crate::sanitizers::compiler::{compile_single, CompiledMatcher};

/// The rule that matched an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub bucket: Bucket,
    pub index: usize,
    /// The rule as written in the table.
    pub template: &'static str,
    /// The rule expanded against the rich alphabet.
    pub pattern: String,
}

/// One rule with its standalone matcher.
#[derive(Debug, Clone)]
pub struct LocatorEntry {
    pub bucket: Bucket,
    pub index: usize,
    pub template: &'static str,
    pub pattern: String,
    pub matcher: CompiledMatcher,
}

impl LocatorEntry {
    pub fn to_match(&self) -> PatternMatch {
        PatternMatch {
            bucket: self.bucket,
            index: self.index,
            template: self.template,
            pattern: self.pattern.clone(),
        }
    }
}

/// Lazily built table of per-rule matchers.
#[derive(Debug, Default)]
pub struct Locator {
    entries: OnceCell<Vec<LocatorEntry>>,
}

impl Locator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the table has been built yet.
    pub fn is_built(&self) -> bool {
        self.entries.get().is_some()
    }

    pub fn entries(&self, library: &PatternLibrary, options: &FilterOptions, sink: &dyn DiagnosticSink) -> &[LocatorEntry] {
        self.entries.get_or_init(|| build_entries(library, options, sink))
    }

    pub fn find_first(
        &self,
        text: &str,
        library: &PatternLibrary,
        options: &FilterOptions,
        sink: &dyn DiagnosticSink,
    ) -> Option<PatternMatch> {
        let found = self
            .entries(library, options, sink)
            .iter()
            .find(|entry| entry.matcher.is_match(text, sink))?;
        log_located_match_debug(found.bucket, found.index, text);
        Some(found.to_match())
    }
}

fn build_entries(library: &PatternLibrary, options: &FilterOptions, sink: &dyn DiagnosticSink) -> Vec<LocatorEntry> {
    let alphabet = Alphabet::rich();
    let mut entries = Vec::with_capacity(library.len());

    for bucket in Bucket::ALL {
        for (index, rule) in library.rules(bucket).iter().enumerate() {
            let name = format!("{bucket}[{index}]");
            let (pattern, matcher) = match rule.expand(alphabet) {
                Ok(pattern) => {
                    let matcher = compile_single(&name, bucket, index, rule.template(), &pattern, options, sink);
                    (pattern, matcher)
                }
                Err(e) => {
                    sink.compile_failed(&CompileIssue::rule(bucket, Variant::Rich, index, rule.template(), &e));
                    (String::new(), CompiledMatcher::never(name))
                }
            };
            entries.push(LocatorEntry {
                bucket,
                index,
                template: rule.template(),
                pattern,
                matcher,
            });
        }
    }

    log::debug!(
        target: "cleanchat_core::locator",
        "Built {} per-rule matchers.",
        entries.len()
    );
    entries
}
