//! A `ContentFilter` implementation backed by the compiled rule table.
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

use crate::config::FilterOptions;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::engine::ContentFilter;
use crate::locator::{Locator, LocatorEntry, PatternMatch};
use crate::masker::{Masker, Placeholder, SameLength};
use crate::match_span::{log_masked_span_debug, MatchSpan};
use crate::patterns::{Bucket, PatternLibrary, Variant};
use crate::sanitizers::compiler::{compile_bucket, compile_core, compile_partial, CompiledMatcher};
use crate::validators;

/// Matchers for the four buckets in one alphabet, in evaluation order.
#[derive(Debug, Clone)]
struct BucketSet {
    matchers: Vec<(Bucket, CompiledMatcher)>,
}

impl BucketSet {
    fn compile(library: &PatternLibrary, variant: Variant, options: &FilterOptions, sink: &dyn DiagnosticSink) -> Self {
        let matchers = Bucket::ALL
            .into_iter()
            .map(|bucket| (bucket, compile_bucket(library, bucket, variant, options, sink)))
            .collect();
        BucketSet { matchers }
    }

    fn iter(&self) -> impl Iterator<Item = &(Bucket, CompiledMatcher)> {
        self.matchers.iter()
    }
}

/// The profanity filter: classifier, masker and locator over one library.
///
/// Everything is compiled in the constructor except the per-rule locator
/// table, which is built on first use. The value is immutable afterwards and
/// can be shared across threads.
pub struct ProfanityFilter {
    library: Arc<PatternLibrary>,
    options: FilterOptions,
    sink: Arc<dyn DiagnosticSink>,
    rich: BucketSet,
    reduced: BucketSet,
    core: CompiledMatcher,
    partial: CompiledMatcher,
    locator: Locator,
}

impl fmt::Debug for ProfanityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfanityFilter")
            .field("rules", &self.library.len())
            .field("options", &self.options)
            .field("rich", &self.rich)
            .field("reduced", &self.reduced)
            .field("core", &self.core)
            .field("partial", &self.partial)
            .field("locator_built", &self.locator.is_built())
            .finish()
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`ProfanityFilter`] with a custom library, options or sink.
#[derive(Default)]
pub struct ProfanityFilterBuilder {
    library: Option<PatternLibrary>,
    options: FilterOptions,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl ProfanityFilterBuilder {
    pub fn library(mut self, library: PatternLibrary) -> Self {
        self.library = Some(library);
        self
    }

    pub fn options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> ProfanityFilter {
        let library = self.library.unwrap_or_else(PatternLibrary::stock);
        let sink = self.sink.unwrap_or_else(|| Arc::new(LogSink));
        ProfanityFilter::compile(library, self.options, sink)
    }
}

impl ProfanityFilter {
    /// Stock library, default options, log-backed diagnostics.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ProfanityFilterBuilder {
        ProfanityFilterBuilder::default()
    }

    /// The shared process-wide instance.
    pub fn global() -> &'static ProfanityFilter {
        crate::headless::global()
    }

    fn compile(library: PatternLibrary, options: FilterOptions, sink: Arc<dyn DiagnosticSink>) -> Self {
        debug!(
            "Compiling profanity filter over {} rules (library {}).",
            library.len(),
            library.fingerprint()
        );
        let rich = BucketSet::compile(&library, Variant::Rich, &options, sink.as_ref());
        let reduced = BucketSet::compile(&library, Variant::Reduced, &options, sink.as_ref());
        let core = compile_core(&library, &options, sink.as_ref());
        let partial = compile_partial(&library, &options, sink.as_ref());
        debug!("Profanity filter ready.");

        ProfanityFilter {
            library: Arc::new(library),
            options,
            sink,
            rich,
            reduced,
            core,
            partial,
            locator: Locator::new(),
        }
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// A masker bound to this filter's default placeholder.
    pub fn masker(&self) -> Masker<'_, SameLength> {
        Masker::new(self, SameLength(self.options.placeholder))
    }

    /// A masker bound to a custom placeholder.
    pub fn masker_with<P: Placeholder>(&self, placeholder: P) -> Masker<'_, P> {
        Masker::new(self, placeholder)
    }

    /// Compiled bucket matcher for one alphabet.
    pub fn matcher(&self, bucket: Bucket, variant: Variant) -> Option<&CompiledMatcher> {
        self.set(variant).iter().find(|(b, _)| *b == bucket).map(|(_, m)| m)
    }

    /// Every rule with its standalone matcher. Built on first call.
    pub fn list_all_patterns_with_matchers(&self) -> &[LocatorEntry] {
        self.locator.entries(&self.library, &self.options, self.sink.as_ref())
    }

    fn set(&self, variant: Variant) -> &BucketSet {
        match variant {
            Variant::Rich => &self.rich,
            Variant::Reduced => &self.reduced,
        }
    }

    fn select(&self, text: &str) -> &BucketSet {
        if validators::exceeds_char_limit(text, self.options.max_input_chars) {
            warn!(
                "Input exceeds the soft limit of {} characters; filtering anyway.",
                self.options.max_input_chars
            );
        }
        self.set(validators::variant_for(text))
    }
}

impl ContentFilter for ProfanityFilter {
    fn contains_disallowed_content(&self, text: &str) -> bool {
        let sink = self.sink.as_ref();
        self.select(text).iter().any(|(_, matcher)| matcher.is_match(text, sink))
    }

    fn contains_core_profanity(&self, text: &str) -> bool {
        self.core.is_match(text, self.sink.as_ref())
    }

    fn mask_with(&self, text: &str, placeholder: &dyn Placeholder) -> String {
        let sink = self.sink.as_ref();
        self.select(text).iter().fold(text.to_string(), |current, (_, matcher)| {
            matcher.replace_all(&current, sink, |found| {
                let replacement = placeholder.replacement(found);
                log_masked_span_debug(matcher.name(), found, &replacement);
                replacement
            })
        })
    }

    fn mask_partial_with(&self, text: &str, placeholder: &dyn Placeholder) -> String {
        self.partial
            .replace_all(text, self.sink.as_ref(), |found| placeholder.replacement(found))
    }

    fn find_first_matching_pattern(&self, text: &str) -> Option<PatternMatch> {
        self.locator.find_first(text, &self.library, &self.options, self.sink.as_ref())
    }

    fn scan(&self, text: &str) -> Vec<MatchSpan> {
        let sink = self.sink.as_ref();
        self.select(text)
            .iter()
            .flat_map(|(bucket, matcher)| {
                matcher.find_spans(text, sink).into_iter().map(move |span| MatchSpan {
                    bucket: *bucket,
                    start: span.start,
                    end: span.end,
                    text: text[span].to_string(),
                })
            })
            .collect()
    }

    fn placeholder_char(&self) -> char {
        self.options.placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::patterns::Rule;

    fn small_filter(sink: Arc<MemorySink>) -> ProfanityFilter {
        let library = PatternLibrary::from_rules(
            &[Rule::Template("darn"), Rule::Template("{spaced:heck}")],
            &[Rule::RichOnly("бяка")],
            &[Rule::Template("(?:^| )meh(?: |$)")],
            &[Rule::Template("{wb}LOUD{wb}")],
        )
        .with_core_range(1..2)
        .unwrap_or_else(|e| panic!("{e}"));
        ProfanityFilter::builder().library(library).sink(sink).build()
    }

    #[test]
    fn classify_each_bucket() {
        let sink = Arc::new(MemorySink::new());
        let filter = small_filter(sink.clone());
        assert!(filter.contains_disallowed_content("oh darn it"));
        assert!(filter.contains_disallowed_content("h.e.c.k"));
        assert!(filter.contains_disallowed_content("ну бяка"));
        assert!(filter.contains_disallowed_content("meh"));
        assert!(filter.contains_disallowed_content("so LOUD"));
        assert!(!filter.contains_disallowed_content("so loud"));
        assert!(!filter.contains_disallowed_content("darned"));
        assert!(sink.compile_issues().is_empty());
    }

    #[test]
    fn core_probe_uses_core_range_only() {
        let filter = small_filter(Arc::new(MemorySink::new()));
        assert!(filter.contains_core_profanity("what the heck"));
        assert!(!filter.contains_core_profanity("darn"));
    }

    #[test]
    fn mask_in_bucket_order() {
        let filter = small_filter(Arc::new(MemorySink::new()));
        assert_eq!(filter.mask("darn, LOUD"), "****, ****");
        assert_eq!(filter.masker_with(|_: &str| "#".to_string()).mask("darn"), "#");
        assert_eq!(filter.mask_name("x darn"), "******");
        assert_eq!(filter.mask_name("fine"), "fine");
    }

    #[test]
    fn regional_mask_keeps_boundary_character() {
        let filter = small_filter(Arc::new(MemorySink::new()));
        assert_eq!(filter.mask("ну,бяка!"), "ну,****!");
    }

    #[test]
    fn scan_reports_spans_over_original() {
        let filter = small_filter(Arc::new(MemorySink::new()));
        let spans = filter.scan("darn LOUD");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].bucket, Bucket::Primary);
        assert_eq!((spans[0].start, spans[0].end), (0, 4));
        assert_eq!(spans[1].bucket, Bucket::Specific);
        assert_eq!(spans[1].text, "LOUD");
    }

    #[test]
    fn locator_finds_rule_and_caches_table() {
        let filter = small_filter(Arc::new(MemorySink::new()));
        assert!(!filter.locator.is_built());
        let found = filter.find_first_matching_pattern("ну бяка");
        assert_eq!(found.map(|m| (m.bucket, m.index)), Some((Bucket::Regional, 0)));
        assert!(filter.locator.is_built());
        assert_eq!(filter.list_all_patterns_with_matchers().len(), 5);
        assert_eq!(filter.find_first_matching_pattern("nothing here"), None);
    }
}
