//! compiler.rs - Turns rule templates into bucket matchers.
//!
//! Each bucket's rules are expanded, joined into one alternation and wrapped
//! in the bucket's boundary. A bucket that fails to compile is retried rule by
//! rule: failing rules are reported and left out, the rest are recompiled.
//! If even that fails the bucket becomes a never-match matcher. Compilation
//! never returns an error to the filter.
//!
//! Successfully built programs are cached process-wide, keyed by pattern and
//! limits, so rebuilding a filter over the same library is cheap.
//!
//! License: MIT OR APACHE 2.0

use fancy_regex::{Regex, RegexBuilder};
use lazy_static::lazy_static;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::FilterOptions;
use crate::diagnostics::{CompileIssue, DiagnosticSink};
use crate::errors::FilterError;
use crate::patterns::{Alphabet, Bucket, PatternLibrary, Rule, Variant, WORD_BOUNDARY};

lazy_static! {
    /// Compiled programs keyed by a hash of the wrapped pattern and the limits.
    static ref COMPILED_CACHE: RwLock<HashMap<u64, Arc<Regex>>> = RwLock::new(HashMap::new());
}

/// Bytes searched per window once a search has exhausted its backtracking budget.
const SEARCH_WINDOW: usize = 1024;

/// Tail of each window in which a match is not trusted, since the cut may
/// change how its boundaries and lookaheads resolve.
const WINDOW_OVERLAP: usize = 256;

/// How an alternation is wrapped before compiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// ASCII word boundary on both sides.
    Word,
    /// Script-aware start and end boundaries from the alphabet.
    Regional,
    /// No boundary.
    None,
}

impl Boundary {
    pub fn for_bucket(bucket: Bucket) -> Self {
        match bucket {
            Bucket::Primary => Boundary::Word,
            Bucket::Regional => Boundary::Regional,
            Bucket::Unbounded | Bucket::Specific => Boundary::None,
        }
    }
}

/// Wraps an alternation body with flags and a boundary.
pub fn wrap(body: &str, boundary: Boundary, case_insensitive: bool, alphabet: &Alphabet) -> String {
    let flags = if case_insensitive { "(?i)" } else { "" };
    match boundary {
        Boundary::Word => format!("{flags}{WORD_BOUNDARY}(?:{body}){WORD_BOUNDARY}"),
        Boundary::Regional => format!(
            "{flags}{}(?:{body}){}",
            alphabet.word_start(),
            alphabet.word_end()
        ),
        Boundary::None => format!("{flags}(?:{body})"),
    }
}

/// Compiles a pattern with the configured engine limits.
///
/// Probing and replacing share the returned program.
pub fn build_regex(pattern: &str, options: &FilterOptions) -> Result<Arc<Regex>, fancy_regex::Error> {
    let key = cache_key(pattern, options);
    {
        let cache = COMPILED_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(regex) = cache.get(&key) {
            return Ok(Arc::clone(regex));
        }
    }

    let regex = Arc::new(
        RegexBuilder::new(pattern)
            .backtrack_limit(options.backtrack_limit)
            .delegate_size_limit(options.delegate_size_limit)
            .delegate_dfa_size_limit(options.delegate_dfa_size_limit)
            .build()?,
    );
    COMPILED_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, Arc::clone(&regex));
    Ok(regex)
}

fn cache_key(pattern: &str, options: &FilterOptions) -> u64 {
    let mut hasher = DefaultHasher::new();
    pattern.hash(&mut hasher);
    options.backtrack_limit.hash(&mut hasher);
    options.delegate_size_limit.hash(&mut hasher);
    options.delegate_dfa_size_limit.hash(&mut hasher);
    hasher.finish()
}

/// Expands, wraps and compiles a single rule in its bucket's boundary.
pub fn try_compile_rule(
    bucket: Bucket,
    index: usize,
    rule: &Rule,
    variant: Variant,
    options: &FilterOptions,
) -> Result<Arc<Regex>, FilterError> {
    let alphabet = Alphabet::for_variant(variant);
    let body = rule.expand(alphabet)?;
    let pattern = wrap(&body, Boundary::for_bucket(bucket), bucket.case_insensitive(), alphabet);
    build_regex(&pattern, options).map_err(|e| FilterError::compilation(bucket, index, rule.template(), e))
}

/// A compiled alternation, or the never-match fallback.
#[derive(Clone)]
pub struct CompiledMatcher {
    name: String,
    regex: Option<Arc<Regex>>,
    rules: usize,
    dropped: Vec<(Bucket, usize)>,
}

impl fmt::Debug for CompiledMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledMatcher")
            .field("name", &self.name)
            .field("never", &self.regex.is_none())
            .field("rules", &self.rules)
            .field("dropped", &self.dropped)
            .finish()
    }
}

impl CompiledMatcher {
    /// A matcher that matches nothing.
    pub fn never(name: impl Into<String>) -> Self {
        CompiledMatcher {
            name: name.into(),
            regex: None,
            rules: 0,
            dropped: Vec::new(),
        }
    }

    fn from_regex(name: impl Into<String>, regex: Arc<Regex>, rules: usize, dropped: Vec<(Bucket, usize)>) -> Self {
        CompiledMatcher {
            name: name.into(),
            regex: Some(regex),
            rules,
            dropped,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_never(&self) -> bool {
        self.regex.is_none()
    }

    /// Number of rules that made it into the compiled alternation.
    pub fn rule_count(&self) -> usize {
        self.rules
    }

    /// Rules left out because they failed to expand or compile.
    pub fn dropped(&self) -> &[(Bucket, usize)] {
        &self.dropped
    }

    /// Full regex source, if compiled.
    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_deref().map(Regex::as_str)
    }

    /// Yes/no probe. A runtime failure is reported and answers `false`.
    pub fn is_match(&self, text: &str, sink: &dyn DiagnosticSink) -> bool {
        let Some(regex) = &self.regex else {
            return false;
        };
        self.next_match(regex, text, 0, sink).is_some()
    }

    /// Byte ranges of every non-overlapping match, leftmost first. Stops at the
    /// first runtime failure that windowed retries cannot get past and returns
    /// what was found before it.
    pub fn find_spans(&self, text: &str, sink: &dyn DiagnosticSink) -> Vec<Range<usize>> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };
        let mut spans = Vec::new();
        let mut pos = 0;
        while pos <= text.len() {
            let Some(span) = self.next_match(regex, text, pos, sink) else {
                break;
            };
            pos = match (span.is_empty(), span.end < text.len()) {
                (false, _) => span.end,
                (true, true) => next_boundary(text, span.end + 1),
                (true, false) => text.len() + 1,
            };
            spans.push(span);
        }
        spans
    }

    /// Leftmost match starting at or after `pos`.
    ///
    /// The backtracking budget covers one whole search, so a long haystack can
    /// exhaust it before reaching a match. When that happens the search resumes
    /// from `pos` over bounded windows, each with a fresh budget.
    fn next_match(&self, regex: &Regex, text: &str, pos: usize, sink: &dyn DiagnosticSink) -> Option<Range<usize>> {
        match regex.find_from_pos(text, pos) {
            Ok(found) => found.map(|m| m.start()..m.end()),
            Err(e) if is_backtrack_limit(&e) => {
                debug!(
                    "'{}' ran out of backtracking budget from byte {}; retrying in windows.",
                    self.name, pos
                );
                self.next_match_windowed(regex, text, pos, sink)
            }
            Err(e) => {
                self.report(sink, &e);
                None
            }
        }
    }

    /// Searches `text[..end]` window by window. A match is only taken when it
    /// ends before the window's overlap zone (or the window reaches the end of
    /// the text), so boundaries and lookaheads near a cut never decide a match.
    /// A window that still fails is reported and skipped.
    fn next_match_windowed(
        &self,
        regex: &Regex,
        text: &str,
        pos: usize,
        sink: &dyn DiagnosticSink,
    ) -> Option<Range<usize>> {
        let mut start = pos;
        while start <= text.len() {
            let end = next_boundary(text, start + SEARCH_WINDOW);
            let at_end = end == text.len();
            let accept = if at_end { end } else { prev_boundary(text, end - WINDOW_OVERLAP) };

            match regex.find_from_pos(&text[..end], start) {
                Ok(Some(m)) if at_end || m.end() <= accept || m.start() == start => {
                    return Some(m.start()..m.end());
                }
                // The match runs into the overlap zone: search again from its start.
                Ok(Some(m)) => start = m.start(),
                Ok(None) if at_end => return None,
                Ok(None) => start = accept,
                Err(e) => {
                    self.report(sink, &e);
                    if at_end || !is_backtrack_limit(&e) {
                        return None;
                    }
                    start = accept;
                }
            }
        }
        None
    }

    /// Replaces every match with the replacer's output. Text after a failure
    /// that windowed retries cannot get past is copied through unchanged.
    pub fn replace_all<F>(&self, text: &str, sink: &dyn DiagnosticSink, mut replacer: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for span in self.find_spans(text, sink) {
            out.push_str(&text[last..span.start]);
            out.push_str(&replacer(&text[span.clone()]));
            last = span.end;
        }
        out.push_str(&text[last..]);
        out
    }

    fn report(&self, sink: &dyn DiagnosticSink, error: &fancy_regex::Error) {
        sink.match_failed(&FilterError::Match {
            matcher: self.name.clone(),
            message: error.to_string(),
        });
    }
}

/// Compiles one expanded rule on its own, rich alphabet, in its bucket's
/// boundary and flags.
pub fn compile_single(
    name: &str,
    bucket: Bucket,
    index: usize,
    template: &str,
    body: &str,
    options: &FilterOptions,
    sink: &dyn DiagnosticSink,
) -> CompiledMatcher {
    let pattern = wrap(body, Boundary::for_bucket(bucket), bucket.case_insensitive(), Alphabet::rich());
    match build_regex(&pattern, options) {
        Ok(regex) => CompiledMatcher::from_regex(name, regex, 1, Vec::new()),
        Err(e) => {
            let error = FilterError::compilation(bucket, index, template, e);
            sink.compile_failed(&CompileIssue::rule(bucket, Variant::Rich, index, template, &error));
            let mut matcher = CompiledMatcher::never(name);
            matcher.dropped.push((bucket, index));
            matcher
        }
    }
}

/// One rule headed for a combined alternation.
struct Candidate {
    bucket: Bucket,
    index: usize,
    template: &'static str,
    body: String,
}

/// Compiles every rule of a bucket into one matcher.
pub fn compile_bucket(
    library: &PatternLibrary,
    bucket: Bucket,
    variant: Variant,
    options: &FilterOptions,
    sink: &dyn DiagnosticSink,
) -> CompiledMatcher {
    let rules = library.rules(bucket).iter().enumerate().map(|(i, r)| (bucket, i, *r));
    compile_group(
        format!("{bucket}/{variant}"),
        rules,
        bucket,
        Boundary::for_bucket(bucket),
        bucket.case_insensitive(),
        variant,
        options,
        sink,
    )
}

/// Compiles the core profanity range of the primary bucket, rich alphabet.
pub fn compile_core(library: &PatternLibrary, options: &FilterOptions, sink: &dyn DiagnosticSink) -> CompiledMatcher {
    let core = library.core_range();
    let rules = library.core_rules().iter().enumerate().map(|(i, r)| (Bucket::Primary, core.start + i, *r));
    compile_group(
        "core".to_string(),
        rules,
        Bucket::Primary,
        Boundary::Word,
        true,
        Variant::Rich,
        options,
        sink,
    )
}

/// Compiles every rule of every bucket into one unbounded, case-insensitive
/// alternation, rich alphabet. Used for single-pass partial masking.
pub fn compile_partial(library: &PatternLibrary, options: &FilterOptions, sink: &dyn DiagnosticSink) -> CompiledMatcher {
    let rules = Bucket::ALL.into_iter().flat_map(|bucket| {
        library.rules(bucket).iter().enumerate().map(move |(i, r)| (bucket, i, *r))
    });
    compile_group(
        "partial".to_string(),
        rules,
        Bucket::Primary,
        Boundary::None,
        true,
        Variant::Rich,
        options,
        sink,
    )
}

#[allow(clippy::too_many_arguments)]
fn compile_group<I>(
    name: String,
    rules: I,
    report_as: Bucket,
    boundary: Boundary,
    case_insensitive: bool,
    variant: Variant,
    options: &FilterOptions,
    sink: &dyn DiagnosticSink,
) -> CompiledMatcher
where
    I: Iterator<Item = (Bucket, usize, Rule)>,
{
    let alphabet = Alphabet::for_variant(variant);
    let mut dropped = Vec::new();
    let mut candidates = Vec::new();

    for (bucket, index, rule) in rules {
        if !rule.available_in(variant) {
            continue;
        }
        match rule.expand(alphabet) {
            Ok(body) => candidates.push(Candidate {
                bucket,
                index,
                template: rule.template(),
                body,
            }),
            Err(e) => {
                sink.compile_failed(&CompileIssue::rule(bucket, variant, index, rule.template(), &e));
                dropped.push((bucket, index));
            }
        }
    }

    if candidates.is_empty() {
        debug!("Matcher '{}' has no rules; it will match nothing.", name);
        return CompiledMatcher::never(name);
    }

    let pattern = join(&candidates, boundary, case_insensitive, alphabet);
    match build_regex(&pattern, options) {
        Ok(regex) => {
            log::debug!(
                target: "cleanchat_core::compiler",
                "Matcher '{}' compiled with {} rules.",
                name,
                candidates.len()
            );
            return CompiledMatcher::from_regex(name, regex, candidates.len(), dropped);
        }
        Err(e) => debug!("Matcher '{}' failed to compile as a whole ({}); checking rules one by one.", name, e),
    }

    let mut survivors = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let single = wrap(&candidate.body, boundary, case_insensitive, alphabet);
        match build_regex(&single, options) {
            Ok(_) => survivors.push(candidate),
            Err(e) => {
                let error = FilterError::compilation(candidate.bucket, candidate.index, candidate.template, e);
                sink.compile_failed(&CompileIssue::rule(
                    candidate.bucket,
                    variant,
                    candidate.index,
                    candidate.template,
                    &error,
                ));
                dropped.push((candidate.bucket, candidate.index));
            }
        }
    }

    if survivors.is_empty() {
        return CompiledMatcher::never(name);
    }

    let pattern = join(&survivors, boundary, case_insensitive, alphabet);
    match build_regex(&pattern, options) {
        Ok(regex) => CompiledMatcher::from_regex(name, regex, survivors.len(), dropped),
        Err(e) => {
            let error = FilterError::BucketCompilation {
                bucket: report_as,
                message: e.to_string(),
            };
            sink.compile_failed(&CompileIssue::bucket(report_as, variant, &error));
            CompiledMatcher::never(name)
        }
    }
}

fn join(candidates: &[Candidate], boundary: Boundary, case_insensitive: bool, alphabet: &Alphabet) -> String {
    let body = candidates.iter().map(|c| c.body.as_str()).collect::<Vec<_>>().join("|");
    wrap(&body, boundary, case_insensitive, alphabet)
}

fn is_backtrack_limit(error: &fancy_regex::Error) -> bool {
    matches!(
        error,
        fancy_regex::Error::RuntimeError(fancy_regex::RuntimeError::BacktrackLimitExceeded)
    )
}

/// First char boundary at or after `index`, clamped to the text length.
fn next_boundary(text: &str, index: usize) -> usize {
    (index..text.len()).find(|&i| text.is_char_boundary(i)).unwrap_or(text.len())
}

/// Last char boundary at or before `index`.
fn prev_boundary(text: &str, index: usize) -> usize {
    (0..=index.min(text.len())).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;

    fn library(unbounded: &[Rule]) -> PatternLibrary {
        PatternLibrary::from_rules(&[Rule::Template("bad")], &[], unbounded, &[])
    }

    #[test]
    fn wrap_by_boundary() {
        let alphabet = Alphabet::reduced();
        assert_eq!(wrap("x", Boundary::None, false, alphabet), "(?:x)");
        assert_eq!(wrap("x", Boundary::None, true, alphabet), "(?i)(?:x)");
        assert_eq!(
            wrap("x", Boundary::Regional, true, alphabet),
            "(?i)(?:^|(?<=[^a-zA-Z]))(?:x)(?=$|[^a-zA-Z])"
        );
        assert!(wrap("x", Boundary::Word, true, alphabet).starts_with("(?i)(?:(?<![A-Za-z0-9_])"));
    }

    #[test]
    fn bucket_compiles_and_matches() {
        let sink = MemorySink::new();
        let lib = library(&[Rule::Template("zz+")]);
        let primary = compile_bucket(&lib, Bucket::Primary, Variant::Reduced, &FilterOptions::default(), &sink);
        assert!(primary.is_match("so BAD", &sink));
        assert!(!primary.is_match("badly", &sink));

        let unbounded = compile_bucket(&lib, Bucket::Unbounded, Variant::Reduced, &FilterOptions::default(), &sink);
        assert_eq!(unbounded.find_spans("azzz zz", &sink), vec![1..4, 5..7]);
        assert!(sink.compile_issues().is_empty());
    }

    #[test]
    fn broken_rule_is_dropped_and_reported() {
        let sink = MemorySink::new();
        let lib = library(&[Rule::Template("ok"), Rule::Template("(?:unclosed"), Rule::Template("fine")]);
        let matcher = compile_bucket(&lib, Bucket::Unbounded, Variant::Rich, &FilterOptions::default(), &sink);

        assert!(!matcher.is_never());
        assert_eq!(matcher.rule_count(), 2);
        assert_eq!(matcher.dropped(), &[(Bucket::Unbounded, 1)]);
        assert!(matcher.is_match("fine", &sink));

        let issues = sink.compile_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].index, Some(1));
        assert_eq!(issues[0].pattern.as_deref(), Some("(?:unclosed"));
    }

    #[test]
    fn unknown_placeholder_is_dropped() {
        let sink = MemorySink::new();
        let lib = library(&[Rule::Template("{nope}x"), Rule::Template("y")]);
        let matcher = compile_bucket(&lib, Bucket::Unbounded, Variant::Reduced, &FilterOptions::default(), &sink);
        assert_eq!(matcher.rule_count(), 1);
        assert_eq!(sink.compile_issues().len(), 1);
    }

    #[test]
    fn empty_bucket_never_matches() {
        let sink = MemorySink::new();
        let matcher = compile_bucket(&library(&[]), Bucket::Specific, Variant::Rich, &FilterOptions::default(), &sink);
        assert!(matcher.is_never());
        assert!(!matcher.is_match("", &sink));
        assert_eq!(matcher.replace_all("anything", &sink, |m| m.to_uppercase()), "anything");
    }

    #[test]
    fn replace_all_keeps_unmatched_text() {
        let sink = MemorySink::new();
        let lib = library(&[Rule::Template("cat")]);
        let matcher = compile_bucket(&lib, Bucket::Unbounded, Variant::Reduced, &FilterOptions::default(), &sink);
        assert_eq!(matcher.replace_all("a cat, a CAT", &sink, |m| "#".repeat(m.len())), "a ###, a ###");
    }

    #[test]
    fn exhausted_budget_resumes_in_windows() {
        let sink = MemorySink::new();
        let options = FilterOptions {
            backtrack_limit: 30_000,
            ..FilterOptions::default()
        };
        let lib = library(&[Rule::Template("(?<=x)foo")]);
        let matcher = compile_bucket(&lib, Bucket::Unbounded, Variant::Reduced, &options, &sink);

        let padding = "a".repeat(100_000);
        let text = format!("xfoo{padding}xfoo");
        let far = text.len() - 3;
        assert_eq!(matcher.find_spans(&text, &sink), vec![1..4, far..text.len()]);
        assert!(matcher.is_match(&format!("{padding}xfoo"), &sink));
        assert!(!matcher.is_match(&padding, &sink));
        assert!(sink.match_failures().is_empty(), "{:?}", sink.match_failures());
    }

    #[test]
    fn window_cut_does_not_create_matches() {
        let sink = MemorySink::new();
        let options = FilterOptions {
            backtrack_limit: 30_000,
            ..FilterOptions::default()
        };
        let lib = library(&[Rule::Template("(?<=x)fo+$")]);
        let matcher = compile_bucket(&lib, Bucket::Unbounded, Variant::Reduced, &options, &sink);

        let text = format!("{}xfooo{}", "a".repeat(100_000), "o!".repeat(2_000));
        assert!(matcher.find_spans(&text, &sink).is_empty());
        assert!(sink.match_failures().is_empty());
    }

    #[test]
    fn boundaries_respect_utf8() {
        let text = "aé";
        assert_eq!(next_boundary(text, 2), 3);
        assert_eq!(prev_boundary(text, 2), 1);
        assert_eq!(next_boundary(text, 10), 3);
    }

    #[test]
    fn try_compile_rule_reports_position() {
        let err = try_compile_rule(Bucket::Regional, 7, &Rule::Template("(?<=a+)b"), Variant::Rich, &FilterOptions::default());
        match err {
            Err(FilterError::PatternCompilation { bucket, index, .. }) => {
                assert_eq!(bucket, Bucket::Regional);
                assert_eq!(index, 7);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn programs_are_cached() -> Result<(), fancy_regex::Error> {
        let options = FilterOptions::default();
        let a = build_regex("(?:cache-check)", &options)?;
        let b = build_regex("(?:cache-check)", &options)?;
        assert!(Arc::ptr_eq(&a, &b));
        Ok(())
    }
}
