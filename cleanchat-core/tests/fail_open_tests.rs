// cleanchat-core/tests/fail_open_tests.rs
//! Broken rules and runaway searches degrade to "not flagged".

use std::sync::Arc;

use cleanchat_core::{
    Bucket, ContentFilter, FilterOptions, MemorySink, PatternLibrary, ProfanityFilter, Rule, Variant,
};
use test_log::test;

#[test]
fn broken_rule_is_dropped_and_the_bucket_survives() {
    let mut library = PatternLibrary::stock();
    let broken = library.rules(Bucket::Primary).len();
    library.push(Bucket::Primary, Rule::Template("(?<=a+)b"));

    let sink = Arc::new(MemorySink::new());
    let filter = ProfanityFilter::builder().library(library).sink(sink.clone()).build();

    assert!(filter.contains_disallowed_content("you are a bitch"));
    assert!(filter.contains_disallowed_content("сука"));
    assert!(!filter.contains_disallowed_content("hello world"));

    let issues = sink.compile_issues();
    assert!(!issues.is_empty());
    for variant in [Variant::Rich, Variant::Reduced] {
        assert!(
            issues
                .iter()
                .any(|i| i.bucket == Bucket::Primary && i.variant == variant && i.index == Some(broken)),
            "no issue for {variant}: {issues:?}"
        );
    }
    assert!(issues.iter().all(|i| i.index.is_some()), "a whole bucket was lost: {issues:?}");

    let rich = filter.matcher(Bucket::Primary, Variant::Rich).expect("primary matcher");
    assert!(!rich.is_never());
    assert!(rich.dropped().contains(&(Bucket::Primary, broken)));
}

#[test]
fn unknown_placeholder_is_a_compile_issue() {
    let library = PatternLibrary::from_rules(&[Rule::Template("darn"), Rule::Template("{nope}")], &[], &[], &[]);
    let sink = Arc::new(MemorySink::new());
    let filter = ProfanityFilter::builder().library(library).sink(sink.clone()).build();

    assert!(filter.contains_disallowed_content("darn"));
    assert!(sink.compile_issues().iter().any(|i| i.index == Some(1)));
}

#[test]
fn bucket_with_only_broken_rules_matches_nothing() {
    let library = PatternLibrary::from_rules(&[], &[], &[Rule::Template("(?<=x+)y")], &[Rule::Template("{wb}LOUD{wb}")]);
    let sink = Arc::new(MemorySink::new());
    let filter = ProfanityFilter::builder().library(library).sink(sink.clone()).build();

    let unbounded = filter.matcher(Bucket::Unbounded, Variant::Reduced).expect("unbounded matcher");
    assert!(unbounded.is_never());
    assert!(!filter.contains_disallowed_content("xxy"));
    assert!(filter.contains_disallowed_content("so LOUD"));
    assert_eq!(filter.mask("xxy LOUD"), "xxy ****");
}

#[test]
fn backtracking_limit_fails_open_at_match_time() {
    let library = PatternLibrary::from_rules(&[], &[], &[Rule::Template("(a|b|ab)*(?=c)")], &[]);
    let options = FilterOptions {
        backtrack_limit: 100,
        ..FilterOptions::default()
    };
    let sink = Arc::new(MemorySink::new());
    let filter = ProfanityFilter::builder()
        .library(library)
        .options(options)
        .sink(sink.clone())
        .build();

    let text = "ab".repeat(30);
    assert!(!filter.contains_disallowed_content(&text));
    assert_eq!(filter.mask(&text), text);
    assert!(!sink.match_failures().is_empty());
    assert!(sink.compile_issues().is_empty());
}
