// cleanchat-core/tests/masking_tests.rs
//! Masking over the stock rule table.

use std::sync::Arc;

use cleanchat_core::{ContentFilter, FilterOptions, MemorySink, ProfanityFilter, SameLength, DEFAULT_MAX_INPUT_CHARS};
use test_log::test;

#[test]
fn mask_replaces_only_the_word() {
    assert_eq!(cleanchat_core::mask("you are a bitch"), "you are a *****");
    assert_eq!(cleanchat_core::mask("hello world"), "hello world");
}

#[test]
fn mask_preserves_character_length() {
    for text in ["f.u.c.k", "you are a bitch", "сука", "ну, бля!", "gRAPE juice"] {
        let masked = cleanchat_core::mask(text);
        assert_eq!(masked.chars().count(), text.chars().count(), "{text:?} -> {masked:?}");
        assert_ne!(masked, text);
    }
}

#[test]
fn mask_name_voids_the_whole_name() {
    assert_eq!(cleanchat_core::mask_name("f u c k"), "*******");
    assert_eq!(cleanchat_core::mask_name("f.u.c.k"), "*******");
    assert_eq!(cleanchat_core::mask_name("Alice"), "Alice");
}

#[test]
fn custom_placeholders() {
    let tagged = cleanchat_core::create_masker(|found: &str| format!("[{}]", found.len()));
    assert_eq!(tagged.mask("you are a bitch"), "you are a [5]");

    let hashes = cleanchat_core::create_masker(SameLength('#'));
    assert_eq!(hashes.mask("you are a bitch"), "you are a #####");
}

#[test]
fn configured_placeholder_drives_the_default_masker() {
    let options = FilterOptions {
        placeholder: '•',
        ..FilterOptions::default()
    };
    let filter = ProfanityFilter::builder().options(options).build();
    assert_eq!(filter.mask("you are a bitch"), "you are a •••••");
    assert_eq!(filter.mask_name("bitch"), "•••••");
    assert_eq!(filter.masker().mask("hello"), "hello");
}

#[test]
fn partial_mask_catches_words_without_boundaries() {
    let masked = cleanchat_core::mask_partial("you are a bitch");
    assert!(masked.ends_with("*****"), "{masked:?}");
    assert_eq!(masked.chars().count(), "you are a bitch".chars().count());
    assert_eq!(cleanchat_core::mask_partial("hello world"), "hello world");
}

#[test]
fn scan_reports_byte_spans() {
    let text = "you are a bitch";
    let spans = ProfanityFilter::global().scan(text);
    assert!(!spans.is_empty());
    for span in &spans {
        assert_eq!(&text[span.start..span.end], span.text);
    }
    assert!(spans.iter().any(|s| s.text == "bitch"));
    assert!(ProfanityFilter::global().scan("hello world").is_empty());
}

#[test]
fn long_padded_input_masks_like_short_input() {
    let sink = Arc::new(MemorySink::new());
    let filter = ProfanityFilter::builder().sink(sink.clone()).build();

    for unit in ["s.h.i ", "._"] {
        let padding = unit.repeat(3_960 / unit.len());
        let masked_padding = filter.mask(&padding);
        for short in ["x motherfucker", "you are a bitch"] {
            let long = format!("{padding} {short}");
            assert!(long.chars().count() < DEFAULT_MAX_INPUT_CHARS);
            assert!(filter.contains_disallowed_content(&long));
            assert_eq!(filter.mask(&long), format!("{masked_padding} {}", filter.mask(short)));
        }
    }
    assert_eq!(filter.mask("x motherfucker"), "x ************");
    assert!(sink.match_failures().is_empty(), "{:?}", sink.match_failures());
}
