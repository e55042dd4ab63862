// cleanchat-core/tests/property_tests.rs
//! Property tests over the stock rule table.

use cleanchat_core::{Bucket, ContentFilter, LogSink, PatternLibrary, ProfanityFilter, Variant};
use once_cell::sync::Lazy;
use proptest::prelude::*;

/// Stock rules minus the rich-only ones, so both alphabets carry the same rules.
static SHARED_RULES: Lazy<ProfanityFilter> = Lazy::new(|| {
    let stock = PatternLibrary::stock();
    let library = Bucket::ALL.into_iter().fold(stock.clone(), |library, bucket| {
        let shared = stock
            .rules(bucket)
            .iter()
            .copied()
            .filter(|rule| rule.available_in(Variant::Reduced))
            .collect();
        library.with_bucket(bucket, shared)
    });
    ProfanityFilter::builder().library(library).build()
});

const FRAGMENTS: &[&str] = &[
    "fuck", "f u c k", "sh1t", "b!tch", "ass", "hello", "cl@ss", "a", "*", ".", " ", "sex", "c0ck", "d!ck",
    "ph", "kk", "tits", "cunt", "wh0re", "5", "$", "|<", "(_)", "piss",
];

fn filter() -> &'static ProfanityFilter {
    ProfanityFilter::global()
}

fn buckets_agree(text: &str) -> Result<(), TestCaseError> {
    for bucket in Bucket::ALL {
        let rich = SHARED_RULES.matcher(bucket, Variant::Rich);
        let reduced = SHARED_RULES.matcher(bucket, Variant::Reduced);
        if let (Some(rich), Some(reduced)) = (rich, reduced) {
            prop_assert_eq!(
                rich.is_match(text, &LogSink),
                reduced.is_match(text, &LogSink),
                "bucket {} disagrees on {:?}",
                bucket,
                text
            );
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn alphabets_agree_on_printable_ascii(text in "[ -~]{1,24}") {
        buckets_agree(&text)?;
    }

    #[test]
    fn alphabets_agree_on_obfuscated_words(parts in prop::collection::vec(prop::sample::select(FRAGMENTS), 1..5)) {
        buckets_agree(&parts.concat())?;
    }

    #[test]
    fn mask_preserves_char_count(text in "[a-zA-Z0-9 .,!*@$_-]{0,32}") {
        prop_assert_eq!(filter().mask(&text).chars().count(), text.chars().count());
        prop_assert_eq!(filter().mask_partial(&text).chars().count(), text.chars().count());
    }

    #[test]
    fn mask_preserves_char_count_for_any_script(text in "\\PC{0,24}") {
        prop_assert_eq!(filter().mask(&text).chars().count(), text.chars().count());
    }

    #[test]
    fn unflagged_text_is_left_alone(text in "\\PC{0,24}") {
        if !filter().contains_disallowed_content(&text) {
            prop_assert_eq!(filter().mask(&text), text.clone());
            prop_assert_eq!(filter().mask_name(&text), text);
        }
    }

    #[test]
    fn mask_name_is_all_or_nothing(name in "[a-zA-Z0-9 ._]{1,20}") {
        let masked = filter().mask_name(&name);
        prop_assert!(masked == name || masked.chars().all(|c| c == '*'));
        prop_assert_eq!(masked.chars().count(), name.chars().count());
    }
}
