// cleanchat-core/tests/classifier_tests.rs
//! Classification over the stock rule table.

use cleanchat_core::{ContentFilter, ProfanityFilter};
use test_log::test;

fn filter() -> &'static ProfanityFilter {
    ProfanityFilter::global()
}

#[test]
fn clean_text_is_not_flagged() {
    for text in ["hello world", "classic", "grape", "scunthorpe", "assassin", "pass", "shitake", ""] {
        assert!(!filter().contains_disallowed_content(text), "false positive on {text:?}");
    }
}

#[test]
fn plain_and_separated_words_are_flagged() {
    for text in ["fuck", "f u c k you", "f.u.c.k", "shit", "you are a bitch"] {
        assert!(filter().contains_disallowed_content(text), "missed {text:?}");
    }
}

#[test]
fn negative_lookarounds_exclude_benign_phrases() {
    assert!(!filter().contains_disallowed_content("band aids"));
    assert!(!filter().contains_disallowed_content("hearing aids"));
    assert!(filter().contains_disallowed_content("aids"));
}

#[test]
fn regional_words_are_flagged() {
    assert!(filter().contains_disallowed_content("сука"));
    assert!(filter().contains_disallowed_content("ну, бля!"));
}

#[test]
fn specific_bucket_is_case_sensitive() {
    assert!(filter().contains_disallowed_content("gRAPE"));
    assert!(!filter().contains_disallowed_content("grape"));
}

#[test]
fn core_profanity_is_a_narrower_probe() {
    assert!(filter().contains_core_profanity("fuck"));
    assert!(filter().contains_core_profanity("f u c k"));
    assert!(!filter().contains_core_profanity("hello world"));
    assert!(!filter().contains_core_profanity("shit"));
    assert!(filter().contains_disallowed_content("shit"));
}

#[test]
fn one_shot_helpers_agree_with_the_filter() {
    assert!(cleanchat_core::contains_disallowed_content("f u c k you"));
    assert!(!cleanchat_core::contains_disallowed_content("hello world"));
    assert!(cleanchat_core::contains_core_profanity("fuck"));
}

#[test]
fn isolated_instances_classify_like_the_global_one() {
    let own = ProfanityFilter::new();
    for text in ["hello world", "f u c k you", "band aids", "сука"] {
        assert_eq!(
            own.contains_disallowed_content(text),
            filter().contains_disallowed_content(text),
            "{text:?}"
        );
    }
}
