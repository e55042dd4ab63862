//! Match reporting types and the debug-logging gate for matched text.
//!
//! Matched text is user content. It only reaches the debug log verbatim when
//! `CLEANCHAT_ALLOW_DEBUG_TEXT=true`; otherwise a length summary is logged.

use lazy_static::lazy_static;
use log::debug;
use serde::Serialize;

use crate::patterns::Bucket;

lazy_static! {
    /// Read once: whether matched text may appear in debug logs.
    static ref DEBUG_TEXT_ALLOWED: bool = {
        std::env::var("CLEANCHAT_ALLOW_DEBUG_TEXT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One bucket match over the original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub bucket: Bucket,
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
    pub text: String,
}

impl MatchSpan {
    /// Length of the match in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Summary used in place of matched text in logs.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", chars)
    }
}

fn loggable(text: &str) -> String {
    if *DEBUG_TEXT_ALLOWED {
        text.to_string()
    } else {
        redact_sensitive(text)
    }
}

pub fn log_masked_span_debug(matcher: &str, original: &str, replacement: &str) {
    debug!(
        "Matcher '{}' masked '{}' as '{}'",
        matcher,
        loggable(original),
        replacement
    );
}

pub fn log_located_match_debug(bucket: Bucket, index: usize, text: &str) {
    debug!(
        "Rule {} of bucket '{}' matched input '{}'",
        index,
        bucket,
        loggable(text)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_counts_chars() {
        assert_eq!(redact_sensitive("ёёёёёёёёё"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn char_len_is_not_byte_len() {
        let span = MatchSpan {
            bucket: Bucket::Regional,
            start: 0,
            end: 8,
            text: "сука".to_string(),
        };
        assert_eq!(span.char_len(), 4);
        assert_eq!(span.end - span.start, 8);
    }
}
