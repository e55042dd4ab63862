//! errors.rs - Custom error types for the cleanchat-core library.
//!
//! Classification and masking never return these: a broken rule degrades to
//! "not flagged" instead. They surface from configuration loading and from
//! the explicit `try_*` compilation primitives.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::patterns::Bucket;

/// All error types produced by `cleanchat-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FilterError {
    #[error("Failed to compile rule {index} of bucket '{bucket}' ({pattern}): {source}")]
    PatternCompilation {
        bucket: Bucket,
        index: usize,
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("Failed to compile bucket '{bucket}': {message}")]
    BucketCompilation { bucket: Bucket, message: String },

    #[error("Unknown placeholder '{{{0}}}' in rule template")]
    UnknownPlaceholder(String),

    #[error("Placeholder '{{{name}}}' is missing its argument")]
    MissingArgument { name: String },

    #[error("Matching with the '{matcher}' matcher failed: {message}")]
    Match { matcher: String, message: String },

    #[error("Invalid filter configuration: {0}")]
    Config(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}

impl FilterError {
    /// Wraps a `fancy_regex` compile error with the rule that produced it.
    pub fn compilation(bucket: Bucket, index: usize, pattern: &str, source: fancy_regex::Error) -> Self {
        FilterError::PatternCompilation {
            bucket,
            index,
            pattern: pattern.to_string(),
            source: Box::new(source),
        }
    }
}
