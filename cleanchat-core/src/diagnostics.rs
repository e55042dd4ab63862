//! Injected diagnostics for rules that fail to compile or to match.
//!
//! A failure never reaches the caller of a classification or masking call.
//! It is reported here instead, and the affected rule or bucket fails open.
//!
//! License: MIT OR APACHE 2.0

use log::{error, warn};
use serde::Serialize;
use std::sync::{Mutex, PoisonError};

use crate::errors::FilterError;
use crate::patterns::{Bucket, Variant};

/// A rule or bucket that could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileIssue {
    pub bucket: Bucket,
    pub variant: Variant,
    /// Index of the offending rule, or `None` when the whole bucket was lost.
    pub index: Option<usize>,
    /// The template of the offending rule.
    pub pattern: Option<String>,
    pub message: String,
}

impl CompileIssue {
    pub fn rule(bucket: Bucket, variant: Variant, index: usize, pattern: &str, error: &FilterError) -> Self {
        CompileIssue {
            bucket,
            variant,
            index: Some(index),
            pattern: Some(pattern.to_string()),
            message: error.to_string(),
        }
    }

    pub fn bucket(bucket: Bucket, variant: Variant, error: &FilterError) -> Self {
        CompileIssue {
            bucket,
            variant,
            index: None,
            pattern: None,
            message: error.to_string(),
        }
    }
}

/// Receives compile and match failures.
pub trait DiagnosticSink: Send + Sync {
    fn compile_failed(&self, issue: &CompileIssue);

    fn match_failed(&self, error: &FilterError);
}

/// Default sink: forwards everything to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn compile_failed(&self, issue: &CompileIssue) {
        match issue.index {
            Some(index) => warn!(
                target: "cleanchat_core::compiler",
                "Dropping rule {} of bucket '{}' ({}): {}",
                index,
                issue.bucket,
                issue.variant,
                issue.message
            ),
            None => error!(
                target: "cleanchat_core::compiler",
                "Bucket '{}' ({}) failed to compile and will match nothing: {}",
                issue.bucket,
                issue.variant,
                issue.message
            ),
        }
    }

    fn match_failed(&self, error: &FilterError) {
        warn!(target: "cleanchat_core::compiler", "{}", error);
    }
}

/// Records every report in memory. Useful for tests and for tooling that
/// wants to list degraded rules.
#[derive(Debug, Default)]
pub struct MemorySink {
    compile: Mutex<Vec<CompileIssue>>,
    matching: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compile_issues(&self) -> Vec<CompileIssue> {
        self.compile.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn match_failures(&self) -> Vec<String> {
        self.matching.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn compile_failed(&self, issue: &CompileIssue) {
        self.compile
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(issue.clone());
    }

    fn match_failed(&self, error: &FilterError) {
        self.matching
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_reports() {
        let sink = MemorySink::new();
        let err = FilterError::UnknownPlaceholder("zz".to_string());
        sink.compile_failed(&CompileIssue::rule(Bucket::Primary, Variant::Rich, 3, "{zz}", &err));
        sink.match_failed(&FilterError::Match {
            matcher: "unbounded/rich".to_string(),
            message: "backtrack limit exceeded".to_string(),
        });

        let issues = sink.compile_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].index, Some(3));
        assert_eq!(issues[0].pattern.as_deref(), Some("{zz}"));
        assert!(sink.match_failures()[0].contains("unbounded"));
    }

    #[test]
    fn log_sink_accepts_reports() {
        let err = FilterError::BucketCompilation {
            bucket: Bucket::Regional,
            message: "boom".to_string(),
        };
        LogSink.compile_failed(&CompileIssue::bucket(Bucket::Regional, Variant::Reduced, &err));
        LogSink.match_failed(&err);
    }
}
