//! Compilation of the rule table into matchers.
//!
//! This module turns a `PatternLibrary` into fancy-regex programs, one per
//! bucket and alphabet, and owns the fail-open fallback used when a rule or a
//! whole bucket cannot be compiled or run.

pub mod compiler;
