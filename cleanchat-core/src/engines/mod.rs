// cleanchat-core/src/engines/mod.rs
//! Concrete implementations of the `ContentFilter` trait.
//!
//! `pattern_engine` is the regex-backed filter over the compiled-in rule
//! table. Alternative engines go in their own file and are declared here.

pub mod pattern_engine;
