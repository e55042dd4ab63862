// cleanchat/src/ui/mod.rs
//! Terminal output: colour theme and message formatting.

pub mod output_format;
pub mod theme;
