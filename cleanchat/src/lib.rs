// cleanchat/src/lib.rs
//! # CleanChat CLI
//!
//! Command-line front end for `cleanchat-core`: classify, mask and explain
//! profanity in text read from arguments, files or stdin.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
