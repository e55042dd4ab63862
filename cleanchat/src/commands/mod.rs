// cleanchat/src/commands/mod.rs
//! Subcommand implementations.
//!
//! Each command writes its results to a caller-supplied writer and returns
//! whether anything was found, which `main` maps to the exit code.

pub mod check;
pub mod find;
pub mod list;
pub mod mask;
pub mod scan;

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use cleanchat_core::{FilterOptions, ProfanityFilter};

/// Loads options from `config` (or defaults), applies a placeholder override
/// and compiles a filter.
pub fn build_filter(config: Option<&Path>, placeholder: Option<char>) -> Result<ProfanityFilter> {
    let mut options = match config {
        Some(path) => FilterOptions::load_from_file(path)?,
        None => FilterOptions::default(),
    };
    if let Some(placeholder) = placeholder {
        options.placeholder = placeholder;
    }
    options.validate().context("Invalid filter options")?;
    debug!("Building filter with options: {:?}", options);
    Ok(ProfanityFilter::builder().options(options).build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanchat_core::ContentFilter;

    #[test]
    fn placeholder_override_applies() -> Result<()> {
        let filter = build_filter(None, Some('#'))?;
        assert_eq!(filter.placeholder_char(), '#');
        Ok(())
    }

    #[test]
    fn control_placeholder_is_rejected() {
        assert!(build_filter(None, Some('\u{7}')).is_err());
    }
}
