//! Configuration management for `cleanchat-core`.
//!
//! The rule table itself is compiled in. What can be configured are the
//! engine limits and the default placeholder, loaded from YAML or taken from
//! [`FilterOptions::default`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::FilterError;

/// Size cap handed to the delegated `regex` engine, per compiled fragment.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Default cap on backtracking steps for a single search.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 10_000_000;

/// Inputs longer than this are still filtered; the limit only drives a warning.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 4096;

/// Tunables for compiling and running the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Character repeated over every masked span by the default masker.
    pub placeholder: char,
    /// Backtracking steps allowed per search. A search that runs out is retried
    /// over bounded windows; windows that still run out fail open.
    pub backtrack_limit: usize,
    /// Compiled size limit for each delegated regex fragment.
    pub delegate_size_limit: usize,
    /// Lazy DFA cache size for each delegated regex fragment.
    pub delegate_dfa_size_limit: usize,
    /// Soft input length limit, in characters.
    pub max_input_chars: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            placeholder: '*',
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
            delegate_size_limit: DEFAULT_SIZE_LIMIT,
            delegate_dfa_size_limit: DEFAULT_SIZE_LIMIT,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl FilterOptions {
    /// Loads options from a YAML file. Missing keys take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter options from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(FilterError::from)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let options = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded filter options: {:?}", options);
        Ok(options)
    }

    /// Parses options from YAML text and validates them.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let options: FilterOptions = if text.trim().is_empty() {
            FilterOptions::default()
        } else {
            serde_yml::from_str(text).context("Invalid filter options YAML")?
        };
        options.validate()?;
        Ok(options)
    }

    /// Rejects limits that would make every bucket fail.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.backtrack_limit == 0 {
            return Err(FilterError::Config("backtrack_limit must be greater than zero".to_string()));
        }
        if self.delegate_size_limit == 0 || self.delegate_dfa_size_limit == 0 {
            return Err(FilterError::Config("delegate size limits must be greater than zero".to_string()));
        }
        if self.placeholder.is_control() {
            return Err(FilterError::Config(format!(
                "placeholder must be a printable character, got {:?}",
                self.placeholder
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = FilterOptions::default();
        assert_eq!(options.placeholder, '*');
        assert_eq!(options.delegate_size_limit, 10 * 1024 * 1024);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() -> Result<()> {
        let options = FilterOptions::from_yaml_str("placeholder: \"#\"\n")?;
        assert_eq!(options.placeholder, '#');
        assert_eq!(options.backtrack_limit, DEFAULT_BACKTRACK_LIMIT);
        Ok(())
    }

    #[test]
    fn empty_yaml_is_default() -> Result<()> {
        assert_eq!(FilterOptions::from_yaml_str("  \n")?, FilterOptions::default());
        Ok(())
    }

    #[test]
    fn zero_backtrack_limit_is_rejected() {
        let err = FilterOptions::from_yaml_str("backtrack_limit: 0\n");
        assert!(err.is_err());
        assert!(format!("{:#}", err.unwrap_err()).contains("backtrack_limit"));
    }

    #[test]
    fn control_placeholder_is_rejected() {
        let options = FilterOptions {
            placeholder: '\n',
            ..FilterOptions::default()
        };
        assert!(matches!(options.validate(), Err(FilterError::Config(_))));
    }
}
