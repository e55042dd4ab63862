// cleanchat/src/ui/theme.rs
//! Colour theme for terminal output.
//!
//! Each logical output element maps to an optional 16-colour ANSI
//! foreground. Themes load from YAML; entries missing from a file fall back
//! to the defaults.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    Header,
    Info,
    Warn,
    Error,
    /// Verdict for text that contains disallowed content.
    Flagged,
    /// Verdict for text that does not.
    Clean,
    /// Masked spans in scan output.
    MaskedText,
    /// Bucket and rule index in `find`, `scan` and `list` output.
    RuleName,
    /// Per-bucket match counts.
    Occurrences,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 9] = [
        ThemeEntry::Header,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::Flagged,
        ThemeEntry::Clean,
        ThemeEntry::MaskedText,
        ThemeEntry::RuleName,
        ThemeEntry::Occurrences,
    ];
}

/// A named ANSI colour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Named(String),
}

#[derive(Debug, Clone)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid theme color '{}'; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, or their bright variants (brightred, ...)",
            self.0
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

const COLOR_NAMES: [(&str, AnsiColors); 16] = [
    ("black", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("white", AnsiColors::White),
    ("brightblack", AnsiColors::BrightBlack),
    ("brightred", AnsiColors::BrightRed),
    ("brightgreen", AnsiColors::BrightGreen),
    ("brightyellow", AnsiColors::BrightYellow),
    ("brightblue", AnsiColors::BrightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta),
    ("brightcyan", AnsiColors::BrightCyan),
    ("brightwhite", AnsiColors::BrightWhite),
];

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if COLOR_NAMES.iter().any(|(name, _)| *name == lower) {
            Ok(ThemeColor::Named(lower))
        } else {
            Err(ParseThemeColorError(s.to_string()))
        }
    }
}

impl ThemeColor {
    /// Unknown names render as white.
    pub fn to_ansi_color(&self) -> AnsiColors {
        let ThemeColor::Named(name) = self;
        COLOR_NAMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
            .unwrap_or(AnsiColors::White)
    }
}

/// Style for one [`ThemeEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

impl ThemeStyle {
    fn named(color: &str) -> Self {
        ThemeStyle {
            fg: Some(ThemeColor::Named(color.to_string())),
        }
    }

    /// Loads a theme file and fills in missing entries from the default theme.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;
        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    pub fn default_theme_map() -> ThemeMap {
        HashMap::from([
            (ThemeEntry::Header, Self::named("brightwhite")),
            (ThemeEntry::Info, Self::named("white")),
            (ThemeEntry::Warn, Self::named("yellow")),
            (ThemeEntry::Error, Self::named("red")),
            (ThemeEntry::Flagged, Self::named("brightred")),
            (ThemeEntry::Clean, Self::named("green")),
            (ThemeEntry::MaskedText, Self::named("magenta")),
            (ThemeEntry::RuleName, Self::named("cyan")),
            (ThemeEntry::Occurrences, Self::named("yellow")),
        ])
    }
}

/// The theme from `path`, or the default theme.
pub fn build_theme_map(path: Option<&Path>) -> Result<ThemeMap> {
    match path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn to_ansi_color() {
        let color: ThemeColor = "brightmagenta".parse().unwrap();
        assert_eq!(color.to_ansi_color(), AnsiColors::BrightMagenta);
        assert_eq!(ThemeColor::Named("nope".into()).to_ansi_color(), AnsiColors::White);
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(theme.contains_key(&entry), "{entry:?}");
        }
    }

    #[test]
    fn partial_theme_file_is_completed() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"flagged:\n  fg: blue\n")?;
        let theme = build_theme_map(Some(file.path()))?;
        assert_eq!(theme[&ThemeEntry::Flagged], ThemeStyle::named("blue"));
        assert_eq!(theme[&ThemeEntry::Clean], ThemeStyle::named("green"));
        Ok(())
    }
}
