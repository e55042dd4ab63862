// cleanchat/src/commands/find.rs
//! `cleanchat find`: the rule responsible for each flagged line.

use anyhow::Result;
use log::info;
use serde::Serialize;
use std::io::Write;

use cleanchat_core::{ContentFilter, PatternMatch};

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};
use crate::utils::input::{stream_lines, InputSource};

#[derive(Debug, Serialize)]
struct FindRecord<'a> {
    text: &'a str,
    #[serde(rename = "match")]
    found: Option<PatternMatch>,
}

/// Writes `bucket[index] template` (or `-`) per line, or one JSON object per
/// line. Returns true if any line matched.
pub fn run_find<W: Write>(
    filter: &dyn ContentFilter,
    source: &InputSource,
    json: bool,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<bool> {
    info!("Starting find operation.");
    let mut any = false;

    stream_lines(source, |line| {
        let found = filter.find_first_matching_pattern(line);
        any |= found.is_some();
        if json {
            let record = FindRecord { text: line, found };
            writeln!(writer, "{}", serde_json::to_string(&record)?)?;
        } else {
            match found {
                Some(m) => {
                    let rule = format!("{}[{}]", m.bucket, m.index);
                    writeln!(writer, "{}\t{}", paint(&rule, ThemeEntry::RuleName, theme, supports_color), m.template)?;
                }
                None => writeln!(writer, "-")?,
            }
        }
        Ok(())
    })?;

    Ok(any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use cleanchat_core::ProfanityFilter;

    #[test]
    fn reports_rule_or_dash() -> Result<()> {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        let source = InputSource::Text("hello world\ngRAPE".into());
        assert!(run_find(ProfanityFilter::global(), &source, false, &mut out, &theme, false)?);
        assert_eq!(String::from_utf8(out)?, "-\nspecific[0]\t{wb}gRAPE{wb}\n");
        Ok(())
    }

    #[test]
    fn json_lines() -> Result<()> {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        let source = InputSource::Text("hello world".into());
        assert!(!run_find(ProfanityFilter::global(), &source, true, &mut out, &theme, false)?);
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["text"], "hello world");
        assert!(value["match"].is_null());
        Ok(())
    }
}
