// cleanchat/src/commands/scan.rs
//! `cleanchat scan`: every match with its bucket and byte span.

use anyhow::Result;
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use cleanchat_core::{Bucket, ContentFilter, MatchSpan};

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};
use crate::utils::input::{read_all, InputSource};

/// Everything `scan` found in one input.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub flagged: bool,
    pub total: usize,
    pub per_bucket: BTreeMap<Bucket, usize>,
    pub matches: Vec<MatchSpan>,
}

impl ScanReport {
    pub fn new(matches: Vec<MatchSpan>) -> Self {
        let mut per_bucket = BTreeMap::new();
        for span in &matches {
            *per_bucket.entry(span.bucket).or_insert(0) += 1;
        }
        ScanReport {
            flagged: !matches.is_empty(),
            total: matches.len(),
            per_bucket,
            matches,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub json: bool,
    pub fail_over_threshold: Option<usize>,
}

/// Scans the whole input. Returns true when the match count is over the
/// threshold, or, without a threshold, when anything matched.
pub fn run_scan<W: Write>(
    filter: &dyn ContentFilter,
    source: &InputSource,
    opts: ScanOptions,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<bool> {
    info!("Starting scan operation.");
    let input = read_all(source)?;
    let report = ScanReport::new(filter.scan(&input));

    if opts.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        print_report(&report, writer, theme, supports_color)?;
    }

    Ok(match opts.fail_over_threshold {
        Some(limit) => report.total > limit,
        None => report.flagged,
    })
}

fn print_report<W: Write>(report: &ScanReport, writer: &mut W, theme: &ThemeMap, supports_color: bool) -> Result<()> {
    writeln!(writer, "{}", paint("--- Scan Summary ---", ThemeEntry::Header, theme, supports_color))?;
    if report.matches.is_empty() {
        writeln!(writer, "No disallowed content found.")?;
        return Ok(());
    }
    for span in &report.matches {
        writeln!(
            writer,
            "{} {}..{}\t{}",
            paint(span.bucket.as_str(), ThemeEntry::RuleName, theme, supports_color),
            span.start,
            span.end,
            paint(&span.text, ThemeEntry::MaskedText, theme, supports_color)
        )?;
    }
    for (bucket, count) in &report.per_bucket {
        let occurrences = format!("({count} occurrences)");
        writeln!(
            writer,
            "{} {}",
            paint(bucket.as_str(), ThemeEntry::RuleName, theme, supports_color),
            paint(&occurrences, ThemeEntry::Occurrences, theme, supports_color)
        )?;
    }
    Ok(())
}
