// cleanchat/src/commands/check.rs
//! `cleanchat check`: one verdict per input line.

use anyhow::Result;
use log::{debug, info};
use std::io::Write;

use cleanchat_core::ContentFilter;

use crate::ui::output_format::verdict;
use crate::ui::theme::ThemeMap;
use crate::utils::input::{stream_lines, InputSource};

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Probe the core profanity rules only.
    pub core: bool,
    /// Print verdicts without the text.
    pub silent_text: bool,
    /// Flush after every line.
    pub line_buffered: bool,
}

pub fn is_flagged(filter: &dyn ContentFilter, text: &str, core: bool) -> bool {
    if core {
        filter.contains_core_profanity(text)
    } else {
        filter.contains_disallowed_content(text)
    }
}

/// Writes `flagged` or `clean` for each line. Returns true if any line was flagged.
pub fn run_check<W: Write>(
    filter: &dyn ContentFilter,
    source: &InputSource,
    opts: CheckOptions,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<bool> {
    info!("Starting check operation.");
    let mut flagged_lines = 0usize;
    let mut total = 0usize;

    stream_lines(source, |line| {
        total += 1;
        let flagged = is_flagged(filter, line, opts.core);
        if flagged {
            flagged_lines += 1;
        }
        let shown = verdict(flagged, theme, supports_color);
        if opts.silent_text {
            writeln!(writer, "{shown}")?;
        } else {
            writeln!(writer, "{shown}\t{line}")?;
        }
        if opts.line_buffered {
            writer.flush()?;
        }
        Ok(())
    })?;

    debug!("Checked {} lines, {} flagged.", total, flagged_lines);
    Ok(flagged_lines > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use cleanchat_core::ProfanityFilter;

    #[test]
    fn verdict_per_line() -> Result<()> {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        let source = InputSource::Text("hello world\nf u c k you\n".into());
        let any = run_check(ProfanityFilter::global(), &source, CheckOptions::default(), &mut out, &theme, false)?;
        assert!(any);
        assert_eq!(String::from_utf8(out)?, "clean\thello world\nflagged\tf u c k you\n");
        Ok(())
    }

    #[test]
    fn core_probe_is_narrower() -> Result<()> {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        let opts = CheckOptions {
            core: true,
            silent_text: true,
            ..CheckOptions::default()
        };
        let any = run_check(ProfanityFilter::global(), &InputSource::Text("shit".into()), opts, &mut out, &theme, false)?;
        assert!(!any);
        assert_eq!(String::from_utf8(out)?, "clean\n");
        Ok(())
    }
}
