// cleanchat/src/commands/list.rs
//! `cleanchat list`: the rule table.

use anyhow::Result;
use std::io::Write;

use cleanchat_core::{Bucket, ProfanityFilter};

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub bucket: Option<Bucket>,
    pub expanded: bool,
    pub count: bool,
}

/// Writes `bucket[index]  rule` per rule. Rules that failed to compile are
/// marked `(disabled)`.
pub fn run_list<W: Write>(
    filter: &ProfanityFilter,
    opts: ListOptions,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<bool> {
    let wanted = |bucket: Bucket| opts.bucket.is_none_or(|b| b == bucket);

    if opts.count {
        for bucket in Bucket::ALL.into_iter().filter(|b| wanted(*b)) {
            let count = filter.library().rules(bucket).len();
            writeln!(
                writer,
                "{}\t{}",
                paint(bucket.as_str(), ThemeEntry::RuleName, theme, supports_color),
                paint(&count.to_string(), ThemeEntry::Occurrences, theme, supports_color)
            )?;
        }
        return Ok(false);
    }

    for entry in filter.list_all_patterns_with_matchers().iter().filter(|e| wanted(e.bucket)) {
        let rule = format!("{}[{}]", entry.bucket, entry.index);
        let text = if opts.expanded { entry.pattern.as_str() } else { entry.template };
        let disabled = if entry.matcher.is_never() { " (disabled)" } else { "" };
        writeln!(
            writer,
            "{}\t{}{}",
            paint(&rule, ThemeEntry::RuleName, theme, supports_color),
            text,
            disabled
        )?;
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn counts_match_the_library() -> Result<()> {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        let opts = ListOptions {
            count: true,
            ..ListOptions::default()
        };
        run_list(ProfanityFilter::global(), opts, &mut out, &theme, false)?;
        assert_eq!(String::from_utf8(out)?, "primary\t876\nregional\t237\nunbounded\t159\nspecific\t1\n");
        Ok(())
    }

    #[test]
    fn bucket_filter() -> Result<()> {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        let opts = ListOptions {
            bucket: Some(Bucket::Specific),
            ..ListOptions::default()
        };
        run_list(ProfanityFilter::global(), opts, &mut out, &theme, false)?;
        assert_eq!(String::from_utf8(out)?, "specific[0]\t{wb}gRAPE{wb}\n");
        Ok(())
    }
}
