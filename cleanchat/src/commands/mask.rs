// cleanchat/src/commands/mask.rs
//! `cleanchat mask`: masked text to the output.

use anyhow::Result;
use log::{debug, info};
use std::io::Write;

use cleanchat_core::ContentFilter;

use crate::utils::input::{read_all, stream_lines, InputSource};

/// Which masking operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskMode {
    /// Every bucket in order, matched spans only.
    #[default]
    Full,
    /// Each line is a name: all of it or nothing.
    Name,
    /// One pass over the union of all rules.
    Partial,
}

pub fn mask_text(filter: &dyn ContentFilter, mode: MaskMode, text: &str) -> String {
    match mode {
        MaskMode::Full => filter.mask(text),
        MaskMode::Name => filter.mask_name(text),
        MaskMode::Partial => filter.mask_partial(text),
    }
}

/// Masks the input. Names and line-buffered input are handled one line at a
/// time; otherwise the whole text is masked at once.
pub fn run_mask<W: Write>(
    filter: &dyn ContentFilter,
    source: &InputSource,
    mode: MaskMode,
    line_buffered: bool,
    writer: &mut W,
) -> Result<bool> {
    info!("Starting mask operation.");

    if line_buffered || mode == MaskMode::Name {
        if line_buffered {
            info!("Using line-buffered mode.");
        }
        stream_lines(source, |line| {
            writeln!(writer, "{}", mask_text(filter, mode, line))?;
            if line_buffered {
                writer.flush()?;
            }
            Ok(())
        })?;
        return Ok(false);
    }

    let input = read_all(source)?;
    let masked = mask_text(filter, mode, &input);
    debug!(
        "Masked {} characters of input; output differs: {}.",
        input.chars().count(),
        masked != input
    );
    write!(writer, "{masked}")?;
    if !masked.ends_with('\n') {
        writeln!(writer)?;
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanchat_core::ProfanityFilter;

    fn run(mode: MaskMode, text: &str) -> String {
        let mut out = Vec::new();
        run_mask(ProfanityFilter::global(), &InputSource::Text(text.into()), mode, false, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_mask_keeps_the_rest_of_the_text() {
        assert_eq!(run(MaskMode::Full, "you are a bitch"), "you are a *****\n");
        assert_eq!(run(MaskMode::Full, "hello\nworld\n"), "hello\nworld\n");
    }

    #[test]
    fn name_mode_masks_per_line() {
        assert_eq!(run(MaskMode::Name, "f u c k\nAlice"), "*******\nAlice\n");
    }
}
