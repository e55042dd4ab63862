// cleanchat/src/utils/input.rs
//! Reading text from an argument, a file or stdin.
//!
//! Input bytes are decoded lossily: invalid UTF-8 becomes U+FFFD and is then
//! filtered like any other text.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::{self, BufRead, Read};

use crate::cli::InputArgs;

/// Where a command's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(std::path::PathBuf),
    Stdin,
}

impl From<&InputArgs> for InputSource {
    fn from(args: &InputArgs) -> Self {
        match (&args.text, &args.input_file) {
            (Some(text), _) => InputSource::Text(text.clone()),
            (None, Some(path)) => InputSource::File(path.clone()),
            (None, None) => InputSource::Stdin,
        }
    }
}

/// Reads the whole input.
pub fn read_all(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Text(text) => Ok(text.clone()),
        InputSource::File(path) => {
            debug!("Reading input from file: {}", path.display());
            let bytes = fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        InputSource::Stdin => {
            debug!("Reading input from stdin...");
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("Failed to read from stdin")?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

/// Calls `on_line` for every line of `reader`, as soon as it is read.
/// Line terminators (`\n` or `\r\n`) are stripped.
pub fn for_each_line<R, F>(mut reader: R, mut on_line: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str) -> Result<()>,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).context("Failed to read input line")?;
        if read == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        on_line(line.trim_end_matches('\n').trim_end_matches('\r'))?;
    }
}

/// Streams the input line by line. Text and files are split the same way.
pub fn stream_lines<F>(source: &InputSource, on_line: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    match source {
        InputSource::Text(text) => for_each_line(text.as_bytes(), on_line),
        InputSource::File(path) => {
            let file = fs::File::open(path).with_context(|| format!("Failed to open input file: {}", path.display()))?;
            for_each_line(io::BufReader::new(file), on_line)
        }
        InputSource::Stdin => for_each_line(io::stdin().lock(), on_line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        for_each_line(input, |line| {
            lines.push(line.to_string());
            Ok(())
        })
        .unwrap();
        lines
    }

    #[test]
    fn splits_lines_and_strips_terminators() {
        assert_eq!(collect(b"one\r\ntwo\nthree"), vec!["one", "two", "three"]);
        assert!(collect(b"").is_empty());
        assert_eq!(collect(b"\n"), vec![""]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(collect(b"a\xffb\n"), vec!["a\u{fffd}b"]);
    }

    #[test]
    fn source_prefers_positional_text() {
        let args = InputArgs {
            text: Some("hi".into()),
            input_file: None,
        };
        assert_eq!(InputSource::from(&args), InputSource::Text("hi".into()));
        assert_eq!(InputSource::from(&InputArgs::default()), InputSource::Stdin);
    }
}
