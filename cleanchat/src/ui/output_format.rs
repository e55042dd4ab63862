// cleanchat/src/ui/output_format.rs
//! Themed message and verdict formatting.
//!
//! Every printer takes the writer and a `supports_color` flag so callers
//! decide colour per stream and tests can write into a buffer.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// `text` in the theme's colour for `entry`, or plain when colour is off.
pub fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> String {
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) if supports_color => text.color(color.to_ansi_color()).to_string(),
        _ => text.to_string(),
    }
}

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(&format!("{prefix}{msg}"), entry, theme, supports_color))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Info, theme, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_prefixed(writer, "Warning: ", msg, ThemeEntry::Warn, theme, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_prefixed(writer, "Error: ", msg, ThemeEntry::Error, theme, supports_color)
}

/// `flagged` or `clean`, coloured.
pub fn verdict(flagged: bool, theme: &ThemeMap, supports_color: bool) -> String {
    if flagged {
        paint("flagged", ThemeEntry::Flagged, theme, supports_color)
    } else {
        paint("clean", ThemeEntry::Clean, theme, supports_color)
    }
}

/// Info line on stderr, unless quiet.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap, quiet: bool) {
    if quiet {
        return;
    }
    let supports_color = io::stderr().is_terminal();
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_without_color() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_error_message(&mut buf, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: boom\n");
        assert_eq!(verdict(true, &theme, false), "flagged");
    }

    #[test]
    fn colored_output_wraps_in_escapes() {
        let theme = ThemeStyle::default_theme_map();
        let painted = verdict(false, &theme, true);
        assert!(painted.contains("clean"));
        assert!(painted.starts_with("\u{1b}["));
    }
}
