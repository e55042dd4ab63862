// cleanchat/src/cli.rs
//! This file defines the command-line interface (CLI) for the cleanchat application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use cleanchat_core::Bucket;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cleanchat",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and mask profanity in chat messages and names",
    long_about = "cleanchat checks short user-submitted text (chat lines, display names) against a built-in, obfuscation-tolerant profanity rule table. It can report whether text is flagged, mask the offending spans, and explain which rule matched.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the cleanchat crates to DEBUG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a filter options file (YAML).
    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        env = "CLEANCHAT_CONFIG",
        help = "Path to a filter options file (YAML)."
    )]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `cleanchat` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reports whether each input line contains disallowed content.
    #[command(about = "Report whether each input line is flagged. Exits with 1 if any line is.")]
    Check(CheckCommand),

    /// Masks disallowed content.
    #[command(about = "Mask disallowed content in the input.")]
    Mask(MaskCommand),

    /// Shows the first rule that matches each input line.
    #[command(about = "Show the first rule responsible for a match on each input line.")]
    Find(FindCommand),

    /// Lists every match with its bucket and position.
    #[command(about = "List every match in the input with its bucket and byte span.")]
    Scan(ScanCommand),

    /// Lists the built-in rule table.
    #[command(about = "List the built-in rules.")]
    List(ListCommand),
}

/// Where the text comes from. Shared by the text-processing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to process (reads --input-file or stdin if not provided).
    #[arg(value_name = "TEXT", conflicts_with = "input_file")]
    pub text: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Use only the core profanity probe.
    #[arg(long, help = "Only check against the core profanity rules.")]
    pub core: bool,

    /// Print only the verdicts, without the checked text.
    #[arg(long, short = 's', help = "Print only the verdicts, without the checked text.")]
    pub silent_text: bool,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", help = "Process input line by line (useful for streaming data from pipes).")]
    pub line_buffered: bool,
}

/// Arguments for the `mask` command.
#[derive(Args, Debug)]
pub struct MaskCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Replace the whole text if anything in it is disallowed.
    #[arg(long, conflicts_with = "partial", help = "Treat each line as a name: mask all of it if any part is disallowed.")]
    pub name: bool,

    /// Single pass over every rule at once, without word boundaries.
    #[arg(long, help = "Single-pass masking with every rule and no word boundaries.")]
    pub partial: bool,

    /// Character used for masking.
    #[arg(long, short = 'p', value_name = "CHAR", help = "Character used for masking (overrides the config file).")]
    pub placeholder: Option<char>,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", help = "Process input line by line (useful for streaming data from pipes).")]
    pub line_buffered: bool,
}

/// Arguments for the `find` command.
#[derive(Args, Debug)]
pub struct FindCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print one JSON object per line.
    #[arg(long, help = "Print one JSON object per input line.")]
    pub json: bool,
}

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the report as JSON to stdout.
    #[arg(long, help = "Print the scan report as JSON to stdout.")]
    pub json: bool,

    /// Exit with a non-zero code if the number of matches exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the number of matches exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,
}

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Only list rules from this bucket.
    #[arg(long, short = 'b', value_name = "BUCKET", help = "Only list rules from one bucket (primary, regional, unbounded, specific).")]
    pub bucket: Option<Bucket>,

    /// Print the expanded pattern instead of the template.
    #[arg(long, help = "Print each rule expanded against the rich alphabet.")]
    pub expanded: bool,

    /// Print the number of rules per bucket only.
    #[arg(long, help = "Print the number of rules per bucket only.")]
    pub count: bool,
}
