// cleanchat/src/main.rs
//! cleanchat entry point.
//!
//! Exit codes: 0 when nothing was found, 1 when `check`/`find`/`scan` found
//! disallowed content (or `scan` went over its threshold), 2 on errors.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};
use std::process::ExitCode;

use cleanchat::cli::{Cli, Commands};
use cleanchat::commands::check::{run_check, CheckOptions};
use cleanchat::commands::find::run_find;
use cleanchat::commands::list::{run_list, ListOptions};
use cleanchat::commands::mask::{run_mask, MaskMode};
use cleanchat::commands::scan::{run_scan, ScanOptions};
use cleanchat::commands::build_filter;
use cleanchat::logger;
use cleanchat::ui::output_format::error_msg;
use cleanchat::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use cleanchat::utils::input::InputSource;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_for(cli.quiet, cli.debug));
    info!("cleanchat started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme = match build_theme_map(cli.theme.as_deref()) {
        Ok(theme) => theme,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            error_msg(format!("{e:#}"), &fallback);
            return ExitCode::from(2);
        }
    };

    match run(cli, &theme) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{e:#}"), &theme);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli, theme: &ThemeMap) -> Result<bool> {
    let config = cli.config.as_deref();
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();

    let found = match cli.command {
        Commands::Check(cmd) => {
            let filter = build_filter(config, None)?;
            let opts = CheckOptions {
                core: cmd.core,
                silent_text: cmd.silent_text,
                line_buffered: cmd.line_buffered,
            };
            run_check(&filter, &InputSource::from(&cmd.input), opts, &mut out, theme, color)?
        }
        Commands::Mask(cmd) => {
            let filter = build_filter(config, cmd.placeholder)?;
            let mode = if cmd.name {
                MaskMode::Name
            } else if cmd.partial {
                MaskMode::Partial
            } else {
                MaskMode::Full
            };
            run_mask(&filter, &InputSource::from(&cmd.input), mode, cmd.line_buffered, &mut out)?
        }
        Commands::Find(cmd) => {
            let filter = build_filter(config, None)?;
            run_find(&filter, &InputSource::from(&cmd.input), cmd.json, &mut out, theme, color)?
        }
        Commands::Scan(cmd) => {
            let filter = build_filter(config, None)?;
            let opts = ScanOptions {
                json: cmd.json,
                fail_over_threshold: cmd.fail_over_threshold,
            };
            run_scan(&filter, &InputSource::from(&cmd.input), opts, &mut out, theme, color)?
        }
        Commands::List(cmd) => {
            let filter = build_filter(config, None)?;
            let opts = ListOptions {
                bucket: cmd.bucket,
                expanded: cmd.expanded,
                count: cmd.count,
            };
            run_list(&filter, opts, &mut out, theme, color)?
        }
    };

    out.flush().context("Failed to flush stdout")?;
    info!("cleanchat operation completed.");
    Ok(found)
}
