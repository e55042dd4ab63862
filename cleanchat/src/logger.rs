// cleanchat/src/logger.rs
//! Logger setup for the cleanchat binary.
//!
//! `RUST_LOG` is honoured unless the command line forces a level. Lines are
//! written to stderr as `[LEVEL target] message` so stdout stays clean for
//! filtered text.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes `env_logger` once. `level` overrides `RUST_LOG` for the
/// cleanchat crates; everything else keeps the environment's filter.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_module("cleanchat", level);
        builder.filter_module("cleanchat_core", level);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

/// Maps the `--quiet` / `--debug` flags to a level override.
pub fn level_for(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_for(true, true), Some(LevelFilter::Off));
        assert_eq!(level_for(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_for(false, false), None);
    }
}
