// cleanchat/tests/integration_line_buffered.rs
//! Integration tests for the --line-buffered mode of cleanchat.

use assert_cmd::Command;
use assert_cmd::assert::Assert;
use predicates::prelude::*;

fn run_with_stdin(input: &str, global_args: &[&str], subcommand: &str, subcommand_args: &[&str]) -> Assert {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("cleanchat"));
    cmd.env_remove("CLEANCHAT_CONFIG");
    cmd.args(global_args);
    cmd.arg(subcommand).arg("--line-buffered").args(subcommand_args);
    cmd.write_stdin(input).assert()
}

#[test]
fn test_line_buffered_mask() {
    run_with_stdin("hello world\nyou are a bitch\nno problem here\n", &["-d"], "mask", &[])
        .success()
        .stdout(predicate::str::diff("hello world\nyou are a *****\nno problem here\n"))
        .stderr(predicate::str::contains("Using line-buffered mode."));
}

#[test]
fn test_line_buffered_mask_quiet() {
    run_with_stdin("you are a bitch\n", &["--quiet"], "mask", &[])
        .success()
        .stdout(predicate::str::diff("you are a *****\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_line_buffered_without_trailing_newline() {
    run_with_stdin("first\nsecond", &[], "mask", &[])
        .success()
        .stdout(predicate::str::diff("first\nsecond\n"));
}

#[test]
fn test_line_buffered_check() {
    run_with_stdin("hello\nf.u.c.k\n", &[], "check", &["--silent-text"])
        .code(1)
        .stdout(predicate::str::diff("clean\nflagged\n"));
}

#[test]
fn test_line_buffered_empty_input() {
    run_with_stdin("", &[], "mask", &[])
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_line_buffered_invalid_utf8_is_replaced() {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("cleanchat"));
    cmd.args(["mask", "--line-buffered"])
        .write_stdin(&b"ok\xff\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::diff("ok\u{fffd}\n"));
}
