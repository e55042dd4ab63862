// cleanchat/tests/cli_integration_tests.rs
//! Command-line integration tests for the `cleanchat` binary.
//!
//! Each test runs the built binary through `assert_cmd`, feeding text as an
//! argument, a file or stdin, and asserts on stdout and the exit code.
//! stdout is not a terminal under test, so output carries no colour codes.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cleanchat() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("cleanchat"));
    cmd.env_remove("CLEANCHAT_CONFIG");
    cmd
}

#[test]
fn test_check_clean_text_exits_zero() {
    cleanchat()
        .args(["check", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::diff("clean\thello world\n"));
}

#[test]
fn test_check_flagged_text_exits_one() {
    cleanchat()
        .args(["check", "--silent-text", "f u c k you"])
        .assert()
        .code(1)
        .stdout(predicate::str::diff("flagged\n"));
}

#[test]
fn test_check_reads_stdin_per_line() {
    cleanchat()
        .arg("check")
        .write_stdin("classic\nband aids\nyou are a bitch\n")
        .assert()
        .code(1)
        .stdout(predicate::str::diff(
            "clean\tclassic\nclean\tband aids\nflagged\tyou are a bitch\n",
        ));
}

#[test]
fn test_check_core_only() {
    cleanchat().args(["check", "--core", "shit"]).assert().success();
    cleanchat().args(["check", "--core", "fuck"]).assert().code(1);
}

#[test]
fn test_mask_argument() {
    cleanchat()
        .args(["mask", "you are a bitch"])
        .assert()
        .success()
        .stdout(predicate::str::diff("you are a *****\n"));
}

#[test]
fn test_mask_custom_placeholder() {
    cleanchat()
        .args(["mask", "--placeholder", "#", "you are a bitch"])
        .assert()
        .success()
        .stdout(predicate::str::diff("you are a #####\n"));
}

#[test]
fn test_mask_name() {
    cleanchat()
        .args(["mask", "--name"])
        .write_stdin("f u c k\nAlice\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("*******\nAlice\n"));
}

#[test]
fn test_mask_from_file() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("chat.txt");
    fs::write(&input, "hello world\nyou are a bitch\n")?;

    cleanchat()
        .args(["mask", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::diff("hello world\nyou are a *****\n"));
    Ok(())
}

#[test]
fn test_config_file_sets_placeholder() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("cleanchat.yaml");
    fs::write(&config, "placeholder: \"~\"\n")?;

    cleanchat()
        .arg("--config")
        .arg(&config)
        .args(["mask", "you are a bitch"])
        .assert()
        .success()
        .stdout(predicate::str::diff("you are a ~~~~~\n"));
    Ok(())
}

#[test]
fn test_invalid_config_exits_two() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("bad.yaml");
    fs::write(&config, "backtrack_limit: 0\n")?;

    cleanchat()
        .arg("--config")
        .arg(&config)
        .args(["check", "hello"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("backtrack_limit"));
    Ok(())
}

#[test]
fn test_missing_input_file_exits_two() {
    cleanchat()
        .args(["mask", "-i", "/definitely/not/here.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_find_reports_rule() {
    cleanchat()
        .args(["find", "gRAPE"])
        .assert()
        .code(1)
        .stdout(predicate::str::diff("specific[0]\t{wb}gRAPE{wb}\n"));

    cleanchat()
        .args(["find", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::diff("-\n"));
}

#[test]
fn test_scan_json() -> Result<()> {
    let output = cleanchat().args(["scan", "--json", "you are a bitch"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["flagged"], true);
    let matches = report["matches"].as_array().cloned().unwrap_or_default();
    assert!(matches.iter().any(|m| m["text"] == "bitch" && m["bucket"] == "primary"));
    Ok(())
}

#[test]
fn test_scan_threshold() {
    cleanchat()
        .args(["scan", "--fail-over-threshold", "50", "you are a bitch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Scan Summary ---").and(predicate::str::contains("occurrences")));
}

#[test]
fn test_list_counts_and_bucket_filter() {
    cleanchat()
        .args(["list", "--count", "--bucket", "specific"])
        .assert()
        .success()
        .stdout(predicate::str::diff("specific\t1\n"));

    cleanchat()
        .args(["list", "--bucket", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown bucket"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    cleanchat()
        .args(["-d", "mask", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::diff("hello\n"))
        .stderr(predicate::str::contains("[INFO cleanchat] cleanchat started."));
}

#[test]
fn test_quiet_suppresses_logs() {
    cleanchat()
        .args(["-q", "mask", "hello"])
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
