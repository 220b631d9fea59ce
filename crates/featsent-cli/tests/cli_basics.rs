use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn featsent() -> Command {
    Command::cargo_bin("featsent").unwrap()
}

#[test]
fn test_help_lists_commands() {
    featsent()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_analyze_help_lists_flags() {
    featsent()
        .args(["analyze", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--use-default"))
        .stdout(predicate::str::contains("--results"))
        .stdout(predicate::str::contains("--bins"));
}

#[test]
fn test_unknown_format_is_rejected() {
    featsent()
        .args(["--format", "yaml", "analyze"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_zero_bins_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    featsent()
        .current_dir(dir.path())
        .args(["--config", "missing.toml", "analyze", "--bins", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bins must be at least 1"));
}

#[test]
fn test_oversized_bins_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    featsent()
        .current_dir(dir.path())
        .args([
            "--config",
            "missing.toml",
            "analyze",
            "--bins",
            "18446744073709551615",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bins must be at most 1000"));
}
