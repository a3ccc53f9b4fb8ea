//! Integration tests for the claudemd-lint CLI
//!
//! These tests run the built binary against documents written to a
//! temporary directory and check output and exit status.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const GOOD_DOC: &str = "\
# Project

## Commands
- Run `cargo test` before committing
- Run `cargo clippy` before pushing

## Style
- Prefer small modules
";

/// Helper function to create a claudemd-lint command with colors off
fn claudemd_lint() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("claudemd-lint"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Helper to write `CLAUDE.md` into `dir`
fn write_doc(dir: &Path, content: &str) {
    fs::write(dir.join("CLAUDE.md"), content).unwrap();
}

// =============================================================================
// EXIT STATUS
// =============================================================================

#[test]
fn test_clean_document_succeeds() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), GOOD_DOC);

    claudemd_lint()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("claudemd-lint v"))
        .stdout(predicate::str::contains("./CLAUDE.md (9 lines, ~"))
        .stdout(predicate::str::contains("✔ security/no-secrets"))
        .stdout(predicate::str::contains("Score: 10/10"));
}

#[test]
fn test_warnings_alone_still_succeed() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), "# Title\n- do X\n- do Y");

    claudemd_lint()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠ content/has-build-commands"))
        .stdout(predicate::str::contains("Score: 9/10"));
}

#[test]
fn test_errors_fail() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), "# Keys\n- AKIA1234567890ABCD12\n- Run `npm test`");

    claudemd_lint()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Possible AWS access key detected"))
        .stdout(predicate::str::contains("1 error"));
}

#[test]
fn test_missing_file_fails_with_hint() {
    let temp = TempDir::new().unwrap();

    claudemd_lint()
        .arg("nowhere.md")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: nowhere.md not found."))
        .stderr(predicate::str::contains("specify a path: claudemd-lint path/to/CLAUDE.md"));
}

#[test]
fn test_invalid_utf8_still_reports() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("CLAUDE.md"), b"# Rules\n- Run `cargo test` \xff\xfe caf\xe9\n").unwrap();

    claudemd_lint()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("./CLAUDE.md (3 lines, ~"))
        .stdout(predicate::str::contains("Score: 10/10"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_invalid_utf8_with_errors_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("CLAUDE.md"),
        b"# Keys\n- AKIA1234567890ABCD12 \xff\n- Run `npm test`",
    )
    .unwrap();

    claudemd_lint()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Possible AWS access key detected"))
        .stdout(predicate::str::contains("1 error"));
}

#[test]
fn test_explicit_path() {
    let temp = TempDir::new().unwrap();
    let docs = temp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("AGENTS.md"), GOOD_DOC).unwrap();

    claudemd_lint()
        .arg("docs/AGENTS.md")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/AGENTS.md (9 lines"));
}

// =============================================================================
// JSON MODE
// =============================================================================

#[test]
fn test_json_report() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), "# Rules\n- Never modify src/config.ts\n- Run `make`");

    let output = claudemd_lint()
        .args(["--json", "CLAUDE.md"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["file"], "CLAUDE.md");
    assert_eq!(value["lines"], 3);
    assert_eq!(value["score"], 9);
    assert_eq!(value["counts"]["warnings"], 1);
    let hook = value["findings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["rule"] == "hooks/file-protection")
        .unwrap();
    assert_eq!(hook["line"], 2);
    assert!(hook["suggestion"].as_str().unwrap().contains("src/config.ts"));
}

#[test]
fn test_json_errors_still_fail() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), "rm -rf /");

    claudemd_lint()
        .arg("--json")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"security/no-dangerous-commands\""));
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_config_next_to_document_disables_rules() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), "- no heading here\n- Run `npm test`");
    fs::write(temp.path().join(".claudemd-lint.toml"), "disable = [\"structure\"]\n").unwrap();

    claudemd_lint()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("structure/").not())
        .stdout(predicate::str::contains("Score: 10/10"));
}

#[test]
fn test_explicit_config_flag() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), "- no heading here\n- Run `npm test`");
    fs::write(temp.path().join("lint.toml"), "disable = [\"structure/has-headings\"]\n").unwrap();

    claudemd_lint()
        .args(["--config", "lint.toml"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_unknown_rule_in_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_doc(temp.path(), GOOD_DOC);
    fs::write(temp.path().join(".claudemd-lint.toml"), "disable = [\"style\"]\n").unwrap();

    claudemd_lint()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown rule or category in disable list: style"));
}

// =============================================================================
// RULE LISTING
// =============================================================================

#[test]
fn test_rules_lists_every_rule() {
    claudemd_lint()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("size/lines"))
        .stdout(predicate::str::contains("hooks/blocked-commands"))
        .stdout(predicate::str::contains("Detect API keys, tokens, passwords"));
}

#[test]
fn test_rules_json() {
    let output = claudemd_lint().args(["rules", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = value["rules"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["name"].as_str())
        .collect();
    assert_eq!(names.len(), 15);
    assert_eq!(names[0], "size/lines");
}
