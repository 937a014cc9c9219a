//! Integration tests for the morphmap CLI
//!
//! These tests run the binary against the fixtures in `tests/fixtures`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("morphmap").unwrap();
    cmd.env_remove("RUST_LOG").arg("--no-color");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_help_command() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("morphmap replays an alignment fixture"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_version_command() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(VERSION));
}

#[test]
fn test_align_human() {
    cli()
        .arg("align")
        .arg(fixture("numeral.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Ranges (3)"))
        .stdout(predicate::str::contains("NumericLiteral 0..4 ← 0..5"))
        .stdout(predicate::str::contains("2→1"))
        .stdout(predicate::str::contains("carried:     0..5"))
        .stdout(predicate::str::contains("No diagnostics"));
}

#[test]
fn test_align_json() {
    let output = cli()
        .args(["align", "--format", "json"])
        .arg(fixture("const_to_var.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["classes"]["substituted"], serde_json::json!([[0, 3]]));
    let declaration = value["ranges"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["outputKind"] == "VariableDeclaration")
        .unwrap();
    assert_eq!(declaration["steps"][0]["transformer"], "transform-block-scoping");
    assert_eq!(
        declaration["anchors"][0],
        serde_json::json!({
            "source": 0,
            "output": 0,
            "substitution": {"sourceChar": "c", "outputChar": "v"}
        })
    );
}

#[test]
fn test_align_compact() {
    cli()
        .args(["align", "--format", "compact"])
        .arg(fixture("numeral.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Program 0..5 0..6 0"))
        .stdout(predicate::str::contains("NumericLiteral 0..4 0..5 4"));
}

#[test]
fn test_unsupported_pairing_warns() {
    cli()
        .arg("align")
        .arg(fixture("jsx_call.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning[unsupported-pairing] no rule maps JSXElement to CallExpression",
        ))
        .stdout(predicate::str::contains("inserted:    0..1"));
}

#[test]
fn test_surfaced_diagnostics_are_logged_by_default() {
    cli()
        .arg("align")
        .arg(fixture("jsx_call.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("unsupported-pairing"))
        .stderr(predicate::str::contains("Aligned").not());

    cli()
        .args(["align", "-v"])
        .arg(fixture("jsx_call.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Aligned"));
}

#[test]
fn test_error_severity_sets_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("morphmap.json");
    fs::write(
        &config,
        r#"{"align": {"diagnostics": {"unsupportedPairing": "error"}}}"#,
    )
    .unwrap();

    cli()
        .arg("align")
        .arg(fixture("jsx_call.json"))
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error[unsupported-pairing]"));
}

#[test]
fn test_missing_fixture_fails() {
    cli()
        .args(["align", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load fixture"));
}

#[test]
fn test_query_output_offset() {
    cli()
        .args(["query", "--offset", "2"])
        .arg(fixture("numeral.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("counterpart: source offset 3"))
        .stdout(predicate::str::contains("class: carried"))
        .stdout(predicate::str::contains("NumericLiteral 0..4 ← 0..5"));
}

#[test]
fn test_query_source_separator_has_no_counterpart() {
    cli()
        .args(["query", "--offset", "1", "--side", "source", "--format", "compact"])
        .arg(fixture("numeral.json"))
        .assert()
        .success()
        .stdout(predicate::str::diff("1 -\n"));
}

#[test]
fn test_query_offset_past_end() {
    cli()
        .args(["query", "--offset", "40"])
        .arg(fixture("numeral.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("past the end"));
}

#[test]
fn test_config_init_and_show() {
    let temp_dir = TempDir::new().unwrap();

    cli()
        .args(["config", "init"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".morphmaprc.json"));
    let written = fs::read_to_string(temp_dir.path().join(".morphmaprc.json")).unwrap();
    assert!(written.contains("identityLeaves"));

    cli()
        .args(["config", "init"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cli()
        .args(["config", "init", "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    cli()
        .args(["config", "show"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("unsupportedPairing: warn"))
        .stdout(predicate::str::contains("no configuration file found").not());
}

#[test]
fn test_config_init_toml() {
    let temp_dir = TempDir::new().unwrap();
    cli()
        .args(["config", "init", "--format", "toml"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
    let written = fs::read_to_string(temp_dir.path().join(".morphmaprc.toml")).unwrap();
    assert!(written.contains("[align]"));
}

#[test]
fn test_config_schema() {
    cli()
        .args(["config", "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ambiguousStructure"));
}
