//! Integration tests for the `nestval` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to drive every subcommand
//! through the real binary, covering stdin/stdout piping, file I/O, exit codes
//! and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn nestval() -> Command {
    let mut cmd = Command::cargo_bin("nestval").unwrap();
    cmd.env_remove("NESTVAL_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// merge
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn merge_layers_files_in_order() {
    let output = nestval()
        .args(["merge", fixture("defaults.json").as_str(), fixture("overrides.json").as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(
        stdout_json(&output),
        json!({
            "defaults": {"api_call": {
                "request": {
                    "headers": {"Accept": "application/json"},
                    "base_url": "https://api.example.com"
                },
                "response": {"status": [200, 201]}
            }}
        })
    );
}

#[test]
fn merge_reads_stdin_when_no_files() {
    let output = nestval()
        .arg("merge")
        .write_stdin(r#"{"a": {"b": 1}}"#)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({"a": {"b": 1}}));
}

#[test]
fn merge_accepts_dash_for_stdin_layer() {
    let output = nestval()
        .args(["merge", fixture("defaults.json").as_str(), "-"])
        .write_stdin(r#"{"defaults": {"api_call": {"response": {"status": null}}}}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    let merged = stdout_json(&output);
    assert_eq!(merged["defaults"]["api_call"]["response"]["status"], Value::Null);
    assert_eq!(
        merged["defaults"]["api_call"]["request"]["base_url"],
        json!("http://localhost:3000")
    );
}

#[test]
fn merge_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("merged.json");

    nestval()
        .args(["merge", fixture("defaults.json").as_str(), "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let original: Value =
        serde_json::from_str(&std::fs::read_to_string(fixture("defaults.json")).unwrap()).unwrap();
    assert_eq!(written, original);
}

#[test]
fn merge_invalid_json_fails() {
    nestval()
        .arg("merge")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn merge_missing_file_fails() {
    nestval()
        .args(["merge", "/nonexistent/nestval/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// get
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_prints_nested_value() {
    let output = nestval()
        .args([
            "get",
            "defaults.api_call.request",
            "-i",
            fixture("defaults.json").as_str(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"headers": {"Accept": "application/json"}, "base_url": "http://localhost:3000"})
    );
}

#[test]
fn get_uses_default_when_absent() {
    nestval()
        .args(["get", "foo.bar", "--default", "5"])
        .write_stdin(r#"{"foo": 1}"#)
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn get_without_default_fails_when_absent() {
    nestval()
        .args(["get", "foo.bar"])
        .write_stdin(r#"{"foo": 1}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No value at path 'foo.bar'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// set
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn set_creates_intermediate_objects() {
    let output = nestval()
        .args(["set", "bla.bla", "1"])
        .write_stdin(r#"{"foo": {"bar": {"baz": 2}}}"#)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"foo": {"bar": {"baz": 2}}, "bla": {"bla": 1}})
    );
}

#[test]
fn set_stores_unparsable_value_as_string() {
    let output = nestval()
        .args(["set", "name", "Alice"])
        .write_stdin("")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({"name": "Alice"}));
}

#[test]
fn set_on_array_document_fails() {
    nestval()
        .args(["set", "a", "1"])
        .write_stdin("[1, 2]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to set 'a'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// eq
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn eq_reports_loosely_equal_documents() {
    nestval()
        .args(["eq", fixture("defaults.json").as_str(), fixture("loose.json").as_str()])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn eq_exits_with_one_when_different() {
    nestval()
        .args(["eq", fixture("defaults.json").as_str(), fixture("overrides.json").as_str()])
        .assert()
        .code(1)
        .stdout("false\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// digest and classify
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn seeded_digest_is_stable_across_runs() {
    let first = nestval().args(["digest", "--seed", "foobar"]).output().unwrap();
    let second = nestval().args(["digest", "--seed", "foobar"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8(first.stdout).unwrap().trim().len(), 64);
}

#[test]
fn random_digest_differs_across_runs() {
    let first = nestval().arg("digest").output().unwrap();
    let second = nestval().arg("digest").output().unwrap();
    assert_ne!(first.stdout, second.stdout);
}

#[test]
fn classify_reports_both_predicates() {
    nestval()
        .args(["classify", "https://foo/bar"])
        .assert()
        .success()
        .stdout("array_index: false\nurl: true\n");

    nestval()
        .args(["classify", "\"10\""])
        .assert()
        .success()
        .stdout("array_index: true\nurl: false\n");

    nestval()
        .args(["classify", "-1"])
        .assert()
        .success()
        .stdout("array_index: false\nurl: false\n");
}
