//! Integration tests for the `slots` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the query and busy
//! subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, flag overrides, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the day.json fixture.
fn day_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/day.json")
}

/// Helper: read the day.json fixture as a string.
fn day_json() -> String {
    std::fs::read_to_string(day_json_path()).expect("day.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Query subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn query_stdin_to_stdout() {
    // The fixture's merged busy day is 09:00-11:00 and 14:00-16:00, leaving
    // three openings of at least an hour.
    let output = Command::cargo_bin("slots")
        .unwrap()
        .arg("query")
        .write_stdin(day_json())
        .output()
        .expect("query should run");

    assert!(output.status.success());
    let slots: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("output should be a JSON array");

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["start"], 0);
    assert_eq!(slots[0]["end"], 540);
    assert_eq!(slots[1]["start"], 660);
    assert_eq!(slots[1]["end"], 840);
    assert_eq!(slots[2]["start"], 960);
    assert_eq!(slots[2]["end"], 1440);
}

#[test]
fn query_file_to_file() {
    let output_path = "/tmp/slots-test-query-output.json";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("slots")
        .unwrap()
        .args(["query", "-i", day_json_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    let slots: Vec<serde_json::Value> =
        serde_json::from_str(&content).expect("output file should hold a JSON array");
    assert_eq!(slots.len(), 3);

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn query_duration_flag_overrides_the_request() {
    // A 200-minute meeting no longer fits between the two busy stretches.
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["query", "-i", day_json_path(), "--duration", "200"])
        .output()
        .expect("query should run");

    assert!(output.status.success());
    let slots: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["end"], 540);
    assert_eq!(slots[1]["start"], 960);
}

#[test]
fn query_attendee_flags_replace_the_request_sets() {
    // Only carol matters now: her focus block is the sole constraint.
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args([
            "query",
            "-i",
            day_json_path(),
            "--required",
            "carol",
            "--optional",
            "",
            "--duration",
            "30",
        ])
        .output()
        .expect("query should run");

    assert!(output.status.success());
    let slots: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["start"], 0);
    assert_eq!(slots[0]["end"], 840);
    assert_eq!(slots[1]["start"], 960);
    assert_eq!(slots[1]["end"], 1440);
}

#[test]
fn query_first_prints_a_single_slot() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["query", "-i", day_json_path(), "--first"])
        .output()
        .expect("query should run");

    assert!(output.status.success());
    let first: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(first["start"], 0);
    assert_eq!(first["end"], 540);
}

#[test]
fn query_first_prints_null_when_nothing_fits() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["query", "-i", day_json_path(), "--duration", "1441", "--first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
}

#[test]
fn query_without_a_request_defaults_to_the_whole_day() {
    // No embedded request and no flags: nobody is required, so the whole day
    // comes back as one open range.
    let input = r#"{"events":[{"name":"standup","start":540,"end":600,"attendees":["alice"]}]}"#;

    let output = Command::cargo_bin("slots")
        .unwrap()
        .arg("query")
        .write_stdin(input)
        .output()
        .expect("query should run");

    assert!(output.status.success());
    let slots: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0]["start"], 0);
    assert_eq!(slots[0]["end"], 1440);
}

// ─────────────────────────────────────────────────────────────────────────────
// Busy subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn busy_merges_the_selected_attendees() {
    // alice and bob overlap 09:00-10:00 and 09:30-11:00 → one block.
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["busy", "-i", day_json_path(), "--attendees", "alice,bob"])
        .output()
        .expect("busy should run");

    assert!(output.status.success());
    let blocks: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["start"], 540);
    assert_eq!(blocks[0]["end"], 660);
}

#[test]
fn busy_defaults_to_everyone() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["busy", "-i", day_json_path()])
        .output()
        .expect("busy should run");

    assert!(output.status.success());
    let blocks: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1]["start"], 840);
    assert_eq!(blocks[1]["end"], 960);
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_json_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .arg("query")
        .write_stdin("this is not json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input JSON"));
}

#[test]
fn inverted_time_range_fails() {
    let input = r#"{"events":[{"name":"bad","start":600,"end":540,"attendees":["alice"]}]}"#;

    Command::cargo_bin("slots")
        .unwrap()
        .arg("query")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed time range"));
}

#[test]
fn out_of_day_time_range_fails() {
    let input = r#"{"events":[{"name":"bad","start":0,"end":2000,"attendees":["alice"]}]}"#;

    Command::cargo_bin("slots")
        .unwrap()
        .arg("query")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed time range"));
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["query", "-i", "/tmp/slots-test-does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("slots")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("busy"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}
