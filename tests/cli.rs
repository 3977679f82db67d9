//! Integration tests for the `docsift` binary.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

use docsift::{PdfSummaryRenderer, ScoredSentence, Sentence, SummarizeConfig, Summary, SummaryRenderer};

/// Helper: get a Command for the `docsift` binary.
fn docsift() -> Command {
    Command::cargo_bin("docsift").expect("binary 'docsift' should be built")
}

/// Write a small source PDF into `dir` and return its path.
fn write_source_pdf(dir: &std::path::Path) -> std::path::PathBuf {
    let texts = [
        "The cat sat on the mat.",
        "Dogs are loyal animals.",
        "The mat was red.",
    ];
    let scored = texts
        .iter()
        .enumerate()
        .map(|(i, t)| ScoredSentence {
            sentence: Sentence::new(*t, 0, t.len(), i),
            score: 0.0,
        })
        .collect();
    let summary = Summary::new("", scored);
    let cfg = SummarizeConfig::new().with_title("Source document");
    let bytes = PdfSummaryRenderer::new()
        .render(&summary, &cfg)
        .expect("render source pdf");

    let path = dir.join("source.pdf");
    std::fs::write(&path, bytes).expect("write source pdf");
    path
}

#[test]
fn help_flag_shows_usage_and_subcommands() {
    docsift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: docsift"))
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("handwriting"));
}

#[test]
fn version_flag_shows_semver() {
    docsift()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^docsift \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn no_args_shows_error_and_usage() {
    docsift()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: docsift"));
}

#[test]
fn invalid_subcommand_fails() {
    docsift()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn summarize_missing_input_fails() {
    docsift()
        .args(["summarize", "/nonexistent/input.pdf", "mat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn summarize_writes_output_and_prints_bullets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write_source_pdf(dir.path());
    let output = dir.path().join("out.pdf");

    docsift()
        .arg("summarize")
        .arg(&source)
        .arg("mat")
        .args(["-n", "2", "--print"])
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary saved to"))
        .stdout(predicate::str::contains("mat"));

    let written = std::fs::read(&output).expect("read output pdf");
    assert!(written.starts_with(b"%PDF"));
}

#[test]
fn summarize_defaults_output_name_to_topic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write_source_pdf(dir.path());

    docsift()
        .current_dir(dir.path())
        .arg("summarize")
        .arg(&source)
        .arg("mat")
        .assert()
        .success()
        .stdout(predicate::str::contains("mat_summary.pdf"));

    assert!(dir.path().join("mat_summary.pdf").exists());
}

#[test]
fn summarize_json_emits_machine_readable_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write_source_pdf(dir.path());
    let output = dir.path().join("out.pdf");

    let assert = docsift()
        .arg("summarize")
        .arg(&source)
        .arg("mat")
        .args(["-n", "2", "--json"])
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    // Logs go to stderr, so stdout is nothing but the JSON payload.
    assert!(
        stdout.trim_start().starts_with('{'),
        "stdout carries more than the JSON payload: {stdout}"
    );
    let summary: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(summary["topic"], "mat");
    assert_eq!(summary["sentences"].as_array().map(|a| a.len()), Some(2));
}

#[test]
fn summarize_unknown_language_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write_source_pdf(dir.path());

    docsift()
        .arg("summarize")
        .arg(&source)
        .args(["mat", "--language", "xx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language code"));
}

#[test]
fn handwriting_reports_feature_unavailable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("scan.png");
    std::fs::write(&input, b"fake scan bytes").expect("write scan");

    docsift()
        .arg("handwriting")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available"));
}
