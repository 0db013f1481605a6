//! End-to-end tests for medicctl commands.
//!
//! Drives `medicctl::run` with parsed argv and checks the persisted JSON.

use clap::Parser;
use medic_common::MedicError;
use medicctl::cli::Cli;
use std::fs;

fn run(args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["medicctl", "--color", "never"];
    argv.extend_from_slice(args);
    medicctl::run(Cli::try_parse_from(argv).expect("argv parses"))
}

#[test]
fn test_analyze_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");

    run(&[
        "analyze",
        "ModuleNotFoundError: No module named 'requests'",
        "--json",
        "--output",
        out.to_str().unwrap(),
    ])
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["kind"], "dependency");
    assert_eq!(json["context"]["language"], "python");
    assert_eq!(json["suggested_solutions"].as_array().unwrap().len(), 3);
}

#[test]
fn test_analyze_minimal_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");

    run(&["analyze", "it broke", "--minimal", "--output", out.to_str().unwrap()]).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["kind"], "runtime");
    assert_eq!(
        json["suggested_solutions"][0],
        "Check error message and search for solutions online"
    );
}

#[test]
fn test_analyze_reads_file_and_config() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("build.log");
    let config = dir.path().join("config.toml");
    let out = dir.path().join("report.json");
    fs::write(&log, "segmentation fault (core dumped)\n").unwrap();
    fs::write(&config, "[engine]\nfallback_text = \"Ping #build-help\"\n").unwrap();

    run(&[
        "--config",
        config.to_str().unwrap(),
        "analyze",
        "--file",
        log.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ])
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["suggested_solutions"][0], "Ping #build-help");
}

#[test]
fn test_analyze_file_with_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("build.log");
    let out = dir.path().join("report.json");
    fs::write(&log, b"main.c:3: error: bad \xff byte\n").unwrap();

    run(&[
        "analyze",
        "--file",
        log.to_str().unwrap(),
        "--json",
        "--output",
        out.to_str().unwrap(),
    ])
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["kind"], "compilation");
    assert_eq!(json["location"]["file"], "main.c");
    assert_eq!(json["location"]["line"], 3);
    assert!(json["message"].as_str().unwrap().contains('\u{FFFD}'));
}

#[test]
fn test_request_without_message_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let request = dir.path().join("request.json");
    fs::write(&request, r#"{ "context": { "language": "python" } }"#).unwrap();

    let err = run(&["request", request.to_str().unwrap()]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MedicError>(),
        Some(MedicError::InvalidInput(_))
    ));
}

#[test]
fn test_plan_writes_run_report() {
    let dir = tempfile::tempdir().unwrap();
    let outcomes = dir.path().join("outcomes.json");
    let out = dir.path().join("run.json");
    fs::write(
        &outcomes,
        r#"[
            { "name": "deps", "feature": "integration", "status": "failed",
              "suggestions": ["Run npm install", "Check registry", "Retry"] },
            { "name": "health", "feature": "api_endpoint", "status": "passed" }
        ]"#,
    )
    .unwrap();

    run(&["plan", outcomes.to_str().unwrap(), "--output", out.to_str().unwrap()]).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["test_summary"]["total_tests"], 2);
    assert_eq!(json["test_summary"]["success_rate"], 50.0);
    assert_eq!(json["fix_plan"]["immediate"][1], "Check registry");
    assert_eq!(json["critical_issues"][0], "deps");
}

#[test]
fn test_plan_rejects_non_array() {
    let dir = tempfile::tempdir().unwrap();
    let outcomes = dir.path().join("outcomes.json");
    fs::write(&outcomes, r#"{ "name": "x" }"#).unwrap();

    assert!(run(&["plan", outcomes.to_str().unwrap()]).is_err());
}
