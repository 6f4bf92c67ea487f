//! Integration tests for the `strictjson` binary.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p strictjson-cli --test validate_cli
//! ```

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn strictjson(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_strictjson"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute strictjson")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_valid_file_exits_zero() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("settings.json");
    fs::write(&file, r#"{"homepage": "https://example.com", "title": "Home"}"#).unwrap();

    let output = strictjson(&["validate", path_str(&file)]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stdout: {}", stdout);
    assert!(stdout.contains("Validating:"));
    assert!(stdout.contains("JSON file is valid"));
}

#[test]
fn test_comment_fails_with_location() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("settings.json");
    fs::write(&file, "{\n  \"a\": 1 // why\n}\n").unwrap();

    let output = strictjson(&["validate", path_str(&file)]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("JSON file validation failed"));
    assert!(stdout.contains("Single-line comments (//) are not allowed in JSON files"));
    assert!(stdout.contains("Location: Line 2, Column 10"));
    assert!(stdout.contains("Text: \"\"a\": 1 // why\""));
    assert!(stdout.contains("JSON syntax error: "));
}

#[test]
fn test_missing_file_reports_file_error() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("missing.json");

    let output = strictjson(&["validate", "--json", path_str(&missing)]);
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    let result = &json["files"][0]["result"];
    assert_eq!(result["isValid"], false);
    assert_eq!(result["errors"].as_array().unwrap().len(), 1);
    assert_eq!(result["errors"][0]["kind"], "file-error");
    assert_eq!(result["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_json_output_for_trailing_comma() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("list.json");
    fs::write(&file, r#"{"a": 1, "b": 2,}"#).unwrap();

    let output = strictjson(&["validate", "--json", path_str(&file)]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let result = &json["files"][0]["result"];

    assert_eq!(result["warnings"][0]["kind"], "trailing-comma");
    assert_eq!(result["warnings"][0]["line"], 1);
    assert_eq!(result["errors"][0]["kind"], "syntax");
    assert_eq!(json["files"][0]["source_hash"].as_str().unwrap().len(), 64);
}

#[test]
fn test_warnings_only_pass_unless_strict() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("list.json");
    fs::write(&file, "[1, 2,]").unwrap();

    let lenient = strictjson(&[
        "validate",
        "--disable-rule",
        "syntax/strict-parse",
        path_str(&file),
    ]);
    assert!(lenient.status.success());
    assert!(String::from_utf8_lossy(&lenient.stdout).contains("Warnings:"));

    let strict = strictjson(&[
        "validate",
        "--strict",
        "--disable-rule",
        "syntax/strict-parse",
        path_str(&file),
    ]);
    assert_eq!(strict.status.code(), Some(1));
}

#[test]
fn test_unknown_rule_is_an_error() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("a.json");
    fs::write(&file, "{}").unwrap();

    let output = strictjson(&["validate", "--disable-rule", "nope", path_str(&file)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown rule 'nope'"));
}

#[test]
fn test_directory_scan_and_summary() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("good.json"), "{}").unwrap();
    fs::write(tmp.path().join("bad.json"), "{} /* no */").unwrap();
    fs::write(tmp.path().join("readme.md"), "// not json").unwrap();

    let output = strictjson(&["validate", path_str(tmp.path())]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout.matches("Validating:").count(), 2);
    assert!(stdout.contains("Validation Summary"));
    assert!(stdout.contains("Multi-line comments (/* */) are not allowed in JSON files"));
}

#[test]
fn test_config_file_mask_scope() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("globs.json");
    fs::write(&file, r#"{"include": "src/**/*.rs"}"#).unwrap();
    let config = tmp.path().join("strictjson.config");
    fs::write(&config, r#"{"mask_scope": "all_rules"}"#).unwrap();

    let plain = strictjson(&["validate", path_str(&file)]);
    assert_eq!(plain.status.code(), Some(1));

    let masked = strictjson(&["validate", "--config", path_str(&config), path_str(&file)]);
    assert!(masked.status.success());

    let flag = strictjson(&["validate", "--mask-strings", path_str(&file)]);
    assert!(flag.status.success());
}

#[test]
fn test_rules_json() {
    let output = strictjson(&["rules", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<_> = json["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        vec![
            "comment/single-line",
            "comment/block",
            "trailing-comma",
            "syntax/strict-parse"
        ]
    );
}

#[test]
fn test_usage_error_without_paths() {
    let output = strictjson(&["validate"]);
    assert!(!output.status.success());
}
