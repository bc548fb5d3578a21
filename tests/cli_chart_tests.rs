//! End-to-end tests for `twiddler-chart chart` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the twiddler-chart binary
fn twiddler_chart_bin() -> &'static str {
    env!("CARGO_BIN_EXE_twiddler-chart")
}

fn run_chart(layout: &str, extra: &[&str]) -> std::process::Output {
    let (layout_path, layout_temp) = create_temp_layout_file(layout);
    let mut args = vec!["chart", "--layout", layout_path.to_str().unwrap()];
    args.extend_from_slice(extra);

    Command::new(twiddler_chart_bin())
        .args(&args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_chart_plain_listing() {
    let output = run_chart(SAMPLE_LAYOUT, &["--grids", "3"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Chart should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "┌─────────────┐".repeat(3));
    assert!(lines.contains(&"LOOO  e"));
    assert!(lines.contains(&"ROOO  ←X"));
    assert!(lines.contains(&"OLOO  _"));
    assert!(lines.contains(&"OMOO  ←|"));
    assert!(lines.contains(&"OROO  ↑"));
    assert!(lines.contains(&"ORLO  |↑|"));
    assert!(lines.contains(&"RRRR  <!->"));
    assert!(stdout.contains("8 of 256 chords assigned"));
}

#[test]
fn test_chart_json_report() {
    let output = run_chart(SAMPLE_LAYOUT, &["--json"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(report["alphabet"], "OLMR");
    assert_eq!(report["chord_count"], 256);
    assert_eq!(report["assigned"], 8);

    let chords = report["chords"].as_array().unwrap();
    assert_eq!(chords.len(), 8);
    assert_eq!(chords[0]["chord"], "LOOO");
    assert_eq!(chords[0]["glyph"], "e");
}

#[test]
fn test_chart_json_all_chords() {
    let output = run_chart(SAMPLE_LAYOUT, &["--json", "--all"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    let chords = report["chords"].as_array().unwrap();

    assert_eq!(chords.len(), 256);
    assert_eq!(chords[0]["chord"], "OOOO");
    assert!(chords[0].get("glyph").is_none());
}

#[test]
fn test_chart_unmapped_label_rejected() {
    let output = run_chart(UNMAPPED_LAYOUT, &[]);

    assert_eq!(
        output.status.code(),
        Some(1),
        "Unmapped label should exit with code 1"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("<Right Ctrl>c</Right Ctrl>"));
}

#[test]
fn test_chart_unmapped_label_raw() {
    let output = run_chart(UNMAPPED_LAYOUT, &["--unmapped", "raw"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Raw fallback should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MOOO  <Right Ctrl>c</Right Ctrl>"));
}

#[test]
fn test_chart_short_row_is_malformed() {
    let output = run_chart(SHORT_ROW_LAYOUT, &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[Row 2, field 2]"));
}

#[test]
fn test_chart_custom_alphabet_rejects_unknown_keys() {
    let output = run_chart(SAMPLE_LAYOUT, &["--alphabet", "OL"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown finger key"));
}

#[test]
fn test_chart_invalid_alphabet() {
    let output = run_chart(SAMPLE_LAYOUT, &["--alphabet", "OLMO"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid key alphabet"));
}

#[test]
fn test_chart_nonexistent_file() {
    let output = Command::new(twiddler_chart_bin())
        .args(["chart", "--layout", "/tmp/nonexistent_twiddler_layout_xyz.csv"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
