//! End-to-end tests: text in, station list out.

use std::fs::File;
use std::io::Write;
use std::process::Command;

use longest_trip::app::{emit, plan};
use longest_trip::domain::StationId;
use longest_trip::output::{LineEnding, OutputFormat};
use longest_trip::planner::SearchConfig;

fn write_input(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn plan_from_file() {
    // Figure-of-eight: two triangles sharing station 2
    let file = write_input("0,1,2\n1,2,2\n2,0,2\n2,3,1.5\n3,4,1.5\n4,2,1.5\n");
    let plan = plan(File::open(file.path()).unwrap(), &SearchConfig::default()).unwrap();

    let trip = plan.trip.unwrap();
    assert_eq!(plan.stations, 5);
    assert_eq!(plan.connections, 6);
    // Crossing both triangles (2 + 2 + 1.5 + 1.5) beats either cycle
    assert_eq!(trip.distance(), 7.0);
    assert!(!trip.is_cycle());
    assert_eq!(trip.stations().len(), 5);
}

#[test]
fn plan_then_emit_crlf() {
    let file = write_input("0,1,10\n2,3,3\n");
    let plan = plan(File::open(file.path()).unwrap(), &SearchConfig::default()).unwrap();

    let mut out = Vec::new();
    emit(&mut out, &plan, OutputFormat::Lines, LineEnding::CrLf).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0\r\n1\r\n");
}

#[test]
fn truncated_input_still_searched() {
    let plan = plan(
        "0,1,1\n1,2,1\n2,0,1\n# trailing notes\n0,9,100\n".as_bytes(),
        &SearchConfig::default(),
    )
    .unwrap();

    assert!(plan.truncated.is_some());
    let trip = plan.trip.unwrap();
    assert_eq!(trip.distance(), 3.0);
    assert!(!trip.stations().contains(&StationId(9)));
}

#[test]
fn binary_prints_one_station_per_line() {
    let file = write_input("0,1,1\n1,2,1\n2,0,1\n");

    let output = Command::new(env!("CARGO_BIN_EXE_longest-trip"))
        .arg(file.path())
        .args(["--line-ending", "lf"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0\n1\n2\n0\n");
}

#[test]
fn binary_empty_input_prints_nothing() {
    let file = write_input("");

    let output = Command::new(env!("CARGO_BIN_EXE_longest-trip"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn binary_json_with_retrace() {
    let file = write_input("0,1,5\n");

    let output = Command::new(env!("CARGO_BIN_EXE_longest-trip"))
        .arg(file.path())
        .args(["--format", "json", "--allow-retrace"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stations"], serde_json::json!([0, 1, 0]));
    assert_eq!(value["distance"], serde_json::json!(10.0));
    assert_eq!(value["is_cycle"], serde_json::json!(true));
}

#[test]
fn binary_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");

    let output = Command::new(env!("CARGO_BIN_EXE_longest-trip"))
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("cannot open").count(), 1);
}
