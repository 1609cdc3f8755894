//! Integration tests for output formatting
//!
//! These tests run the `overwatch` binary and verify that JSON output is
//! well formed and carries the expected data.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn overwatch_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove 'deps' directory
    path.push("overwatch");
    path
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let output = Command::new(overwatch_bin())
        .args(args)
        .arg("--json")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

#[test]
fn test_route_json_output() {
    let parsed = run_json(&["route", "others", "--maps", "A,B,C", "--active", "A"]);

    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["targets"], serde_json::json!(["B", "C"]));
}

#[test]
fn test_route_active_absent_is_empty() {
    let parsed = run_json(&["route", "active", "--maps", "A,B", "--active", "Z"]);

    assert_eq!(parsed["data"]["targets"], serde_json::json!([]));
}

#[test]
fn test_config_json_reports_sources() {
    let parsed = run_json(&["config", "--scanned-area-crs", "3857"]);

    let entries = parsed["data"].as_array().expect("Config data should be a list");
    let crs = entries
        .iter()
        .find(|entry| entry["key"] == "scanned_area_crs")
        .expect("Should report scanned_area_crs");
    assert_eq!(crs["value"], "EPSG:3857");
    assert_eq!(crs["source"], "Cli");
}

#[test]
fn test_restore_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let case_path = temp_dir.path().join("case.json");
    fs::write(
        &case_path,
        r#"{
            "id": "case-1",
            "name": "Port survey",
            "creationTime": "2024-01-01T00:00:00Z",
            "lastModified": "2024-01-01T00:00:00Z",
            "state": { "maps": { "activeMapId": "m1", "layout": "layout1", "data": [{ "id": "m1" }] } }
        }"#,
    )
    .unwrap();

    let parsed = run_json(&["restore", case_path.to_str().unwrap()]);

    let actions = parsed["data"]["actions"].as_array().expect("Should list actions");
    assert_eq!(actions.len(), 22);
    assert_eq!(actions[0]["type"], "selectCase");
    assert_eq!(actions[1]["type"], "setMapsData");
    assert_eq!(actions[21]["type"], "selectCaseSuccess");
    assert_eq!(actions[21]["payload"]["id"], "case-1");
}

#[test]
fn test_scan_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let extents_path = temp_dir.path().join("extents.geojson");
    fs::write(
        &extents_path,
        r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]] },
                    "properties": {}
                },
                {
                    "type": "Feature",
                    "geometry": { "type": "Polygon", "coordinates": [[[3, 3], [4, 3], [4, 4], [3, 4], [3, 3]]] },
                    "properties": {}
                }
            ]
        }"#,
    )
    .unwrap();

    let parsed = run_json(&["scan", extents_path.to_str().unwrap(), "--overlay", "o1"]);

    let data = &parsed["data"];
    assert_eq!(data["overlay_id"], "o1");
    assert_eq!(data["polygon_count"], 2);
    assert!((data["area"].as_f64().unwrap() - 2.0).abs() < 1e-9);
    assert_eq!(data["bbox"], serde_json::json!([0.0, 0.0, 4.0, 4.0]));
}

#[test]
fn test_missing_case_file_fails() {
    let output = Command::new(overwatch_bin())
        .args(["restore", "/nonexistent/case.json"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
