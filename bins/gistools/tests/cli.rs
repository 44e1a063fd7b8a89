//! End-to-end tests for the gistools binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn gistools() -> Command {
    let mut cmd = Command::cargo_bin("gistools").unwrap();
    cmd.env_remove("GISTOOLS_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("FORCE_COLOR")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

#[test]
fn test_distance_json() {
    let output = gistools()
        .args(["--json", "distance", "--", "-75,38.10096062273525", "-75,39.000281"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let distance = value["distance"].as_f64().unwrap();
    assert!((distance - 100_000.0).abs() < 1.0, "distance: {}", distance);
    assert_eq!(value["unit"], "meters");
}

#[test]
fn test_distance_in_kilometers() {
    gistools()
        .args(["--no-color", "distance", "--unit", "km", "--", "-75,38.10096062273525", "-75,39.000281"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.000 kilometers"));
}

#[test]
fn test_destination_json() {
    let output = gistools()
        .args(["--json", "destination", "--", "-75,39", "100000", "90"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let position = value.as_array().unwrap();
    assert!((position[0].as_f64().unwrap() - -73.842853).abs() < 1e-6);
    assert!((position[1].as_f64().unwrap() - 38.994285).abs() < 1e-6);
}

#[test]
fn test_normalize() {
    gistools()
        .args(["normalize", "190,10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("longitude: -170"));
}

#[test]
fn test_convert() {
    gistools()
        .args(["convert", "5000", "miles", "meters"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("8046720"));
}

#[test]
fn test_convert_unknown_unit_fails() {
    gistools()
        .args(["convert", "1", "furlongs", "meters"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized unit"));
}

#[test]
fn test_malformed_position_fails() {
    gistools()
        .args(["normalize", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed coordinate"));
}

#[test]
fn test_validate_valid_polygon_from_stdin() {
    gistools()
        .arg("validate")
        .write_stdin(r#"{"type":"Polygon","coordinates":[[[100,0],[101,0],[101,1],[100,1],[100,0]]]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Polygon with 5 coordinates"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_validate_open_ring_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"type":"Polygon","coordinates":[[[100,0],[101,0],[101,1],[100,1]]]}}"#
    )
    .unwrap();

    gistools()
        .args(["--json", "validate"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""valid":false"#));
}

#[test]
fn test_config_changes_radius() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "earth_radius_m = 1.0").unwrap();

    let output = gistools()
        .arg("--config")
        .arg(config.path())
        .args(["--json", "distance", "0,0", "90,0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let distance = value["distance"].as_f64().unwrap();
    assert!((distance - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
}

#[test]
fn test_piped_output_has_no_ansi_codes() {
    gistools()
        .args(["distance", "0,0", "1,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not())
        .stdout(predicate::str::ends_with("meters\n"));
}
