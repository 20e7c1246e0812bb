//! End-to-end runs of the colorscatter binary.

use assert_cmd::Command;
use colorscatter::export::read_json;
use predicates::prelude::*;
use serde_json::Value;

fn colorscatter() -> Command {
    Command::cargo_bin("colorscatter").unwrap()
}

#[test]
fn default_run_writes_relative_output() {
    let dir = tempfile::tempdir().unwrap();

    colorscatter()
        .current_dir(dir.path())
        .arg("--no-show")
        .assert()
        .success();

    let path = dir.path().join("plotly_example.json");
    let figure = read_json(&path).unwrap();
    assert_eq!(figure.colorbar_title(), "qwe");
    assert_eq!(figure.data.len(), 1);
    assert_eq!(figure.data[0].len(), 10);

    let json: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["data"][0]["type"], "scatter");
    assert_eq!(json["data"][0]["marker"]["coloraxis"], "coloraxis");
    assert_eq!(json["layout"]["coloraxis"]["colorscale"][0][1], "#0d0887");
}

#[test]
fn non_terminal_stdout_skips_viewer() {
    let dir = tempfile::tempdir().unwrap();

    colorscatter().current_dir(dir.path()).assert().success();

    assert!(dir.path().join("plotly_example.json").exists());
}

#[test]
fn two_runs_produce_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plotly_example.json");

    colorscatter().current_dir(dir.path()).arg("--no-show").assert().success();
    let first = std::fs::read(&path).unwrap();
    colorscatter().current_dir(dir.path()).arg("--no-show").assert().success();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn options_change_output() {
    let dir = tempfile::tempdir().unwrap();

    colorscatter()
        .current_dir(dir.path())
        .args([
            "--no-show",
            "--output",
            "custom.json",
            "--points",
            "4",
            "--title",
            "ratio",
            "--colorscale",
            "viridis",
            "--pretty",
        ])
        .assert()
        .success();

    let path = dir.path().join("custom.json");
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n  \"layout\""));

    let figure = read_json(&path).unwrap();
    assert_eq!(figure.colorbar_title(), "ratio");
    assert_eq!(figure.data[0].len(), 4);
    assert_eq!(figure.layout.coloraxis.colorscale[0].1, "#440154");
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();

    colorscatter()
        .current_dir(dir.path())
        .args(["--no-show", "--output", "missing/out.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write file"));
}

#[test]
fn log_file_records_steps() {
    let dir = tempfile::tempdir().unwrap();

    colorscatter()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["--no-show", "--log", "run.log"])
        .assert()
        .success();

    let log = std::fs::read_to_string(dir.path().join("run.log")).unwrap();
    assert!(log.contains("Generated 10 points"));
    assert!(log.contains("Wrote figure to plotly_example.json"));
}

#[test]
fn rejects_unknown_colorscale() {
    colorscatter()
        .args(["--no-show", "--colorscale", "jet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
