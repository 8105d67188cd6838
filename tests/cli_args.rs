//! Tests for the `water` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;
use water::model::seed;

/// Runs `water` against a config path that does not exist, so defaults apply.
fn water(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_water"))
        .arg("--config")
        .arg(dir.join("missing.toml"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let output = water(dir.path(), &["--help"]);
    let text = stdout(&output);
    for command in ["list", "map", "show", "mark", "info", "seed"] {
        assert!(text.contains(command), "help is missing {command}");
    }
}

#[test]
fn test_list_shows_seeded_memory_store() {
    let dir = TempDir::new().unwrap();
    let output = water(dir.path(), &["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Watersource A"));
    assert!(text.contains("3 water sources"));
}

#[test]
fn test_mark_all_stages_reports_completion() {
    let dir = TempDir::new().unwrap();
    let id = seed::WATERSOURCE_B.to_string();
    let output = water(dir.path(), &["mark", &id, "boil", "disinfect", "filter"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Sanitization Complete"));
}

#[test]
fn test_show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    let output = water(dir.path(), &["show", "00000000-0000-0000-0000-000000000000"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no water source"));
}

#[test]
fn test_file_store_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("watersources.json");
    let store = store.to_str().unwrap();
    let id = seed::WATERSOURCE_C.to_string();

    assert!(water(dir.path(), &["--store", store, "seed"]).status.success());
    assert!(water(dir.path(), &["--store", store, "mark", &id, "boil"]).status.success());

    let output = water(dir.path(), &["--store", store, "show", &id]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Step 1. Boil"));
    assert!(stdout(&output).contains("100%"));
}

#[test]
fn test_map_prints_geojson() {
    let dir = TempDir::new().unwrap();
    let output = water(dir.path(), &["map"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["type"], "FeatureCollection");
}
