/*
[INPUT]:  taskboard binary with --dry-run and YAML config files
[OUTPUT]: Test results for CLI argument and config handling
[POS]:    Integration tests - binary entry point
[UPDATE]: When changing CLI flags or config validation
*/

use std::fs;
use std::process::Command;

use rstest::rstest;
use tempfile::tempdir;

fn taskboard() -> Command {
    Command::new(env!("CARGO_BIN_EXE_taskboard"))
}

#[test]
fn dry_run_with_config_file_succeeds() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("config.yaml");
    fs::write(
        &config_path,
        "default_sort: priority\ntick_rate_ms: 100\nseed_tasks:\n  - Buy milk\n",
    )
    .expect("write config");

    let output = taskboard()
        .arg("--config")
        .arg(&config_path)
        .arg("--dry-run")
        .output()
        .expect("run taskboard");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration validated"));
}

#[rstest]
#[case::unknown_sort("default_sort: alphabetical\n")]
#[case::zero_tick("tick_rate_ms: 0\n")]
#[case::unknown_field("theme: dark\n")]
fn dry_run_rejects_invalid_config(#[case] yaml: &str) {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, yaml).expect("write config");

    let output = taskboard()
        .arg("--config")
        .arg(&config_path)
        .arg("--dry-run")
        .output()
        .expect("run taskboard");

    assert!(!output.status.success());
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().expect("tempdir");
    let output = taskboard()
        .arg("--config")
        .arg(dir.path().join("absent.yaml"))
        .arg("--dry-run")
        .output()
        .expect("run taskboard");

    assert!(!output.status.success());
}

#[rstest]
#[case("created")]
#[case("priority")]
fn sort_flag_accepts_known_keys(#[case] sort: &str) {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, "").expect("write config");

    let status = taskboard()
        .args(["--sort", sort, "--dry-run", "--config"])
        .arg(&config_path)
        .status()
        .expect("run taskboard");

    assert!(status.success());
}

#[test]
fn sort_flag_rejects_unknown_key() {
    let status = taskboard()
        .args(["--sort", "alphabetical", "--dry-run"])
        .status()
        .expect("run taskboard");

    assert!(!status.success());
}
