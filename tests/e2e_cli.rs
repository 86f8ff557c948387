//! CLI end-to-end tests
//!
//! Tests for the mediaclean command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the mediaclean binary
#[allow(deprecated)]
fn mediaclean_cmd() -> Command {
    Command::cargo_bin("mediaclean").unwrap()
}

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn av_fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("crates/mediaclean-av/tests/fixtures")
}

fn schema_fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("crates/mediaclean-schema/tests/fixtures")
}

fn capture_args(cmd: &mut Command, dir: &Path, name: &str) {
    cmd.arg("--mkvmerge")
        .arg(dir.join(format!("{}.mkvmerge.json", name)))
        .arg("--ffprobe")
        .arg(dir.join(format!("{}.ffprobe.json", name)))
        .arg("--mediainfo")
        .arg(dir.join(format!("{}.mediainfo.xml", name)));
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = mediaclean_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = mediaclean_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mediaclean"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = mediaclean_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mediaclean"));
}

#[test]
fn test_cli_resolve_command() {
    let mut cmd = mediaclean_cmd();
    cmd.args(["resolve", "en", "zho", "xx-YY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en -> English (eng)"))
        .stdout(predicate::str::contains("(chi)"))
        .stdout(predicate::str::contains("xx-YY -> not found"));
}

#[test]
fn test_cli_default_config_to_stdout() {
    let mut cmd = mediaclean_cmd();
    cmd.arg("default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\": 3"))
        .stdout(predicate::str::contains("\".m2ts\""));
}

#[test]
fn test_cli_default_config_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mediaclean.json");

    let mut cmd = mediaclean_cmd();
    cmd.arg("default-config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"schema_version\": 3"));
}

#[test]
fn test_cli_upgrade_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::copy(schema_fixtures().join("config_v1.json"), &path).unwrap();

    let mut cmd = mediaclean_cmd();
    cmd.arg("upgrade-config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("from schema v1 to v3"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"schema_version\": 3"));

    // Second run is a no-op
    let mut cmd = mediaclean_cmd();
    cmd.arg("upgrade-config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("already at schema v3"));
}

#[test]
fn test_cli_upgrade_config_rejects_unknown_version() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "schema_version": 99 }"#).unwrap();

    let mut cmd = mediaclean_cmd();
    cmd.arg("upgrade-config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("99"));
}

#[test]
fn test_cli_process_with_captures() {
    let dir = tempdir().unwrap();
    let media = dir.path().join("clean.mkv");
    fs::write(&media, b"placeholder").unwrap();

    let mut cmd = mediaclean_cmd();
    cmd.arg("--config")
        .arg(fixtures().join("config_keep_english.json"))
        .arg("process")
        .arg(&media)
        .arg("--json");
    capture_args(&mut cmd, &fixtures(), "clean");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"planned\""))
        .stdout(predicate::str::contains("\"spa\""));

    assert!(dir.path().join("clean.mkv.mediaclean").exists());
}

#[test]
fn test_cli_process_then_show_sidecar() {
    let dir = tempdir().unwrap();
    let media = dir.path().join("clean.mkv");
    fs::write(&media, b"placeholder").unwrap();

    let mut cmd = mediaclean_cmd();
    cmd.arg("--config")
        .arg(fixtures().join("config_keep_english.json"))
        .arg("process")
        .arg(&media);
    capture_args(&mut cmd, &fixtures(), "clean");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Remove:"));

    let mut cmd = mediaclean_cmd();
    cmd.arg("sidecar")
        .arg(&media)
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema: v3 (current v3)"))
        .stdout(predicate::str::contains("output stored"));

    // Without captures the sidecar is the source
    let mut cmd = mediaclean_cmd();
    cmd.arg("--config")
        .arg(fixtures().join("config_keep_english.json"))
        .arg("process")
        .arg(&media)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sidecar: schema v3"));
}

#[test]
fn test_cli_process_requires_all_captures() {
    let dir = tempdir().unwrap();
    let media = dir.path().join("clean.mkv");
    fs::write(&media, b"placeholder").unwrap();

    let mut cmd = mediaclean_cmd();
    cmd.arg("process")
        .arg(&media)
        .arg("--mkvmerge")
        .arg(fixtures().join("clean.mkvmerge.json"))
        .assert()
        .failure();
}

#[test]
fn test_cli_process_nonexistent_file() {
    let mut cmd = mediaclean_cmd();
    cmd.args(["process", "/nonexistent/file.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_check_agreeing_tools() {
    let dir = tempdir().unwrap();
    let media = dir.path().join("movie.mkv");
    fs::write(&media, b"placeholder").unwrap();

    let mut cmd = mediaclean_cmd();
    cmd.arg("check").arg(&media);
    capture_args(&mut cmd, &av_fixtures(), "movie");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All tools agree"))
        .stdout(predicate::str::is_match("^[[:ascii:]]*$").unwrap());
}

#[test]
fn test_cli_check_failed_tool() {
    let dir = tempdir().unwrap();
    let media = dir.path().join("movie.mkv");
    fs::write(&media, b"placeholder").unwrap();

    let mut cmd = mediaclean_cmd();
    cmd.arg("check").arg(&media).args(["--ffprobe-exit", "1"]);
    capture_args(&mut cmd, &av_fixtures(), "movie");

    cmd.assert().failure().stderr(predicate::str::contains("ffprobe"));
}
