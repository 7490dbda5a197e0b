//! Behavioural tests for configuration layering.
//!
//! These tests run the `rule-merge` binary with configuration files and
//! environment variables so we assert the precedence of each source and that
//! config-loading failures are reported consistently.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn seed(dir: &TempDir, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("write list");
    }
}

fn read(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name)).expect("read list")
}

fn command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rule-merge").expect("binary");
    cmd.current_dir(dir.path())
        .env_remove("RULE_MERGE_ROOT")
        .env_remove("RULE_MERGE_TARGET")
        .env_remove("RULE_MERGE_MERGE")
        .env_remove("RULE_MERGE_CONFIG_PATH")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"));
    cmd
}

#[test]
fn config_file_selects_lists() {
    let dir = TempDir::new().expect("create temp dir");
    seed(&dir, &[("t.list", "2\n"), ("m.list", "1\n")]);
    let config = dir.path().join("rule-merge.toml");
    fs::write(
        &config,
        format!(
            "root = {:?}\ntarget = \"t.list\"\nmerge = \"m.list\"\n",
            dir.path().display().to_string()
        ),
    )
    .expect("write config");

    command(&dir)
        .env("RULE_MERGE_CONFIG_PATH", &config)
        .assert()
        .success();

    assert_eq!(read(&dir, "t.list"), "1\n2\n");
}

#[test]
fn environment_selects_lists() {
    let dir = TempDir::new().expect("create temp dir");
    seed(&dir, &[("t.list", "b\n"), ("m.list", "a\n")]);

    command(&dir)
        .env("RULE_MERGE_ROOT", dir.path())
        .env("RULE_MERGE_TARGET", "t.list")
        .env("RULE_MERGE_MERGE", "m.list")
        .assert()
        .success();

    assert_eq!(read(&dir, "t.list"), "a\nb\n");
}

#[test]
fn cli_overrides_environment() {
    let dir = TempDir::new().expect("create temp dir");
    seed(
        &dir,
        &[("env.list", "env\n"), ("cli.list", "cli\n"), ("m.list", "m\n")],
    );

    command(&dir)
        .env("RULE_MERGE_ROOT", dir.path())
        .env("RULE_MERGE_TARGET", "env.list")
        .env("RULE_MERGE_MERGE", "m.list")
        .args(["--target", "cli.list"])
        .assert()
        .success();

    assert_eq!(read(&dir, "cli.list"), "cli\nm\n");
    assert_eq!(read(&dir, "env.list"), "env\n");
}

#[test]
fn invalid_config_file_reports_configuration_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("rule-merge.toml");
    fs::write(&path, "not = [valid").expect("write broken config");

    command(&dir)
        .env("RULE_MERGE_CONFIG_PATH", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn missing_config_path_reports_configuration_error() {
    let dir = TempDir::new().expect("create temp dir");
    seed(&dir, &[("t.list", "b\n"), ("m.list", "a\n")]);

    command(&dir)
        .env("RULE_MERGE_CONFIG_PATH", dir.path().join("absent.toml"))
        .args(["--target", "t.list", "--merge", "m.list"])
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));

    assert_eq!(read(&dir, "t.list"), "b\n");
}

#[test]
fn working_directory_dotfile_is_discovered() {
    let dir = TempDir::new().expect("create temp dir");
    seed(&dir, &[("t.list", "b\n"), ("m.list", "a\n")]);
    fs::write(
        dir.path().join(".rule_merge.toml"),
        "target = \"t.list\"\nmerge = \"m.list\"\n",
    )
    .expect("write config");

    command(&dir).arg("--root").arg(dir.path()).assert().success();

    assert_eq!(read(&dir, "t.list"), "a\nb\n");
}

#[test]
fn environment_overrides_discovered_file() {
    let dir = TempDir::new().expect("create temp dir");
    seed(
        &dir,
        &[("file.list", "f\n"), ("env.list", "e\n"), ("m.list", "m\n")],
    );
    let xdg = dir.path().join("xdg").join("rule_merge");
    fs::create_dir_all(&xdg).expect("create xdg dir");
    fs::write(
        xdg.join("config.toml"),
        "target = \"file.list\"\nmerge = \"m.list\"\n",
    )
    .expect("write config");

    command(&dir)
        .env("RULE_MERGE_ROOT", dir.path())
        .env("RULE_MERGE_TARGET", "env.list")
        .assert()
        .success();

    assert_eq!(read(&dir, "env.list"), "e\nm\n");
    assert_eq!(read(&dir, "file.list"), "f\n");
}
