use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SCENARIO: &str = r#"
[[element]]
id = "save"
content = "Save changes"

[[step]]
action = "attach"
element = "save"

[[step]]
action = "show"
name = "tippy-1"

[[step]]
action = "report"
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn tipbind(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tipbind").unwrap();
    cmd.env("HOME", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_report() {
    let dir = TempDir::new().unwrap();
    let scenario = write(&dir, "scenario.toml", SCENARIO);

    tipbind(&dir)
        .arg(&scenario)
        .assert()
        .success()
        .stdout("tippy-1 #1 shown Save changes\n");
}

#[test]
fn test_config_prefix_and_defaults() {
    let dir = TempDir::new().unwrap();
    let scenario = write(
        &dir,
        "scenario.toml",
        &SCENARIO.replace("tippy-1", "hint-1"),
    );
    let config = write(
        &dir,
        "config.toml",
        "[registry]\nauto_name_prefix = \"hint\"\n",
    );

    tipbind(&dir)
        .arg(&scenario)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("hint-1 #1 shown"));
}

#[test]
fn test_invalid_config_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    let scenario = write(&dir, "scenario.toml", SCENARIO);
    let config = write(&dir, "config.toml", "[registry\n");

    tipbind(&dir)
        .arg(&scenario)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: Invalid config file"))
        .stdout(predicate::str::contains("tippy-1 #1 shown"));
}

#[test]
fn test_missing_scenario_fails() {
    let dir = TempDir::new().unwrap();

    tipbind(&dir)
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read scenario"));
}

#[test]
fn test_invalid_scenario_fails() {
    let dir = TempDir::new().unwrap();
    let scenario = write(&dir, "scenario.toml", "[[step]]\naction = \"explode\"\n");

    tipbind(&dir)
        .arg(&scenario)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scenario"));
}

#[test]
fn test_requires_scenario_argument() {
    let dir = TempDir::new().unwrap();

    tipbind(&dir).assert().failure();
}
