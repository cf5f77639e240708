// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! End-to-end tests against a fake SDK script

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Logs its argv, fails for subcommands listed in FAKE_SDK_FAIL
const FAKE_SDK: &str = r#"#!/bin/sh
echo "$@" >> "$FAKE_SDK_LOG"
case " $FAKE_SDK_FAIL " in
  *" $1 "*) echo "$1 went wrong" >&2; exit 1 ;;
esac
echo "$1 ok"
"#;

struct Workspace {
    dir: TempDir,
    sdk: PathBuf,
    log: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let sdk = dir.path().join("fake-sdk");
        fs::write(&sdk, FAKE_SDK).unwrap();
        fs::set_permissions(&sdk, fs::Permissions::from_mode(0o755)).unwrap();
        let log = dir.path().join("calls.log");
        Self { dir, sdk, log }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cmd(&self, failing: &str) -> Command {
        let mut cmd = Command::cargo_bin("packflow").unwrap();
        cmd.current_dir(self.path())
            .env("FAKE_SDK_LOG", &self.log)
            .env("FAKE_SDK_FAIL", failing)
            .env_remove("RUST_LOG")
            .arg("--sdk")
            .arg(&self.sdk);
        cmd
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_unknown_command_fails_without_running_sdk() {
    let ws = Workspace::new();

    ws.cmd("")
        .args(["deploy", "Packs/A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deploy"));

    assert!(ws.calls().is_empty());
}

#[test]
fn test_single_command_success() {
    let ws = Workspace::new();

    let output = ws
        .cmd("")
        .args(["format", "Packs/A", "--update-docker"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["return_code"], 0);
    assert_eq!(json["stdout"], "format ok\n");
    assert_eq!(ws.calls(), ["format -i Packs/A -y -ud"]);
}

#[test]
fn test_single_command_failure_exits_one() {
    let ws = Workspace::new();

    let output = ws
        .cmd("validate")
        .args(["validate", "Packs/A"])
        .assert()
        .code(1)
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["return_code"], 1);
    assert_eq!(json["stderr"], "validate went wrong\n");
}

#[test]
fn test_validate_format_runs_both_steps() {
    let ws = Workspace::new();

    let output = ws
        .cmd("format")
        .args(["validate-format", "Packs/A"])
        .assert()
        .code(1)
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["overall_success"], false);
    assert_eq!(json["format"]["success"], false);
    assert_eq!(json["validate"]["success"], true);
    assert_eq!(ws.calls().len(), 2);
}

#[test]
fn test_pipeline_stops_after_failed_format() {
    let ws = Workspace::new();

    let output = ws
        .cmd("format")
        .args(["pipeline", "Packs/A", "--upload"])
        .assert()
        .code(1)
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["overall_success"], false);
    let steps = json["steps"].as_object().unwrap();
    assert_eq!(steps.keys().collect::<Vec<_>>(), ["format"]);
    assert_eq!(ws.calls().len(), 1);
}

#[test]
fn test_pipeline_generates_docs_for_visible_descriptors() {
    let ws = Workspace::new();
    let pack = ws.path().join("Packs").join("A");
    fs::create_dir_all(&pack).unwrap();
    for name in ["a.yml", "_hidden.yml", "b.yml"] {
        fs::write(pack.join(name), "commonfields: {}\n").unwrap();
    }

    let output = ws
        .cmd("")
        .args(["pipeline", "Packs/A", "--no-lint"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["overall_success"], true);
    assert_eq!(json["path"], "Packs/A");
    let steps = json["steps"].as_object().unwrap();
    assert!(steps.contains_key("docs_a"));
    assert!(steps.contains_key("docs_b"));
    assert!(!steps.contains_key("docs__hidden"));
    assert!(!steps.contains_key("lint"));

    assert_eq!(
        ws.calls(),
        [
            "format -i Packs/A -y",
            "validate -i Packs/A",
            "generate-docs -i Packs/A/a.yml -f",
            "generate-docs -i Packs/A/b.yml -f",
        ]
    );
}

#[test]
fn test_config_file_sets_defaults() {
    let ws = Workspace::new();
    fs::write(
        ws.path().join(".packflow.yaml"),
        "init:\n  output_dir: content/Packs\n",
    )
    .unwrap();

    ws.cmd("").args(["init-pack", "MyPack"]).assert().success();

    assert_eq!(ws.calls(), ["init --pack -n MyPack -o content/Packs"]);
}

#[test]
fn test_yaml_output() {
    let ws = Workspace::new();

    ws.cmd("")
        .args(["--output", "yaml", "lint", "Packs/A", "--no-docker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("return_code: 0"));

    assert_eq!(ws.calls(), ["lint -i Packs/A --no-docker"]);
}

#[test]
fn test_missing_sdk_binary_fails() {
    let ws = Workspace::new();

    Command::cargo_bin("packflow")
        .unwrap()
        .current_dir(ws.path())
        .args(["--sdk", "./not-installed-sdk", "upload", "Packs/A"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_upload_warns_about_missing_credentials() {
    let ws = Workspace::new();

    ws.cmd("")
        .env_remove("DEMISTO_BASE_URL")
        .env_remove("DEMISTO_API_KEY")
        .args(["-v", "upload", "Packs/A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEMISTO_BASE_URL"))
        .stderr(predicate::str::contains("DEMISTO_API_KEY"));

    assert_eq!(ws.calls(), ["upload -i Packs/A"]);
}

#[test]
fn test_pipeline_insecure_with_upload_from_config() {
    let ws = Workspace::new();
    fs::write(
        ws.path().join(".packflow.yaml"),
        "pipeline:\n  lint: false\n  docs: false\n  upload: true\n",
    )
    .unwrap();

    ws.cmd("")
        .args(["pipeline", "Packs/A", "--insecure"])
        .assert()
        .success();

    assert_eq!(
        ws.calls(),
        [
            "format -i Packs/A -y",
            "validate -i Packs/A",
            "upload -i Packs/A --insecure",
        ]
    );
}
