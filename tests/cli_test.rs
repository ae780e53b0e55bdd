//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn java_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pom.xml"), "<project/>").unwrap();
    fs::create_dir_all(temp.path().join("config")).unwrap();
    fs::write(
        temp.path().join("config/application.properties"),
        "server.port=8080\n",
    )
    .unwrap();
    fs::write(temp.path().join("README.md"), "# demo\n").unwrap();
    temp
}

#[test]
fn scan_reports_verdicts_for_a_java_project() {
    let temp = java_project();

    Command::cargo_bin("praxis")
        .unwrap()
        .arg("scan")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Java"))
        .stdout(predicate::str::contains("Properties File Used"))
        .stdout(predicate::str::contains("practicing"));
}

#[test]
fn scan_json_output_parses() {
    let temp = java_project();

    let output = Command::cargo_bin("praxis")
        .unwrap()
        .arg("scan")
        .arg(temp.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["language"], "Java");
    let outcomes = value["outcomes"].as_array().unwrap();
    assert!(outcomes
        .iter()
        .any(|o| o["id"] == "properties-file-used" && o["evaluation"] == "practicing"));
}

#[test]
fn scan_fails_on_missing_directory() {
    Command::cargo_bin("praxis")
        .unwrap()
        .arg("scan")
        .arg("/definitely/not/a/dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project root not found"));
}
