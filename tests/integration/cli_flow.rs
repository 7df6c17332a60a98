//! Integration tests for the `picroll` binary

use super::common::fixtures::write_png;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn picroll(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("picroll").expect("picroll binary should build");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd.env_remove("PICROLL_DATA_DIR");
    cmd
}

#[test]
fn test_empty_list() {
    let data = TempDir::new().unwrap();

    picroll(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pictures yet"));

    assert!(data.path().join("config.toml").is_file());
    assert!(data.path().join("picroll.db").is_file());
}

#[test]
fn test_add_rename_list() {
    let data = TempDir::new().unwrap();
    let pictures = TempDir::new().unwrap();
    let png = write_png(pictures.path(), "face.png");

    picroll(&data)
        .arg("add")
        .arg(&png)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown"));

    picroll(&data)
        .args(["rename", "0", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));

    let output = picroll(&data)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let entries: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["name"], "Alice");

    let image = entries[0]["image"].as_str().unwrap();
    assert!(data.path().join("images").join(image).is_file());
}

#[test]
fn test_rename_from_stdin() {
    let data = TempDir::new().unwrap();
    let pictures = TempDir::new().unwrap();
    let png = write_png(pictures.path(), "face.png");

    picroll(&data).arg("add").arg(&png).assert().success();

    picroll(&data)
        .args(["rename", "0"])
        .write_stdin("Bob\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"));

    picroll(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"));
}

#[test]
fn test_rename_cancelled_by_eof() {
    let data = TempDir::new().unwrap();
    let pictures = TempDir::new().unwrap();
    let png = write_png(pictures.path(), "face.png");

    picroll(&data).arg("add").arg(&png).assert().success();

    picroll(&data)
        .args(["rename", "0"])
        .write_stdin("")
        .assert()
        .success();

    picroll(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown"));
}

#[test]
fn test_show_prints_image_path() {
    let data = TempDir::new().unwrap();
    let pictures = TempDir::new().unwrap();
    let png = write_png(pictures.path(), "face.png");

    picroll(&data).arg("add").arg(&png).assert().success();

    picroll(&data)
        .args(["show", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("images"));
}

#[test]
fn test_add_missing_file_fails() {
    let data = TempDir::new().unwrap();

    picroll(&data)
        .args(["add", "/no/such/picture.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to add"));
}

#[test]
fn test_rename_unknown_index_fails() {
    let data = TempDir::new().unwrap();

    picroll(&data)
        .args(["rename", "5", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No picture at index 5"));
}
