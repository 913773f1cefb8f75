use std::fs;

use assert_cmd::Command;

fn bin() -> Command {
    Command::cargo_bin("rarefaction-summary").unwrap()
}

#[test]
fn csv_subcommand_writes_prefixed_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("observed");

    bin()
        .args(["csv", "--csv", "tests/fixtures/observed_features.csv", "--iterations", "3"])
        .args(["--method", "mean", "--out-prefix"])
        .arg(&prefix)
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("observed.tsv")).unwrap();
    assert!(text.starts_with("samples\\depth\t10\t100\n"));
    assert!(text.contains("S2\t3,3333333333333335\t32,0\n"));
}

#[test]
fn jsonp_subcommand_writes_prefixed_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("groups");

    bin()
        .args(["jsonp", "--jsonp", "tests/fixtures/group_means.jsonp", "--out-prefix"])
        .arg(&prefix)
        .assert()
        .success();

    assert!(dir.path().join("groups.tsv").exists());
}

#[test]
fn inconsistent_depths_exit_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("groups");

    let assert = bin()
        .args(["jsonp", "--jsonp", "tests/fixtures/mismatched_depths.jsonp", "--out-prefix"])
        .arg(&prefix)
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("depths don't match"));
    assert!(!dir.path().join("groups.tsv").exists());
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();

    bin()
        .args(["csv", "--csv", "tests/fixtures/does_not_exist.csv", "--method", "median"])
        .arg("--out-prefix")
        .arg(dir.path().join("out"))
        .assert()
        .failure();
}
