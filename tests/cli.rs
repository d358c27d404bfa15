//! Command-line driver tests

mod common;

use assert_cmd::Command;
use common::{mit_weights_path, write_cfd_table, write_reference_cfd_table, GUIDE, TARGET};
use std::fs;
use std::path::Path;

/// Binary with no table configuration inherited from the environment
fn bare_command() -> Command {
    let mut cmd = Command::cargo_bin("offtarget_score").unwrap();
    for var in [
        "OFFTARGET_CONFIG",
        "OFFTARGET_DATA_DIR",
        "OFFTARGET_CFD_TABLE",
        "OFFTARGET_MIT_WEIGHTS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn offtarget_score(cfd_table: &Path) -> Command {
    let mut cmd = bare_command();
    cmd.arg("--cfd-table")
        .arg(cfd_table)
        .arg("--mit-weights")
        .arg(mit_weights_path());
    cmd
}

#[test]
fn test_single_pair() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());

    offtarget_score(&table)
        .args(["singlePair", GUIDE, TARGET])
        .assert()
        .success()
        .stdout("CFD\t0.692308\tMIT\t1\n");
}

#[test]
fn test_cfd_only() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());

    offtarget_score(&table)
        .args(["cfd", GUIDE, TARGET])
        .assert()
        .success()
        .stdout("0.692308\n");
}

#[test]
fn test_cfd_only_does_not_need_mit_weights() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());

    bare_command()
        .arg("--cfd-table")
        .arg(&table)
        .arg("--mit-weights")
        .arg(dir.path().join("absent.txt"))
        .args(["cfd", GUIDE, TARGET])
        .assert()
        .success()
        .stdout("0.692308\n");
}

#[test]
fn test_cfd_only_json() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());

    let output = offtarget_score(&table)
        .args(["--format", "json", "cfd", GUIDE, TARGET])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["guide"], GUIDE);
    assert!((record["cfd"].as_f64().unwrap() - 0.692307692).abs() < 1e-12);
}

#[test]
fn test_config_file_disables_distance() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());
    let config = dir.path().join("scorer.json");
    let json = serde_json::json!({
        "cfd_table": table,
        "mit_weights": mit_weights_path(),
        "include_distance": false,
    });
    fs::write(&config, json.to_string()).unwrap();

    bare_command()
        .arg("--config")
        .arg(&config)
        .args(["singlePair", GUIDE, "TTCGATGCTGATCCTAGATAAGG"])
        .assert()
        .success()
        .stdout("CFD\t0.384615\tMIT\t0.09675\n");
}

#[test]
fn test_data_dir_keeps_config_distance_flag() {
    let dir = tempfile::tempdir().unwrap();
    write_reference_cfd_table(dir.path());
    fs::copy(mit_weights_path(), dir.path().join("MIT_Weights.txt")).unwrap();
    let config = dir.path().join("scorer.json");
    fs::write(&config, r#"{ "include_distance": false }"#).unwrap();

    bare_command()
        .arg("--config")
        .arg(&config)
        .arg("--data-dir")
        .arg(dir.path())
        .args(["singlePair", GUIDE, "TTCGATGCTGATCCTAGATAAGG"])
        .assert()
        .success()
        .stdout("CFD\t0.384615\tMIT\t0.09675\n");
}

#[test]
fn test_data_dir_from_env() {
    let dir = tempfile::tempdir().unwrap();
    write_reference_cfd_table(dir.path());
    fs::copy(mit_weights_path(), dir.path().join("MIT_Weights.txt")).unwrap();

    bare_command()
        .env("OFFTARGET_DATA_DIR", dir.path())
        .args(["singlePair", GUIDE, TARGET])
        .assert()
        .success()
        .stdout("CFD\t0.692308\tMIT\t1\n");
}

#[test]
fn test_cfd_table_flag_overrides_env_data_dir() {
    // Table in the data dir lacks rU:dG_2, so it would score the pair 0
    let env_dir = tempfile::tempdir().unwrap();
    write_cfd_table(env_dir.path(), &[("GG", 1.0)]);
    fs::copy(mit_weights_path(), env_dir.path().join("MIT_Weights.txt")).unwrap();

    let flag_dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(flag_dir.path());

    bare_command()
        .env("OFFTARGET_DATA_DIR", env_dir.path())
        .arg("--cfd-table")
        .arg(&table)
        .args(["singlePair", GUIDE, TARGET])
        .assert()
        .success()
        .stdout("CFD\t0.692308\tMIT\t1\n");
}

#[test]
fn test_pair_list() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());
    let list = dir.path().join("pairs.txt");
    fs::write(
        &list,
        format!(
            "crRNA\tDNA\n{}\t{}\n{}\t{}\n{}\tATCGATGCTGATGCTAGATAACT\n",
            GUIDE, TARGET, GUIDE, GUIDE, GUIDE
        ),
    )
    .unwrap();

    let expected = format!(
        "crRNA\tDNA\tCFD\tMIT\n{}\t{}\t0.692308\t1\n{}\t{}\t1\t1\n{}\tATCGATGCTGATGCTAGATAACT\t0\t0\n",
        GUIDE, TARGET, GUIDE, GUIDE, GUIDE
    );

    offtarget_score(&table)
        .arg("pairList")
        .arg(&list)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_pair_list_json() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());
    let list = dir.path().join("pairs.txt");
    fs::write(&list, format!("crRNA\tDNA\n{}\t{}\n", GUIDE, TARGET)).unwrap();

    let output = offtarget_score(&table)
        .args(["--format", "json", "pairList"])
        .arg(&list)
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["target"], TARGET);
    assert_eq!(record["mit"], 1.0);
}

#[test]
fn test_no_distance_flag() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());

    // Mismatches at positions 1 and 13: MIT = 0.387 / 4 without the distance term
    offtarget_score(&table)
        .args(["--no-distance", "singlePair", GUIDE, "TTCGATGCTGATCCTAGATAAGG"])
        .assert()
        .success()
        .stdout("CFD\t0.384615\tMIT\t0.09675\n");
}

#[test]
fn test_short_sequence_fails() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());

    offtarget_score(&table)
        .args(["singlePair", "ATCGATGCTGATG", TARGET])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_malformed_pair_list_fails() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());
    let list = dir.path().join("pairs.txt");
    fs::write(&list, format!("crRNA\tDNA\n{}\n", GUIDE)).unwrap();

    offtarget_score(&table)
        .arg("pairList")
        .arg(&list)
        .assert()
        .failure();
}

#[test]
fn test_short_row_in_pair_list_names_its_line() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_reference_cfd_table(dir.path());
    let list = dir.path().join("pairs.txt");
    fs::write(
        &list,
        format!("crRNA\tDNA\n{}\t{}\n{}\tACCGATGCTG\n{}\t{}\n", GUIDE, TARGET, GUIDE, GUIDE, TARGET),
    )
    .unwrap();

    let output = offtarget_score(&table).arg("pairList").arg(&list).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3"), "{}", stderr);
    // Piped stderr carries no colour codes
    assert!(!stderr.contains('\x1b'), "{:?}", stderr);
}

#[test]
fn test_missing_cfd_table_fails() {
    let dir = tempfile::tempdir().unwrap();

    offtarget_score(&dir.path().join("absent.txt"))
        .args(["singlePair", GUIDE, TARGET])
        .assert()
        .failure();
}
