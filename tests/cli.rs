use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FLIGHTS: &str = "fl_date,op_carrier,origin,dest
2024-01-05,AA,JFK,LAX
2024-01-01,DL,ATL,SEA
2024-01-10,UA,ORD,SFO
";

fn workdir_with(content: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(dir.path().join("flight_data_2024.csv"), content).expect("write csv");
    dir
}

fn reporter(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_flightreport"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_count_and_range() {
    let dir = workdir_with(FLIGHTS);
    reporter(&dir)
        .assert()
        .success()
        .stdout("Total records: 3\nDate range: 2024-01-01 to 2024-01-10\n");
}

#[test]
fn groups_large_counts() {
    let mut content = String::from("fl_date,origin\n");
    for i in 0..12_345 {
        content.push_str(&format!("2024-{:02}-{:02},X\n", i % 12 + 1, i % 28 + 1));
    }
    let dir = workdir_with(&content);
    reporter(&dir)
        .assert()
        .success()
        .stdout("Total records: 12,345\nDate range: 2024-01-01 to 2024-12-28\n");
}

#[test]
fn missing_file_exits_nonzero() {
    let dir = tempfile::tempdir().expect("create tempdir");
    reporter(&dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("loading flight records"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn missing_date_column_exits_nonzero() {
    let dir = workdir_with("date,origin\n2024-01-01,JFK\n");
    reporter(&dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("computing date range"))
        .stderr(predicate::str::contains("fl_date"));
}

#[test]
fn malformed_row_exits_nonzero() {
    let dir = workdir_with("fl_date,origin,dest\n2024-01-01,JFK\n");
    reporter(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = workdir_with(FLIGHTS);
    let first = reporter(&dir).assert().success().get_output().stdout.clone();
    let second = reporter(&dir).assert().success().get_output().stdout.clone();
    assert_eq!(first, second);
}
