#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("shiftgrid-cli").unwrap()
}

#[test]
fn import_then_day_view() {
    let dir = tempdir().unwrap();
    let planning = dir.path().join("planning.json");
    let csv = dir.path().join("entries.csv");
    fs::write(
        &csv,
        "date,start,end,label\n\
         2025-10-01,09:00,10:00,A\n\
         2025-10-01,09:30,09:45,B\n\
         2025-10-01,10:00,11:00,C\n",
    )
    .unwrap();

    cli()
        .arg("--planning")
        .arg(&planning)
        .args(["import", "--csv"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3"));

    let out_csv = dir.path().join("day.csv");
    cli()
        .arg("--planning")
        .arg(&planning)
        .args(["day", "--date", "2025-10-01", "--out-csv"])
        .arg(&out_csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 block(s) | 2 lane(s)"))
        .stdout(predicate::str::contains("[1/2] 09:30 → 09:45 B"));

    let exported = fs::read_to_string(&out_csv).unwrap();
    assert!(exported.contains("2025-10-01,C,10:00,11:00,0,2"));
}

#[test]
fn add_rejects_bad_time() {
    let dir = tempdir().unwrap();
    let planning = dir.path().join("planning.json");
    cli()
        .arg("--planning")
        .arg(&planning)
        .args(["add", "--label", "A", "--start", "9h", "--date", "2025-10-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time value"));
    assert!(!planning.exists());
}

#[test]
fn remove_unknown_entry_fails() {
    let dir = tempdir().unwrap();
    let planning = dir.path().join("planning.json");
    cli()
        .arg("--planning")
        .arg(&planning)
        .args(["remove", "--id", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown entry: nope"));
}

#[test]
fn week_view_lists_seven_days() {
    let dir = tempdir().unwrap();
    let planning = dir.path().join("planning.json");
    cli()
        .arg("--planning")
        .arg(&planning)
        .args([
            "add", "--label", "Ana", "--start", "09:00", "--end", "17:00", "--date", "2025-10-02",
        ])
        .assert()
        .success();

    cli()
        .arg("--planning")
        .arg(&planning)
        .args(["week", "--date", "2025-10-05", "--offset", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 2025-09-22 → 2025-09-28"));

    cli()
        .arg("--planning")
        .arg(&planning)
        .args(["week", "--date", "2025-10-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 2025-09-29 → 2025-10-05"))
        .stdout(predicate::str::contains("Thu 2025-10-02 | 1 block(s) | 1 lane(s)"));
}

#[test]
fn week_offset_out_of_range_is_an_error() {
    let dir = tempdir().unwrap();
    let planning = dir.path().join("planning.json");
    cli()
        .arg("--planning")
        .arg(&planning)
        .args(["week", "--date", "2025-10-01", "--offset", "100000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of calendar range"))
        .stderr(predicate::str::contains("panicked").not());
}
