use std::fs;
use std::io::Write as _;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn phonesieve() -> Command {
    Command::cargo_bin("phonesieve").unwrap()
}

fn write_orders_tsv(path: &Path) {
    let mut file = fs::File::create(path).unwrap();
    writeln!(file, "id_order\tdate_order\tnote\tlanguage\tname_sponsor").unwrap();
    writeln!(file, "10\t2025-01-02\t603 123 456\tcs\tNovak").unwrap();
    writeln!(file, "11\t2025-01-02\t+49 151 1234567\t\t").unwrap();
    writeln!(file, "12\t2025-01-03\t+420 801 234 567\t\t").unwrap();
    writeln!(file, "13\t2025-01-03\t\t\t").unwrap();
}

#[test]
fn extract_writes_all_artifacts() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("orders_2025-01-01_2025-01-31.tsv");
    write_orders_tsv(&input);
    let out_dir = dir.path().join("out");

    phonesieve()
        .arg("extract")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success();

    let valid =
        fs::read_to_string(out_dir.join("phone_numbers_2025-01-01_2025-01-31.csv")).unwrap();
    assert!(valid.contains("10,2025-01-02,+420603123456,CZ,cs,Novak"));
    assert!(valid.contains("11,2025-01-02,+491511234567,DE,de,"));

    let invalid =
        fs::read_to_string(out_dir.join("invalid_numbers_2025-01-01_2025-01-31.csv")).unwrap();
    assert!(invalid.contains("12,2025-01-03,+420 801 234 567,+420801234567,CZ"));

    let unique =
        fs::read_to_string(out_dir.join("phone_numbers_unique_2025-01-01_2025-01-31.csv")).unwrap();
    assert_eq!(unique.lines().count(), 3);

    let log =
        fs::read_to_string(out_dir.join("phone_numbers_2025-01-01_2025-01-31.log")).unwrap();
    assert!(log.contains("Total unique orders processed: 4"));
    assert!(log.contains("Total valid phone numbers found: 2"));
    assert!(log.contains("Total invalid phone numbers: 1"));
}

#[test]
fn extract_with_a_single_missing_input_fails() {
    let dir = tempdir().unwrap();
    phonesieve()
        .arg("extract")
        .arg(dir.path().join("missing.tsv"))
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .assert()
        .failure();
}

#[test]
fn extract_skips_a_failing_file_in_a_multi_file_run() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("orders_2025-01-01_2025-01-31.tsv");
    write_orders_tsv(&good);
    let out_dir = dir.path().join("out");

    phonesieve()
        .arg("extract")
        .arg(dir.path().join("missing.tsv"))
        .arg(&good)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success();

    assert!(out_dir.join("phone_numbers_2025-01-01_2025-01-31.csv").exists());
}

#[test]
fn batch_splits_without_breaking_dates() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("phone_numbers_unique.csv");
    let mut file = fs::File::create(&input).unwrap();
    writeln!(file, "id_order,date_order,phone_number,country").unwrap();
    for i in 0..50 {
        writeln!(file, "{i},2025-01-01,+42060123{i:04},CZ").unwrap();
    }
    for i in 0..40 {
        writeln!(file, "{i},2025-01-02,+42072123{i:04},CZ").unwrap();
    }

    let pattern = dir
        .path()
        .join("batches/numbers__{}.csv")
        .to_string_lossy()
        .into_owned();
    phonesieve()
        .arg("batch")
        .arg(&input)
        .arg(&pattern)
        .arg("80")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully created 2 batch files."));

    let first = fs::read_to_string(dir.path().join("batches/numbers__01.csv")).unwrap();
    assert_eq!(first.lines().count(), 51);
    assert!(!first.contains("2025-01-02"));
    let second = fs::read_to_string(dir.path().join("batches/numbers__02.csv")).unwrap();
    assert_eq!(second.lines().count(), 41);
    assert!(!second.contains("2025-01-01"));
}

#[test]
fn batch_rejects_an_empty_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    fs::write(&input, "id_order,date_order,phone_number,country\n").unwrap();

    phonesieve()
        .arg("batch")
        .arg(&input)
        .arg(dir.path().join("out__{}.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no data rows"));
}
