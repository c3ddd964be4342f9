use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, ptg, setup_test_db, temp_out};

#[test]
fn test_export_csv_month() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    ptg()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--period",
            "2025-09",
        ])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let mut lines = content.lines();
    let header = lines.next().expect("header line");
    assert!(header.starts_with("date,start_time,pause_start"));
    assert!(header.ends_with("delta_time,status"));

    // one on-quota day and one short day
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("+00:00"));
    assert!(content.contains("on target"));
    assert!(content.contains("2025-09-02"));
    assert!(content.contains("-00:18"));
    assert!(content.contains("under"));
}

#[test]
fn test_export_json_year() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    ptg()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--period",
            "2025",
        ])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2025-09-01");
    assert_eq!(rows[0]["delta_time"], "+00:00");
    assert_eq!(rows[0]["expected_end_time"], "16:18");
    assert_eq!(rows[1]["delta_time"], "-00:18");
}

#[test]
fn test_export_empty_period_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_data(&db_path);

    ptg()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--period",
            "2024-01",
        ])
        .assert()
        .success()
        .stdout(contains("No records to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rejects_invalid_period() {
    let db_path = setup_test_db("export_bad_period");
    init_db_with_data(&db_path);

    ptg()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            "/tmp/unused.csv",
            "--period",
            "septembre",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}
