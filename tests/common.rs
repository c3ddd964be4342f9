#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ptg() -> Command {
    cargo_bin_cmd!("pointage")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pointage.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    ptg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // one on-quota day and one short day
    ptg()
        .args([
            "--db",
            db_path,
            "set",
            "2025-09-01",
            "--start",
            "08:00",
            "--pause-start",
            "12:00",
            "--pause-end",
            "12:30",
            "--end",
            "16:18",
        ])
        .assert()
        .success();

    ptg()
        .args([
            "--db",
            db_path,
            "set",
            "2025-09-02",
            "--start",
            "08:00",
            "--pause-start",
            "12:00",
            "--pause-end",
            "12:30",
            "--end",
            "16:00",
        ])
        .assert()
        .success();
}

/// Populate many records directly via the library DB API
pub fn populate_many_records(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    pointage::db::initialize::init_db(&conn).expect("init db");
    for i in 0..n {
        let day = (i % 28) + 1; // 1..28
        let rec = pointage::models::work_record::WorkRecord {
            id: 0,
            date: format!("2025-11-{day:02}"),
            start_time: Some("08:00".into()),
            pause_start: Some("12:00".into()),
            pause_end: Some("12:30".into()),
            end_time: Some("16:18".into()),
        };
        pointage::db::queries::upsert_record(&conn, &rec).expect("upsert record");
    }
}
