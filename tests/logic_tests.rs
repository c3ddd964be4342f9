use chrono::NaiveDate;
use pointage::core::calculator::FIXED_WORK_MINUTES;
use pointage::core::del::{DeleteLogic, ResetLogic};
use pointage::core::notify::NullNotifier;
use pointage::core::set::SetLogic;
use pointage::db::initialize::init_db;
use pointage::db::queries::{load_month_records, load_record_by_date};
use pointage::errors::AppError;
use pointage::models::day_times::DayTimes;
use pointage::utils::time::parse_time;

mod common;
use common::{populate_many_records, setup_test_db};

fn open_memory_db() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init db");
    conn
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

#[test]
fn set_creates_then_merges() {
    let conn = open_memory_db();
    let mut notifier = NullNotifier;

    let first = DayTimes {
        start_time: parse_time("08:00"),
        ..Default::default()
    };
    SetLogic::apply(&conn, date("2025-09-01"), &first, FIXED_WORK_MINUTES, &mut notifier)
        .expect("create record");

    // a later set with only the end punch keeps the stored start
    let second = DayTimes {
        end_time: parse_time("16:00"),
        ..Default::default()
    };
    let result =
        SetLogic::apply(&conn, date("2025-09-01"), &second, FIXED_WORK_MINUTES, &mut notifier)
            .expect("merge record");

    let rec = load_record_by_date(&conn, "2025-09-01")
        .expect("query")
        .expect("record exists");
    assert_eq!(rec.start_time.as_deref(), Some("08:00"));
    assert_eq!(rec.end_time.as_deref(), Some("16:00"));

    // no pause punches: morning and afternoon stay empty
    assert_eq!(result.total_minutes, 0);
    assert_eq!(result.expected_end_time(), "--:--");
}

#[test]
fn delete_missing_record_is_an_error() {
    let conn = open_memory_db();
    let mut notifier = NullNotifier;

    let err = DeleteLogic::apply(&conn, date("2025-09-01"), &mut notifier)
        .expect_err("nothing to delete");
    assert!(matches!(err, AppError::NoRecordForDate(d) if d == "2025-09-01"));
}

#[test]
fn reset_reports_removed_count() {
    let db_path = setup_test_db("logic_reset");
    populate_many_records(&db_path, 10);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let mut notifier = NullNotifier;

    let removed = ResetLogic::apply(&conn, &mut notifier).expect("reset");
    assert_eq!(removed, 10);
    assert!(
        load_month_records(&conn, "2025-11")
            .expect("query")
            .is_empty()
    );
}

#[test]
fn month_records_come_back_ordered() {
    let db_path = setup_test_db("logic_month");
    populate_many_records(&db_path, 5);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let records = load_month_records(&conn, "2025-11").expect("query");
    assert_eq!(records.len(), 5);

    let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}
