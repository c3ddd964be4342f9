use crate::errors::{AppError, AppResult};
use crate::models::work_record::WorkRecord;
use crate::utils::time::parse_time;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Validate an optional stored time field. Malformed values are rejected at
/// the row-mapping boundary so the calculator never sees them.
fn checked_time(idx: usize, value: Option<String>) -> Result<Option<String>> {
    if let Some(s) = &value
        && parse_time(s).is_none()
    {
        return Err(rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(s.clone())),
        ));
    }
    Ok(value)
}

pub fn map_row(row: &Row) -> Result<WorkRecord> {
    let date: String = row.get("date")?;

    if crate::utils::date::parse_date(&date).is_none() {
        return Err(rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date)),
        ));
    }

    Ok(WorkRecord {
        id: row.get("id")?,
        date,
        start_time: checked_time(2, row.get("start_time")?)?,
        pause_start: checked_time(3, row.get("pause_start")?)?,
        pause_end: checked_time(4, row.get("pause_end")?)?,
        end_time: checked_time(5, row.get("end_time")?)?,
    })
}

/// Fetch at most one record for the given "YYYY-MM-DD" date.
pub fn load_record_by_date(conn: &Connection, date: &str) -> AppResult<Option<WorkRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, start_time, pause_start, pause_end, end_time
         FROM working_hours
         WHERE date = ?1",
    )?;

    let rec = stmt.query_row([date], map_row).optional()?;
    Ok(rec)
}

/// Fetch all records of a "YYYY-MM" month, ordered by date ascending.
pub fn load_month_records(conn: &Connection, year_month: &str) -> AppResult<Vec<WorkRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, start_time, pause_start, pause_end, end_time
         FROM working_hours
         WHERE date LIKE ?1 || '-%'
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([year_month], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert the record, or overwrite the four time fields when the date
/// already exists.
pub fn upsert_record(conn: &Connection, rec: &WorkRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO working_hours (date, start_time, pause_start, pause_end, end_time)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(date) DO UPDATE SET
             start_time  = excluded.start_time,
             pause_start = excluded.pause_start,
             pause_end   = excluded.pause_end,
             end_time    = excluded.end_time",
        params![
            rec.date,
            rec.start_time,
            rec.pause_start,
            rec.pause_end,
            rec.end_time,
        ],
    )?;
    Ok(())
}

pub fn delete_record_by_date(conn: &Connection, date: &str) -> AppResult<()> {
    conn.execute("DELETE FROM working_hours WHERE date = ?1", [date])?;
    Ok(())
}

/// Bulk delete. Returns the number of removed records.
pub fn delete_all_records(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM working_hours", [])?;
    Ok(n)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM working_hours", [], |row| row.get(0))?;
    Ok(n)
}
