use crate::core::calculator::daily::calculate_times;
use crate::core::notify::{Change, ChangeNotifier};
use crate::db::queries::{load_record_by_date, upsert_record};
use crate::errors::AppResult;
use crate::models::daily_result::DailyResult;
use crate::models::day_times::DayTimes;
use crate::models::work_record::WorkRecord;
use crate::utils::time::format_time;
use chrono::NaiveDate;

/// High-level business logic for the `set` command.
pub struct SetLogic;

impl SetLogic {
    /// Upsert the punches for one date.
    ///
    /// Punches given on the command line overwrite the stored ones; punches
    /// left out keep their stored value. Returns the recomputed breakdown
    /// for the merged day so the caller can print it.
    pub fn apply(
        conn: &rusqlite::Connection,
        date: NaiveDate,
        punches: &DayTimes,
        quota: i64,
        notifier: &mut dyn ChangeNotifier,
    ) -> AppResult<DailyResult> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let existing = load_record_by_date(conn, &date_str)?;

        let merge = |new: Option<chrono::NaiveTime>, old: &Option<String>| {
            new.map(format_time).or_else(|| old.clone())
        };

        let (old_start, old_ps, old_pe, old_end) = match &existing {
            Some(rec) => (
                rec.start_time.clone(),
                rec.pause_start.clone(),
                rec.pause_end.clone(),
                rec.end_time.clone(),
            ),
            None => (None, None, None, None),
        };

        let merged = WorkRecord {
            id: existing.as_ref().map(|r| r.id).unwrap_or(0),
            date: date_str.clone(),
            start_time: merge(punches.start_time, &old_start),
            pause_start: merge(punches.pause_start, &old_ps),
            pause_end: merge(punches.pause_end, &old_pe),
            end_time: merge(punches.end_time, &old_end),
        };

        upsert_record(conn, &merged)?;

        let action = if existing.is_some() { "updated" } else { "created" };
        notifier.publish(&Change::new(
            "set",
            date_str.clone(),
            format!(
                "{} record: start={} pause={}..{} end={}",
                action,
                merged.start_time.as_deref().unwrap_or("-"),
                merged.pause_start.as_deref().unwrap_or("-"),
                merged.pause_end.as_deref().unwrap_or("-"),
                merged.end_time.as_deref().unwrap_or("-"),
            ),
        ))?;

        Ok(calculate_times(&DayTimes::from_record(&merged), quota))
    }
}
