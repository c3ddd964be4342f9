use crate::core::notify::{Change, ChangeNotifier};
use crate::db::queries::{delete_all_records, delete_record_by_date, load_record_by_date};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(
        conn: &rusqlite::Connection,
        date: NaiveDate,
        notifier: &mut dyn ChangeNotifier,
    ) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        if load_record_by_date(conn, &date_str)?.is_none() {
            return Err(AppError::NoRecordForDate(date_str));
        }

        delete_record_by_date(conn, &date_str)?;
        notifier.publish(&Change::new("del", date_str.clone(), "record deleted"))?;

        info(format!("Deleted record for {}", date));
        Ok(())
    }
}

pub struct ResetLogic;

impl ResetLogic {
    /// Delete every record. The caller is responsible for confirmation.
    pub fn apply(conn: &rusqlite::Connection, notifier: &mut dyn ChangeNotifier) -> AppResult<usize> {
        let removed = delete_all_records(conn)?;
        notifier.publish(&Change::new(
            "reset",
            "",
            format!("removed {} records", removed),
        ))?;
        Ok(removed)
    }
}
