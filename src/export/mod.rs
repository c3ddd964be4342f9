mod csv;
mod json;
mod model;

pub use model::RecordExport;

use crate::core::calculator::balance::day_status;
use crate::core::calculator::daily::calculate_times;
use crate::db::queries::load_month_records;
use crate::errors::{AppError, AppResult};
use crate::models::day_times::DayTimes;
use crate::models::work_record::WorkRecord;
use crate::ui::messages::success;
use crate::utils::date::month_key;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Resolve the records for an export period: "YYYY-MM" for one month or
/// "YYYY" for a whole year. No period exports the current year.
pub fn load_period_records(conn: &rusqlite::Connection, period: Option<&str>) -> AppResult<Vec<WorkRecord>> {
    match period {
        Some(p) => {
            if let Some((year, month)) = crate::utils::date::parse_month(p) {
                return load_month_records(conn, &month_key(year, month));
            }
            if let Ok(year) = p.parse::<i32>() {
                return load_year_records(conn, year);
            }
            Err(AppError::InvalidDate(p.to_string()))
        }
        None => {
            let (year, _) = crate::utils::date::current_month();
            load_year_records(conn, year)
        }
    }
}

fn load_year_records(conn: &rusqlite::Connection, year: i32) -> AppResult<Vec<WorkRecord>> {
    let mut out = Vec::new();
    for month in 1..=12 {
        out.extend(load_month_records(conn, &month_key(year, month))?);
    }
    Ok(out)
}

/// Flatten records together with their computed daily breakdown.
pub fn to_export_rows(records: &[WorkRecord], quota: i64) -> Vec<RecordExport> {
    records
        .iter()
        .map(|rec| {
            let result = calculate_times(&DayTimes::from_record(rec), quota);
            let status = day_status(Some(rec), quota);
            RecordExport::new(rec, &result, status)
        })
        .collect()
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn write(format: &ExportFormat, path: &str, rows: &[RecordExport]) -> AppResult<()> {
        match format {
            ExportFormat::Csv => csv::write_csv(path, rows)?,
            ExportFormat::Json => json::write_json(path, rows)?,
        }

        notify_export_success(format.as_str(), Path::new(path));
        Ok(())
    }
}

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
