use crate::errors::AppResult;
use crate::export::model::{RecordExport, get_headers};
use csv::Writer;

/// Write the export rows as CSV.
pub fn write_csv(path: &str, rows: &[RecordExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(&[
            row.date.as_str(),
            row.start_time.as_str(),
            row.pause_start.as_str(),
            row.pause_end.as_str(),
            row.end_time.as_str(),
            row.morning_work.as_str(),
            row.pause_time.as_str(),
            row.afternoon_work.as_str(),
            row.total_work.as_str(),
            row.expected_end_time.as_str(),
            row.delta_time.as_str(),
            row.status.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
