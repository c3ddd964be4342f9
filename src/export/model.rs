use crate::models::daily_result::DailyResult;
use crate::models::day_status::DayStatus;
use crate::models::work_record::WorkRecord;
use serde::Serialize;

/// Flat row for export: the stored punches plus the computed breakdown.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub date: String,
    pub start_time: String,
    pub pause_start: String,
    pub pause_end: String,
    pub end_time: String,
    pub morning_work: String,
    pub pause_time: String,
    pub afternoon_work: String,
    pub total_work: String,
    pub expected_end_time: String,
    pub delta_time: String,
    pub status: String,
}

impl RecordExport {
    pub fn new(rec: &WorkRecord, result: &DailyResult, status: DayStatus) -> Self {
        let field = |f: &Option<String>| f.clone().unwrap_or_default();
        Self {
            date: rec.date.clone(),
            start_time: field(&rec.start_time),
            pause_start: field(&rec.pause_start),
            pause_end: field(&rec.pause_end),
            end_time: field(&rec.end_time),
            morning_work: result.morning_work(),
            pause_time: result.pause_time(),
            afternoon_work: result.afternoon_work(),
            total_work: result.total_work(),
            expected_end_time: result.expected_end_time(),
            delta_time: result.delta_time(),
            status: status.as_str().to_string(),
        }
    }
}

/// Header for CSV exports.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "start_time",
        "pause_start",
        "pause_end",
        "end_time",
        "morning_work",
        "pause_time",
        "afternoon_work",
        "total_work",
        "expected_end_time",
        "delta_time",
        "status",
    ]
}
