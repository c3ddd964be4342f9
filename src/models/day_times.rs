use crate::models::work_record::WorkRecord;
use crate::utils::time::parse_time;
use chrono::NaiveTime;

/// The four optional punches of one day, as parsed times of day.
///
/// Fields are independent: any subset may be absent, and a punch may be
/// earlier on the clock than its counterpart. The calculator turns such
/// inversions into negative intervals instead of failing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DayTimes {
    pub start_time: Option<NaiveTime>,
    pub pause_start: Option<NaiveTime>,
    pub pause_end: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl DayTimes {
    /// Convert a stored record into parsed punches. Total by construction:
    /// a field that does not parse as "HH:MM" is treated as absent (stored
    /// values are validated on the way in, so this only matters for rows
    /// written by other tools).
    pub fn from_record(rec: &WorkRecord) -> Self {
        let parse = |f: &Option<String>| f.as_deref().and_then(parse_time);
        Self {
            start_time: parse(&rec.start_time),
            pause_start: parse(&rec.pause_start),
            pause_end: parse(&rec.pause_end),
            end_time: parse(&rec.end_time),
        }
    }
}
