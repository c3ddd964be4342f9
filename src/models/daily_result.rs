use crate::utils::time::{delta_to_hhmm, format_time, min_to_hhmm};
use chrono::NaiveTime;

/// Sentinel shown when the expected end of day cannot be computed.
pub const UNKNOWN_TIME: &str = "--:--";

/// Derived breakdown of one day's punches against the daily quota.
///
/// All minute quantities are signed: a pause taken "backwards" produces a
/// negative interval that folds into the total and the delta.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DailyResult {
    pub pause_minutes: i64,
    pub morning_minutes: i64,
    pub afternoon_minutes: i64,
    pub total_minutes: i64,
    pub delta_minutes: i64,
    pub expected_end: Option<NaiveTime>,
}

impl DailyResult {
    pub fn pause_time(&self) -> String {
        min_to_hhmm(self.pause_minutes)
    }

    pub fn morning_work(&self) -> String {
        min_to_hhmm(self.morning_minutes)
    }

    pub fn afternoon_work(&self) -> String {
        min_to_hhmm(self.afternoon_minutes)
    }

    pub fn total_work(&self) -> String {
        min_to_hhmm(self.total_minutes)
    }

    /// Always signed, `+00:00` for an on-quota day.
    pub fn delta_time(&self) -> String {
        delta_to_hhmm(self.delta_minutes)
    }

    pub fn expected_end_time(&self) -> String {
        match self.expected_end {
            Some(t) => format_time(t),
            None => UNKNOWN_TIME.to_string(),
        }
    }
}
