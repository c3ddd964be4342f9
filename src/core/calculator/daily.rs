//! Daily delta calculator: four optional punches in, full breakdown out.

use crate::models::daily_result::DailyResult;
use crate::models::day_times::DayTimes;
use crate::utils::time::minutes_between;
use chrono::Duration;

/// Compute the breakdown of one day against `quota` minutes.
///
/// Pure and total: every combination of present/absent punches yields a
/// defined result. Intervals are signed — a pause punched before the start
/// of the day contributes negative minutes rather than raising an error.
/// The expected end of day is only known once the pause length is: it is
/// start + quota + pause, shown on the clock face (modulo 24h).
pub fn calculate_times(times: &DayTimes, quota: i64) -> DailyResult {
    let mut result = DailyResult::default();

    if let (Some(start), Some(pause_start)) = (times.start_time, times.pause_start) {
        result.morning_minutes = minutes_between(start, pause_start);
    }

    if let (Some(pause_start), Some(pause_end)) = (times.pause_start, times.pause_end) {
        result.pause_minutes = minutes_between(pause_start, pause_end);
    }

    if let (Some(pause_end), Some(end)) = (times.pause_end, times.end_time) {
        result.afternoon_minutes = minutes_between(pause_end, end);
    }

    result.total_minutes = result.morning_minutes + result.afternoon_minutes;
    result.delta_minutes = result.total_minutes - quota;

    if let Some(start) = times.start_time
        && result.pause_minutes != 0
    {
        // NaiveTime arithmetic wraps around midnight, which matches the
        // clock-face rendering of the expected end.
        result.expected_end = Some(start + Duration::minutes(quota + result.pause_minutes));
    }

    result
}
