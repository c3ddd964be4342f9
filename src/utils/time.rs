//! Time utilities: parsing HH:MM, signed duration computations, formatting
//! minutes, quota parsing.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Signed minutes from `start` to `end`. Negative when `end` is earlier on
/// the clock face; there is no wrap to the next day.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// Plain duration rendering: `HH:MM`, with a leading `-` only when negative.
pub fn min_to_hhmm(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Delta/balance rendering: always signed, `+` for zero and positive values.
pub fn delta_to_hhmm(mins: i64) -> String {
    if mins >= 0 {
        format!("+{}", min_to_hhmm(mins))
    } else {
        min_to_hhmm(mins)
    }
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Parse a daily quota such as "7h48", "8h" or a plain minute count ("468").
pub fn parse_quota(s: &str) -> AppResult<i64> {
    let s = s.trim();

    if let Some((h, m)) = s.split_once(['h', 'H']) {
        let hours: i64 = h
            .parse()
            .map_err(|_| AppError::InvalidQuota(s.to_string()))?;
        let minutes: i64 = if m.is_empty() {
            0
        } else {
            m.parse().map_err(|_| AppError::InvalidQuota(s.to_string()))?
        };
        if !(0..60).contains(&minutes) {
            return Err(AppError::InvalidQuota(s.to_string()));
        }
        return Ok(hours * 60 + minutes);
    }

    s.parse::<i64>()
        .map_err(|_| AppError::InvalidQuota(s.to_string()))
}
