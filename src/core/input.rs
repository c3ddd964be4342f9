//! Progressive time input handling.
//!
//! Raw user input is formatted keystroke by keystroke towards "HH:mm" and
//! only becomes an actual time point once it passes the acceptance gate.

use crate::utils::time::parse_time;
use chrono::NaiveTime;

/// Progressively format raw input into a partial or complete "HH:mm".
///
/// Non-digits are stripped; up to two digits pass through untouched (still
/// being typed), three or four digits get a colon after the first two. More
/// than four digits returns the raw input unchanged: the caller should not
/// have allowed that much input, so this is a no-op rather than an error.
pub fn normalize_time_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}:{}", &digits[..2], &digits[2..]),
        _ => raw.to_string(),
    }
}

/// Gate a formatted string into a time point: exactly 5 characters, hour in
/// 0..=23, minute in 0..=59. Anything else stays pending.
pub fn accept_time_point(formatted: &str) -> Option<NaiveTime> {
    if formatted.len() != 5 {
        return None;
    }
    parse_time(formatted)
}

/// A time entry with both of its representations: the raw text the user
/// typed (always present, progressively formatted) and the parsed time
/// point, set only once the text passes the acceptance gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeField {
    pub raw: String,
    pub parsed: Option<NaiveTime>,
}

impl TimeField {
    pub fn from_raw(raw: &str) -> Self {
        let formatted = normalize_time_input(raw);
        let parsed = accept_time_point(&formatted);
        Self {
            raw: formatted,
            parsed,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.parsed.is_none() && !self.raw.is_empty()
    }
}
