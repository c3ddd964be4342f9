/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

use crate::models::day_status::DayStatus;

/// Delta color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_delta(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::NoData => GREY,
        DayStatus::Under => RED,
        DayStatus::Over => GREEN,
        DayStatus::OnTarget => YELLOW,
    }
}

/// Greys out empty or sentinel values ("", "--:--") for display.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
