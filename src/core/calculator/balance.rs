//! Period aggregation: fold per-day deltas into a signed monthly or yearly
//! balance, and classify days for listings.

use crate::core::calculator::daily::calculate_times;
use crate::models::day_status::DayStatus;
use crate::models::day_times::DayTimes;
use crate::models::work_record::WorkRecord;

/// Sum the deltas of all complete records, in minutes.
///
/// A record missing its start or end punch is skipped entirely: it neither
/// contributes zero nor fails the fold.
pub fn period_balance(records: &[WorkRecord], quota: i64) -> i64 {
    records
        .iter()
        .filter(|r| r.is_complete())
        .map(|r| calculate_times(&DayTimes::from_record(r), quota).delta_minutes)
        .sum()
}

/// Classify one day for display.
pub fn day_status(record: Option<&WorkRecord>, quota: i64) -> DayStatus {
    let Some(rec) = record else {
        return DayStatus::NoData;
    };
    if !rec.is_complete() {
        return DayStatus::NoData;
    }

    let delta = calculate_times(&DayTimes::from_record(rec), quota).delta_minutes;
    match delta {
        d if d < 0 => DayStatus::Under,
        d if d > 0 => DayStatus::Over,
        _ => DayStatus::OnTarget,
    }
}

/// Per-month rollup used by the yearly view.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonthSummary {
    pub recorded_days: usize,
    pub over_days: usize,
    pub under_days: usize,
    pub on_target_days: usize,
    pub balance_minutes: i64,
}

pub fn summarize_month(records: &[WorkRecord], quota: i64) -> MonthSummary {
    let mut summary = MonthSummary {
        recorded_days: records.len(),
        ..Default::default()
    };

    for rec in records {
        match day_status(Some(rec), quota) {
            DayStatus::Over => summary.over_days += 1,
            DayStatus::Under => summary.under_days += 1,
            DayStatus::OnTarget => summary.on_target_days += 1,
            DayStatus::NoData => {}
        }
    }

    summary.balance_minutes = period_balance(records, quota);
    summary
}
