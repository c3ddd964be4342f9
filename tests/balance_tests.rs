use pointage::core::calculator::FIXED_WORK_MINUTES;
use pointage::core::calculator::balance::{day_status, period_balance, summarize_month};
use pointage::models::day_status::DayStatus;
use pointage::models::day_times::DayTimes;
use pointage::models::work_record::WorkRecord;
use pointage::utils::time::delta_to_hhmm;

fn record(date: &str, start: &str, ps: &str, pe: &str, end: &str) -> WorkRecord {
    let f = |s: &str| {
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    };
    WorkRecord {
        id: 0,
        date: date.to_string(),
        start_time: f(start),
        pause_start: f(ps),
        pause_end: f(pe),
        end_time: f(end),
    }
}

#[test]
fn incomplete_records_do_not_shift_the_sum() {
    let records = vec![
        // on-quota day: delta 0
        record("2025-09-01", "08:00", "12:00", "12:30", "16:18"),
        // missing end punch: skipped, not counted as zero
        record("2025-09-02", "08:00", "12:00", "12:30", ""),
    ];

    assert_eq!(period_balance(&records, FIXED_WORK_MINUTES), 0);
    assert_eq!(delta_to_hhmm(period_balance(&records, FIXED_WORK_MINUTES)), "+00:00");
}

#[test]
fn deltas_sum_with_sign() {
    let records = vec![
        record("2025-09-01", "08:00", "12:00", "12:30", "16:00"), // -18
        record("2025-09-02", "08:00", "12:00", "12:30", "16:48"), // +30
    ];

    assert_eq!(period_balance(&records, FIXED_WORK_MINUTES), 12);
    assert_eq!(delta_to_hhmm(12), "+00:12");
}

#[test]
fn negative_balance_renders_with_minus() {
    let records = vec![record("2025-09-01", "08:00", "12:00", "12:30", "16:00")];
    let total = period_balance(&records, FIXED_WORK_MINUTES);
    assert_eq!(total, -18);
    assert_eq!(delta_to_hhmm(total), "-00:18");
}

#[test]
fn day_classification() {
    let quota = FIXED_WORK_MINUTES;

    assert_eq!(day_status(None, quota), DayStatus::NoData);

    let open = record("2025-09-01", "08:00", "", "", "");
    assert_eq!(day_status(Some(&open), quota), DayStatus::NoData);

    let under = record("2025-09-01", "08:00", "12:00", "12:30", "16:00");
    assert_eq!(day_status(Some(&under), quota), DayStatus::Under);

    let over = record("2025-09-01", "08:00", "12:00", "12:30", "17:00");
    assert_eq!(day_status(Some(&over), quota), DayStatus::Over);

    let exact = record("2025-09-01", "08:00", "12:00", "12:30", "16:18");
    assert_eq!(day_status(Some(&exact), quota), DayStatus::OnTarget);
}

#[test]
fn month_summary_counts_and_balance() {
    let records = vec![
        record("2025-09-01", "08:00", "12:00", "12:30", "16:18"), // exact
        record("2025-09-02", "08:00", "12:00", "12:30", "16:00"), // under
        record("2025-09-03", "08:00", "12:00", "12:30", "17:00"), // over
        record("2025-09-04", "08:00", "", "", ""),                // no data
    ];

    let summary = summarize_month(&records, FIXED_WORK_MINUTES);
    assert_eq!(summary.recorded_days, 4);
    assert_eq!(summary.on_target_days, 1);
    assert_eq!(summary.under_days, 1);
    assert_eq!(summary.over_days, 1);
    assert_eq!(summary.balance_minutes, -18 + 42);
}

#[test]
fn record_conversion_flattens_unparseable_fields() {
    let rec = record("2025-09-01", "08:00", "", "", "16:18");
    let times = DayTimes::from_record(&rec);
    assert!(times.start_time.is_some());
    assert!(times.pause_start.is_none());
    assert!(times.pause_end.is_none());
    assert!(times.end_time.is_some());
}
