use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::balance::{day_status, period_balance};
use crate::core::calculator::daily::calculate_times;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::load_month_records;
use crate::errors::{AppError, AppResult};
use crate::models::day_status::DayStatus;
use crate::models::day_times::DayTimes;
use crate::models::work_record::WorkRecord;
use crate::utils::colors::{GREY, RESET, color_for_delta, color_for_status, colorize_optional};
use crate::utils::date::{all_days_of_month, current_month, is_weekend, month_key, parse_month};
use crate::utils::table::{Column, Table};
use crate::utils::time::delta_to_hhmm;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { month } = cmd {
        let (year, m) = match month {
            Some(s) => parse_month(s).ok_or_else(|| AppError::InvalidMonth(s.to_string()))?,
            None => current_month(),
        };

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let records = load_month_records(&pool.conn, &month_key(year, m))?;
        let balance = period_balance(&records, cfg.quota_minutes());

        // Index records by date so every calendar day gets a row, recorded
        // or not.
        let by_date: HashMap<&str, &WorkRecord> =
            records.iter().map(|r| (r.date.as_str(), r)).collect();

        let mut table = Table::new(vec![
            Column { header: "Date".into(), width: 10 },
            Column { header: "Day".into(), width: 3 },
            Column { header: "Start".into(), width: 5 },
            Column { header: "End".into(), width: 5 },
            Column { header: "Delta".into(), width: 6 },
            Column { header: "Status".into(), width: 9 },
        ]);

        for day in all_days_of_month(year, m) {
            let key = day.format("%Y-%m-%d").to_string();
            let rec = by_date.get(key.as_str()).copied();
            let status = day_status(rec, cfg.quota_minutes());

            let weekday = day.format("%a").to_string();
            let weekday = if is_weekend(&day) {
                format!("{GREY}{weekday}{RESET}")
            } else {
                weekday
            };

            let (start, end, delta) = match rec {
                Some(r) => {
                    let result =
                        calculate_times(&DayTimes::from_record(r), cfg.quota_minutes());
                    let delta = if status == DayStatus::NoData {
                        format!("{GREY}--:--{RESET}")
                    } else {
                        format!(
                            "{}{}{}",
                            color_for_delta(result.delta_minutes),
                            result.delta_time(),
                            RESET
                        )
                    };
                    (
                        colorize_optional(r.start_time.as_deref().unwrap_or("--:--")),
                        colorize_optional(r.end_time.as_deref().unwrap_or("--:--")),
                        delta,
                    )
                }
                None => (
                    colorize_optional("--:--"),
                    colorize_optional("--:--"),
                    format!("{GREY}--:--{RESET}"),
                ),
            };

            table.add_row(vec![
                key,
                weekday,
                start,
                end,
                delta,
                format!("{}{}{}", color_for_status(status), status.as_str(), RESET),
            ]);
        }

        println!("=== {} ===", month_key(year, m));
        print!("{}", table.render());
        println!(
            "\nMonthly balance: {}{}{}",
            color_for_delta(balance),
            delta_to_hhmm(balance),
            RESET
        );
    }

    Ok(())
}
