use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::daily::calculate_times;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::load_record_by_date;
use crate::errors::{AppError, AppResult};
use crate::models::daily_result::DailyResult;
use crate::models::day_times::DayTimes;
use crate::utils::colors::{RESET, color_for_delta, colorize_optional};
use crate::utils::date;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let d = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let record = load_record_by_date(&pool.conn, &d.format("%Y-%m-%d").to_string())?;

        match record {
            Some(rec) => {
                let result = calculate_times(&DayTimes::from_record(&rec), cfg.quota_minutes());
                print_punches(&rec);
                print_breakdown(&d, &result);
            }
            None => println!("No record for {}.", d),
        }
    }

    Ok(())
}

fn print_punches(rec: &crate::models::work_record::WorkRecord) {
    let f = |v: &Option<String>| colorize_optional(v.as_deref().unwrap_or("--:--"));
    println!(
        "Punches:  start {}  pause {} → {}  end {}",
        f(&rec.start_time),
        f(&rec.pause_start),
        f(&rec.pause_end),
        f(&rec.end_time),
    );
}

/// Per-day breakdown block, shared with the `set` command.
pub fn print_breakdown(date: &NaiveDate, result: &DailyResult) {
    println!("\n=== {} ===", date);
    println!("Morning work:   {}", result.morning_work());
    println!("Pause:          {}", result.pause_time());
    println!("Afternoon work: {}", result.afternoon_work());
    println!("Total work:     {}", result.total_work());
    println!(
        "Expected end:   {}",
        colorize_optional(&result.expected_end_time())
    );
    println!(
        "Delta:          {}{}{}",
        color_for_delta(result.delta_minutes),
        result.delta_time(),
        RESET
    );
}
