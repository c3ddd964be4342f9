use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::TimeField;
use crate::core::notify::AuditLog;
use crate::core::set::SetLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_times::DayTimes;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::NaiveTime;

/// Parse one optional raw time argument through the progressive input
/// pipeline. Digit-only input such as "0800" is accepted; anything that
/// does not gate into a time point is an error at the CLI boundary.
fn parse_punch(raw: Option<&String>) -> AppResult<Option<NaiveTime>> {
    match raw {
        None => Ok(None),
        Some(s) => {
            let field = TimeField::from_raw(s);
            field
                .parsed
                .map(Some)
                .ok_or_else(|| AppError::InvalidTime(s.to_string()))
        }
    }
}

/// Record or update the punches of a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date,
        start,
        pause_start,
        pause_end,
        end,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let punches = DayTimes {
            start_time: parse_punch(start.as_ref())?,
            pause_start: parse_punch(pause_start.as_ref())?,
            pause_end: parse_punch(pause_end.as_ref())?,
            end_time: parse_punch(end.as_ref())?,
        };

        if punches == DayTimes::default() {
            return Err(AppError::Other(
                "nothing to do: specify at least one of --start, --pause-start, --pause-end, --end".into(),
            ));
        }

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let mut audit = AuditLog::new(&pool.conn);
        let result = SetLogic::apply(&pool.conn, d, &punches, cfg.quota_minutes(), &mut audit)?;

        success(format!("Saved punches for {}.", d));
        super::show::print_breakdown(&d, &result);
    }

    Ok(())
}
