use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::balance::summarize_month;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::load_month_records;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_delta};
use crate::utils::date::{current_month, month_key};
use crate::utils::table::{Column, Table};
use crate::utils::time::delta_to_hhmm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Year { year } = cmd {
        let y = year.unwrap_or_else(|| current_month().0);

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let mut table = Table::new(vec![
            Column { header: "Month".into(), width: 7 },
            Column { header: "Days".into(), width: 4 },
            Column { header: "Over".into(), width: 4 },
            Column { header: "Under".into(), width: 5 },
            Column { header: "Exact".into(), width: 5 },
            Column { header: "Balance".into(), width: 7 },
        ]);

        let mut yearly_total = 0;

        // Twelve per-month folds.
        for m in 1..=12 {
            let records = load_month_records(&pool.conn, &month_key(y, m))?;
            let summary = summarize_month(&records, cfg.quota_minutes());
            yearly_total += summary.balance_minutes;

            table.add_row(vec![
                month_key(y, m),
                summary.recorded_days.to_string(),
                summary.over_days.to_string(),
                summary.under_days.to_string(),
                summary.on_target_days.to_string(),
                format!(
                    "{}{}{}",
                    color_for_delta(summary.balance_minutes),
                    delta_to_hhmm(summary.balance_minutes),
                    RESET
                ),
            ]);
        }

        println!("=== {} ===", y);
        print!("{}", table.render());
        println!(
            "\nYearly balance: {}{}{}",
            color_for_delta(yearly_total),
            delta_to_hhmm(yearly_total),
            RESET
        );
    }

    Ok(())
}
