use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, load_period_records, to_export_rows};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let records = load_period_records(&pool.conn, period.as_deref())?;

        if records.is_empty() {
            info("No records to export for the requested period.");
            return Ok(());
        }

        let rows = to_export_rows(&records, cfg.quota_minutes());
        ExportLogic::write(format, file, &rows)?;
    }

    Ok(())
}
