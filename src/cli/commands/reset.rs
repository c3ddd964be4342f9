use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::ResetLogic;
use crate::core::notify::AuditLog;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let prompt = "Erase ALL recorded days? This action is irreversible.";
        if !*yes && !super::del::ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let mut audit = AuditLog::new(&pool.conn);
        let removed = ResetLogic::apply(&pool.conn, &mut audit)?;

        success(format!("Database reset: {} records removed.", removed));
    }

    Ok(())
}
