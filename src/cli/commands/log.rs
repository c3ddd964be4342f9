use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do: use --print.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        LogLogic::print_log(&mut pool, cfg)?;
    }

    Ok(())
}
