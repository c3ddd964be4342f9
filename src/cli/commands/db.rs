use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::maintenance;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations are up to date.");
            return Ok(());
        }

        init_db(&pool.conn)?;

        if *check {
            let verdict = maintenance::check(&mut pool)?;
            success(format!("Integrity check: {}", verdict));
            return Ok(());
        }

        if *vacuum {
            maintenance::vacuum(&mut pool)?;
            success("Database vacuumed.");
            return Ok(());
        }

        if *show_info {
            let db_info = maintenance::info(&mut pool)?;
            println!("Database:       {}", cfg.database);
            println!("Schema version: {}", db_info.schema_version);
            println!("Records:        {}", db_info.record_count);
            println!(
                "Size:           {} bytes",
                db_info.page_count * db_info.page_size
            );
            return Ok(());
        }

        info("Nothing to do: use --migrate, --check, --vacuum or --info.");
    }

    Ok(())
}
