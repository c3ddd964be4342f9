use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::notify::{AuditLog, Change, ChangeNotifier};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the configuration and the database, then run migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let pool = DbPool::new(&db_path.to_string_lossy())?;
    init_db(&pool.conn)?;

    let mut audit = AuditLog::new(&pool.conn);
    audit.publish(&Change::new("init", "", "database initialized"))?;

    success("Initialization complete.");
    Ok(())
}
