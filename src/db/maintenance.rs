//! Database maintenance helpers behind the `db` subcommand.

use crate::db::migrate::schema_version;
use crate::db::pool::DbPool;
use crate::db::queries::count_records;
use crate::errors::{AppError, AppResult};

/// Run PRAGMA integrity_check and report the verdict.
pub fn check(pool: &mut DbPool) -> AppResult<String> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if verdict == "ok" {
        Ok(verdict)
    } else {
        Err(AppError::Other(format!("integrity check failed: {verdict}")))
    }
}

pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.with_conn(|conn| conn.execute_batch("VACUUM"))?;
    Ok(())
}

pub struct DbInfo {
    pub schema_version: i32,
    pub record_count: i64,
    pub page_count: i64,
    pub page_size: i64,
}

pub fn info(pool: &mut DbPool) -> AppResult<DbInfo> {
    let schema_version = schema_version(&pool.conn)?;
    let record_count = count_records(&pool.conn)?;
    let page_count: i64 = pool.conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
    let page_size: i64 = pool.conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;

    Ok(DbInfo {
        schema_version,
        record_count,
        page_count,
        page_size,
    })
}
