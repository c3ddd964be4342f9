//! Schema migrations, gated on SQLite's `user_version`.
//!
//! Each step upgrades the schema by one version and records itself in the
//! internal log table. `run_pending_migrations` is idempotent and safe to
//! call on every startup.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const SCHEMA_VERSION: i32 = 2;

fn user_version(conn: &Connection) -> AppResult<i32> {
    let v: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

fn set_user_version(conn: &Connection, v: i32) -> AppResult<()> {
    // PRAGMA does not accept bound parameters.
    conn.execute_batch(&format!("PRAGMA user_version = {}", v))?;
    Ok(())
}

/// v1: the single punch table, keyed by date.
fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS working_hours (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL UNIQUE,
            start_time  TEXT,
            pause_start TEXT,
            pause_end   TEXT,
            end_time    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_working_hours_date ON working_hours(date);
        "#,
    )?;
    Ok(())
}

/// v2: internal audit log.
fn migrate_to_v2(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn record_migration(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, 'migration_applied', ?2, ?3)",
        rusqlite::params![
            chrono::Local::now().to_rfc3339(),
            format!("v{}", version),
            format!("schema upgraded to version {}", version),
        ],
    )?;
    Ok(())
}

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let mut version = user_version(conn)?;

    if version > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {} is newer than this build supports ({})",
            version, SCHEMA_VERSION
        )));
    }

    while version < SCHEMA_VERSION {
        let next = version + 1;
        match next {
            1 => migrate_to_v1(conn)?,
            2 => migrate_to_v2(conn)?,
            other => {
                return Err(AppError::Migration(format!(
                    "no migration step defined for version {}",
                    other
                )));
            }
        }
        set_user_version(conn, next)?;
        version = next;

        // The log table only exists from v2 on.
        if next >= 2 {
            record_migration(conn, next)?;
        }
    }

    Ok(())
}

/// Current schema version of an opened database.
pub fn schema_version(conn: &Connection) -> AppResult<i32> {
    user_version(conn)
}
