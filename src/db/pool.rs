//! Thin wrapper around the single SQLite connection of a CLI invocation.

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file at `path`.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Run a closure with exclusive access to the connection. Statements
    /// that need it outside a transaction (VACUUM) go through here.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        Ok(func(&mut self.conn)?)
    }
}
