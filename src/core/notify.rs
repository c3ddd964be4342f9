//! Change notification seam.
//!
//! Data-changing operations publish a `Change` through an injected
//! notifier instead of toggling shared state. The CLI wires in `AuditLog`,
//! which appends to the internal log table; tests use `NullNotifier`.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// One data-changing operation, as seen by subscribers.
pub struct Change {
    pub operation: &'static str,
    pub target: String,
    pub message: String,
}

impl Change {
    pub fn new(operation: &'static str, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation,
            target: target.into(),
            message: message.into(),
        }
    }
}

pub trait ChangeNotifier {
    fn publish(&mut self, change: &Change) -> AppResult<()>;
}

/// Records every published change in the `log` table.
pub struct AuditLog<'a> {
    conn: &'a Connection,
}

impl<'a> AuditLog<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl ChangeNotifier for AuditLog<'_> {
    fn publish(&mut self, change: &Change) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
            params![
                Local::now().to_rfc3339(),
                change.operation,
                change.target,
                change.message,
            ],
        )?;
        Ok(())
    }
}

/// Discards all changes.
pub struct NullNotifier;

impl ChangeNotifier for NullNotifier {
    fn publish(&mut self, _change: &Change) -> AppResult<()> {
        Ok(())
    }
}
