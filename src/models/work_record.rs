use serde::Serialize;

/// One persisted day of clock punches.
///
/// The four time fields are stored as "HH:MM" text and are all optional:
/// a record exists as soon as the user has punched anything for the date.
#[derive(Debug, Clone, Serialize)]
pub struct WorkRecord {
    pub id: i32,
    pub date: String, // ⇔ working_hours.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub start_time: Option<String>,
    pub pause_start: Option<String>,
    pub pause_end: Option<String>,
    pub end_time: Option<String>,
}

impl WorkRecord {
    /// A record only contributes to period balances once both the start and
    /// the end punch exist.
    pub fn is_complete(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }
}
