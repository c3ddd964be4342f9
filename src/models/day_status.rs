use serde::Serialize;

/// Per-day classification used for period listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayStatus {
    /// No record, or the record is missing a start or end punch.
    NoData,
    /// Worked less than the quota.
    Under,
    /// Worked exactly the quota.
    OnTarget,
    /// Worked more than the quota.
    Over,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::NoData => "no data",
            DayStatus::Under => "under",
            DayStatus::OnTarget => "on target",
            DayStatus::Over => "over",
        }
    }
}
