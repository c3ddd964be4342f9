pub mod balance;
pub mod daily;

/// Contractual daily work duration: 7h48.
pub const FIXED_WORK_MINUTES: i64 = 468;
