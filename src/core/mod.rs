pub mod calculator;
pub mod del;
pub mod input;
pub mod log;
pub mod notify;
pub mod set;
