pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod log;
pub mod month;
pub mod reset;
pub mod set;
pub mod show;
pub mod year;
