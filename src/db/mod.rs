pub mod initialize;
pub mod maintenance;
pub mod migrate;
pub mod pool;
pub mod queries;
