pub mod daily_result;
pub mod day_status;
pub mod day_times;
pub mod work_record;
