pub mod refresh_logger;
pub mod task;
