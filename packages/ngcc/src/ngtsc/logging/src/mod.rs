pub mod console_logger;
pub mod logger;
pub mod memory_logger;
