pub mod src;

pub use src::console_logger::ConsoleLogger;
pub use src::logger::{LogLevel, Logger, NullLogger};
pub use src::memory_logger::{LogEntry, MemoryLogger};
