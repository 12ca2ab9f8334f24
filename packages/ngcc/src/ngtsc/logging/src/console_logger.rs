// Console Logger
//
// Info goes to stdout; everything else to stderr.

use super::logger::{LogLevel, Logger};

/// Console logger.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LogLevel::Warn)
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, level: LogLevel, msg: &str) {
        if !self.is_enabled(level) {
            return;
        }
        match level {
            LogLevel::Info => println!("[{}] {}", level, msg),
            _ => eprintln!("[{}] {}", level, msg),
        }
    }
}
