// Memory Logger
//
// Keeps log entries in memory so callers can inspect what was reported.

use std::cell::RefCell;

use super::logger::{LogLevel, Logger};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug)]
pub struct MemoryLogger {
    level: LogLevel,
    entries: RefCell<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            entries: RefCell::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Messages logged at exactly `level`.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl Logger for MemoryLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, level: LogLevel, msg: &str) {
        if self.is_enabled(level) {
            self.entries.borrow_mut().push(LogEntry {
                level,
                message: msg.to_string(),
            });
        }
    }
}
