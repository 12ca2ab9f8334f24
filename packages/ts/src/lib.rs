//! TypeScript-compatible program model for the ngcc tooling.
//! This crate serves as the shared symbol database: source files are parsed with oxc,
//! lowered into an owned node model and bound into a whole-program symbol table.

use std::fmt;

mod binder;
pub mod module_resolution;
pub mod node;
pub mod program;
pub mod symbol;
pub mod testing;
pub mod type_checker;

pub use node::*;
pub use program::*;
pub use symbol::*;
pub use type_checker::*;

#[cfg(test)]
mod test;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

// --- Diagnostic Structures ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticWithLocation {
    pub category: DiagnosticCategory,
    pub code: i32,
    pub file: Option<String>,
    pub start: usize,
    pub length: usize,
    pub message_text: String,
}

impl DiagnosticWithLocation {
    pub fn error(file: impl Into<String>, span: Span, message_text: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code: 1005,
            file: Some(file.into()),
            start: span.start as usize,
            length: span.len() as usize,
            message_text: message_text.into(),
        }
    }
}

impl fmt::Display for DiagnosticWithLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}@{}: {}", file, self.start, self.message_text),
            None => write!(f, "{}", self.message_text),
        }
    }
}
