use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::ngtsc::logging::{ConsoleLogger, LogLevel};

/// The module format of the bundle being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleFormat {
    #[default]
    Esm2015,
    Esm5,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NgccParsingOptions {
    pub format: BundleFormat,
    /// Alias hops followed before an export is given up on as unresolvable.
    pub max_alias_hops: usize,
    pub log_level: LogLevel,
}

impl Default for NgccParsingOptions {
    fn default() -> Self {
        Self {
            format: BundleFormat::Esm2015,
            max_alias_hops: 64,
            log_level: LogLevel::Warn,
        }
    }
}

impl NgccParsingOptions {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read ngcc options from {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid ngcc options in {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let options: NgccParsingOptions = serde_json::from_str(content)?;
        Ok(options)
    }

    pub fn create_logger(&self) -> ConsoleLogger {
        ConsoleLogger::new(self.log_level)
    }
}
