//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write logs to this file
    pub file: Option<String>,
}
