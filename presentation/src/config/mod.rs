//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use overlap_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format when the command line does not choose one
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Turn terminal colors off process-wide when disabled
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Configured history file, else `<data dir>/country-overlap/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|p| p.join("country-overlap").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_file() {
        let config = ReplConfig {
            history_file: Some("/tmp/overlap-history".to_string()),
            ..Default::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/overlap-history")));
    }
}
