//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod data;
mod logging;
mod map;
mod output;
mod repl;

pub use data::FileDataConfig;
pub use logging::FileLoggingConfig;
pub use map::FileMapConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;

use overlap_domain::{
    ConfigIssue, ConfigIssueCode, DomainError, Legend, OverlapLabel, Rgb, Severity,
};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Source tables and boundaries
    pub data: FileDataConfig,
    /// Map image and legend
    pub map: FileMapConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Empty data paths
    /// 2. Legend overrides (label and color syntax)
    /// 3. Map opacity range
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Data paths
        for (field, value) in [
            ("data.program_table", &self.data.program_table),
            ("data.portfolio_table", &self.data.portfolio_table),
            ("data.boundaries", &self.data.boundaries),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    message: format!("{}: path is empty", field),
                });
            }
        }

        // 2. Legend overrides
        for (label, color) in &self.map.colors {
            if label.parse::<OverlapLabel>().is_err() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::UnknownLabel {
                        label: label.clone(),
                    },
                    message: format!("map.colors: '{}' is not an overlap label", label),
                });
            }
            if color.parse::<Rgb>().is_err() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidColor {
                        label: label.clone(),
                        value: color.clone(),
                    },
                    message: format!(
                        "map.colors: '{}' for '{}' is not a #rrggbb color",
                        color, label
                    ),
                });
            }
        }

        // 3. Opacity
        if !(0.0..=1.0).contains(&self.map.opacity) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OpacityOutOfRange {
                    value: self.map.opacity.to_string(),
                },
                message: format!(
                    "map.opacity: {} is outside 0.0-1.0 and will be clamped",
                    self.map.opacity
                ),
            });
        }

        issues
    }

    /// The default legend with `[map.colors]` applied
    pub fn legend(&self) -> Result<Legend, DomainError> {
        Legend::with_overrides(&self.map.colors)
    }
}
