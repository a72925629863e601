//! Configuration issues.
//!
//! Configuration loaders report problems as structured issues with a
//! severity level instead of failing on the first one.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A legend color is not `#rrggbb`.
    InvalidColor { label: String, value: String },
    /// A legend entry names a label the classifier never produces.
    UnknownLabel { label: String },
    /// Map opacity outside `[0, 1]`; it will be clamped.
    OpacityOutOfRange { value: String },
    /// A required path setting is empty.
    EmptyPath { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// True when any issue is an error
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
