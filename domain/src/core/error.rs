//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown category: {0}. Valid: program, center, funder, project")]
    UnknownCategory(String),

    #[error("Legend has no color for label '{0}'")]
    UnmappedLabel(String),

    #[error("Legend entry '{0}' is not a label the classifier can produce")]
    UnknownLabel(String),

    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),
}

impl DomainError {
    /// Check if this error comes from legend configuration
    pub fn is_legend_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnmappedLabel(_) | DomainError::UnknownLabel(_) | DomainError::InvalidColor(_)
        )
    }
}
