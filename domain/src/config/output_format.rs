//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for overlap reports
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Headline, selections, data table and association tables (default)
    Table,
    /// Only the headline and the status counts
    Summary,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}
