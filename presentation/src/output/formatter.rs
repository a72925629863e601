//! Output formatter trait

use overlap_domain::{OutputFormat, OverlapReport};

/// Trait for formatting overlap reports
pub trait OutputFormatter {
    /// Format the complete report
    fn format(&self, report: &OverlapReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &OverlapReport) -> String;

    /// Format headline and status counts only
    fn format_summary(&self, report: &OverlapReport) -> String;

    /// Format in the given output format
    fn render(&self, report: &OverlapReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.format(report),
            OutputFormat::Summary => self.format_summary(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
