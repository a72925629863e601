//! Console output formatter for overlap reports

use crate::output::formatter::OutputFormatter;
use chrono::{DateTime, Utc};
use colored::Colorize;
use overlap_application::{AuditNamesOutput, RenderOutcome};
use overlap_domain::{Category, OverlapReport};
use serde::Serialize;
use std::collections::BTreeMap;

/// Placeholder row shown when nothing is classified
const EMPTY_ROW: (&str, &str) = ("No selection", "No data");

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a OverlapReport,
}

/// Formats overlap reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &OverlapReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Country Overlap"));
        output.push('\n');

        output.push_str(&Self::section_header("Overlap Percentage"));
        output.push_str(&Self::headline(report));
        output.push('\n');

        output.push_str(&Self::section_header("Selections"));
        output.push_str(&Self::format_selection(report));

        output.push_str(&Self::section_header("Country Status"));
        let mut rows: Vec<(&str, &str)> = report
            .records
            .iter()
            .map(|r| (r.country.as_str(), r.status.as_str()))
            .collect();
        if rows.is_empty() {
            rows.push(EMPTY_ROW);
        }
        output.push_str(&Self::table(("Country", "Status"), &rows));

        for category in Category::ALL {
            output.push_str(&Self::section_header(&format!(
                "Selected {} and Associated Countries",
                category.plural()
            )));
            match report.associations_for(category) {
                Some(associations) if !associations.is_empty() => {
                    let rows: Vec<(&str, &str)> = associations
                        .iter()
                        .map(|a| (a.label.as_str(), a.country.as_str()))
                        .collect();
                    output.push_str(&Self::table((category.column(), "Country"), &rows));
                }
                Some(_) => output.push_str(&format!("{}\n", "No matching countries.".dimmed())),
                None => output.push_str(&format!("{}\n", Self::none_selected(category).dimmed())),
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(report: &OverlapReport) -> String {
        let json = JsonReport {
            generated_at: Utc::now(),
            report,
        };
        serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
    }

    /// Headline and per-label counts
    pub fn format_summary(report: &OverlapReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=== Country Overlap ===".cyan().bold()));
        output.push_str(&Self::headline(report));

        if report.is_empty() {
            output.push_str(&format!("{}\n", "No countries classified.".dimmed()));
            return output;
        }

        let mut counts: BTreeMap<(usize, String), usize> = BTreeMap::new();
        for (_, label) in report.classification().iter() {
            *counts.entry((label.arity(), label.to_string())).or_default() += 1;
        }
        output.push_str(&format!(
            "{} {}\n",
            "Countries classified:".dimmed(),
            report.records.len()
        ));
        for ((_, label), count) in counts {
            output.push_str(&format!("  {}: {}\n", label, count));
        }
        output
    }

    /// Selected labels per category
    pub fn format_selection(report: &OverlapReport) -> String {
        let mut output = String::new();
        for category in Category::ALL {
            let labels = report.selection.labels(category);
            if labels.is_empty() {
                output.push_str(&format!("{}\n", Self::none_selected(category).dimmed()));
                continue;
            }
            output.push_str(&format!("{}\n", format!("Selected {}:", category.plural()).yellow()));
            for label in labels {
                output.push_str(&format!("  * {}\n", label));
            }
        }
        output
    }

    /// Selectable labels of one category
    pub fn format_choices(category: Category, choices: &[String]) -> String {
        if choices.is_empty() {
            return format!(
                "{}\n",
                format!("No {} found.", category.plural().to_lowercase()).dimmed()
            );
        }
        let mut output = format!(
            "{} ({})\n",
            category.plural().cyan().bold(),
            choices.len()
        );
        for choice in choices {
            output.push_str(&format!("  {}\n", choice));
        }
        output
    }

    /// Result of the country-name audit
    pub fn format_audit(output: &AuditNamesOutput, list_boundaries: bool) -> String {
        let audit = &output.audit;
        let mut text = String::new();

        text.push_str(&Self::section_header("Country Name Check"));
        text.push_str(&format!(
            "Table countries: {}\nBoundary names:  {}\nUnmatched:       {}\n",
            audit.table_countries,
            audit.boundary_names,
            audit.mismatches.len()
        ));

        if audit.is_clean() {
            text.push_str(&format!(
                "\n{}\n",
                "Every table country has a boundary feature.".green()
            ));
        } else {
            text.push('\n');
            for mismatch in &audit.mismatches {
                text.push_str(&format!("  {} {}", "x".red(), mismatch.country));
                if !mismatch.suggestions.is_empty() {
                    text.push_str(&format!(
                        " {} {}",
                        "-> maybe".dimmed(),
                        mismatch.suggestions.join(", ")
                    ));
                }
                text.push('\n');
            }
        }

        if list_boundaries {
            text.push_str(&Self::section_header("Boundary Names"));
            for name in &output.boundary_names {
                text.push_str(&format!("  {}\n", name));
            }
        }
        text
    }

    /// One-line account of a map render attempt
    pub fn format_render_outcome(outcome: &RenderOutcome) -> String {
        match outcome {
            RenderOutcome::Rendered { path, unmatched } => {
                let mut text = format!("{} {}\n", "Map written to".green(), path.display());
                if !unmatched.is_empty() {
                    text.push_str(&format!(
                        "{} {}\n",
                        "Not on the map (no boundary feature):".yellow(),
                        unmatched.join(", ")
                    ));
                }
                text
            }
            RenderOutcome::Failed(message) => format!("{}\n", message.red()),
        }
    }

    fn headline(report: &OverlapReport) -> String {
        match &report.headline {
            Some(headline) => format!("{}\n", headline.summary_line().bold()),
            None => format!(
                "{}\n",
                "Select at least two categories to see an overlap percentage.".dimmed()
            ),
        }
    }

    fn none_selected(category: Category) -> String {
        format!("No {} selected.", category.plural().to_lowercase())
    }

    /// Two-column table with aligned cells
    fn table(headers: (&str, &str), rows: &[(&str, &str)]) -> String {
        let width = rows
            .iter()
            .map(|(left, _)| left.chars().count())
            .chain(std::iter::once(headers.0.chars().count()))
            .max()
            .unwrap_or(0);
        let right_width = rows
            .iter()
            .map(|(_, right)| right.chars().count())
            .chain(std::iter::once(headers.1.chars().count()))
            .max()
            .unwrap_or(0);

        let mut output = format!(
            "{} | {}\n",
            Self::pad(headers.0, width).bold(),
            headers.1.bold()
        );
        output.push_str(&format!("{}-+-{}\n", "-".repeat(width), "-".repeat(right_width)));
        for (left, right) in rows {
            output.push_str(&format!("{} | {}\n", Self::pad(left, width), right));
        }
        output
    }

    fn pad(text: &str, width: usize) -> String {
        let len = text.chars().count();
        format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &OverlapReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &OverlapReport) -> String {
        Self::format_json(report)
    }

    fn format_summary(&self, report: &OverlapReport) -> String {
        Self::format_summary(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlap_domain::{CategoryRow, Dataset, NameAudit, NameMismatch, OutputFormat, Selection};
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn plain() {
        colored::control::set_override(false);
    }

    fn dataset() -> Dataset {
        Dataset::new()
            .with_rows(
                Category::Program,
                vec![
                    CategoryRow::new(Some("Health"), Some("Kenya")),
                    CategoryRow::new(Some("Health"), Some("Peru")),
                ],
            )
            .with_rows(
                Category::Funder,
                vec![CategoryRow::new(Some("Gates"), Some("Kenya"))],
            )
    }

    fn report() -> OverlapReport {
        let selection = Selection::new()
            .with(Category::Program, ["Health"])
            .with(Category::Funder, ["Gates"]);
        OverlapReport::build(&dataset(), &selection)
    }

    #[test]
    fn test_format_full_report() {
        plain();
        let text = ConsoleFormatter::format(&report());

        assert!(text.contains("Overlap Percentage"));
        assert!(text.contains("In Programs and Funders: 50.00% (1 Countries)"));
        assert!(text.contains("Kenya   | In Programs and Funders"));
        assert!(text.contains("Peru    | Only in Programs"));
        assert!(text.contains("Selected Programs:\n  * Health"));
        assert!(text.contains("No centers selected."));
        assert!(text.contains("Selected Funders and Associated Countries"));
        assert!(text.contains("Gates  | Kenya"));
    }

    #[test]
    fn test_empty_report_shows_placeholder() {
        plain();
        let report = OverlapReport::build(&dataset(), &Selection::new());
        let text = ConsoleFormatter::format(&report);

        assert!(text.contains("No selection | No data"));
        assert!(text.contains("No programs selected."));
        assert!(text.contains("Select at least two categories"));
    }

    #[test]
    fn test_json_has_no_placeholder() {
        let report = OverlapReport::build(&dataset(), &Selection::new());
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&report)).unwrap();

        assert_eq!(json["records"].as_array().unwrap().len(), 0);
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn test_summary_counts() {
        plain();
        let text = ConsoleFormatter.render(&report(), OutputFormat::Summary);
        assert!(text.contains("Countries classified: 2"));
        assert!(text.contains("  Only in Programs: 1"));
        assert!(text.contains("  In Programs and Funders: 1"));
    }

    #[test]
    fn test_format_choices() {
        plain();
        let text = ConsoleFormatter::format_choices(
            Category::Center,
            &["East".to_string(), "West".to_string()],
        );
        assert!(text.starts_with("Centers (2)"));
        assert_eq!(
            ConsoleFormatter::format_choices(Category::Project, &[]),
            "No projects found.\n"
        );
    }

    #[test]
    fn test_format_audit() {
        plain();
        let output = AuditNamesOutput {
            audit: NameAudit {
                table_countries: 3,
                boundary_names: 2,
                mismatches: vec![NameMismatch {
                    country: "Tanzania".to_string(),
                    suggestions: vec!["United Republic of Tanzania".to_string()],
                }],
            },
            boundary_names: BTreeSet::from(["Kenya".to_string()]),
        };
        let text = ConsoleFormatter::format_audit(&output, true);
        assert!(text.contains("x Tanzania -> maybe United Republic of Tanzania"));
        assert!(text.contains("Boundary Names"));
        assert!(text.contains("  Kenya"));
    }

    #[test]
    fn test_format_render_outcome() {
        plain();
        let rendered = RenderOutcome::Rendered {
            path: PathBuf::from("map.png"),
            unmatched: vec!["Atlantis".to_string()],
        };
        let text = ConsoleFormatter::format_render_outcome(&rendered);
        assert!(text.contains("Map written to map.png"));
        assert!(text.contains("Atlantis"));

        let failed = RenderOutcome::Failed("Error creating visualization: boom".to_string());
        assert_eq!(
            ConsoleFormatter::format_render_outcome(&failed),
            "Error creating visualization: boom\n"
        );
    }
}
