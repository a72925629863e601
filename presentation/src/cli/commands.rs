//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use overlap_domain::{Category, Selection};
use std::path::PathBuf;

/// Output format for overlap reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Headline, selections, the status table and association tables
    Table,
    /// Only the headline and the status counts
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for overlap_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for country-overlap
#[derive(Parser, Debug)]
#[command(name = "country-overlap")]
#[command(author, version, about = "Classify countries by their overlap across programs, centers, funders and projects")]
#[command(long_about = r#"
country-overlap reads two tables of country records and classifies every
country touched by your selection:

- Per-country labels: "Only in Programs", "In Centers and Funders", ...
- Headline overlap: the share of countries shared by the active categories

Configuration files are loaded from (in priority order):
1. --config <path>                               Explicit config file
2. ./country-overlap.toml                        Project-level config
3. ~/.config/country-overlap/config.toml         Global config

Example:
  country-overlap classify --program Health --funder Gates
  country-overlap classify --center East --export status.csv --map overlap.png
  country-overlap choices funder
  country-overlap explore
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify the countries of one selection
    Classify {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Write the (Country, Status) table to a CSV file
        #[arg(long, value_name = "CSV")]
        export: Option<PathBuf>,

        /// Draw the choropleth map (PNG, or SVG by extension)
        #[arg(long, value_name = "IMAGE")]
        map: Option<PathBuf>,

        /// Output format (defaults to [output] format, then table)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// List the selectable labels of one or all categories
    Choices {
        /// program, center, funder or project
        category: Option<Category>,
    },

    /// Check table country names against the boundary file
    CheckNames {
        /// Also print every boundary name
        #[arg(long)]
        list_boundaries: bool,
    },

    /// Interactive explorer (default when no command is given)
    Explore,
}

/// Labels selected per category
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Program label (repeatable)
    #[arg(long = "program", value_name = "LABEL")]
    pub programs: Vec<String>,

    /// Center label (repeatable)
    #[arg(long = "center", value_name = "LABEL")]
    pub centers: Vec<String>,

    /// Funder label (repeatable)
    #[arg(long = "funder", value_name = "LABEL")]
    pub funders: Vec<String>,

    /// Project name (repeatable)
    #[arg(long = "project", value_name = "LABEL")]
    pub projects: Vec<String>,
}

impl SelectionArgs {
    pub fn to_selection(&self) -> Selection {
        Selection::new()
            .with(Category::Program, self.programs.iter().map(String::as_str))
            .with(Category::Center, self.centers.iter().map(String::as_str))
            .with(Category::Funder, self.funders.iter().map(String::as_str))
            .with(Category::Project, self.projects.iter().map(String::as_str))
    }
}
