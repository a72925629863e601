//! Presentation layer for country-overlap
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive explorer.

pub mod cli;
pub mod config;
pub mod explore;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, SelectionArgs};
pub use config::{OutputConfig, ReplConfig};
pub use explore::{ExploreRepl, ReplCommand};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressMode, ProgressReporter, SimpleProgress};
