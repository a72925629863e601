//! CLI entrypoint for country-overlap
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use overlap_application::{
    AuditNamesUseCase, ComputeOverlapUseCase, DataContext, ExportReportUseCase, RenderMapUseCase,
};
use overlap_domain::{Category, ConfigIssue, OutputFormat, Severity};
use overlap_infrastructure::{
    ConfigLoader, CsvStatusExporter, FileConfig, GeoJsonBoundarySource, PlottersMapRenderer,
    SpreadsheetTableSource,
};
use overlap_presentation::{
    Cli, Command, ConsoleFormatter, ExploreRepl, OutputConfig, OutputFormatter, ProgressMode,
    ReplConfig,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    // Keep the guard alive so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting country-overlap");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Configuration has {} error(s); see messages above", issues.len());
    }

    let output_config = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color,
    };
    output_config.apply_color();
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress,
        history_file: config.repl.history_file.clone(),
    };

    // === Dependency Injection ===
    let data = Arc::new(DataContext::new(
        Arc::new(SpreadsheetTableSource::from_config(&config.data)),
        Arc::new(GeoJsonBoundarySource::from_config(&config.data)),
    ));
    let overlap = ComputeOverlapUseCase::new(data.clone());
    let render = build_renderer(&config, data.clone())?;
    let export = ExportReportUseCase::new(Arc::new(CsvStatusExporter::new()));

    let progress = ProgressMode::detect(cli.quiet, std::io::stderr().is_terminal()).reporter();

    match cli.command.unwrap_or(Command::Explore) {
        Command::Classify {
            selection,
            export: export_path,
            map,
            output,
        } => {
            let format = output.map(OutputFormat::from).unwrap_or(output_config.format);
            let report = overlap
                .execute_with_progress(&selection.to_selection(), progress.as_ref())
                .context("Failed to load source tables")?;

            println!("{}", ConsoleFormatter.render(&report, format));

            if let Some(path) = export_path {
                let rows = export
                    .execute(&report, &path)
                    .with_context(|| format!("Failed to export {}", path.display()))?;
                notice(format, &format!("Exported {} rows to {}", rows, path.display()));
            }

            // The map goes last so a drawing failure cannot cost the table or export
            if let Some(path) = map {
                let outcome = render.execute(&report, &path, progress.as_ref());
                notice(format, ConsoleFormatter::format_render_outcome(&outcome).trim_end());
            }
        }

        Command::Choices { category } => {
            let categories = match category {
                Some(category) => vec![category],
                None => Category::ALL.to_vec(),
            };
            for category in categories {
                let choices = overlap
                    .choices(category, progress.as_ref())
                    .context("Failed to load source tables")?;
                println!("{}", ConsoleFormatter::format_choices(category, &choices));
            }
        }

        Command::CheckNames { list_boundaries } => {
            let output = AuditNamesUseCase::new(data)
                .execute(progress.as_ref())
                .context("Failed to load data for the name check")?;
            println!("{}", ConsoleFormatter::format_audit(&output, list_boundaries));
        }

        Command::Explore => {
            let mut repl = ExploreRepl::new(overlap, render, export)
                .with_progress(repl_config.show_progress && !cli.quiet)
                .with_format(output_config.format)
                .with_history(repl_config.history_path());
            repl.run()?;
        }
    }

    Ok(())
}

fn build_renderer(config: &FileConfig, data: Arc<DataContext>) -> Result<RenderMapUseCase> {
    let legend = config.legend().context("Invalid [map.colors]")?;
    RenderMapUseCase::new(
        data,
        Arc::new(PlottersMapRenderer::new()),
        legend,
        config.map.to_settings(),
    )
    .context("Legend does not cover every overlap label")
}

/// Status lines go to stderr when stdout carries JSON
fn notice(format: OutputFormat, message: &str) {
    if format == OutputFormat::Json {
        eprintln!("{}", message);
    } else {
        println!("{}", message);
    }
}

/// Install the fmt subscriber, plus a file writer when configured
fn init_logging(verbose: u8, file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match file {
        Some(file) => {
            let path = Path::new(file);
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", file))?;
            std::fs::create_dir_all(directory)
                .with_context(|| format!("Cannot create log directory {}", directory.display()))?;

            let appender = tracing_appender::rolling::never(directory, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}
