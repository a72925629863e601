//! REPL (Read-Eval-Print Loop) for interactive exploration

use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use overlap_application::{
    ComputeOverlapUseCase, ExportReportUseCase, LoadProgress, NoProgress, RenderMapUseCase,
};
use overlap_domain::{Category, OutputFormat, OverlapReport, Selection};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tracing::debug;

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Add(Category, String),
    Remove(Category, String),
    Clear(Option<Category>),
    Choices(Category),
    Show,
    Export(PathBuf),
    Map(PathBuf),
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse one input line. Labels may contain spaces.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let category = |text: &str| text.parse::<Category>().map_err(|e| e.to_string());
        let category_and_label = |usage: &str| {
            let (cat, label) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| format!("Usage: {}", usage))?;
            Ok::<_, String>((category(cat)?, label.trim().to_string()))
        };
        let path = |usage: &str| {
            if rest.is_empty() {
                Err(format!("Usage: {}", usage))
            } else {
                Ok(PathBuf::from(rest))
            }
        };

        match name {
            "/add" | "/a" => {
                let (cat, label) = category_and_label("/add <category> <label>")?;
                Ok(ReplCommand::Add(cat, label))
            }
            "/remove" | "/rm" => {
                let (cat, label) = category_and_label("/remove <category> <label>")?;
                Ok(ReplCommand::Remove(cat, label))
            }
            "/clear" if rest.is_empty() => Ok(ReplCommand::Clear(None)),
            "/clear" => Ok(ReplCommand::Clear(Some(category(rest)?))),
            "/choices" if rest.is_empty() => Err("Usage: /choices <category>".to_string()),
            "/choices" => Ok(ReplCommand::Choices(category(rest)?)),
            "/show" | "/s" => Ok(ReplCommand::Show),
            "/export" => Ok(ReplCommand::Export(path("/export <file.csv>")?)),
            "/map" => Ok(ReplCommand::Map(path("/map <file.png|file.svg>")?)),
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            _ => Err(format!("Unknown command: {}", name)),
        }
    }
}

/// Interactive explorer REPL holding one selection
pub struct ExploreRepl {
    overlap: ComputeOverlapUseCase,
    render: RenderMapUseCase,
    export: ExportReportUseCase,
    selection: Selection,
    format: OutputFormat,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl ExploreRepl {
    /// Create a new ExploreRepl
    pub fn new(
        overlap: ComputeOverlapUseCase,
        render: RenderMapUseCase,
        export: ExportReportUseCase,
    ) -> Self {
        Self {
            overlap,
            render,
            export,
            selection: Selection::new(),
            format: OutputFormat::Table,
            show_progress: true,
            history_path: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Format used by `/show`
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("overlap> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if !line.starts_with('/') {
                        println!("Commands start with '/'. Type /help for available commands");
                        continue;
                    }
                    match ReplCommand::parse(line) {
                        Ok(command) => {
                            if self.handle(command) {
                                break;
                            }
                        }
                        Err(message) => {
                            println!("{}", message);
                            println!("Type /help for available commands");
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Country Overlap - Explore Mode       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /add <category> <label>     - Select a label");
        println!("  /remove <category> <label>  - Deselect a label");
        println!("  /clear [category]           - Clear one or all categories");
        println!("  /choices <category>         - List selectable labels");
        println!("  /show                       - Show the full report");
        println!("  /export <file.csv>          - Write the status table");
        println!("  /map <file.png|file.svg>    - Draw the choropleth map");
        println!("  /help, /h, /?               - Show this help");
        println!("  /quit, /exit, /q            - Exit");
        println!();
        println!("Categories: program, center, funder, project");
        println!();
    }

    /// Execute a command. Returns true if the REPL should exit.
    pub fn handle(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Add(category, label) => {
                if self.add(category, label) {
                    self.print_summary();
                }
            }
            ReplCommand::Remove(category, label) => {
                if self.selection.deselect(category, &label) {
                    self.print_summary();
                } else {
                    println!("'{}' is not selected under {}", label, category.plural());
                }
            }
            ReplCommand::Clear(Some(category)) => {
                self.selection.clear(category);
                self.print_summary();
            }
            ReplCommand::Clear(None) => {
                self.selection.clear_all();
                self.print_summary();
            }
            ReplCommand::Choices(category) => {
                match self.overlap.choices(category, self.progress().as_ref()) {
                    Ok(choices) => print!("{}", ConsoleFormatter::format_choices(category, &choices)),
                    Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                }
            }
            ReplCommand::Show => {
                if let Some(report) = self.recompute() {
                    println!("{}", ConsoleFormatter.render(&report, self.format));
                }
            }
            ReplCommand::Export(path) => {
                if let Some(report) = self.recompute() {
                    match self.export.execute(&report, &path) {
                        Ok(rows) => println!("Exported {} rows to {}", rows, path.display()),
                        Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                    }
                }
            }
            ReplCommand::Map(path) => {
                if let Some(report) = self.recompute() {
                    let outcome = self.render.execute(&report, &path, self.progress().as_ref());
                    print!("{}", ConsoleFormatter::format_render_outcome(&outcome));
                }
            }
        }
        false
    }

    /// Select a label that exists in the data
    fn add(&mut self, category: Category, label: String) -> bool {
        let choices = match self.overlap.choices(category, self.progress().as_ref()) {
            Ok(choices) => choices,
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                return false;
            }
        };
        if !choices.contains(&label) {
            println!(
                "Unknown {} '{}'. Try /choices {}",
                category.column(),
                label,
                category.as_str()
            );
            return false;
        }
        if !self.selection.select(category, label.clone()) {
            println!("'{}' is already selected", label);
            return false;
        }
        debug!("Selected {} '{}'", category.as_str(), label);
        true
    }

    fn print_summary(&self) {
        if let Some(report) = self.recompute() {
            println!();
            print!("{}", ConsoleFormatter::format_summary(&report));
            println!();
        }
    }

    fn recompute(&self) -> Option<OverlapReport> {
        match self
            .overlap
            .execute_with_progress(&self.selection, self.progress().as_ref())
        {
            Ok(report) => Some(report),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                None
            }
        }
    }

    fn progress(&self) -> Box<dyn LoadProgress> {
        if self.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        }
    }
}
