//! Progress reporting while source data loads

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use overlap_application::{LoadProgress, NoProgress};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per source being read
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<String, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgress for ProgressReporter {
    fn on_load_start(&self, source: &str) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Loading");
        pb.set_message(source.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(source.to_string(), pb);
        }
    }

    fn on_load_complete(&self, source: &str, success: bool) {
        let Some(pb) = self.bars.lock().ok().and_then(|mut bars| bars.remove(source)) else {
            return;
        };
        if success {
            pb.finish_with_message(format!("{} {}", "v".green(), source));
        } else {
            pb.abandon_with_message(format!("{} {} (failed)", "x".red(), source));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl LoadProgress for SimpleProgress {
    fn on_load_start(&self, source: &str) {
        eprintln!("{} {}", "->".cyan(), format!("Loading {}", source).bold());
    }

    fn on_load_complete(&self, source: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), source);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), source);
        }
    }
}

/// How load progress is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// Nothing (`--quiet`)
    Hidden,
    /// One line per event, for logs and pipes
    Plain,
    /// Spinners on an interactive terminal
    Bars,
}

impl ProgressMode {
    pub fn detect(quiet: bool, stderr_is_terminal: bool) -> Self {
        match (quiet, stderr_is_terminal) {
            (true, _) => ProgressMode::Hidden,
            (false, true) => ProgressMode::Bars,
            (false, false) => ProgressMode::Plain,
        }
    }

    pub fn reporter(self) -> Box<dyn LoadProgress> {
        match self {
            ProgressMode::Hidden => Box::new(NoProgress),
            ProgressMode::Plain => Box::new(SimpleProgress),
            ProgressMode::Bars => Box::new(ProgressReporter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_mode() {
        assert_eq!(ProgressMode::detect(true, true), ProgressMode::Hidden);
        assert_eq!(ProgressMode::detect(true, false), ProgressMode::Hidden);
        assert_eq!(ProgressMode::detect(false, true), ProgressMode::Bars);
        assert_eq!(ProgressMode::detect(false, false), ProgressMode::Plain);
    }

    #[test]
    fn test_plain_progress_reports_both_outcomes() {
        let progress = ProgressMode::Plain.reporter();
        progress.on_load_start("program table");
        progress.on_load_complete("program table", true);
        progress.on_load_complete("boundaries", false);
    }

    #[test]
    fn test_bars_are_released() {
        let reporter = ProgressReporter::new();
        reporter.on_load_start("programs");
        reporter.on_load_start("portfolio");
        reporter.on_load_complete("programs", true);
        reporter.on_load_complete("portfolio", false);
        // Unknown sources are ignored
        reporter.on_load_complete("boundaries", true);

        assert!(reporter.bars.lock().unwrap().is_empty());
    }
}
