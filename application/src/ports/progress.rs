//! Progress notification port
//!
//! Defines the interface for reporting progress while source data loads.

/// Callback for load progress
///
/// Implementations live in the presentation layer.
pub trait LoadProgress: Send + Sync {
    /// Called before a source is read
    fn on_load_start(&self, source: &str);

    /// Called after a source was read (or failed)
    fn on_load_complete(&self, source: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LoadProgress for NoProgress {
    fn on_load_start(&self, _source: &str) {}
    fn on_load_complete(&self, _source: &str, _success: bool) {}
}
