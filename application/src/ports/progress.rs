//! Progress notification port
//!
//! Defines the interface for reporting progress during a simulation batch.

use jury_domain::{BatchSummary, TrialOutcome};

/// Callback for progress updates during a batch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first run
    fn on_batch_start(&self, total_runs: usize);

    /// Called after each run has voted
    fn on_run_complete(&self, outcome: &TrialOutcome);

    /// Called once after the summary is computed
    fn on_batch_complete(&self, _summary: &BatchSummary) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_batch_start(&self, _total_runs: usize) {}
    fn on_run_complete(&self, _outcome: &TrialOutcome) {}
}
