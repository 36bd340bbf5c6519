//! Progress reporting for simulation batches

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use jury_application::ports::progress::ProgressNotifier;
use jury_domain::{BatchSummary, TrialOutcome, Verdict};
use std::sync::Mutex;

/// Reports batch progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn verdict_mark(outcome: &TrialOutcome) -> String {
        match outcome.verdict {
            Verdict::Hung => format!("{} run {} hung", "~".yellow(), outcome.run),
            _ if outcome.is_correct() => format!("{} run {} {}", "v".green(), outcome.run, outcome.verdict),
            _ => format!("{} run {} {}", "x".red(), outcome.run, outcome.verdict),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total_runs: usize) {
        let pb = ProgressBar::new(total_runs as u64);
        pb.set_style(Self::batch_style());
        pb.set_prefix("Simulating");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_run_complete(&self, outcome: &TrialOutcome) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::verdict_mark(outcome));
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, summary: &BatchSummary) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!(
                "{} {}/{} correct",
                "done".green(),
                summary.correct,
                summary.runs
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total_runs: usize) {
        eprintln!("{} {} ({} runs)", "->".cyan(), "Simulating".bold(), total_runs);
    }

    fn on_run_complete(&self, outcome: &TrialOutcome) {
        eprintln!("  {}", ProgressReporter::verdict_mark(outcome));
    }

    fn on_batch_complete(&self, _summary: &BatchSummary) {
        eprintln!();
    }
}
