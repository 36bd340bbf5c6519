//! Run Simulation use case
//!
//! Runs a batch of independent trials and aggregates their outcomes.

use crate::config::SimulationParams;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use chrono::{DateTime, Utc};
use jury_domain::{
    BatchSummary, Court, DomainError, TrialConfig, TrialOutcome, TrialStatistics, entropy_seed,
    seeded,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a simulation batch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunSimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] DomainError),
}

/// Input for the RunSimulation use case
#[derive(Debug, Clone, PartialEq)]
pub struct RunSimulationInput {
    pub trial: TrialConfig,
    pub params: SimulationParams,
}

impl RunSimulationInput {
    pub fn new(trial: TrialConfig) -> Self {
        Self {
            trial,
            params: SimulationParams::default(),
        }
    }

    pub fn with_params(mut self, params: SimulationParams) -> Self {
        self.params = params;
        self
    }

    /// Fail before any random draw if the batch cannot run
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.params.runs == 0 {
            return Err(DomainError::InvalidRunCount);
        }
        self.trial.validate()
    }
}

/// Everything a batch produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub config: TrialConfig,
    /// Base seed; rerunning with it reproduces the whole batch
    pub base_seed: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub runs: Vec<TrialOutcome>,
    pub summary: BatchSummary,
}

impl SimulationReport {
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

/// Use case for running a batch of jury trials
#[derive(Debug, Default)]
pub struct RunSimulationUseCase;

impl RunSimulationUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, input: RunSimulationInput) -> Result<SimulationReport, RunSimulationError> {
        self.execute_with_progress(input, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        input: RunSimulationInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<SimulationReport, RunSimulationError> {
        input.validate()?;

        let base_seed = input.params.seed.unwrap_or_else(entropy_seed);
        let total = input.params.runs;
        info!(
            runs = total,
            base_seed,
            jury_size = input.trial.jury_size.size(),
            rule = %input.trial.vote_rule,
            "Starting simulation"
        );

        let started_at = Utc::now();
        progress.on_batch_start(total);

        let mut runs = Vec::with_capacity(total);
        for index in 0..total {
            let seed = SimulationParams::run_seed(base_seed, index);
            let outcome = run_trial(&input.trial, index + 1, seed)?;
            progress.on_run_complete(&outcome);
            runs.push(outcome);
        }

        let summary = BatchSummary::from_outcomes(&runs);
        progress.on_batch_complete(&summary);

        info!(
            correct = summary.correct,
            false_guilty = summary.false_guilty,
            false_innocent = summary.false_innocent,
            hung = summary.hung,
            forced = summary.forced,
            "Simulation complete"
        );

        Ok(SimulationReport {
            config: input.trial,
            base_seed,
            started_at,
            finished_at: Utc::now(),
            runs,
            summary,
        })
    }
}

/// Run one trial from a seed
///
/// Setup, first-pass exposure, deliberation, vote and statistics all draw
/// from the same generator, so equal seeds give equal outcomes.
pub fn run_trial(config: &TrialConfig, run: usize, seed: u64) -> Result<TrialOutcome, DomainError> {
    let mut rng = seeded(seed);
    let mut court = Court::setup(config, &mut rng)?;
    court.expose(&mut rng);
    let deliberation = court.deliberate(&mut rng)?;
    let (verdict, tally) = court.vote();
    let statistics = TrialStatistics::collect(&court, &deliberation);

    info!(
        run,
        seed,
        ground_truth = %court.ground_truth(),
        %verdict,
        rounds = deliberation.rounds,
        "Trial finished"
    );
    debug!(run, termination = %deliberation.termination, votes = %tally.summary(), "Vote taken");

    Ok(TrialOutcome {
        run,
        seed,
        ground_truth: court.ground_truth(),
        verdict,
        tally,
        termination: deliberation.termination,
        statistics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jury_domain::{JurySize, SplitPolicy, VoteRule};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_batch_start(&self, total_runs: usize) {
            self.events.lock().unwrap().push(format!("start:{}", total_runs));
        }

        fn on_run_complete(&self, outcome: &TrialOutcome) {
            self.events.lock().unwrap().push(format!("run:{}", outcome.run));
        }

        fn on_batch_complete(&self, summary: &BatchSummary) {
            self.events.lock().unwrap().push(format!("done:{}", summary.runs));
        }
    }

    fn small_input(runs: usize, seed: u64) -> RunSimulationInput {
        RunSimulationInput::new(
            TrialConfig::default()
                .with_jury_size(JurySize::Small)
                .with_argument_count(20),
        )
        .with_params(SimulationParams::default().with_runs(runs).with_seed(seed))
    }

    #[test]
    fn test_zero_runs_rejected() {
        let result = RunSimulationUseCase::new().execute(small_input(0, 1));
        assert_eq!(
            result.unwrap_err(),
            RunSimulationError::InvalidConfig(DomainError::InvalidRunCount)
        );
    }

    #[test]
    fn test_invalid_trial_rejected_before_progress() {
        let progress = RecordingProgress::default();
        let input = RunSimulationInput::new(TrialConfig::default().with_bias(10, 5))
            .with_params(SimulationParams::default().with_runs(3).with_seed(1));

        let result = RunSimulationUseCase::new().execute_with_progress(input, &progress);

        assert!(matches!(
            result,
            Err(RunSimulationError::InvalidConfig(DomainError::TooManyBiasedJurors { .. }))
        ));
        assert!(progress.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_batch_counts_add_up() {
        let report = RunSimulationUseCase::new().execute(small_input(8, 7)).unwrap();
        let summary = &report.summary;

        assert_eq!(report.runs.len(), 8);
        assert_eq!(summary.runs, 8);
        assert_eq!(summary.correct + summary.wrong() + summary.hung, 8);
        assert_eq!(report.base_seed, 7);
        assert_eq!(report.runs[2].seed, 9);
    }

    #[test]
    fn test_seeded_batch_is_reproducible() {
        let a = RunSimulationUseCase::new().execute(small_input(5, 42)).unwrap();
        let b = RunSimulationUseCase::new().execute(small_input(5, 42)).unwrap();

        assert_eq!(a.summary, b.summary);
        for (x, y) in a.runs.iter().zip(&b.runs) {
            assert_eq!(x.verdict, y.verdict);
            assert_eq!(x.statistics, y.statistics);
        }
    }

    #[test]
    fn test_single_run_reproducible_from_its_seed() {
        let report = RunSimulationUseCase::new().execute(small_input(4, 100)).unwrap();
        let third = &report.runs[2];

        let rerun = run_trial(&report.config, third.run, third.seed).unwrap();
        assert_eq!(rerun.verdict, third.verdict);
        assert_eq!(rerun.statistics, third.statistics);
    }

    #[test]
    fn test_progress_events_in_order() {
        let progress = RecordingProgress::default();
        RunSimulationUseCase::new()
            .execute_with_progress(small_input(2, 3), &progress)
            .unwrap();

        let events = progress.events.lock().unwrap();
        assert_eq!(*events, vec!["start:2", "run:1", "run:2", "done:2"]);
    }

    #[test]
    fn test_report_survives_json() {
        let report = RunSimulationUseCase::new().execute(small_input(3, 21)).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["base_seed"], 21);
        assert_eq!(value["runs"].as_array().unwrap().len(), 3);

        let restored: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.config.jury_size, report.config.jury_size);
        assert_eq!(restored.summary.correct, report.summary.correct);
        assert_eq!(restored.summary.hung, report.summary.hung);
        for (a, b) in restored.runs.iter().zip(&report.runs) {
            assert_eq!(a.seed, b.seed);
            assert_eq!(a.verdict, b.verdict);
            assert_eq!(a.tally, b.tally);
        }
    }

    #[test]
    fn test_scenario_guilty_truth() {
        let input = RunSimulationInput::new(
            TrialConfig::default()
                .with_jury_size(JurySize::Small)
                .with_vote_rule(VoteRule::Unanimous)
                .with_argument_count(20)
                .with_split(SplitPolicy::fixed(0.4)),
        )
        .with_params(SimulationParams::default().with_runs(3).with_seed(11));

        let report = RunSimulationUseCase::new().execute(input).unwrap();
        assert!(
            report
                .runs
                .iter()
                .all(|r| r.ground_truth == jury_domain::Polarity::Guilty)
        );
    }
}
