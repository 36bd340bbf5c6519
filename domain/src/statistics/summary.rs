//! Batch summary over many runs

use super::distribution::TypeDistribution;
use crate::trial::outcome::TrialOutcome;
use serde::{Deserialize, Serialize};

/// Aggregate result of a batch of trials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub runs: usize,
    pub correct: usize,
    /// Innocent defendants convicted
    pub false_guilty: usize,
    /// Guilty defendants acquitted
    pub false_innocent: usize,
    pub hung: usize,
    /// Runs ended by the round cap
    pub forced: usize,
    pub average_trial_distribution: TypeDistribution,
    pub average_jury_distribution: TypeDistribution,
    pub average_rounds: f64,
    pub average_claim_spread: f64,
    pub average_non_claim_spread: f64,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[TrialOutcome]) -> Self {
        let runs = outcomes.len();
        let count = |pred: fn(&TrialOutcome) -> bool| outcomes.iter().filter(|o| pred(o)).count();
        let mean = |value: fn(&TrialOutcome) -> f64| {
            if runs == 0 {
                0.0
            } else {
                outcomes.iter().map(value).sum::<f64>() / runs as f64
            }
        };

        Self {
            runs,
            correct: count(TrialOutcome::is_correct),
            false_guilty: count(TrialOutcome::is_false_guilty),
            false_innocent: count(TrialOutcome::is_false_innocent),
            hung: count(TrialOutcome::is_hung),
            forced: count(TrialOutcome::is_forced),
            average_trial_distribution: TypeDistribution::mean(
                outcomes.iter().map(|o| &o.statistics.trial_distribution),
            ),
            average_jury_distribution: TypeDistribution::mean(
                outcomes.iter().map(|o| &o.statistics.jury_distribution),
            ),
            average_rounds: mean(|o| o.statistics.rounds as f64),
            average_claim_spread: mean(|o| o.statistics.average_claim_spread),
            average_non_claim_spread: mean(|o| o.statistics.average_non_claim_spread),
        }
    }

    /// Share of correct verdicts, 0.0 for an empty batch
    pub fn accuracy(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.correct as f64 / self.runs as f64
        }
    }

    /// Wrong verdicts, hung juries excluded
    pub fn wrong(&self) -> usize {
        self.false_guilty + self.false_innocent
    }
}
