//! Result of one simulated trial

use crate::argument::entities::Polarity;
use crate::deliberation::value_objects::Termination;
use crate::statistics::collector::TrialStatistics;
use crate::verdict::vote::{Verdict, VoteTally};
use serde::{Deserialize, Serialize};

/// Everything reported about a single run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Run number (1-indexed)
    pub run: usize,
    /// Seed that reproduces this run
    pub seed: u64,
    pub ground_truth: Polarity,
    pub verdict: Verdict,
    pub tally: VoteTally,
    pub termination: Termination,
    pub statistics: TrialStatistics,
}

impl TrialOutcome {
    pub fn is_correct(&self) -> bool {
        self.verdict.matches(self.ground_truth)
    }

    /// Innocent defendant found guilty
    pub fn is_false_guilty(&self) -> bool {
        self.verdict == Verdict::Guilty && self.ground_truth == Polarity::Innocent
    }

    /// Guilty defendant found innocent
    pub fn is_false_innocent(&self) -> bool {
        self.verdict == Verdict::Innocent && self.ground_truth == Polarity::Guilty
    }

    pub fn is_hung(&self) -> bool {
        self.verdict.is_hung()
    }

    /// The round cap ended deliberation
    pub fn is_forced(&self) -> bool {
        self.termination.is_forced()
    }
}
