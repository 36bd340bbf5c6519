//! Deliberation value objects - what the engine records while it runs.

use crate::argument::entities::{ArgumentId, ArgumentType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why the deliberation loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The aggregate willingness lost the continuation draw
    WillingnessExhausted,
    /// Every conceivable argument has been presented at least once
    AllPresented,
    /// The hard round cap fired before the loop stopped on its own
    RoundCap,
}

impl Termination {
    /// `true` when the safety valve, not the jury, ended deliberation
    pub fn is_forced(&self) -> bool {
        matches!(self, Termination::RoundCap)
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::WillingnessExhausted => write!(f, "willingness exhausted"),
            Termination::AllPresented => write!(f, "all arguments presented"),
            Termination::RoundCap => write!(f, "forced (round cap)"),
        }
    }
}

/// Newly accepted arguments during deliberation, split by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpreadTally {
    pub claims: usize,
    pub non_claims: usize,
}

impl SpreadTally {
    pub fn record(&mut self, kind: ArgumentType) {
        if kind.is_claim() {
            self.claims += 1;
        } else {
            self.non_claims += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.claims + self.non_claims
    }
}

impl std::ops::AddAssign for SpreadTally {
    fn add_assign(&mut self, other: Self) {
        self.claims += other.claims;
        self.non_claims += other.non_claims;
    }
}

/// State of the jury after one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (1-indexed)
    pub round: usize,
    /// Jurors who presented an argument this round
    pub presentations: usize,
    /// Acceptances caused by this round's presentations
    pub spread: SpreadTally,
    /// Knowledge size of each juror, in roster order
    pub knowledge_sizes: Vec<usize>,
    /// Willingness of each juror, in roster order
    pub willingness: Vec<f64>,
    /// Mean willingness used for the next continuation draw
    pub aggregate_willingness: f64,
}

/// Everything the engine produced for one trial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliberationOutcome {
    /// Rounds actually executed
    pub rounds: usize,
    pub termination: Termination,
    /// Acceptances over the whole run
    pub spread: SpreadTally,
    /// Presentation count per argument
    pub presented: BTreeMap<ArgumentId, u32>,
    /// One record per executed round
    pub history: Vec<RoundRecord>,
}

impl DeliberationOutcome {
    pub fn distinct_presented(&self) -> usize {
        self.presented.len()
    }

    /// Highest number of times any single argument was presented
    pub fn max_presentations(&self) -> u32 {
        self.presented.values().copied().max().unwrap_or(0)
    }

    pub fn average_claim_spread(&self) -> f64 {
        per_round(self.spread.claims, self.rounds)
    }

    pub fn average_non_claim_spread(&self) -> f64 {
        per_round(self.spread.non_claims, self.rounds)
    }
}

fn per_round(total: usize, rounds: usize) -> f64 {
    if rounds == 0 {
        0.0
    } else {
        total as f64 / rounds as f64
    }
}
