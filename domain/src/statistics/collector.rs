//! Per-trial statistics
//!
//! Read-only aggregation over a finished court and its deliberation record.

use super::distribution::TypeDistribution;
use crate::argument::entities::Polarity;
use crate::deliberation::value_objects::{DeliberationOutcome, SpreadTally};
use crate::juror::entities::{Juror, JurorId};
use crate::juror::profile::JurorProfile;
use crate::trial::court::Court;
use serde::{Deserialize, Serialize};

/// Final state of one juror
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurorSummary {
    pub id: JurorId,
    pub profile: JurorProfile,
    pub knowledge: usize,
    pub opinion_score: i64,
    pub opinion: Polarity,
    /// Share of exonerating arguments in knowledge
    pub innocent_share: f64,
    /// Share of incriminating arguments in knowledge
    pub guilty_share: f64,
    pub willingness: f64,
}

impl From<&Juror> for JurorSummary {
    fn from(juror: &Juror) -> Self {
        let (innocent_share, guilty_share) = juror.side_fractions();
        Self {
            id: juror.id(),
            profile: juror.profile(),
            knowledge: juror.knowledge().len(),
            opinion_score: juror.opinion_score(),
            opinion: juror.opinion(),
            innocent_share,
            guilty_share,
            willingness: juror.willingness(),
        }
    }
}

/// Statistics of a single trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialStatistics {
    /// Type mix of pool plus seeded claims (%)
    pub trial_distribution: TypeDistribution,
    /// Mean type mix of the jurors' final knowledge (%)
    pub jury_distribution: TypeDistribution,
    pub rounds: usize,
    pub spread: SpreadTally,
    pub average_claim_spread: f64,
    pub average_non_claim_spread: f64,
    pub distinct_presented: usize,
    pub jurors: Vec<JurorSummary>,
}

impl TrialStatistics {
    pub fn collect(court: &Court, outcome: &DeliberationOutcome) -> Self {
        Self {
            trial_distribution: TypeDistribution::of_trial(court.pool(), court.seeded_claims()),
            jury_distribution: TypeDistribution::of_jury(court.jurors()),
            rounds: outcome.rounds,
            spread: outcome.spread,
            average_claim_spread: outcome.average_claim_spread(),
            average_non_claim_spread: outcome.average_non_claim_spread(),
            distinct_presented: outcome.distinct_presented(),
            jurors: court.jurors().iter().map(JurorSummary::from).collect(),
        }
    }
}
