//! Deliberation engine
//!
//! Runs the round loop over a borrowed roster. The engine is the only writer
//! of juror knowledge and willingness while a trial deliberates.
//!
//! Each round every juror, in roster order, may present one argument it
//! believes in; every other juror then decides whether to accept it. After
//! round [`DECAY_START_ROUND`] all willingness decays by the vote rule's
//! penalty. The loop continues while the mean willingness beats a fresh
//! uniform draw and not every conceivable argument has been heard, bounded
//! by a hard round cap.

use super::value_objects::{DeliberationOutcome, RoundRecord, SpreadTally, Termination};
use crate::argument::entities::{Argument, ArgumentId};
use crate::core::rng::draw;
use crate::juror::entities::Juror;
use crate::verdict::rule::VoteRule;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Willingness starts decaying once this many rounds have completed
pub const DECAY_START_ROUND: usize = 10;

/// An argument presented more than this many times is exhausted
pub const MAX_REPETITIONS: u32 = 3;

/// Default hard cap on executed rounds
pub const DEFAULT_MAX_ROUNDS: usize = 500;

/// Round-loop driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliberationEngine {
    penalty: f64,
    max_rounds: usize,
}

impl DeliberationEngine {
    pub fn new(rule: VoteRule) -> Self {
        Self {
            penalty: rule.penalty(),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Deliberate until the jury stops or the round cap fires
    ///
    /// `conceivable` is the number of distinct arguments that could ever be
    /// presented (pool plus seeded claims).
    pub fn run<R: Rng + ?Sized>(
        &self,
        jurors: &mut [Juror],
        conceivable: usize,
        rng: &mut R,
    ) -> DeliberationOutcome {
        let mut presented: BTreeMap<ArgumentId, u32> = BTreeMap::new();
        let mut spread = SpreadTally::default();
        let mut history = Vec::new();
        let mut aggregate = mean_willingness(jurors);
        let mut round = 0;

        let termination = loop {
            if jurors.is_empty() || aggregate < draw(rng) {
                break Termination::WillingnessExhausted;
            }
            if presented.len() >= conceivable {
                break Termination::AllPresented;
            }
            if round >= self.max_rounds {
                break Termination::RoundCap;
            }

            round += 1;
            let mut round_spread = SpreadTally::default();
            let mut presentations = 0;

            for speaker in 0..jurors.len() {
                if draw(rng) > jurors[speaker].participation() {
                    continue;
                }
                let Some(argument) = select_argument(&jurors[speaker], &presented) else {
                    trace!(round, juror = %jurors[speaker].id(), "Juror stays silent");
                    continue;
                };

                let accepted = present(jurors, speaker, &argument, rng);
                for _ in 0..accepted {
                    round_spread.record(argument.kind());
                }
                *presented.entry(argument.id()).or_insert(0) += 1;
                presentations += 1;

                trace!(
                    round,
                    juror = %jurors[speaker].id(),
                    argument = %argument.id(),
                    kind = %argument.kind(),
                    accepted,
                    "Argument presented"
                );
            }

            if round > DECAY_START_ROUND {
                for juror in jurors.iter_mut() {
                    juror.decay_willingness(self.penalty);
                }
            }

            aggregate = mean_willingness(jurors);
            spread += round_spread;
            history.push(RoundRecord {
                round,
                presentations,
                spread: round_spread,
                knowledge_sizes: jurors.iter().map(|j| j.knowledge().len()).collect(),
                willingness: jurors.iter().map(Juror::willingness).collect(),
                aggregate_willingness: aggregate,
            });

            debug!(
                round,
                presentations,
                claims = round_spread.claims,
                non_claims = round_spread.non_claims,
                aggregate_willingness = aggregate,
                "Round complete"
            );
        };

        debug!(rounds = round, %termination, "Deliberation finished");

        DeliberationOutcome {
            rounds: round,
            termination,
            spread,
            presented,
            history,
        }
    }
}

/// Pick the argument a juror voices this round, if any
///
/// Types are tried from highest to lowest acceptance; within a type the
/// first known argument agreeing with the juror's opinion and not yet
/// exhausted wins.
pub fn select_argument(juror: &Juror, presented: &BTreeMap<ArgumentId, u32>) -> Option<Argument> {
    let opinion = juror.opinion();
    juror.acceptance().ranked().into_iter().find_map(|kind| {
        juror
            .knowledge()
            .iter()
            .find(|a| {
                a.kind() == kind
                    && a.polarity() == opinion
                    && presented.get(&a.id()).copied().unwrap_or(0) <= MAX_REPETITIONS
            })
            .copied()
    })
}

/// Offer `argument` to every juror except the speaker; returns acceptances
fn present<R: Rng + ?Sized>(
    jurors: &mut [Juror],
    speaker: usize,
    argument: &Argument,
    rng: &mut R,
) -> usize {
    let mut accepted = 0;
    for (index, listener) in jurors.iter_mut().enumerate() {
        if index != speaker && listener.consider(argument, rng) {
            accepted += 1;
        }
    }
    accepted
}

/// Mean willingness of the roster; 0.0 for an empty roster
pub fn mean_willingness(jurors: &[Juror]) -> f64 {
    if jurors.is_empty() {
        return 0.0;
    }
    jurors.iter().map(Juror::willingness).sum::<f64>() / jurors.len() as f64
}
