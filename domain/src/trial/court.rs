//! Court: one trial's arguments, jury and verdict
//!
//! The court owns the roster. Deliberation borrows it mutably through the
//! engine; everything else reads it.

use super::config::TrialConfig;
use crate::argument::entities::{ArgumentId, ArgumentIdGenerator, Polarity};
use crate::argument::pool::{ArgumentPool, ClaimPool};
use crate::core::error::DomainError;
use crate::deliberation::engine::DeliberationEngine;
use crate::deliberation::value_objects::DeliberationOutcome;
use crate::juror::entities::{Juror, JurorId};
use crate::juror::profile::{BiasLevel, JurorProfile};
use crate::verdict::vote::{Verdict, VoteResolver, VoteTally};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::debug;

/// A single trial
#[derive(Debug, Clone)]
pub struct Court {
    pool: ArgumentPool,
    seeded_claims: usize,
    jurors: Vec<Juror>,
    resolver: VoteResolver,
    engine: DeliberationEngine,
    vote: Option<(Verdict, VoteTally)>,
}

impl Court {
    /// Build a trial from a configuration
    ///
    /// The configuration is validated before the first random draw.
    pub fn setup<R: Rng + ?Sized>(config: &TrialConfig, rng: &mut R) -> Result<Self, DomainError> {
        config.validate()?;

        let mut ids = ArgumentIdGenerator::new();
        let pool = ArgumentPool::generate(config.argument_count, config.split, &mut ids, rng);

        let mut claims = if config.biased_jurors > 0 {
            ClaimPool::generate(config.argument_count, pool.ground_truth(), &mut ids)
        } else {
            ClaimPool::empty()
        };

        let profiles = std::iter::repeat_n(JurorProfile::Biased(BiasLevel::Low), config.low_bias)
            .chain(std::iter::repeat_n(
                JurorProfile::Biased(BiasLevel::High),
                config.high_bias,
            ))
            .chain(std::iter::repeat_n(JurorProfile::Neutral, config.neutral_jurors()));

        let mut jurors = Vec::with_capacity(config.jury_size.size());
        for (index, profile) in profiles.enumerate() {
            jurors.push(Juror::from_profile(
                JurorId(index),
                profile,
                config.argument_count,
                &mut claims,
                rng,
            ));
        }
        jurors.shuffle(rng);

        let resolver =
            VoteResolver::new(config.vote_rule).with_threshold(config.majority_threshold);
        let engine = DeliberationEngine::new(config.vote_rule).with_max_rounds(config.max_rounds);

        let court = Self::from_parts(pool, jurors, resolver, engine)?;
        debug!(
            arguments = court.pool.len(),
            seeded_claims = court.seeded_claims,
            jurors = court.jurors.len(),
            ground_truth = %court.ground_truth(),
            "Court set up"
        );
        Ok(court)
    }

    /// Assemble a trial from explicit parts
    ///
    /// Claims already held by jurors and absent from the pool count as
    /// seeded claims.
    pub fn from_parts(
        pool: ArgumentPool,
        jurors: Vec<Juror>,
        resolver: VoteResolver,
        engine: DeliberationEngine,
    ) -> Result<Self, DomainError> {
        if jurors.is_empty() {
            return Err(DomainError::EmptyRoster);
        }

        let in_pool: HashSet<ArgumentId> = pool.arguments().iter().map(|a| a.id()).collect();
        let seeded: HashSet<ArgumentId> = jurors
            .iter()
            .flat_map(|j| j.knowledge())
            .filter(|a| a.kind().is_claim() && !in_pool.contains(&a.id()))
            .map(|a| a.id())
            .collect();

        Ok(Self {
            pool,
            seeded_claims: seeded.len(),
            jurors,
            resolver,
            engine,
            vote: None,
        })
    }

    pub fn pool(&self) -> &ArgumentPool {
        &self.pool
    }

    pub fn jurors(&self) -> &[Juror] {
        &self.jurors
    }

    /// Distinct synthetic claims held by the jury at setup
    pub fn seeded_claims(&self) -> usize {
        self.seeded_claims
    }

    /// Distinct arguments that could ever be presented
    pub fn conceivable_arguments(&self) -> usize {
        self.pool.len() + self.seeded_claims
    }

    pub fn ground_truth(&self) -> Polarity {
        self.pool.ground_truth()
    }

    /// First-pass exposure of every juror to the whole pool
    pub fn expose<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let arguments = self.pool.arguments();
        for juror in &mut self.jurors {
            let accepted = juror.expose(arguments, rng);
            debug!(juror = %juror.id(), accepted, "Initial exposure");
        }
    }

    /// Run the deliberation rounds
    ///
    /// Refused once the vote has been taken, so a fixed verdict always
    /// reflects the knowledge it was cast from.
    pub fn deliberate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<DeliberationOutcome, DomainError> {
        if self.vote.is_some() {
            return Err(DomainError::VerdictAlreadyCast);
        }
        let conceivable = self.conceivable_arguments();
        Ok(self.engine.run(&mut self.jurors, conceivable, rng))
    }

    /// Take the jury vote
    ///
    /// The first call fixes the verdict; later calls return the same result.
    pub fn vote(&mut self) -> (Verdict, VoteTally) {
        let resolver = self.resolver;
        let jurors = &self.jurors;
        *self.vote.get_or_insert_with(|| resolver.resolve_jurors(jurors))
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.vote.map(|(verdict, _)| verdict)
    }
}
