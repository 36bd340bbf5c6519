//! Domain layer for jury-sim
//!
//! This crate contains the simulation model: arguments, jurors, the
//! deliberation loop and the vote. It has no dependencies on
//! infrastructure or presentation concerns, and every stochastic operation
//! takes its random source as a parameter.
//!
//! # Core Concepts
//!
//! ## Trial
//!
//! A [`Court`] generates an [`ArgumentPool`] whose majority polarity is the
//! ground truth, seats a jury of neutral and biased [`Juror`]s, exposes
//! them to the pool, lets them deliberate and takes the vote.
//!
//! ## Deliberation
//!
//! Jurors voice arguments that support their current opinion and listeners
//! accept them with a per-type probability. Willingness to keep talking
//! decays after round ten by a penalty that depends on the [`VoteRule`].

pub mod argument;
pub mod config;
pub mod core;
pub mod deliberation;
pub mod juror;
pub mod statistics;
pub mod trial;
pub mod verdict;

// Re-export commonly used types
pub use argument::{
    entities::{Argument, ArgumentId, ArgumentIdGenerator, ArgumentType, Polarity},
    pool::{ArgumentPool, ClaimPool, SplitPolicy},
};
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    rng::{TrialRng, entropy_seed, seeded},
};
pub use deliberation::{
    DECAY_START_ROUND, DEFAULT_MAX_ROUNDS, DeliberationEngine, DeliberationOutcome,
    MAX_REPETITIONS, RoundRecord, SpreadTally, Termination,
};
pub use juror::{
    entities::{Juror, JurorId},
    profile::{AcceptanceProfile, BiasLevel, JurorProfile},
};
pub use statistics::{
    collector::{JurorSummary, TrialStatistics},
    distribution::TypeDistribution,
    summary::BatchSummary,
};
pub use trial::{
    config::{JurySize, TrialConfig},
    court::Court,
    outcome::TrialOutcome,
};
pub use verdict::{MajorityThreshold, Verdict, VoteResolver, VoteRule, VoteTally};
