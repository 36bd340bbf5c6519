//! Deliberation: the round loop and what it records
//!
//! - [`engine`]: [`DeliberationEngine`], argument selection and propagation
//! - [`value_objects`]: [`DeliberationOutcome`], per-round records, [`Termination`]

pub mod engine;
pub mod value_objects;

pub use engine::{DECAY_START_ROUND, DEFAULT_MAX_ROUNDS, DeliberationEngine, MAX_REPETITIONS};
pub use value_objects::{DeliberationOutcome, RoundRecord, SpreadTally, Termination};
