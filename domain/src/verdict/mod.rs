//! Voting and verdicts
//!
//! - [`rule`]: [`VoteRule`] with its willingness penalty, and [`MajorityThreshold`]
//! - [`vote`]: [`VoteTally`], [`VoteResolver`] and the final [`Verdict`]

pub mod rule;
pub mod vote;

pub use rule::{MajorityThreshold, VoteRule};
pub use vote::{Verdict, VoteResolver, VoteTally};
