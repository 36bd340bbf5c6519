//! Read-only statistics over finished trials
//!
//! - [`distribution`]: argument type mixes, in percent
//! - [`collector`]: [`TrialStatistics`](collector::TrialStatistics) for one run
//! - [`summary`]: [`BatchSummary`](summary::BatchSummary) for many runs

pub mod collector;
pub mod distribution;
pub mod summary;
