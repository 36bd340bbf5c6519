//! Trials
//!
//! - [`config`]: [`TrialConfig`](config::TrialConfig) and jury sizes
//! - [`court`]: [`Court`](court::Court): setup, exposure, deliberation, vote
//! - [`outcome`]: [`TrialOutcome`](outcome::TrialOutcome), the reported result of a run

pub mod config;
pub mod court;
pub mod outcome;
