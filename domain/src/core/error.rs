//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Configuration variants are raised while a trial is being set up, before
/// any random draw is made. `VerdictAlreadyCast` guards the order of a trial:
/// once the vote is fixed the jury may not deliberate again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Jury roster is empty")]
    EmptyRoster,

    #[error("Invalid jury size: {0} (valid: 6, 12)")]
    InvalidJurySize(usize),

    #[error("Argument count must be positive")]
    InvalidArgumentCount,

    #[error("{biased} biased jurors do not fit in a roster of {roster}")]
    TooManyBiasedJurors { biased: usize, roster: usize },

    #[error("Bias counts do not add up: low {low} + high {high} != biased {biased}")]
    BiasCountMismatch {
        biased: usize,
        low: usize,
        high: usize,
    },

    #[error("Simulation run count must be positive")]
    InvalidRunCount,

    #[error("Round cap must be positive")]
    InvalidRoundCap,

    #[error("Innocent fraction must be within [0, 1], got {0}")]
    InvalidSplit(f64),

    #[error("Verdict already cast; the jury cannot deliberate again")]
    VerdictAlreadyCast,
}

impl DomainError {
    /// Check if this error was caused by the jury composition
    pub fn is_roster_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyRoster
                | DomainError::InvalidJurySize(_)
                | DomainError::TooManyBiasedJurors { .. }
                | DomainError::BiasCountMismatch { .. }
        )
    }
}
