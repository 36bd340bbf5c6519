//! Juror profiles: acceptance vectors and bias levels

use crate::argument::entities::ArgumentType;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Acceptance range of the dominant argument type
const DOMINANT_RANGE: Range<f64> = 0.70..0.85;

/// How strongly a biased juror is slanted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasLevel {
    Low,
    High,
}

impl BiasLevel {
    /// Fraction of the trial size seeded as claims
    pub fn percentage(&self) -> f64 {
        match self {
            BiasLevel::Low => 0.10,
            BiasLevel::High => 0.20,
        }
    }

    /// Number of claims to seed for a trial of `trial_size` arguments
    pub fn claim_count(&self, trial_size: usize) -> usize {
        (trial_size as f64 * self.percentage() + 1e-9).floor() as usize
    }
}

impl std::fmt::Display for BiasLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BiasLevel::Low => write!(f, "low"),
            BiasLevel::High => write!(f, "high"),
        }
    }
}

/// Kind of juror built at trial setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "level")]
pub enum JurorProfile {
    /// Starts with empty knowledge, favours evidence or testimony
    Neutral,
    /// Favours claims and starts with claims slanted against the truth
    Biased(BiasLevel),
}

impl JurorProfile {
    pub fn is_biased(&self) -> bool {
        matches!(self, JurorProfile::Biased(_))
    }
}

impl std::fmt::Display for JurorProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JurorProfile::Neutral => write!(f, "neutral"),
            JurorProfile::Biased(level) => write!(f, "biased ({})", level),
        }
    }
}

/// Per-type acceptance probabilities
///
/// Total over the three argument types by construction. The values are
/// independent gates and need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceProfile {
    claim: f64,
    evidence: f64,
    testimony: f64,
}

impl AcceptanceProfile {
    pub fn new(claim: f64, evidence: f64, testimony: f64) -> Self {
        Self {
            claim: claim.clamp(0.0, 1.0),
            evidence: evidence.clamp(0.0, 1.0),
            testimony: testimony.clamp(0.0, 1.0),
        }
    }

    /// Draw a profile where `dominant` has strictly the highest acceptance
    pub fn generate<R: Rng + ?Sized>(dominant: ArgumentType, rng: &mut R) -> Self {
        loop {
            let profile = Self::draw(dominant, rng);
            if profile.dominant() == Some(dominant) {
                return profile;
            }
        }
    }

    fn draw<R: Rng + ?Sized>(dominant: ArgumentType, rng: &mut R) -> Self {
        let top = rng.gen_range(DOMINANT_RANGE);
        match dominant {
            ArgumentType::Claim => Self::new(
                top,
                rng.gen_range(0.35..0.55),
                rng.gen_range(0.40..0.60),
            ),
            ArgumentType::Evidence => Self::new(
                rng.gen_range(0.20..0.40),
                top,
                rng.gen_range(0.40..0.60),
            ),
            ArgumentType::Testimony => Self::new(
                rng.gen_range(0.20..0.40),
                rng.gen_range(0.40..0.60),
                top,
            ),
        }
    }

    pub fn get(&self, kind: ArgumentType) -> f64 {
        match kind {
            ArgumentType::Claim => self.claim,
            ArgumentType::Evidence => self.evidence,
            ArgumentType::Testimony => self.testimony,
        }
    }

    /// Types ordered from highest to lowest acceptance
    ///
    /// Equal values keep the canonical type order.
    pub fn ranked(&self) -> [ArgumentType; 3] {
        let mut types = ArgumentType::ALL;
        types.sort_by(|a, b| self.get(*b).total_cmp(&self.get(*a)));
        types
    }

    /// The type with strictly the highest acceptance, if there is one
    pub fn dominant(&self) -> Option<ArgumentType> {
        let [first, second, _] = self.ranked();
        (self.get(first) > self.get(second)).then_some(first)
    }
}
