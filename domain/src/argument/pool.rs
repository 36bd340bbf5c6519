//! Argument pool generation
//!
//! Builds the fixed population of trial arguments and derives the ground
//! truth from their polarity sum. Synthetic claims for biased jurors come
//! from a separate [`ClaimPool`].

use super::entities::{Argument, ArgumentIdGenerator, ArgumentType, Polarity, polarity_score};
use crate::core::error::DomainError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minority share used by the randomized asymmetric split
const MINORITY_SHARE: f64 = 0.45;

/// Share of the trial size generated as synthetic claims
const CLAIM_POOL_SHARE: f64 = 0.5;

/// How the innocent/guilty split of a pool is chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// 45/55 or 55/45, direction picked at random per trial
    #[default]
    RandomAsymmetric,
    /// Fixed fraction of innocent arguments
    Fixed { innocent_fraction: f64 },
}

impl SplitPolicy {
    pub fn fixed(innocent_fraction: f64) -> Self {
        SplitPolicy::Fixed { innocent_fraction }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            SplitPolicy::RandomAsymmetric => Ok(()),
            SplitPolicy::Fixed { innocent_fraction } => {
                if (0.0..=1.0).contains(innocent_fraction) {
                    Ok(())
                } else {
                    Err(DomainError::InvalidSplit(*innocent_fraction))
                }
            }
        }
    }

    /// Resolve `(innocent, guilty)` counts for `total` arguments
    ///
    /// One side is floored and the other takes the remainder, so the counts
    /// always sum to `total`.
    pub fn counts<R: Rng + ?Sized>(&self, total: usize, rng: &mut R) -> (usize, usize) {
        match self {
            SplitPolicy::RandomAsymmetric => {
                let minority = share_of(total, MINORITY_SHARE);
                if rng.gen_bool(0.5) {
                    (minority, total - minority)
                } else {
                    (total - minority, minority)
                }
            }
            SplitPolicy::Fixed { innocent_fraction } => {
                let innocent = share_of(total, *innocent_fraction);
                (innocent, total - innocent)
            }
        }
    }
}

impl std::fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitPolicy::RandomAsymmetric => write!(f, "random 45/55"),
            SplitPolicy::Fixed { innocent_fraction } => {
                write!(f, "fixed {:.0}% innocent", innocent_fraction * 100.0)
            }
        }
    }
}

/// `floor(total * fraction)`, clamped to `total`
fn share_of(total: usize, fraction: f64) -> usize {
    // epsilon absorbs products like 0.4 * 20 landing just under an integer
    let raw = (total as f64 * fraction + 1e-9).floor();
    (raw.max(0.0) as usize).min(total)
}

/// The trial's argument population and its ground truth
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgumentPool {
    arguments: Vec<Argument>,
    ground_truth: Polarity,
}

impl ArgumentPool {
    /// Generate `total` Evidence/Testimony arguments under `split`
    pub fn generate<R: Rng + ?Sized>(
        total: usize,
        split: SplitPolicy,
        ids: &mut ArgumentIdGenerator,
        rng: &mut R,
    ) -> Self {
        let (innocent, guilty) = split.counts(total, rng);
        let mut arguments = Vec::with_capacity(total);

        for polarity in std::iter::repeat_n(Polarity::Innocent, innocent)
            .chain(std::iter::repeat_n(Polarity::Guilty, guilty))
        {
            let kind = if rng.gen_bool(0.5) {
                ArgumentType::Evidence
            } else {
                ArgumentType::Testimony
            };
            arguments.push(Argument::new(ids, kind, polarity));
        }

        debug!(innocent, guilty, "Generated argument pool");
        Self::from_arguments(arguments)
    }

    /// Wrap an explicit set of arguments; the ground truth is computed here
    pub fn from_arguments(arguments: Vec<Argument>) -> Self {
        let ground_truth = Polarity::from_score(polarity_score(&arguments));
        Self {
            arguments,
            ground_truth,
        }
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Verdict implied by the full pool; a tie leans innocent
    pub fn ground_truth(&self) -> Polarity {
        self.ground_truth
    }

    pub fn count_of(&self, polarity: Polarity) -> usize {
        self.arguments
            .iter()
            .filter(|a| a.polarity() == polarity)
            .count()
    }
}

/// Synthetic claims slanted against the ground truth
///
/// Generated once per trial; biased jurors draw their seeded knowledge from
/// it through [`ClaimPool::draw`].
#[derive(Debug, Clone, Default)]
pub struct ClaimPool {
    claims: Vec<Argument>,
}

impl ClaimPool {
    /// `floor(0.5 * trial_size)` claims with polarity opposite to `ground_truth`
    pub fn generate(trial_size: usize, ground_truth: Polarity, ids: &mut ArgumentIdGenerator) -> Self {
        let count = share_of(trial_size, CLAIM_POOL_SHARE);
        let polarity = ground_truth.opposite();
        let claims = (0..count)
            .map(|_| Argument::new(ids, ArgumentType::Claim, polarity))
            .collect();
        Self { claims }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Shuffle the pool and hand out up to `count` distinct claims
    pub fn draw<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<Argument> {
        self.claims.shuffle(rng);
        self.claims.iter().take(count).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::seeded;
    use std::collections::HashSet;

    #[test]
    fn test_random_split_sums_to_total() {
        let mut rng = seeded(11);
        for total in [1, 2, 3, 20, 21, 49, 50, 500] {
            let (innocent, guilty) = SplitPolicy::RandomAsymmetric.counts(total, &mut rng);
            assert_eq!(innocent + guilty, total);
        }
    }

    #[test]
    fn test_random_split_is_asymmetric() {
        let mut rng = seeded(5);
        let (innocent, guilty) = SplitPolicy::RandomAsymmetric.counts(20, &mut rng);
        let mut sides = [innocent, guilty];
        sides.sort();
        assert_eq!(sides, [9, 11]);
    }

    #[test]
    fn test_fixed_split() {
        let mut rng = seeded(0);
        assert_eq!(SplitPolicy::fixed(0.4).counts(20, &mut rng), (8, 12));
        assert_eq!(SplitPolicy::fixed(0.0).counts(5, &mut rng), (0, 5));
        assert_eq!(SplitPolicy::fixed(1.0).counts(5, &mut rng), (5, 0));
    }

    #[test]
    fn test_fixed_split_validation() {
        assert!(SplitPolicy::fixed(0.5).validate().is_ok());
        assert_eq!(
            SplitPolicy::fixed(1.2).validate(),
            Err(DomainError::InvalidSplit(1.2))
        );
    }

    #[test]
    fn test_pool_has_no_claims() {
        let mut rng = seeded(9);
        let mut ids = ArgumentIdGenerator::new();
        let pool = ArgumentPool::generate(200, SplitPolicy::default(), &mut ids, &mut rng);

        assert_eq!(pool.len(), 200);
        assert!(pool.arguments().iter().all(|a| !a.kind().is_claim()));
    }

    #[test]
    fn test_ground_truth_from_split() {
        let mut rng = seeded(2);
        let mut ids = ArgumentIdGenerator::new();
        let pool = ArgumentPool::generate(20, SplitPolicy::fixed(0.4), &mut ids, &mut rng);

        assert_eq!(pool.count_of(Polarity::Innocent), 8);
        assert_eq!(pool.count_of(Polarity::Guilty), 12);
        assert_eq!(pool.ground_truth(), Polarity::Guilty);
    }

    #[test]
    fn test_ground_truth_tie_is_innocent() {
        let mut rng = seeded(2);
        let mut ids = ArgumentIdGenerator::new();
        let pool = ArgumentPool::generate(10, SplitPolicy::fixed(0.5), &mut ids, &mut rng);
        assert_eq!(pool.ground_truth(), Polarity::Innocent);
    }

    #[test]
    fn test_claim_pool_slants_against_truth() {
        let mut ids = ArgumentIdGenerator::new();
        let claims = ClaimPool::generate(50, Polarity::Innocent, &mut ids);

        assert_eq!(claims.len(), 25);
        assert!(claims.claims.iter().all(|c| c.kind().is_claim()));
        assert!(claims.claims.iter().all(|c| c.polarity() == Polarity::Guilty));
    }

    #[test]
    fn test_claim_draw_is_distinct() {
        let mut rng = seeded(4);
        let mut ids = ArgumentIdGenerator::new();
        let mut claims = ClaimPool::generate(40, Polarity::Guilty, &mut ids);

        let drawn = claims.draw(8, &mut rng);
        let unique: HashSet<_> = drawn.iter().map(|c| c.id()).collect();
        assert_eq!(drawn.len(), 8);
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_claim_draw_bounded_by_pool() {
        let mut rng = seeded(4);
        let mut ids = ArgumentIdGenerator::new();
        let mut claims = ClaimPool::generate(4, Polarity::Guilty, &mut ids);
        assert_eq!(claims.draw(10, &mut rng).len(), 2);
    }
}
