//! Argument-type distributions in percent

use crate::argument::entities::ArgumentType;
use crate::argument::pool::ArgumentPool;
use crate::juror::entities::Juror;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentage of arguments per type; always has an entry for every type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDistribution(BTreeMap<ArgumentType, f64>);

impl Default for TypeDistribution {
    fn default() -> Self {
        Self(ArgumentType::ALL.iter().map(|kind| (*kind, 0.0)).collect())
    }
}

impl TypeDistribution {
    /// Share of each type among the pool plus `seeded_claims` synthetic claims
    pub fn of_trial(pool: &ArgumentPool, seeded_claims: usize) -> Self {
        let mut counts: BTreeMap<ArgumentType, usize> = BTreeMap::new();
        counts.insert(ArgumentType::Claim, seeded_claims);
        for argument in pool.arguments() {
            *counts.entry(argument.kind()).or_insert(0) += 1;
        }

        let total = pool.len() + seeded_claims;
        let mut distribution = Self::default();
        if total == 0 {
            return distribution;
        }
        for (kind, count) in counts {
            distribution.0.insert(kind, 100.0 * count as f64 / total as f64);
        }
        distribution
    }

    /// Mean per-juror knowledge composition
    ///
    /// Jurors with empty knowledge have no composition and are left out of
    /// the mean; if none know anything every entry is zero.
    pub fn of_jury(jurors: &[Juror]) -> Self {
        let compositions: Vec<_> = jurors
            .iter()
            .filter(|j| !j.knowledge().is_empty())
            .map(Juror::type_fractions)
            .collect();

        let mut distribution = Self::default();
        if compositions.is_empty() {
            return distribution;
        }
        for fractions in &compositions {
            for (kind, fraction) in fractions {
                *distribution.0.entry(*kind).or_insert(0.0) += fraction;
            }
        }
        let count = compositions.len() as f64;
        distribution
            .0
            .values_mut()
            .for_each(|v| *v = 100.0 * *v / count);
        distribution
    }

    /// Element-wise mean of several distributions
    pub fn mean<'a>(distributions: impl IntoIterator<Item = &'a TypeDistribution>) -> Self {
        let mut sum = Self::default();
        let mut count = 0usize;
        for distribution in distributions {
            for (kind, value) in &distribution.0 {
                *sum.0.entry(*kind).or_insert(0.0) += value;
            }
            count += 1;
        }
        if count > 0 {
            sum.0.values_mut().for_each(|v| *v /= count as f64);
        }
        sum
    }

    pub fn get(&self, kind: ArgumentType) -> f64 {
        self.0.get(&kind).copied().unwrap_or(0.0)
    }

    /// Sum over all types; 100 for any non-empty distribution
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArgumentType, f64)> + '_ {
        self.0.iter().map(|(kind, value)| (*kind, *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::entities::{Argument, ArgumentIdGenerator, Polarity};
    use crate::juror::entities::JurorId;
    use crate::juror::profile::{AcceptanceProfile, JurorProfile};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn juror(id: usize) -> Juror {
        Juror::new(
            JurorId(id),
            JurorProfile::Neutral,
            AcceptanceProfile::new(0.5, 0.5, 0.5),
            1.0,
            1.0,
        )
    }

    #[test]
    fn test_trial_distribution_includes_claims() {
        let mut ids = ArgumentIdGenerator::new();
        let mut arguments = Vec::new();
        for _ in 0..6 {
            arguments.push(Argument::new(&mut ids, ArgumentType::Evidence, Polarity::Guilty));
        }
        for _ in 0..2 {
            arguments.push(Argument::new(&mut ids, ArgumentType::Testimony, Polarity::Innocent));
        }
        let pool = ArgumentPool::from_arguments(arguments);

        let distribution = TypeDistribution::of_trial(&pool, 2);
        assert!(close(distribution.get(ArgumentType::Evidence), 60.0));
        assert!(close(distribution.get(ArgumentType::Testimony), 20.0));
        assert!(close(distribution.get(ArgumentType::Claim), 20.0));
        assert!(close(distribution.total(), 100.0));
    }

    #[test]
    fn test_trial_distribution_empty_pool() {
        let pool = ArgumentPool::from_arguments(Vec::new());
        let distribution = TypeDistribution::of_trial(&pool, 0);
        assert_eq!(distribution.total(), 0.0);
        assert_eq!(distribution.iter().count(), 3);
    }

    #[test]
    fn test_jury_distribution_averages_jurors() {
        let mut ids = ArgumentIdGenerator::new();
        let a = juror(0).with_knowledge([
            Argument::new(&mut ids, ArgumentType::Evidence, Polarity::Guilty),
            Argument::new(&mut ids, ArgumentType::Claim, Polarity::Guilty),
        ]);
        let b = juror(1).with_knowledge([Argument::new(
            &mut ids,
            ArgumentType::Testimony,
            Polarity::Guilty,
        )]);
        let silent = juror(2);

        let distribution = TypeDistribution::of_jury(&[a, b, silent]);
        assert!(close(distribution.get(ArgumentType::Evidence), 25.0));
        assert!(close(distribution.get(ArgumentType::Claim), 25.0));
        assert!(close(distribution.get(ArgumentType::Testimony), 50.0));
        assert!(close(distribution.total(), 100.0));
    }

    #[test]
    fn test_jury_distribution_all_empty() {
        let distribution = TypeDistribution::of_jury(&[juror(0), juror(1)]);
        assert_eq!(distribution.total(), 0.0);
    }

    #[test]
    fn test_mean() {
        let mut ids = ArgumentIdGenerator::new();
        let pool_a = ArgumentPool::from_arguments(vec![Argument::new(
            &mut ids,
            ArgumentType::Evidence,
            Polarity::Guilty,
        )]);
        let pool_b = ArgumentPool::from_arguments(vec![Argument::new(
            &mut ids,
            ArgumentType::Testimony,
            Polarity::Guilty,
        )]);
        let distributions = [
            TypeDistribution::of_trial(&pool_a, 0),
            TypeDistribution::of_trial(&pool_b, 0),
        ];

        let mean = TypeDistribution::mean(&distributions);
        assert!(close(mean.get(ArgumentType::Evidence), 50.0));
        assert!(close(mean.get(ArgumentType::Testimony), 50.0));
        assert!(close(mean.get(ArgumentType::Claim), 0.0));
    }
}
