//! Juror entity
//!
//! A juror holds a fixed acceptance profile and a knowledge base that only
//! ever grows. Opinion is derived from the knowledge on demand.

use super::profile::{AcceptanceProfile, BiasLevel, JurorProfile};
use crate::argument::entities::{Argument, ArgumentId, ArgumentType, Polarity, polarity_score};
use crate::argument::pool::ClaimPool;
use crate::core::rng::passes;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::ops::RangeInclusive;

/// Range for drawn participation and neutral willingness
const TEMPERAMENT_RANGE: RangeInclusive<f64> = 0.8..=1.0;

/// Identity of a juror, its position at creation within the trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JurorId(pub usize);

impl std::fmt::Display for JurorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "J{}", self.0)
    }
}

/// A member of the jury
#[derive(Debug, Clone)]
pub struct Juror {
    id: JurorId,
    profile: JurorProfile,
    acceptance: AcceptanceProfile,
    knowledge: Vec<Argument>,
    known: HashSet<ArgumentId>,
    participation: f64,
    willingness: f64,
}

impl Juror {
    /// Create a juror with explicit parameters and empty knowledge
    pub fn new(
        id: JurorId,
        profile: JurorProfile,
        acceptance: AcceptanceProfile,
        participation: f64,
        willingness: f64,
    ) -> Self {
        Self {
            id,
            profile,
            acceptance,
            knowledge: Vec::new(),
            known: HashSet::new(),
            participation: participation.clamp(0.0, 1.0),
            willingness: willingness.clamp(0.0, 1.0),
        }
    }

    /// Neutral juror favouring either evidence or testimony
    pub fn neutral<R: Rng + ?Sized>(id: JurorId, rng: &mut R) -> Self {
        let dominant = if rng.gen_bool(0.5) {
            ArgumentType::Evidence
        } else {
            ArgumentType::Testimony
        };
        let acceptance = AcceptanceProfile::generate(dominant, rng);
        let participation = rng.gen_range(TEMPERAMENT_RANGE);
        let willingness = rng.gen_range(TEMPERAMENT_RANGE);
        Self::new(id, JurorProfile::Neutral, acceptance, participation, willingness)
    }

    /// Claim-favouring juror pre-seeded with slanted claims
    ///
    /// Seeds `floor(level.percentage() * trial_size)` distinct claims drawn
    /// from the trial's claim pool. Willingness starts at 1.0.
    pub fn biased<R: Rng + ?Sized>(
        id: JurorId,
        level: BiasLevel,
        trial_size: usize,
        claims: &mut ClaimPool,
        rng: &mut R,
    ) -> Self {
        let acceptance = AcceptanceProfile::generate(ArgumentType::Claim, rng);
        let participation = rng.gen_range(TEMPERAMENT_RANGE);
        let mut juror = Self::new(id, JurorProfile::Biased(level), acceptance, participation, 1.0);
        for claim in claims.draw(level.claim_count(trial_size), rng) {
            juror.learn(claim);
        }
        juror
    }

    /// Build a juror for the given profile
    pub fn from_profile<R: Rng + ?Sized>(
        id: JurorId,
        profile: JurorProfile,
        trial_size: usize,
        claims: &mut ClaimPool,
        rng: &mut R,
    ) -> Self {
        match profile {
            JurorProfile::Neutral => Self::neutral(id, rng),
            JurorProfile::Biased(level) => Self::biased(id, level, trial_size, claims, rng),
        }
    }

    /// Seed knowledge directly, skipping the acceptance gate
    pub fn with_knowledge(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        for argument in arguments {
            self.learn(argument);
        }
        self
    }

    pub fn id(&self) -> JurorId {
        self.id
    }

    pub fn profile(&self) -> JurorProfile {
        self.profile
    }

    pub fn acceptance(&self) -> &AcceptanceProfile {
        &self.acceptance
    }

    pub fn participation(&self) -> f64 {
        self.participation
    }

    pub fn willingness(&self) -> f64 {
        self.willingness
    }

    /// Knowledge in the order it was acquired
    pub fn knowledge(&self) -> &[Argument] {
        &self.knowledge
    }

    pub fn knows(&self, argument: &Argument) -> bool {
        self.known.contains(&argument.id())
    }

    /// Add an argument unconditionally; returns `false` if already known
    fn learn(&mut self, argument: Argument) -> bool {
        if !self.known.insert(argument.id()) {
            return false;
        }
        self.knowledge.push(argument);
        true
    }

    /// Hear an argument and accept it through the type gate
    ///
    /// Returns `true` only when the argument was new and accepted.
    pub fn consider<R: Rng + ?Sized>(&mut self, argument: &Argument, rng: &mut R) -> bool {
        if self.knows(argument) {
            return false;
        }
        if passes(rng, self.acceptance.get(argument.kind())) {
            self.learn(*argument)
        } else {
            false
        }
    }

    /// First-pass exposure to every argument in `arguments`
    pub fn expose<R: Rng + ?Sized>(&mut self, arguments: &[Argument], rng: &mut R) -> usize {
        arguments
            .iter()
            .filter(|argument| self.consider(argument, rng))
            .count()
    }

    /// Net belief: +1 per innocent argument, -1 per guilty one
    pub fn opinion_score(&self) -> i64 {
        polarity_score(&self.knowledge)
    }

    /// Current leaning; a zero score leans innocent
    pub fn opinion(&self) -> Polarity {
        Polarity::from_score(self.opinion_score())
    }

    /// Apply one round of willingness decay
    pub fn decay_willingness(&mut self, penalty: f64) {
        self.willingness *= 1.0 - penalty.clamp(0.0, 1.0);
    }

    /// Fraction of knowledge per argument type (empty map for empty knowledge)
    pub fn type_fractions(&self) -> BTreeMap<ArgumentType, f64> {
        let mut fractions = BTreeMap::new();
        if self.knowledge.is_empty() {
            return fractions;
        }
        for argument in &self.knowledge {
            *fractions.entry(argument.kind()).or_insert(0.0) += 1.0;
        }
        let total = self.knowledge.len() as f64;
        fractions.values_mut().for_each(|v| *v /= total);
        fractions
    }

    /// Fractions of `(innocent, guilty)` arguments in knowledge
    pub fn side_fractions(&self) -> (f64, f64) {
        if self.knowledge.is_empty() {
            return (0.0, 0.0);
        }
        let total = self.knowledge.len() as f64;
        let innocent = self.knowledge.iter().filter(|a| a.is_innocent()).count() as f64;
        (innocent / total, (total - innocent) / total)
    }
}

impl PartialEq for Juror {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Juror {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::entities::ArgumentIdGenerator;
    use crate::core::rng::seeded;

    fn flat(p: f64) -> AcceptanceProfile {
        AcceptanceProfile::new(p, p, p)
    }

    #[test]
    fn test_neutral_juror() {
        let mut rng = seeded(1);
        for i in 0..50 {
            let juror = Juror::neutral(JurorId(i), &mut rng);
            assert!(juror.knowledge().is_empty());
            assert!((0.8..=1.0).contains(&juror.participation()));
            assert!((0.8..=1.0).contains(&juror.willingness()));
            let dominant = juror.acceptance().dominant();
            assert!(matches!(
                dominant,
                Some(ArgumentType::Evidence) | Some(ArgumentType::Testimony)
            ));
        }
    }

    #[test]
    fn test_biased_juror_seeded_claims() {
        let mut rng = seeded(2);
        let mut ids = ArgumentIdGenerator::new();
        let mut claims = ClaimPool::generate(50, Polarity::Innocent, &mut ids);

        let juror = Juror::biased(JurorId(0), BiasLevel::High, 50, &mut claims, &mut rng);

        assert_eq!(juror.knowledge().len(), 10);
        assert_eq!(juror.willingness(), 1.0);
        assert_eq!(juror.acceptance().dominant(), Some(ArgumentType::Claim));
        assert!(juror.knowledge().iter().all(|a| a.kind().is_claim()));
        assert_eq!(juror.opinion(), Polarity::Guilty);
    }

    #[test]
    fn test_consider_never_duplicates() {
        let mut rng = seeded(3);
        let mut ids = ArgumentIdGenerator::new();
        let argument = Argument::new(&mut ids, ArgumentType::Evidence, Polarity::Guilty);
        let mut juror = Juror::new(JurorId(0), JurorProfile::Neutral, flat(1.0), 1.0, 1.0);

        assert!(juror.consider(&argument, &mut rng));
        assert!(!juror.consider(&argument, &mut rng));
        assert_eq!(juror.knowledge().len(), 1);
    }

    #[test]
    fn test_consider_respects_zero_acceptance() {
        let mut rng = seeded(3);
        let mut ids = ArgumentIdGenerator::new();
        let argument = Argument::new(&mut ids, ArgumentType::Testimony, Polarity::Guilty);
        let mut juror = Juror::new(
            JurorId(0),
            JurorProfile::Neutral,
            AcceptanceProfile::new(1.0, 1.0, -1.0),
            1.0,
            1.0,
        );
        for _ in 0..20 {
            assert!(!juror.consider(&argument, &mut rng));
        }
    }

    #[test]
    fn test_expose_counts_new_arguments() {
        let mut rng = seeded(4);
        let mut ids = ArgumentIdGenerator::new();
        let arguments: Vec<_> = (0..10)
            .map(|_| Argument::new(&mut ids, ArgumentType::Evidence, Polarity::Innocent))
            .collect();
        let mut juror = Juror::new(JurorId(0), JurorProfile::Neutral, flat(1.0), 1.0, 1.0);

        assert_eq!(juror.expose(&arguments, &mut rng), 10);
        assert_eq!(juror.expose(&arguments, &mut rng), 0);
    }

    #[test]
    fn test_opinion_tie_is_innocent() {
        let mut ids = ArgumentIdGenerator::new();
        let juror = Juror::new(JurorId(0), JurorProfile::Neutral, flat(0.5), 1.0, 1.0)
            .with_knowledge([
                Argument::new(&mut ids, ArgumentType::Evidence, Polarity::Innocent),
                Argument::new(&mut ids, ArgumentType::Evidence, Polarity::Guilty),
            ]);
        assert_eq!(juror.opinion_score(), 0);
        assert_eq!(juror.opinion(), Polarity::Innocent);
    }

    #[test]
    fn test_decay_willingness() {
        let mut juror = Juror::new(JurorId(0), JurorProfile::Neutral, flat(0.5), 1.0, 1.0);
        juror.decay_willingness(0.02);
        assert!((juror.willingness() - 0.98).abs() < 1e-12);
        juror.decay_willingness(0.02);
        assert!((juror.willingness() - 0.9604).abs() < 1e-12);
    }

    #[test]
    fn test_fractions() {
        let mut ids = ArgumentIdGenerator::new();
        let juror = Juror::new(JurorId(0), JurorProfile::Neutral, flat(0.5), 1.0, 1.0)
            .with_knowledge([
                Argument::new(&mut ids, ArgumentType::Evidence, Polarity::Innocent),
                Argument::new(&mut ids, ArgumentType::Evidence, Polarity::Guilty),
                Argument::new(&mut ids, ArgumentType::Claim, Polarity::Guilty),
                Argument::new(&mut ids, ArgumentType::Testimony, Polarity::Guilty),
            ]);

        let fractions = juror.type_fractions();
        assert_eq!(fractions[&ArgumentType::Evidence], 0.5);
        assert_eq!(fractions[&ArgumentType::Claim], 0.25);
        assert_eq!(juror.side_fractions(), (0.25, 0.75));
    }

    #[test]
    fn test_empty_fractions() {
        let juror = Juror::new(JurorId(0), JurorProfile::Neutral, flat(0.5), 1.0, 1.0);
        assert!(juror.type_fractions().is_empty());
        assert_eq!(juror.side_fractions(), (0.0, 0.0));
    }
}
