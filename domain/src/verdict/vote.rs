//! Verdict resolution
//!
//! Aggregates each juror's current opinion into a collective [`Verdict`]
//! under a [`VoteRule`].

use super::rule::{MajorityThreshold, VoteRule};
use crate::argument::entities::Polarity;
use crate::juror::entities::Juror;
use serde::{Deserialize, Serialize};

/// Outcome of the jury vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Guilty,
    Innocent,
    /// Neither side met the rule's threshold
    Hung,
}

impl Verdict {
    pub fn is_hung(&self) -> bool {
        matches!(self, Verdict::Hung)
    }

    /// Whether this verdict matches the ground truth
    pub fn matches(&self, truth: Polarity) -> bool {
        match self {
            Verdict::Guilty => truth == Polarity::Guilty,
            Verdict::Innocent => truth == Polarity::Innocent,
            Verdict::Hung => false,
        }
    }
}

impl From<Polarity> for Verdict {
    fn from(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Innocent => Verdict::Innocent,
            Polarity::Guilty => Verdict::Guilty,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Guilty => write!(f, "guilty"),
            Verdict::Innocent => write!(f, "innocent"),
            Verdict::Hung => write!(f, "hung jury"),
        }
    }
}

/// Count of juror opinions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteTally {
    pub innocent: usize,
    pub guilty: usize,
}

impl VoteTally {
    pub fn from_opinions(opinions: impl IntoIterator<Item = Polarity>) -> Self {
        opinions
            .into_iter()
            .fold(Self::default(), |mut tally, opinion| {
                match opinion {
                    Polarity::Innocent => tally.innocent += 1,
                    Polarity::Guilty => tally.guilty += 1,
                }
                tally
            })
    }

    pub fn from_jurors(jurors: &[Juror]) -> Self {
        Self::from_opinions(jurors.iter().map(Juror::opinion))
    }

    pub fn total(&self) -> usize {
        self.innocent + self.guilty
    }

    /// Generate a visual vote summary (e.g., "[●●○]", ● = innocent)
    pub fn summary(&self) -> String {
        let mut summary = String::from("[");
        summary.extend(std::iter::repeat_n('●', self.innocent));
        summary.extend(std::iter::repeat_n('○', self.guilty));
        summary.push(']');
        summary
    }
}

/// Resolves a tally into a verdict under a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteResolver {
    pub rule: VoteRule,
    pub threshold: MajorityThreshold,
}

impl VoteResolver {
    pub fn new(rule: VoteRule) -> Self {
        Self {
            rule,
            threshold: MajorityThreshold::default(),
        }
    }

    pub fn with_threshold(mut self, threshold: MajorityThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn resolve(&self, tally: VoteTally) -> Verdict {
        let total = tally.total();
        if total == 0 {
            return Verdict::Hung;
        }

        match self.rule {
            VoteRule::Unanimous => {
                if tally.guilty == total {
                    Verdict::Guilty
                } else if tally.innocent == total {
                    Verdict::Innocent
                } else {
                    Verdict::Hung
                }
            }
            VoteRule::Majority => {
                if self.threshold.is_satisfied(tally.guilty, tally.innocent, total) {
                    Verdict::Guilty
                } else if self.threshold.is_satisfied(tally.innocent, tally.guilty, total) {
                    Verdict::Innocent
                } else {
                    Verdict::Hung
                }
            }
        }
    }

    pub fn resolve_jurors(&self, jurors: &[Juror]) -> (Verdict, VoteTally) {
        let tally = VoteTally::from_jurors(jurors);
        (self.resolve(tally), tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::entities::{Argument, ArgumentIdGenerator, ArgumentType};
    use crate::juror::entities::JurorId;
    use crate::juror::profile::{AcceptanceProfile, JurorProfile};

    fn tally(innocent: usize, guilty: usize) -> VoteTally {
        VoteTally { innocent, guilty }
    }

    fn juror_leaning(id: usize, polarity: Polarity, ids: &mut ArgumentIdGenerator) -> Juror {
        let argument = Argument::new(ids, ArgumentType::Evidence, polarity);
        Juror::new(
            JurorId(id),
            JurorProfile::Neutral,
            AcceptanceProfile::new(0.5, 0.5, 0.5),
            1.0,
            1.0,
        )
        .with_knowledge([argument])
    }

    #[test]
    fn test_unanimous_all_innocent() {
        let mut ids = ArgumentIdGenerator::new();
        let jurors: Vec<_> = (0..6)
            .map(|i| juror_leaning(i, Polarity::Innocent, &mut ids))
            .collect();
        let (verdict, tally) = VoteResolver::new(VoteRule::Unanimous).resolve_jurors(&jurors);
        assert_eq!(verdict, Verdict::Innocent);
        assert_eq!(tally.innocent, 6);
    }

    #[test]
    fn test_unanimous_one_dissenter_is_hung() {
        let mut ids = ArgumentIdGenerator::new();
        let mut jurors: Vec<_> = (0..5)
            .map(|i| juror_leaning(i, Polarity::Innocent, &mut ids))
            .collect();
        jurors.push(juror_leaning(5, Polarity::Guilty, &mut ids));

        let (verdict, _) = VoteResolver::new(VoteRule::Unanimous).resolve_jurors(&jurors);
        assert_eq!(verdict, Verdict::Hung);
    }

    #[test]
    fn test_unanimous_all_guilty() {
        let resolver = VoteResolver::new(VoteRule::Unanimous);
        assert_eq!(resolver.resolve(tally(0, 12)), Verdict::Guilty);
    }

    #[test]
    fn test_majority_seven_three() {
        let mut ids = ArgumentIdGenerator::new();
        let jurors: Vec<_> = (0..10)
            .map(|i| {
                let polarity = if i < 7 { Polarity::Innocent } else { Polarity::Guilty };
                juror_leaning(i, polarity, &mut ids)
            })
            .collect();
        let (verdict, _) = VoteResolver::new(VoteRule::Majority).resolve_jurors(&jurors);
        assert_eq!(verdict, Verdict::Innocent);
    }

    #[test]
    fn test_majority_tie_is_hung() {
        let resolver = VoteResolver::new(VoteRule::Majority);
        assert_eq!(resolver.resolve(tally(3, 3)), Verdict::Hung);
        assert_eq!(resolver.resolve(tally(2, 4)), Verdict::Guilty);
    }

    #[test]
    fn test_absolute_majority() {
        let resolver =
            VoteResolver::new(VoteRule::Majority).with_threshold(MajorityThreshold::Absolute);
        assert_eq!(resolver.resolve(tally(7, 5)), Verdict::Innocent);
        assert_eq!(resolver.resolve(tally(5, 7)), Verdict::Guilty);
        assert_eq!(resolver.resolve(tally(6, 6)), Verdict::Hung);
    }

    #[test]
    fn test_empty_tally_is_hung() {
        assert_eq!(VoteResolver::default().resolve(tally(0, 0)), Verdict::Hung);
    }

    #[test]
    fn test_verdict_matches_truth() {
        assert!(Verdict::Guilty.matches(Polarity::Guilty));
        assert!(!Verdict::Innocent.matches(Polarity::Guilty));
        assert!(!Verdict::Hung.matches(Polarity::Innocent));
    }

    #[test]
    fn test_tally_summary() {
        assert_eq!(tally(2, 1).summary(), "[●●○]");
    }
}
