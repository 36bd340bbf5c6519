//! Vote rules for verdict determination
//!
//! This module defines the rules used to turn the jurors' opinions into a
//! collective verdict, and how fast each rule wears the jury down.

use serde::{Deserialize, Serialize};

/// Rule the jury must satisfy to return a verdict
///
/// - `Unanimous`: every juror must lean the same way (default)
/// - `Majority`: one side must outnumber the other, see [`MajorityThreshold`]
///
/// # Example
///
/// ```
/// use jury_domain::verdict::VoteRule;
///
/// let rule: VoteRule = "majority".parse().unwrap();
/// assert_eq!(rule, VoteRule::Majority);
/// assert!(rule.penalty() > VoteRule::Unanimous.penalty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VoteRule {
    /// All jurors must agree
    #[default]
    Unanimous,

    /// One side must outnumber the other
    Majority,
}

impl VoteRule {
    /// Per-round willingness decay applied after round 10
    ///
    /// Majority juries decay faster: there is less pressure to keep talking.
    pub fn penalty(&self) -> f64 {
        match self {
            VoteRule::Unanimous => 0.02,
            VoteRule::Majority => 0.075,
        }
    }

    /// Get a human-readable description of this rule
    pub fn description(&self) -> &'static str {
        match self {
            VoteRule::Unanimous => "unanimous (all jurors must agree)",
            VoteRule::Majority => "majority (one side must outnumber the other)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteRule::Unanimous => "unanimous",
            VoteRule::Majority => "majority",
        }
    }
}

impl std::fmt::Display for VoteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VoteRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unanimous" | "unanimity" => Ok(VoteRule::Unanimous),
            "majority" => Ok(VoteRule::Majority),
            _ => Err(format!(
                "Unknown vote rule: {}. Valid: unanimous, majority",
                s
            )),
        }
    }
}

/// How many votes a side needs under [`VoteRule::Majority`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MajorityThreshold {
    /// Strictly more votes than the other side; a tie is hung
    #[default]
    Plurality,

    /// Strictly more than half of the whole roster
    Absolute,
}

impl MajorityThreshold {
    /// Check whether `votes` out of `roster` against `opposing` wins
    pub fn is_satisfied(&self, votes: usize, opposing: usize, roster: usize) -> bool {
        if roster == 0 {
            return false;
        }
        match self {
            MajorityThreshold::Plurality => votes > opposing,
            MajorityThreshold::Absolute => votes > roster / 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MajorityThreshold::Plurality => "plurality",
            MajorityThreshold::Absolute => "absolute",
        }
    }
}

impl std::fmt::Display for MajorityThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MajorityThreshold {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plurality" | "simple" => Ok(MajorityThreshold::Plurality),
            "absolute" => Ok(MajorityThreshold::Absolute),
            _ => Err(format!(
                "Unknown majority threshold: {}. Valid: plurality, absolute",
                s
            )),
        }
    }
}
