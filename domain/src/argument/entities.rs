//! Argument entities
//!
//! An [`Argument`] is an abstract token: a type and a polarity. Two arguments
//! are never equal unless they carry the same [`ArgumentId`], even when
//! their type and polarity match.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Kind of argument heard during a trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    /// Unsupported assertion, only introduced by biased jurors
    Claim,
    /// Technical evidence
    Evidence,
    /// Witness testimony
    Testimony,
}

impl ArgumentType {
    /// All argument types in their canonical order
    pub const ALL: [ArgumentType; 3] = [
        ArgumentType::Claim,
        ArgumentType::Evidence,
        ArgumentType::Testimony,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentType::Claim => "claim",
            ArgumentType::Evidence => "evidence",
            ArgumentType::Testimony => "testimony",
        }
    }

    pub fn is_claim(&self) -> bool {
        matches!(self, ArgumentType::Claim)
    }
}

impl std::fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which side an argument supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Exonerating
    Innocent,
    /// Incriminating
    Guilty,
}

impl Polarity {
    /// Polarity matching a verdict flag (`true` = innocent)
    pub fn from_innocent(innocent: bool) -> Self {
        if innocent {
            Polarity::Innocent
        } else {
            Polarity::Guilty
        }
    }

    pub fn is_innocent(&self) -> bool {
        matches!(self, Polarity::Innocent)
    }

    /// Contribution of this polarity to a belief score
    pub fn score(&self) -> i64 {
        match self {
            Polarity::Innocent => 1,
            Polarity::Guilty => -1,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Polarity::Innocent => Polarity::Guilty,
            Polarity::Guilty => Polarity::Innocent,
        }
    }

    /// Polarity implied by a belief score; zero leans innocent
    pub fn from_score(score: i64) -> Self {
        Self::from_innocent(score >= 0)
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Innocent => write!(f, "innocent"),
            Polarity::Guilty => write!(f, "guilty"),
        }
    }
}

/// Identity of an argument, unique within a trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArgumentId(u32);

impl ArgumentId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ArgumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sequential identity arena scoped to one trial
#[derive(Debug, Default)]
pub struct ArgumentIdGenerator {
    next: u32,
}

impl ArgumentIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ArgumentId {
        let id = ArgumentId(self.next);
        self.next += 1;
        id
    }

    /// Number of identities handed out so far
    pub fn issued(&self) -> u32 {
        self.next
    }
}

/// A single typed, polar argument
///
/// Fields are private: once created, neither type nor polarity can change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Argument {
    id: ArgumentId,
    kind: ArgumentType,
    polarity: Polarity,
}

impl Argument {
    pub fn new(ids: &mut ArgumentIdGenerator, kind: ArgumentType, polarity: Polarity) -> Self {
        Self {
            id: ids.next_id(),
            kind,
            polarity,
        }
    }

    pub fn id(&self) -> ArgumentId {
        self.id
    }

    pub fn kind(&self) -> ArgumentType {
        self.kind
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn is_innocent(&self) -> bool {
        self.polarity.is_innocent()
    }
}

impl PartialEq for Argument {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Argument {}

impl Hash for Argument {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Belief score of a set of arguments: +1 per innocent, -1 per guilty
pub fn polarity_score<'a>(arguments: impl IntoIterator<Item = &'a Argument>) -> i64 {
    arguments.into_iter().map(|a| a.polarity().score()).sum()
}
