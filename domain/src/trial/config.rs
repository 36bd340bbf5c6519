//! Trial configuration
//!
//! A [`TrialConfig`] is validated as a whole before any random draw is made.

use crate::argument::pool::SplitPolicy;
use crate::core::error::DomainError;
use crate::deliberation::engine::DEFAULT_MAX_ROUNDS;
use crate::verdict::rule::{MajorityThreshold, VoteRule};
use serde::{Deserialize, Serialize};

/// Number of jurors on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "usize", into = "usize")]
pub enum JurySize {
    /// 6-member jury
    Small,
    /// 12-member jury
    #[default]
    Big,
}

impl JurySize {
    pub fn size(&self) -> usize {
        match self {
            JurySize::Small => 6,
            JurySize::Big => 12,
        }
    }
}

impl TryFrom<usize> for JurySize {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(JurySize::Small),
            12 => Ok(JurySize::Big),
            other => Err(DomainError::InvalidJurySize(other)),
        }
    }
}

impl From<JurySize> for usize {
    fn from(size: JurySize) -> Self {
        size.size()
    }
}

impl std::fmt::Display for JurySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.size())
    }
}

/// Parameters of a single trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialConfig {
    pub jury_size: JurySize,
    pub vote_rule: VoteRule,
    pub majority_threshold: MajorityThreshold,
    /// Size of the base argument pool
    pub argument_count: usize,
    /// Total biased jurors; must equal `low_bias + high_bias`
    pub biased_jurors: usize,
    pub low_bias: usize,
    pub high_bias: usize,
    pub split: SplitPolicy,
    /// Hard cap on deliberation rounds
    pub max_rounds: usize,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            jury_size: JurySize::Big,
            vote_rule: VoteRule::Unanimous,
            majority_threshold: MajorityThreshold::Plurality,
            argument_count: 50,
            biased_jurors: 0,
            low_bias: 0,
            high_bias: 0,
            split: SplitPolicy::RandomAsymmetric,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl TrialConfig {
    // ==================== Builder Methods ====================

    pub fn with_jury_size(mut self, jury_size: JurySize) -> Self {
        self.jury_size = jury_size;
        self
    }

    pub fn with_vote_rule(mut self, vote_rule: VoteRule) -> Self {
        self.vote_rule = vote_rule;
        self
    }

    pub fn with_majority_threshold(mut self, threshold: MajorityThreshold) -> Self {
        self.majority_threshold = threshold;
        self
    }

    pub fn with_argument_count(mut self, count: usize) -> Self {
        self.argument_count = count;
        self
    }

    /// Set both bias sub-counts; the biased total follows
    pub fn with_bias(mut self, low: usize, high: usize) -> Self {
        self.low_bias = low;
        self.high_bias = high;
        self.biased_jurors = low + high;
        self
    }

    pub fn with_split(mut self, split: SplitPolicy) -> Self {
        self.split = split;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    // ==================== Validation ====================

    pub fn validate(&self) -> Result<(), DomainError> {
        let roster = self.jury_size.size();
        if roster == 0 {
            return Err(DomainError::EmptyRoster);
        }
        if self.argument_count == 0 {
            return Err(DomainError::InvalidArgumentCount);
        }
        if self.biased_jurors > roster {
            return Err(DomainError::TooManyBiasedJurors {
                biased: self.biased_jurors,
                roster,
            });
        }
        if self.low_bias + self.high_bias != self.biased_jurors {
            return Err(DomainError::BiasCountMismatch {
                biased: self.biased_jurors,
                low: self.low_bias,
                high: self.high_bias,
            });
        }
        if self.max_rounds == 0 {
            return Err(DomainError::InvalidRoundCap);
        }
        self.split.validate()
    }

    pub fn neutral_jurors(&self) -> usize {
        self.jury_size.size().saturating_sub(self.biased_jurors)
    }
}
