//! Trial configuration from TOML (`[trial]` section)

use jury_domain::{
    DEFAULT_MAX_ROUNDS, DomainError, JurySize, MajorityThreshold, SplitPolicy, TrialConfig,
    VoteRule,
};
use serde::{Deserialize, Serialize};

/// Raw trial configuration from TOML
///
/// # Example
///
/// ```toml
/// [trial]
/// jury_size = 6
/// vote_rule = "majority"
/// argument_count = 30
/// low_bias = 1
/// high_bias = 1
/// innocent_fraction = 0.4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTrialConfig {
    /// 6 or 12
    pub jury_size: usize,
    pub vote_rule: VoteRule,
    /// Only consulted under the majority rule
    pub majority_threshold: MajorityThreshold,
    pub argument_count: usize,
    /// Jurors seeded with 10% of the trial size in claims
    pub low_bias: usize,
    /// Jurors seeded with 20% of the trial size in claims
    pub high_bias: usize,
    /// Hard cap on deliberation rounds
    pub max_rounds: usize,
    /// Fixed share of exonerating arguments; random 45/55 split when unset
    pub innocent_fraction: Option<f64>,
}

impl Default for FileTrialConfig {
    fn default() -> Self {
        Self {
            jury_size: JurySize::default().size(),
            vote_rule: VoteRule::default(),
            majority_threshold: MajorityThreshold::default(),
            argument_count: 50,
            low_bias: 0,
            high_bias: 0,
            max_rounds: DEFAULT_MAX_ROUNDS,
            innocent_fraction: None,
        }
    }
}

impl FileTrialConfig {
    /// Convert to the domain configuration
    ///
    /// Only the jury size can fail here; the remaining constraints are
    /// checked by [`TrialConfig::validate`].
    pub fn to_trial_config(&self) -> Result<TrialConfig, DomainError> {
        let split = self
            .innocent_fraction
            .map(SplitPolicy::fixed)
            .unwrap_or_default();

        Ok(TrialConfig::default()
            .with_jury_size(JurySize::try_from(self.jury_size)?)
            .with_vote_rule(self.vote_rule)
            .with_majority_threshold(self.majority_threshold)
            .with_argument_count(self.argument_count)
            .with_bias(self.low_bias, self.high_bias)
            .with_split(split)
            .with_max_rounds(self.max_rounds))
    }
}
