//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod simulation;
mod trial;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use simulation::FileSimulationConfig;
pub use trial::FileTrialConfig;

use jury_domain::{DomainError, TrialConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("simulation.runs must be at least 1")]
    ZeroRuns,

    #[error("invalid [trial] section: {0}")]
    Trial(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Trial model settings
    pub trial: FileTrialConfig,
    /// Batch settings
    pub simulation: FileSimulationConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    ///
    /// Returns the domain configuration it describes.
    pub fn validate(&self) -> Result<TrialConfig, ConfigValidationError> {
        if self.simulation.runs == 0 {
            return Err(ConfigValidationError::ZeroRuns);
        }
        let trial = self.trial.to_trial_config()?;
        trial.validate()?;
        Ok(trial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_full_file() {
        let toml_str = r#"
[trial]
jury_size = 12
vote_rule = "unanimous"
argument_count = 50
low_bias = 1
high_bias = 0
max_rounds = 200

[simulation]
runs = 10
seed = 7

[output]
format = "full"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let trial = config.validate().unwrap();
        assert_eq!(trial.biased_jurors, 1);
        assert_eq!(trial.max_rounds, 200);
        assert_eq!(config.simulation.runs, 10);
    }

    #[test]
    fn test_zero_runs_rejected() {
        let config: FileConfig = toml::from_str("[simulation]\nruns = 0\n").unwrap();
        assert_eq!(config.validate().unwrap_err(), ConfigValidationError::ZeroRuns);
    }

    #[test]
    fn test_too_many_biased_rejected() {
        let config: FileConfig = toml::from_str("[trial]\njury_size = 6\nhigh_bias = 7\n").unwrap();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigValidationError::Trial(DomainError::TooManyBiasedJurors {
                biased: 7,
                roster: 6
            })
        );
    }

    #[test]
    fn test_bad_split_rejected() {
        let config: FileConfig =
            toml::from_str("[trial]\ninnocent_fraction = 1.5\n").unwrap();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigValidationError::Trial(DomainError::InvalidSplit(1.5))
        );
    }

    #[test]
    fn test_unknown_vote_rule_fails_to_parse() {
        let result: Result<FileConfig, _> = toml::from_str("[trial]\nvote_rule = \"plurality\"\n");
        assert!(result.is_err());
    }
}
