//! Simulation configuration from TOML (`[simulation]` section)

use jury_application::SimulationParams;
use serde::{Deserialize, Serialize};

/// Raw batch configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulationConfig {
    /// Number of independent trials
    pub runs: usize,
    /// Base seed for a reproducible batch
    pub seed: Option<u64>,
}

impl Default for FileSimulationConfig {
    fn default() -> Self {
        let params = SimulationParams::default();
        Self {
            runs: params.runs,
            seed: params.seed,
        }
    }
}

impl FileSimulationConfig {
    pub fn to_params(&self) -> SimulationParams {
        SimulationParams {
            runs: self.runs,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_deserialize() {
        let toml_str = r#"
[simulation]
runs = 250
seed = 42
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.simulation.to_params();
        assert_eq!(params.runs, 250);
        assert_eq!(params.seed, Some(42));
    }

    #[test]
    fn test_seed_optional() {
        let config: super::super::FileConfig = toml::from_str("[simulation]\nruns = 3\n").unwrap();
        assert_eq!(config.simulation.seed, None);
    }
}
