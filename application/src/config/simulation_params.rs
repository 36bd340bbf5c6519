//! Simulation parameters: batch loop control.
//!
//! [`SimulationParams`] groups the parameters that control the batch loop in
//! [`RunSimulationUseCase`](crate::use_cases::run_simulation::RunSimulationUseCase).
//! The per-trial model lives in [`TrialConfig`](jury_domain::TrialConfig).

use serde::{Deserialize, Serialize};

/// Batch loop control parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of independent trials to run.
    pub runs: usize,
    /// Base seed; run `i` uses `seed + i`. Drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: None,
        }
    }
}

impl SimulationParams {
    // ==================== Builder Methods ====================

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed of run `index` (0-based) derived from a base seed
    pub fn run_seed(base: u64, index: usize) -> u64 {
        base.wrapping_add(index as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = SimulationParams::default();
        assert_eq!(params.runs, 100);
        assert_eq!(params.seed, None);
    }

    #[test]
    fn test_builder() {
        let params = SimulationParams::default().with_runs(5).with_seed(42);
        assert_eq!(params.runs, 5);
        assert_eq!(params.seed, Some(42));
    }

    #[test]
    fn test_run_seed_wraps() {
        assert_eq!(SimulationParams::run_seed(10, 3), 13);
        assert_eq!(SimulationParams::run_seed(u64::MAX, 1), 0);
    }
}
