//! Application layer for jury-sim
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SimulationParams;
pub use ports::progress::{NoProgress, ProgressNotifier};
pub use use_cases::run_simulation::{
    RunSimulationError, RunSimulationInput, RunSimulationUseCase, SimulationReport, run_trial,
};
