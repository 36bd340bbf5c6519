//! Application-level configuration.
//!
//! - [`SimulationParams`]: batch loop control (run count, base seed)

pub mod simulation_params;

pub use simulation_params::SimulationParams;
