//! Infrastructure layer for jury-sim
//!
//! This crate contains the adapters around the use cases: configuration
//! file loading and report file output.

pub mod config;
pub mod report;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FileSimulationConfig, FileTrialConfig,
};
pub use report::{ReportError, TextReportWriter};
