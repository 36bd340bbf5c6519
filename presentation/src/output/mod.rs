//! Output formatting for simulation reports

pub mod console;
