//! Progress reporting during a batch

pub mod reporter;
