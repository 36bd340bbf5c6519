//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: configuration and setup errors
//! - [`rng`]: the injectable, seedable random source

pub mod error;
pub mod rng;
