//! Arguments heard during a trial
//!
//! - [`entities`]: [`Argument`](entities::Argument), its type, polarity and identity
//! - [`pool`]: trial pool generation and the per-trial claim pool

pub mod entities;
pub mod pool;
