//! Jurors and their profiles
//!
//! - [`entities`]: the [`Juror`](entities::Juror) entity and its knowledge base
//! - [`profile`]: acceptance vectors, bias levels and the neutral/biased profile kinds

pub mod entities;
pub mod profile;
