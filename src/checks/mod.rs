//! Checks module - The canned context sharing checks
//!
//! Provides:
//! - handoff: file-based context handoff marker
//! - counter: sequential counter update simulation

pub mod counter;
pub mod handoff;
