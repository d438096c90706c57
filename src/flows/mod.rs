//! Flows module - User-facing operations
//!
//! Provides:
//! - report: run the canned checks and persist JSON artifacts
//! - patterns: print the context flow pattern catalog

pub mod patterns;
pub mod report;
