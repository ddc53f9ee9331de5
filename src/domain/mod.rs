//! Domain types used throughout the exercise.
//!
//! This module defines:
//!
//! - the session-scoped dataset (`Dataset`) and its generating truth
//! - the learner's current input (`UserEstimate`)
//! - scoring outputs (`ParamErrors`, `FitVerdict`, `FitScore`)
//! - the run configuration (`SessionConfig`)

pub mod types;

pub use types::*;
