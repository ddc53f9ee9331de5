//! Feedback narrator: the hosted text-generation collaborator.
//!
//! The core's only obligations here are the interface contract (prompt pair,
//! model id, output cap, low temperature) and graceful degradation when the
//! credential is missing. The returned text is displayed verbatim.

pub mod client;
pub mod prompt;

pub use client::*;
pub use prompt::*;
