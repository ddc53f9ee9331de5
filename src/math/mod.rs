//! Mathematical utilities: sample statistics and histogram binning.

pub mod histogram;
pub mod stats;

pub use histogram::*;
pub use stats::*;
