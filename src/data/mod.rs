//! Dataset generation.

pub mod generate;

pub use generate::*;
