//! Input/output helpers.
//!
//! - round JSON read/write (`round`)
//! - samples CSV export (`export`)

pub mod export;
pub mod round;

pub use export::*;
pub use round::*;
