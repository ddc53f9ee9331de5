//! Bell-curve density model.
//!
//! The model is implemented as small, pure functions so the front-ends and
//! reporting code can stay generic over "some curve on a grid".

pub mod density;

pub use density::*;
