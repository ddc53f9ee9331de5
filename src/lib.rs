//! `bell-trainer` library crate.
//!
//! The binary (`bell`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI front-end, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod debug;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod narrator;
pub mod plot;
pub mod report;
pub mod score;
pub mod tui;
