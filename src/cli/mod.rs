//! Command-line parsing for the distribution fitting trainer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the sampling/scoring code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bell", version, about = "Normal Distribution Fitting Trainer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive exercise.
    ///
    /// Shows a histogram of freshly generated data plus your bell curve;
    /// adjust center/spread until they match, then check your fit.
    Tui(RoundArgs),
    /// Score a single (center, spread) estimate against a seeded dataset.
    ///
    /// This uses the same underlying round pipeline as the TUI, but prints
    /// the verdict and plot once and exits (useful for scripting).
    Check(RoundArgs),
    /// Plot a previously exported round JSON.
    Plot(PlotArgs),
}

/// Common options for one exercise round.
#[derive(Debug, Parser, Clone)]
pub struct RoundArgs {
    /// Center (mean) estimate; the TUI uses it as the initial slider value.
    #[arg(long, default_value_t = 0.0)]
    pub center: f64,

    /// Spread (standard deviation) estimate; the TUI uses it as the initial
    /// slider value.
    #[arg(long, default_value_t = 1.0)]
    pub spread: f64,

    /// Random seed for dataset generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of samples to draw.
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub sample_count: usize,

    /// Histogram bin count.
    #[arg(long, default_value_t = 30)]
    pub bins: usize,

    /// Error tolerance per parameter, in percent.
    #[arg(long, default_value_t = crate::score::DEFAULT_THRESHOLD_PCT)]
    pub threshold: f64,

    /// Narrator model identifier.
    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// Narrator response length cap (tokens).
    #[arg(long, default_value_t = 200)]
    pub max_tokens: u32,

    /// Narrator sampling temperature (low for repeatable feedback).
    #[arg(long, default_value_t = 0.2)]
    pub temperature: f64,

    /// Ask the narrator to elaborate on a failed check.
    #[arg(long)]
    pub narrate: bool,

    /// Print the empirical parameters after the check.
    #[arg(long)]
    pub reveal: bool,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the raw samples to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full round (parameters + verdict + grids) to JSON.
    #[arg(long = "export-round")]
    pub export_round: Option<PathBuf>,
}

/// Options for plotting a saved round.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Round JSON file produced by `bell check --export-round`.
    #[arg(long, value_name = "JSON")]
    pub round: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
