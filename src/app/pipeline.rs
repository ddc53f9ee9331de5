//! Shared "round pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! generate -> empirical stats -> histogram -> density grid -> score
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::data::generate_dataset;
use crate::domain::{
    CurveGrid, Dataset, EmpiricalParams, FitScore, RoundFile, SessionConfig, UserEstimate,
};
use crate::error::AppError;
use crate::math::Histogram;
use crate::models::{density_curve, evaluation_grid};

/// All computed outputs of a single check.
#[derive(Debug, Clone)]
pub struct RoundOutput {
    pub dataset: Dataset,
    pub empirical: EmpiricalParams,
    pub estimate: UserEstimate,
    pub score: FitScore,
    pub histogram: Histogram,
    pub curve: CurveGrid,
}

/// Execute the full round pipeline and return the computed outputs.
pub fn run_round(config: &SessionConfig, estimate: UserEstimate) -> Result<RoundOutput, AppError> {
    // 1) Generate a fresh dataset for this round.
    let dataset = generate_dataset(config)?;

    evaluate_round(dataset, estimate, config)
}

/// Evaluate a pre-generated dataset against an estimate.
///
/// This is useful for the TUI where we want to re-score without regenerating
/// the data on every interaction.
pub fn evaluate_round(
    dataset: Dataset,
    estimate: UserEstimate,
    config: &SessionConfig,
) -> Result<RoundOutput, AppError> {
    // 2) Empirical parameters from the samples.
    let empirical = dataset
        .empirical()
        .ok_or_else(|| AppError::runtime("Dataset too small for empirical statistics."))?;

    // 3) Histogram for display/export.
    let histogram = Histogram::from_samples(&dataset.samples, config.bins)
        .ok_or_else(|| AppError::runtime("Failed to bin samples into a histogram."))?;

    // 4) Model curve on the fixed evaluation grid.
    let grid = evaluation_grid(config.grid_min, config.grid_max, config.grid_points);
    let curve = density_curve(&grid, estimate.center, estimate.spread);

    // 5) Score the estimate.
    let score = crate::score::score(estimate, empirical, config.threshold_pct);

    Ok(RoundOutput {
        dataset,
        empirical,
        estimate,
        score,
        histogram,
        curve,
    })
}

/// Portable representation of a round for JSON export.
pub fn to_round_file(round: &RoundOutput) -> RoundFile {
    RoundFile {
        tool: "bell".to_string(),
        created: String::new(),
        seed: round.dataset.seed,
        sample_count: round.dataset.stats.n_samples,
        truth: round.dataset.truth,
        empirical: round.empirical,
        estimate: round.estimate,
        score: round.score,
        histogram: round.histogram.clone(),
        curve: round.curve.clone(),
    }
}
