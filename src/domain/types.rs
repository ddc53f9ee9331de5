//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while the exercise runs
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::math::Histogram;

/// Slider bounds for the learner's center estimate.
pub const CENTER_BOUNDS: [f64; 2] = [-5.0, 5.0];

/// Slider bounds for the learner's spread estimate.
///
/// The lower bound keeps the density well-defined (spread > 0).
pub const SPREAD_BOUNDS: [f64; 2] = [0.1, 5.0];

/// Step applied per slider nudge.
pub const ESTIMATE_STEP: f64 = 0.1;

/// Range the true center is drawn from.
pub const TRUTH_CENTER_BOUNDS: [f64; 2] = [-3.0, 3.0];

/// Range the true spread is drawn from.
pub const TRUTH_SPREAD_BOUNDS: [f64; 2] = [1.0, 3.0];

/// The parameters a dataset was actually generated with.
///
/// Kept out of all learner-facing output until a check explicitly reveals it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruthParams {
    pub center: f64,
    pub spread: f64,
}

/// Sample statistics computed from a dataset, serving as ground truth for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalParams {
    /// Sample mean.
    pub center: f64,
    /// Sample standard deviation (n-1 denominator).
    pub spread: f64,
}

/// Basic shape of a generated dataset (for headers and axis ranges).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_samples: usize,
    pub min: f64,
    pub max: f64,
}

/// One round's data: samples plus the parameters that produced them.
///
/// Immutable once created; regeneration replaces the whole value. Owned by the
/// caller (the TUI app or the `check` handler) and passed by reference into
/// the evaluator and scorer.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub samples: Vec<f64>,
    pub truth: TruthParams,
    pub stats: DatasetStats,
    /// Seed the dataset was generated from (shown in headers so any round can
    /// be reproduced with `bell check --seed N`).
    pub seed: u64,
}

impl Dataset {
    /// Empirical parameters, derived on demand.
    ///
    /// Returns `None` only for degenerate datasets (fewer than two samples),
    /// which `data::generate` never produces.
    pub fn empirical(&self) -> Option<EmpiricalParams> {
        let center = crate::math::mean(&self.samples)?;
        let spread = crate::math::sample_std(&self.samples)?;
        Some(EmpiricalParams { center, spread })
    }
}

/// The learner's current (center, spread) input.
///
/// Always clamped to the slider bounds; it has no lifecycle of its own beyond
/// "current UI state".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserEstimate {
    pub center: f64,
    pub spread: f64,
}

impl Default for UserEstimate {
    fn default() -> Self {
        Self {
            center: 0.0,
            spread: 1.0,
        }
    }
}

impl UserEstimate {
    pub fn new(center: f64, spread: f64) -> Self {
        Self { center, spread }.clamped()
    }

    pub fn clamped(self) -> Self {
        Self {
            center: self.center.clamp(CENTER_BOUNDS[0], CENTER_BOUNDS[1]),
            spread: self.spread.clamp(SPREAD_BOUNDS[0], SPREAD_BOUNDS[1]),
        }
    }

    pub fn nudge_center(self, steps: i32) -> Self {
        Self {
            center: self.center + f64::from(steps) * ESTIMATE_STEP,
            ..self
        }
        .clamped()
    }

    pub fn nudge_spread(self, steps: i32) -> Self {
        Self {
            spread: self.spread + f64::from(steps) * ESTIMATE_STEP,
            ..self
        }
        .clamped()
    }
}

/// Outcome of comparing an estimate against the empirical parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitVerdict {
    BothOk,
    CenterOkSpreadOff,
    CenterOffSpreadOk,
    BothOff,
}

impl FitVerdict {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            FitVerdict::BothOk => "both parameters ok",
            FitVerdict::CenterOkSpreadOff => "center ok, spread off",
            FitVerdict::CenterOffSpreadOk => "spread ok, center off",
            FitVerdict::BothOff => "both parameters off",
        }
    }

    pub fn center_ok(self) -> bool {
        matches!(self, FitVerdict::BothOk | FitVerdict::CenterOkSpreadOff)
    }

    pub fn spread_ok(self) -> bool {
        matches!(self, FitVerdict::BothOk | FitVerdict::CenterOffSpreadOk)
    }

    /// True when the round counts as a success (canned congratulation, no
    /// narrator call).
    pub fn is_pass(self) -> bool {
        matches!(self, FitVerdict::BothOk)
    }
}

/// Percentage errors of an estimate against the empirical parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParamErrors {
    pub center_pct: f64,
    pub spread_pct: f64,
    /// True when the center denominator hit the near-zero floor and the error
    /// degraded to an absolute measure (see `score::DENOM_FLOOR`).
    pub center_floored: bool,
    pub spread_floored: bool,
}

/// Full scoring output for one check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FitScore {
    pub errors: ParamErrors,
    pub verdict: FitVerdict,
    pub threshold_pct: f64,
}

/// Settings for the hosted text-generation collaborator.
#[derive(Debug, Clone)]
pub struct NarratorConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 200,
            temperature: 0.2,
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub sample_count: usize,
    pub seed: u64,
    pub bins: usize,

    pub grid_min: f64,
    pub grid_max: f64,
    pub grid_points: usize,

    pub threshold_pct: f64,

    pub narrator: NarratorConfig,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_samples: Option<PathBuf>,
    pub export_round: Option<PathBuf>,

    /// Print the empirical parameters after a check (CLI only).
    pub reveal: bool,
    /// Ask the narrator to elaborate on a failed check.
    pub narrate: bool,
}

impl SessionConfig {
    /// Canonical defaults for one round: 1000 samples, 30 bins, a
    /// 1000-point grid over [-10, 10], and the 15% tolerance.
    ///
    /// The CLI layers its flag values over this; the TUI uses it directly.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            sample_count: 1000,
            seed,
            bins: 30,
            grid_min: -10.0,
            grid_max: 10.0,
            grid_points: 1000,
            threshold_pct: crate::score::DEFAULT_THRESHOLD_PCT,
            narrator: NarratorConfig::default(),
            plot: true,
            plot_width: 100,
            plot_height: 25,
            export_samples: None,
            export_round: None,
            reveal: false,
            narrate: false,
        }
    }
}

/// Density curve evaluated on the fixed grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub density: Vec<f64>,
}

impl CurveGrid {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.density.iter().copied())
    }
}

/// A saved round file (JSON).
///
/// The portable representation of one check: enough to re-render the plot and
/// re-read the verdict without the raw samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundFile {
    pub tool: String,
    pub created: String,
    pub seed: u64,
    pub sample_count: usize,
    pub truth: TruthParams,
    pub empirical: EmpiricalParams,
    pub estimate: UserEstimate,
    pub score: FitScore,
    pub histogram: Histogram,
    pub curve: CurveGrid,
}
