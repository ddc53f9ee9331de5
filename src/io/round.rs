//! Read/write round JSON files.
//!
//! Round JSON is the "portable" representation of one check:
//! - truth + empirical + estimate + errors + verdict
//! - the binned histogram and the fitted density grid for quick re-plotting
//!
//! The schema is defined by `domain::RoundFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::domain::RoundFile;
use crate::error::AppError;

/// Write a round JSON file, stamping the creation time.
pub fn write_round_json(path: &Path, round: &RoundFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create round JSON '{}': {e}",
            path.display()
        ))
    })?;

    let stamped = RoundFile {
        created: Local::now().to_rfc3339(),
        ..round.clone()
    };

    serde_json::to_writer_pretty(file, &stamped)
        .map_err(|e| AppError::usage(format!("Failed to write round JSON: {e}")))?;

    Ok(())
}

/// Read a round JSON file.
pub fn read_round_json(path: &Path) -> Result<RoundFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!("Failed to open round JSON '{}': {e}", path.display()))
    })?;
    let round: RoundFile = serde_json::from_reader(file)
        .map_err(|e| AppError::usage(format!("Invalid round JSON: {e}")))?;
    Ok(round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CurveGrid, EmpiricalParams, FitScore, FitVerdict, ParamErrors, TruthParams, UserEstimate,
    };
    use crate::math::Histogram;

    fn sample_round() -> RoundFile {
        RoundFile {
            tool: "bell".to_string(),
            created: String::new(),
            seed: 42,
            sample_count: 4,
            truth: TruthParams {
                center: 1.0,
                spread: 2.0,
            },
            empirical: EmpiricalParams {
                center: 1.1,
                spread: 1.9,
            },
            estimate: UserEstimate::new(1.0, 2.0),
            score: FitScore {
                errors: ParamErrors {
                    center_pct: 9.1,
                    spread_pct: 5.3,
                    center_floored: false,
                    spread_floored: false,
                },
                verdict: FitVerdict::BothOk,
                threshold_pct: 15.0,
            },
            histogram: Histogram::from_samples(&[0.0, 1.0, 2.0, 3.0], 2).unwrap(),
            curve: CurveGrid {
                x: vec![0.0, 1.0],
                density: vec![0.2, 0.3],
            },
        }
    }

    #[test]
    fn round_file_round_trips_through_json() {
        let round = sample_round();
        let json = serde_json::to_string(&round).unwrap();
        let back: RoundFile = serde_json::from_str(&json).unwrap();

        assert_eq!(back.seed, round.seed);
        assert_eq!(back.score.verdict, FitVerdict::BothOk);
        assert_eq!(back.histogram.counts, round.histogram.counts);
        assert_eq!(back.curve.x, round.curve.x);
    }

    #[test]
    fn verdict_serializes_snake_case() {
        let json = serde_json::to_string(&FitVerdict::CenterOkSpreadOff).unwrap();
        assert_eq!(json, "\"center_ok_spread_off\"");
    }
}
