//! Debug bundle writer for inspecting a round's inputs and scoring.
//!
//! Written from the TUI on `d`; the bundle is a single markdown file so it can
//! be pasted into an issue or diffed between seeds.

use std::fs::create_dir_all;
use std::path::PathBuf;

use chrono::Local;

use crate::app::pipeline::RoundOutput;
use crate::domain::SessionConfig;
use crate::error::AppError;

pub fn write_debug_bundle(round: &RoundOutput, config: &SessionConfig) -> Result<PathBuf, AppError> {
    let dir = PathBuf::from("debug");
    create_dir_all(&dir)
        .map_err(|e| AppError::runtime(format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("bell_debug_seed{}_{}.md", round.dataset.seed, ts));

    let body = render_bundle(round, config);
    std::fs::write(&path, body)
        .map_err(|e| AppError::runtime(format!("Failed to write debug bundle: {e}")))?;

    Ok(path)
}

fn render_bundle(round: &RoundOutput, config: &SessionConfig) -> String {
    let mut out = String::new();

    out.push_str("# bell debug bundle\n");
    out.push_str(&format!("- generated: {}\n", Local::now().to_rfc3339()));
    out.push_str(&format!("- seed: {}\n", round.dataset.seed));
    out.push_str(&format!("- sample_count: {}\n", round.dataset.stats.n_samples));
    out.push_str(&format!("- bins: {}\n", config.bins));
    out.push_str(&format!(
        "- grid: [{:.1}, {:.1}] x {}\n",
        config.grid_min, config.grid_max, config.grid_points
    ));
    out.push_str(&format!("- threshold_pct: {:.1}\n", config.threshold_pct));

    out.push_str("\n## Parameters\n");
    out.push_str("| set | center | spread |\n");
    out.push_str("| - | - | - |\n");
    out.push_str(&format!(
        "| truth | {:.4} | {:.4} |\n",
        round.dataset.truth.center, round.dataset.truth.spread
    ));
    out.push_str(&format!(
        "| empirical | {:.4} | {:.4} |\n",
        round.empirical.center, round.empirical.spread
    ));
    out.push_str(&format!(
        "| estimate | {:.4} | {:.4} |\n",
        round.estimate.center, round.estimate.spread
    ));

    out.push_str("\n## Score\n");
    out.push_str(&format!(
        "- center_error: {:.2}%{}\n",
        round.score.errors.center_pct,
        if round.score.errors.center_floored {
            " (floored denominator)"
        } else {
            ""
        }
    ));
    out.push_str(&format!(
        "- spread_error: {:.2}%{}\n",
        round.score.errors.spread_pct,
        if round.score.errors.spread_floored {
            " (floored denominator)"
        } else {
            ""
        }
    ));
    out.push_str(&format!("- verdict: {}\n", round.score.verdict.display_name()));

    out.push_str("\n## Histogram\n");
    out.push_str("| left | right | count | density |\n");
    out.push_str("| - | - | - | - |\n");
    for (i, (left, right, density)) in round.histogram.bars().enumerate() {
        out.push_str(&format!(
            "| {left:.3} | {right:.3} | {} | {density:.5} |\n",
            round.histogram.counts[i]
        ));
    }

    out.push_str("\n## Density grid (every 50th point)\n");
    out.push_str("| x | density |\n");
    out.push_str("| - | - |\n");
    for (x, d) in round.curve.points().step_by(50) {
        out.push_str(&format!("| {x:.2} | {d:.5} |\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_round;
    use crate::domain::UserEstimate;

    #[test]
    fn bundle_contains_all_sections() {
        let config = SessionConfig::with_seed(42);
        let round = run_round(&config, UserEstimate::default()).unwrap();
        let body = render_bundle(&round, &config);

        assert!(body.contains("# bell debug bundle"));
        assert!(body.contains("- seed: 42"));
        assert!(body.contains("## Parameters"));
        assert!(body.contains("| truth |"));
        assert!(body.contains("## Score"));
        assert!(body.contains("## Histogram"));
        assert!(body.contains("## Density grid"));
    }
}
