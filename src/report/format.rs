//! Formatted terminal output for `bell check`.

use crate::domain::{Dataset, EmpiricalParams, FitScore, SessionConfig, TruthParams, UserEstimate};

/// Format the full check summary (round header + estimate + errors + verdict).
///
/// The empirical parameters are deliberately absent; `format_reveal` prints
/// them only when the learner opts in.
pub fn format_check_summary(
    dataset: &Dataset,
    estimate: UserEstimate,
    score: &FitScore,
    config: &SessionConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== bell - Distribution Fit Check ===\n");
    out.push_str(&format!(
        "Round: seed={} | n={} | bins={}\n",
        dataset.seed, dataset.stats.n_samples, config.bins
    ));
    out.push_str(&format!(
        "Data range: [{:.2}, {:.2}]\n",
        dataset.stats.min, dataset.stats.max
    ));
    out.push_str(&format!(
        "Estimate: center={:.2} | spread={:.2}\n",
        estimate.center, estimate.spread
    ));
    out.push_str(&format!(
        "Errors: center={}{} | spread={}{} (threshold {:.1}%)\n",
        fmt_pct(score.errors.center_pct),
        floored_marker(score.errors.center_floored),
        fmt_pct(score.errors.spread_pct),
        floored_marker(score.errors.spread_floored),
        score.threshold_pct,
    ));
    out.push_str(&format!("Verdict: {}\n", score.verdict.display_name()));

    out
}

/// Print the hidden parameters (opt-in via `--reveal`).
pub fn format_reveal(empirical: EmpiricalParams, truth: TruthParams) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Actual (empirical): center={:.2} | spread={:.2}\n",
        empirical.center, empirical.spread
    ));
    out.push_str(&format!(
        "Generating (truth): center={:.2} | spread={:.2}\n",
        truth.center, truth.spread
    ));
    out
}

fn fmt_pct(v: f64) -> String {
    format!("{v:.1}%")
}

/// Marks errors that were measured against the near-zero denominator floor.
fn floored_marker(floored: bool) -> &'static str {
    if floored {
        "*"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DatasetStats;
    use crate::score::{score, DEFAULT_THRESHOLD_PCT};

    fn dataset() -> Dataset {
        Dataset {
            samples: vec![0.0, 1.0, 2.0],
            truth: TruthParams {
                center: 1.0,
                spread: 1.0,
            },
            stats: DatasetStats {
                n_samples: 3,
                min: 0.0,
                max: 2.0,
            },
            seed: 42,
        }
    }

    #[test]
    fn summary_shows_estimate_and_verdict_but_not_empiricals() {
        let estimate = UserEstimate::new(1.20, 1.00);
        let empirical = EmpiricalParams {
            center: 1.23,
            spread: 2.01,
        };
        let s = score(estimate, empirical, DEFAULT_THRESHOLD_PCT);
        let txt = format_check_summary(&dataset(), estimate, &s, &SessionConfig::with_seed(42));

        assert!(txt.contains("seed=42"));
        assert!(txt.contains("center=1.20"));
        assert!(txt.contains("Verdict: center ok, spread off"));
        assert!(!txt.contains("1.23"));
        assert!(!txt.contains("2.01"));
    }

    #[test]
    fn floored_center_error_is_marked() {
        let estimate = UserEstimate::new(0.3, 2.0);
        let empirical = EmpiricalParams {
            center: 0.0,
            spread: 2.0,
        };
        let s = score(estimate, empirical, DEFAULT_THRESHOLD_PCT);
        let txt = format_check_summary(&dataset(), estimate, &s, &SessionConfig::with_seed(42));
        assert!(txt.contains("%*"));
    }

    #[test]
    fn reveal_prints_both_parameter_sets() {
        let txt = format_reveal(
            EmpiricalParams {
                center: 1.23,
                spread: 2.01,
            },
            TruthParams {
                center: 1.20,
                spread: 2.00,
            },
        );
        assert!(txt.contains("empirical"));
        assert!(txt.contains("1.23"));
        assert!(txt.contains("truth"));
        assert!(txt.contains("2.00"));
    }
}
