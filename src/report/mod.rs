//! Reporting utilities: canned feedback and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the sampling/scoring code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;

use crate::domain::FitScore;

/// The fixed message shown when the narrator is not used (or unavailable).
///
/// Deliberately mentions only the learner's errors, never the empirical
/// parameters.
pub fn canned_message(score: &FitScore) -> String {
    let worst = score.errors.center_pct.max(score.errors.spread_pct);
    if score.verdict.is_pass() {
        format!(
            "Amazing! You were very close. Your largest error is just {worst:.1}%. Well done."
        )
    } else {
        let what = if !score.verdict.center_ok() && !score.verdict.spread_ok() {
            "both your mean and your standard deviation"
        } else if !score.verdict.center_ok() {
            "your mean"
        } else {
            "your standard deviation"
        };
        format!(
            "Ouch! Something went wrong. There is a {worst:.1}% difference between {what} \
             and the data. Try again."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmpiricalParams, UserEstimate};
    use crate::score::{score, DEFAULT_THRESHOLD_PCT};

    #[test]
    fn pass_gets_the_congratulation() {
        let s = score(
            UserEstimate::new(1.20, 2.05),
            EmpiricalParams {
                center: 1.23,
                spread: 2.01,
            },
            DEFAULT_THRESHOLD_PCT,
        );
        let msg = canned_message(&s);
        assert!(msg.starts_with("Amazing!"));
    }

    #[test]
    fn spread_breach_names_the_standard_deviation() {
        let s = score(
            UserEstimate::new(1.20, 1.00),
            EmpiricalParams {
                center: 1.23,
                spread: 2.01,
            },
            DEFAULT_THRESHOLD_PCT,
        );
        let msg = canned_message(&s);
        assert!(msg.starts_with("Ouch!"));
        assert!(msg.contains("your standard deviation"));
        assert!(!msg.contains("both"));
    }

    #[test]
    fn double_breach_names_both() {
        let s = score(
            UserEstimate::new(-4.0, 5.0),
            EmpiricalParams {
                center: 2.0,
                spread: 1.0,
            },
            DEFAULT_THRESHOLD_PCT,
        );
        assert!(canned_message(&s).contains("both your mean and your standard deviation"));
    }
}
