//! Fit scoring: percentage errors and verdict classification.
//!
//! Pure and total. The only numeric hazard in the whole exercise lives here:
//! the empirical center can sit arbitrarily close to zero, so both
//! denominators are floored at `DENOM_FLOOR` before dividing. Below the floor
//! the "percentage" degrades to an absolute error measured against half a
//! unit, which keeps classification deterministic and monotonic.

use crate::domain::{EmpiricalParams, FitScore, FitVerdict, ParamErrors, UserEstimate};

/// Canonical tolerance: each parameter is checked independently at 15%.
pub const DEFAULT_THRESHOLD_PCT: f64 = 15.0;

/// Denominator floor for percentage errors.
pub const DENOM_FLOOR: f64 = 0.5;

/// Percentage errors of an estimate against the empirical parameters.
pub fn percentage_errors(estimate: UserEstimate, empirical: EmpiricalParams) -> ParamErrors {
    let (center_pct, center_floored) = pct_error(estimate.center, empirical.center);
    let (spread_pct, spread_floored) = pct_error(estimate.spread, empirical.spread);
    ParamErrors {
        center_pct,
        spread_pct,
        center_floored,
        spread_floored,
    }
}

fn pct_error(user: f64, empirical: f64) -> (f64, bool) {
    let denom = empirical.abs().max(DENOM_FLOOR);
    ((user - empirical).abs() / denom * 100.0, empirical.abs() < DENOM_FLOOR)
}

/// Classify errors against the threshold. An error exactly on the threshold
/// still passes.
pub fn classify(errors: ParamErrors, threshold_pct: f64) -> FitVerdict {
    let center_ok = errors.center_pct <= threshold_pct;
    let spread_ok = errors.spread_pct <= threshold_pct;
    match (center_ok, spread_ok) {
        (true, true) => FitVerdict::BothOk,
        (true, false) => FitVerdict::CenterOkSpreadOff,
        (false, true) => FitVerdict::CenterOffSpreadOk,
        (false, false) => FitVerdict::BothOff,
    }
}

/// Score one check: errors plus verdict.
pub fn score(estimate: UserEstimate, empirical: EmpiricalParams, threshold_pct: f64) -> FitScore {
    let errors = percentage_errors(estimate, empirical);
    FitScore {
        errors,
        verdict: classify(errors, threshold_pct),
        threshold_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empirical(center: f64, spread: f64) -> EmpiricalParams {
        EmpiricalParams { center, spread }
    }

    #[test]
    fn close_estimate_passes_both() {
        // center error 0.03/1.23 ≈ 2.4%, spread error 0.04/2.01 ≈ 2.0%
        let s = score(
            UserEstimate::new(1.20, 2.05),
            empirical(1.23, 2.01),
            DEFAULT_THRESHOLD_PCT,
        );
        assert_eq!(s.verdict, FitVerdict::BothOk);
        assert!(s.errors.center_pct < 3.0);
        assert!(s.errors.spread_pct < 3.0);
    }

    #[test]
    fn narrow_spread_breaches_spread_only() {
        // center ≈ 2.4% ok; spread 1.01/2.01 ≈ 50.2% breach
        let s = score(
            UserEstimate::new(1.20, 1.00),
            empirical(1.23, 2.01),
            DEFAULT_THRESHOLD_PCT,
        );
        assert_eq!(s.verdict, FitVerdict::CenterOkSpreadOff);
        assert!((s.errors.spread_pct - 50.2).abs() < 0.1);
        assert!(!s.errors.spread_floored);
    }

    #[test]
    fn zero_center_hits_floor_not_division() {
        let s = score(
            UserEstimate::new(0.05, 2.0),
            empirical(0.0, 2.0),
            DEFAULT_THRESHOLD_PCT,
        );
        assert!(s.errors.center_pct.is_finite());
        assert!(s.errors.center_floored);
        // 0.05 against a 0.5 denominator: 10%, inside tolerance.
        assert!((s.errors.center_pct - 10.0).abs() < 1e-9);
        assert_eq!(s.verdict, FitVerdict::BothOk);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // Exactly 15%: 1.15 vs 1.0.
        let e = percentage_errors(UserEstimate::new(1.15, 1.0), empirical(1.0, 1.0));
        assert!((e.center_pct - 15.0).abs() < 1e-9);
        assert_eq!(
            classify(e, DEFAULT_THRESHOLD_PCT),
            FitVerdict::BothOk
        );
    }

    #[test]
    fn verdict_is_monotone_in_center_error() {
        // Walk the user center away from the empirical center with the spread
        // error fixed; once the verdict reports a center breach it must never
        // flip back.
        let emp = empirical(1.0, 2.0);
        let mut breached = false;
        for i in 0..200 {
            let user_center = 1.0 + i as f64 * 0.01;
            let s = score(UserEstimate::new(user_center, 2.0), emp, DEFAULT_THRESHOLD_PCT);
            let center_breach = !s.verdict.center_ok();
            if breached {
                assert!(center_breach, "verdict flipped back at center {user_center}");
            }
            breached = center_breach;
        }
        assert!(breached, "walk never breached the threshold");
    }

    #[test]
    fn both_off_when_nothing_matches() {
        let s = score(
            UserEstimate::new(-3.0, 5.0),
            empirical(2.0, 1.0),
            DEFAULT_THRESHOLD_PCT,
        );
        assert_eq!(s.verdict, FitVerdict::BothOff);
    }
}
