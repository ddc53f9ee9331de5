//! Closed-form normal density evaluation.
//!
//! The front-ends rely on two primitive operations:
//! - evaluate the density at a single point (for tests/spot checks)
//! - evaluate it over the fixed plotting grid (for charts and exports)
//!
//! Both are pure and deterministic.

use std::f64::consts::PI;

use crate::domain::CurveGrid;

/// `density(x) = 1/sqrt(2π·spread²) · exp(-0.5·(x-center)²/spread²)`.
///
/// Callers keep `spread > 0` via the slider bounds; a non-positive spread
/// would produce NaN, never a panic.
pub fn density(x: f64, center: f64, spread: f64) -> f64 {
    let var = spread * spread;
    let norm = 1.0 / (2.0 * PI * var).sqrt();
    norm * (-0.5 * (x - center).powi(2) / var).exp()
}

/// Evenly spaced evaluation grid over `[min, max]` with `points` entries.
pub fn evaluation_grid(min: f64, max: f64, points: usize) -> Vec<f64> {
    let points = points.max(2);
    let mut out = Vec::with_capacity(points);
    for i in 0..points {
        let u = i as f64 / (points as f64 - 1.0);
        out.push(min + u * (max - min));
    }
    out
}

/// Evaluate the density over a grid.
pub fn density_curve(grid: &[f64], center: f64, spread: f64) -> CurveGrid {
    CurveGrid {
        x: grid.to_vec(),
        density: grid.iter().map(|&x| density(x, center, spread)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trapezoid_area(curve: &CurveGrid) -> f64 {
        let mut area = 0.0;
        for w in curve.x.windows(2).zip(curve.density.windows(2)) {
            let (xs, ys) = w;
            area += 0.5 * (ys[0] + ys[1]) * (xs[1] - xs[0]);
        }
        area
    }

    #[test]
    fn integrates_to_one_over_grid() {
        let grid = evaluation_grid(-10.0, 10.0, 1000);
        for &(c, s) in &[(0.0, 1.0), (2.5, 0.7), (-1.3, 2.4)] {
            let curve = density_curve(&grid, c, s);
            let area = trapezoid_area(&curve);
            assert!(
                (area - 1.0).abs() < 1e-3,
                "area for ({c}, {s}) was {area}"
            );
        }
    }

    #[test]
    fn symmetric_about_center() {
        let c = 1.7;
        let s = 0.9;
        for i in 1..50 {
            let d = i as f64 * 0.1;
            let left = density(c - d, c, s);
            let right = density(c + d, c, s);
            assert!((left - right).abs() < 1e-12, "asymmetry at offset {d}");
        }
    }

    #[test]
    fn peak_value_matches_closed_form() {
        let s = 1.3;
        let peak = density(0.0, 0.0, s);
        let expected = 1.0 / (2.0 * PI * s * s).sqrt();
        assert!((peak - expected).abs() < 1e-12);
    }

    #[test]
    fn grid_is_inclusive_and_even() {
        let grid = evaluation_grid(-10.0, 10.0, 5);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0], -10.0);
        assert_eq!(grid[4], 10.0);
        assert!((grid[1] - grid[0] - 5.0).abs() < 1e-12);
    }
}
