//! Basic sample statistics.
//!
//! Two-pass formulas are plenty here: datasets are regenerated wholesale and
//! read many times, so there is nothing to stream.

/// Sample mean. `None` for an empty slice.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Sample standard deviation (n-1 denominator). `None` for fewer than two samples.
pub fn sample_std(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let m = mean(samples)?;
    let n = samples.len() as f64;
    let variance = samples.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}

/// Smallest and largest value. `None` for an empty slice or non-finite data.
pub fn min_max(samples: &[f64]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in samples {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo.is_finite() && hi.is_finite() {
        Some((lo, hi))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_std_known_values() {
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&xs).unwrap();
        assert!((m - 5.0).abs() < 1e-12);

        // Sum of squared deviations is 32; n-1 = 7.
        let s = sample_std(&xs).unwrap();
        assert!((s - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn constant_series_has_zero_std() {
        let xs = [3.0; 10];
        assert!(sample_std(&xs).unwrap().abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs_return_none() {
        assert!(mean(&[]).is_none());
        assert!(sample_std(&[1.0]).is_none());
        assert!(min_max(&[]).is_none());
        assert!(min_max(&[f64::NAN]).is_none());
    }

    #[test]
    fn min_max_basic() {
        let (lo, hi) = min_max(&[3.0, -1.0, 2.0]).unwrap();
        assert_eq!(lo, -1.0);
        assert_eq!(hi, 3.0);
    }
}
