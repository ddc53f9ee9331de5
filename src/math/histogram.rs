//! Fixed-bin, density-normalized histogram.
//!
//! Densities are normalized so the bar areas sum to 1, which puts the
//! histogram on the same vertical scale as the model density curve.

use serde::{Deserialize, Serialize};

use crate::math::min_max;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges, ascending, `bins + 1` entries.
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
    /// Per-bin density: `count / (n * bin_width)`.
    pub densities: Vec<f64>,
}

impl Histogram {
    /// Bin the samples over their own range.
    ///
    /// A degenerate range (all samples equal) is widened by half a unit on
    /// each side so the single spike still renders. Returns `None` for empty
    /// input, zero bins, or non-finite data.
    pub fn from_samples(samples: &[f64], bins: usize) -> Option<Self> {
        if samples.is_empty() || bins == 0 {
            return None;
        }
        let (mut lo, mut hi) = min_max(samples)?;
        if hi - lo < f64::EPSILON {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0u64; bins];
        for &v in samples {
            // The maximum sample lands exactly on the last edge; fold it into
            // the last bin rather than growing a phantom one.
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let n = samples.len() as f64;
        let densities = counts.iter().map(|&c| c as f64 / (n * width)).collect();
        let edges = (0..=bins).map(|i| lo + i as f64 * width).collect();

        Some(Self {
            edges,
            counts,
            densities,
        })
    }

    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0, f64::max)
    }

    /// Bars as `(left, right, density)` triples.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.densities
            .iter()
            .enumerate()
            .map(|(i, &d)| (self.edges[i], self.edges[i + 1], d))
    }

    /// Step outline of the bars, suitable for a line series: starts and ends
    /// at density zero so the shape closes against the x-axis.
    pub fn outline(&self) -> Vec<(f64, f64)> {
        let mut out = Vec::with_capacity(2 * self.densities.len() + 2);
        out.push((self.edges[0], 0.0));
        for (left, right, d) in self.bars() {
            out.push((left, d));
            out.push((right, d));
        }
        out.push((self.edges[self.edges.len() - 1], 0.0));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_density_normalization() {
        let samples = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5];
        let h = Histogram::from_samples(&samples, 4).unwrap();

        assert_eq!(h.counts.iter().sum::<u64>(), samples.len() as u64);
        assert_eq!(h.edges.len(), 5);

        // Bar areas sum to 1.
        let area: f64 = h.densities.iter().map(|d| d * h.bin_width()).sum();
        assert!((area - 1.0).abs() < 1e-12);
    }

    #[test]
    fn max_sample_falls_into_last_bin() {
        let samples = [0.0, 1.0, 2.0, 3.0, 4.0];
        let h = Histogram::from_samples(&samples, 4).unwrap();
        assert_eq!(*h.counts.last().unwrap(), 1);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let samples = [2.0; 50];
        let h = Histogram::from_samples(&samples, 10).unwrap();
        let (lo, hi) = h.x_range();
        assert!(lo < 2.0 && hi > 2.0);
        assert_eq!(h.counts.iter().sum::<u64>(), 50);
    }

    #[test]
    fn outline_closes_against_axis() {
        let samples = [0.0, 1.0, 2.0];
        let h = Histogram::from_samples(&samples, 2).unwrap();
        let outline = h.outline();
        assert_eq!(outline.first().unwrap().1, 0.0);
        assert_eq!(outline.last().unwrap().1, 0.0);
        assert_eq!(outline.len(), 2 * h.densities.len() + 2);
    }

    #[test]
    fn rejects_empty_and_zero_bins() {
        assert!(Histogram::from_samples(&[], 10).is_none());
        assert!(Histogram::from_samples(&[1.0], 0).is_none());
    }
}
