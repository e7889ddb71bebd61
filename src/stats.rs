//! Summary statistics for the terminal distribution W_T.
//!
//! The theoretical terminal law of a standard Wiener process over [0, T] is
//! N(0, T); these helpers compute the empirical side of that comparison and
//! the density histogram used to visualize it.

use crate::error::{ensure_nonzero, SimResult, SimulationError};

/// Empirical summary of a terminal-value sample
#[derive(Debug, Clone)]
pub struct TerminalSummary {
    /// Sample mean
    pub mean: f64,
    /// Sample variance (n-1 denominator)
    pub variance: f64,
    /// Standard error of the mean
    pub std_error: f64,
    /// Number of samples
    pub n_samples: usize,
}

impl TerminalSummary {
    /// Computes mean, variance, and standard error from a sample.
    ///
    /// # Panics
    /// Panics on samples with fewer than two values, since the variance is
    /// undefined there.
    pub fn from_samples(samples: &[f64]) -> Self {
        assert!(
            samples.len() >= 2,
            "summary requires at least two samples, got {}",
            samples.len()
        );

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;

        let variance = samples
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>()
            / (n - 1.0);

        Self {
            mean,
            variance,
            std_error: (variance / n).sqrt(),
            n_samples: samples.len(),
        }
    }
}

/// Gaussian probability density with the given mean and variance.
///
/// Used for the theoretical N(0, T) overlay against the empirical terminal
/// histogram.
pub fn gaussian_density(x: f64, mean: f64, variance: f64) -> f64 {
    use std::f64::consts::PI;

    let d = x - mean;
    (-d * d / (2.0 * variance)).exp() / (2.0 * PI * variance).sqrt()
}

/// Density-normalized histogram over equal-width bins.
///
/// Bin heights are scaled so the histogram integrates to one, making them
/// directly comparable with a probability density.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Bin edges, one more than the number of bins
    pub edges: Vec<f64>,
    /// Density per bin (count / (n * bin_width))
    pub densities: Vec<f64>,
}

impl Histogram {
    /// Bins a sample into `n_bins` equal-width bins over its range.
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`] for an empty sample or a zero
    /// bin count.
    pub fn from_samples(samples: &[f64], n_bins: usize) -> SimResult<Self> {
        ensure_nonzero("n_bins", n_bins)?;
        if samples.is_empty() {
            return Err(SimulationError::InvalidParameter {
                name: "samples",
                value: 0.0,
                constraint: "must be non-empty",
            });
        }

        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        // Degenerate sample: every value identical. One bin of unit mass.
        let width = if max > min {
            (max - min) / n_bins as f64
        } else {
            1.0
        };

        let edges: Vec<f64> = (0..=n_bins).map(|k| min + k as f64 * width).collect();

        let mut counts = vec![0usize; n_bins];
        for &x in samples {
            let mut bin = ((x - min) / width) as usize;
            // The maximum lands on the last edge; fold it into the last bin.
            if bin >= n_bins {
                bin = n_bins - 1;
            }
            counts[bin] += 1;
        }

        let norm = samples.len() as f64 * width;
        let densities = counts.iter().map(|&c| c as f64 / norm).collect();

        Ok(Self { edges, densities })
    }

    /// Number of bins.
    pub fn n_bins(&self) -> usize {
        self.densities.len()
    }

    /// Center of bin `k`.
    pub fn center(&self, k: usize) -> f64 {
        (self.edges[k] + self.edges[k + 1]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_known_sample() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = TerminalSummary::from_samples(&samples);

        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert!((summary.variance - 2.5).abs() < 1e-12);
        assert!((summary.std_error - (2.5f64 / 5.0).sqrt()).abs() < 1e-12);
        assert_eq!(summary.n_samples, 5);
    }

    #[test]
    fn test_summary_of_constant_sample() {
        let summary = TerminalSummary::from_samples(&[2.0, 2.0, 2.0, 2.0]);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std_error, 0.0);
    }

    #[test]
    #[should_panic(expected = "at least two samples")]
    fn test_summary_rejects_single_sample() {
        TerminalSummary::from_samples(&[1.0]);
    }

    #[test]
    fn test_gaussian_density_peak() {
        use std::f64::consts::PI;

        // Peak of N(0, T) is 1 / sqrt(2 pi T)
        let t = 1.0;
        let peak = gaussian_density(0.0, 0.0, t);
        assert!((peak - 1.0 / (2.0 * PI * t).sqrt()).abs() < 1e-12);

        // Symmetry around the mean
        assert!((gaussian_density(1.5, 0.0, t) - gaussian_density(-1.5, 0.0, t)).abs() < 1e-12);
    }

    #[test]
    fn test_gaussian_density_scales_with_variance() {
        // Wider distribution, lower peak
        assert!(gaussian_density(0.0, 0.0, 4.0) < gaussian_density(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_histogram_integrates_to_one() {
        let samples: Vec<f64> = (0..1000).map(|i| (i as f64) / 100.0).collect();
        let hist = Histogram::from_samples(&samples, 25).unwrap();

        let width = hist.edges[1] - hist.edges[0];
        let total: f64 = hist.densities.iter().map(|d| d * width).sum();
        assert!((total - 1.0).abs() < 1e-9, "total mass = {}", total);
    }

    #[test]
    fn test_histogram_counts_every_sample() {
        // Endpoint sample must land in the last bin, not fall off the range.
        let samples = [0.0, 0.5, 1.0];
        let hist = Histogram::from_samples(&samples, 2).unwrap();

        let width = hist.edges[1] - hist.edges[0];
        let mass: f64 = hist.densities.iter().map(|d| d * width * 3.0).sum();
        assert!((mass - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_shape() {
        let samples = [0.0, 1.0, 2.0, 3.0];
        let hist = Histogram::from_samples(&samples, 4).unwrap();
        assert_eq!(hist.n_bins(), 4);
        assert_eq!(hist.edges.len(), 5);
        assert!((hist.center(0) - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_rejects_bad_input() {
        assert!(Histogram::from_samples(&[], 10).is_err());
        assert!(Histogram::from_samples(&[1.0, 2.0], 0).is_err());
    }

    #[test]
    fn test_histogram_of_constant_sample() {
        let hist = Histogram::from_samples(&[3.0, 3.0, 3.0], 5).unwrap();
        let width = hist.edges[1] - hist.edges[0];
        let total: f64 = hist.densities.iter().map(|d| d * width).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
