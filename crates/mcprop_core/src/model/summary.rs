//! Parametric and non-parametric summaries of a sample batch
//!
//! The mean/standard deviation pair is only meaningful when the output is
//! close to Gaussian. The median with its 68.3% interval holds for any shape.
//! Both are always reported and comparing them is up to the caller.

use serde::{Deserialize, Serialize};

use crate::error::SummaryError;

/// Cumulative probability of the -1 sigma point of a Gaussian
pub const LOWER_SIGMA_FRACTION: f64 = 0.158655254;
/// Cumulative probability of the median
pub const MEDIAN_FRACTION: f64 = 0.5;
/// Cumulative probability of the +1 sigma point of a Gaussian
pub const UPPER_SIGMA_FRACTION: f64 = 0.841344746;

/// Divisor used for the standard deviation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StdDevConvention {
    /// Divide by N (numpy's `ddof=0`)
    #[default]
    Population,
    /// Divide by N - 1 (Bessel's correction)
    Sample,
}

impl StdDevConvention {
    fn min_samples(self) -> usize {
        match self {
            StdDevConvention::Population => 1,
            StdDevConvention::Sample => 2,
        }
    }

    fn divisor(self, n: usize) -> f64 {
        match self {
            StdDevConvention::Population => n as f64,
            StdDevConvention::Sample => (n - 1) as f64,
        }
    }
}

/// Index of the `fraction` quantile in a sorted sequence of length `len`
///
/// Truncates `len * fraction` and clamps into `[0, len - 1]`. Returns 0 for an
/// empty sequence; callers must check emptiness before indexing.
#[must_use]
pub fn percentile_index(len: usize, fraction: f64) -> usize {
    if len == 0 {
        return 0;
    }
    let raw = (len as f64 * fraction).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(len - 1)
    }
}

/// The three indices used for the median summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentileIndices {
    pub lower: usize,
    pub median: usize,
    pub upper: usize,
}

impl PercentileIndices {
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        Self {
            lower: percentile_index(len, LOWER_SIGMA_FRACTION),
            median: percentile_index(len, MEDIAN_FRACTION),
            upper: percentile_index(len, UPPER_SIGMA_FRACTION),
        }
    }
}

/// Both summaries of one propagation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
    /// 84.13th percentile minus the median
    pub upper_offset: f64,
    /// Median minus the 15.87th percentile
    pub lower_offset: f64,
}

impl Summary {
    /// Summarize raw samples in trial order
    ///
    /// Fails on an empty slice, on any NaN or infinite sample, and on fewer
    /// samples than the standard deviation convention needs.
    pub fn from_samples(
        samples: &[f64],
        convention: StdDevConvention,
    ) -> Result<Self, SummaryError> {
        if samples.is_empty() {
            return Err(SummaryError::EmptyBatch);
        }
        if let Some(first_index) = samples.iter().position(|x| !x.is_finite()) {
            let count = samples.iter().filter(|x| !x.is_finite()).count();
            return Err(SummaryError::NonFinite { count, first_index });
        }
        let required = convention.min_samples();
        if samples.len() < required {
            return Err(SummaryError::InsufficientSamples {
                required,
                actual: samples.len(),
            });
        }

        let n = samples.len();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let sum_sq: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
        let std_dev = (sum_sq / convention.divisor(n)).sqrt();

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let idx = PercentileIndices::for_len(n);
        let median = sorted[idx.median];

        let summary = Self {
            mean,
            std_dev,
            median,
            upper_offset: sorted[idx.upper] - median,
            lower_offset: median - sorted[idx.lower],
        };

        // Overflow in the accumulations (e.g. samples near f64::MAX)
        if !summary.is_finite() {
            return Err(SummaryError::Overflow);
        }
        Ok(summary)
    }

    /// Value at the +1 sigma-equivalent percentile
    pub fn upper(&self) -> f64 {
        self.median + self.upper_offset
    }

    /// Value at the -1 sigma-equivalent percentile
    pub fn lower(&self) -> f64 {
        self.median - self.lower_offset
    }

    /// The 68.3% coverage interval `(lower, upper)`
    pub fn interval(&self) -> (f64, f64) {
        (self.lower(), self.upper())
    }

    fn is_finite(&self) -> bool {
        [
            self.mean,
            self.std_dev,
            self.median,
            self.upper_offset,
            self.lower_offset,
        ]
        .iter()
        .all(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_for_reference_sample_count() {
        let idx = PercentileIndices::for_len(3001);
        assert_eq!(idx.lower, 476);
        assert_eq!(idx.median, 1500);
        assert_eq!(idx.upper, 2524);
        assert!(idx.upper <= 3000);
    }

    #[test]
    fn test_indices_clamped_for_tiny_batches() {
        let idx = PercentileIndices::for_len(1);
        assert_eq!(idx, PercentileIndices { lower: 0, median: 0, upper: 0 });

        let idx = PercentileIndices::for_len(2);
        assert_eq!(idx.lower, 0);
        assert_eq!(idx.median, 1);
        assert_eq!(idx.upper, 1);

        assert_eq!(percentile_index(10, 1.0), 9);
        assert_eq!(percentile_index(10, -0.5), 0);
        assert_eq!(percentile_index(0, 0.5), 0);
    }

    #[test]
    fn test_indices_within_bounds_for_all_small_lengths() {
        for len in 1..500 {
            let idx = PercentileIndices::for_len(len);
            assert!(idx.lower <= idx.median && idx.median <= idx.upper);
            assert!(idx.upper < len, "len={len} upper={}", idx.upper);
        }
    }

    #[test]
    fn test_population_vs_sample_std() {
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        let population = Summary::from_samples(&samples, StdDevConvention::Population).unwrap();
        assert!((population.mean - 5.0).abs() < 1e-12);
        assert!((population.std_dev - 2.0).abs() < 1e-12);

        let sample = Summary::from_samples(&samples, StdDevConvention::Sample).unwrap();
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((sample.std_dev - expected).abs() < 1e-12);
    }

    #[test]
    fn test_median_and_offsets_use_truncated_indices() {
        // Unsorted on purpose
        let samples: Vec<f64> = (0..11).rev().map(f64::from).collect();
        let summary = Summary::from_samples(&samples, StdDevConvention::Population).unwrap();

        // 11 * 0.5 = 5.5 -> 5, 11 * 0.8413 = 9.25 -> 9, 11 * 0.1587 = 1.75 -> 1
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.upper_offset, 4.0);
        assert_eq!(summary.lower_offset, 4.0);
        assert_eq!(summary.interval(), (1.0, 9.0));
    }

    #[test]
    fn test_nan_sample_rejected() {
        let samples = [1.0, f64::NAN, 2.0, f64::INFINITY];
        let err = Summary::from_samples(&samples, StdDevConvention::Population).unwrap_err();
        assert_eq!(
            err,
            SummaryError::NonFinite {
                count: 2,
                first_index: 1
            }
        );
    }

    #[test]
    fn test_empty_and_insufficient() {
        assert_eq!(
            Summary::from_samples(&[], StdDevConvention::Population),
            Err(SummaryError::EmptyBatch)
        );
        assert_eq!(
            Summary::from_samples(&[1.0], StdDevConvention::Sample),
            Err(SummaryError::InsufficientSamples {
                required: 2,
                actual: 1
            })
        );

        let single = Summary::from_samples(&[1.5], StdDevConvention::Population).unwrap();
        assert_eq!(single.median, 1.5);
        assert_eq!(single.std_dev, 0.0);
    }

    #[test]
    fn test_std_convention_serde_names() {
        let json = serde_json::to_string(&StdDevConvention::Sample).unwrap();
        assert_eq!(json, "\"sample\"");
        let parsed: StdDevConvention = serde_json::from_str("\"population\"").unwrap();
        assert_eq!(parsed, StdDevConvention::Population);
    }
}
