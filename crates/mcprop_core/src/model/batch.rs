//! Monte Carlo output samples

use serde::{Deserialize, Serialize};

use super::summary::{StdDevConvention, Summary, percentile_index};
use crate::error::SummaryError;

/// Function outputs of one propagation run, in trial order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleBatch {
    samples: Vec<f64>,
}

impl SampleBatch {
    #[must_use]
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.samples.iter()
    }

    /// Number of NaN or infinite samples
    pub fn non_finite_count(&self) -> usize {
        self.samples.iter().filter(|x| !x.is_finite()).count()
    }

    /// Drop NaN and infinite samples, returning how many were removed
    ///
    /// The remaining samples keep their relative order.
    pub fn retain_finite(&mut self) -> usize {
        let before = self.samples.len();
        self.samples.retain(|x| x.is_finite());
        before - self.samples.len()
    }

    /// Samples sorted ascending
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.samples.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Value at cumulative probability `fraction`, using the truncated index
    /// `floor(len * fraction)` clamped into the batch.
    pub fn percentile(&self, fraction: f64) -> Result<f64, SummaryError> {
        self.ensure_finite()?;
        let sorted = self.sorted();
        Ok(sorted[percentile_index(sorted.len(), fraction)])
    }

    /// Compute both summaries of this batch
    pub fn summarize(&self, convention: StdDevConvention) -> Result<Summary, SummaryError> {
        Summary::from_samples(&self.samples, convention)
    }

    fn ensure_finite(&self) -> Result<(), SummaryError> {
        if self.samples.is_empty() {
            return Err(SummaryError::EmptyBatch);
        }
        match self.samples.iter().position(|x| !x.is_finite()) {
            Some(first_index) => Err(SummaryError::NonFinite {
                count: self.non_finite_count(),
                first_index,
            }),
            None => Ok(()),
        }
    }
}

impl From<Vec<f64>> for SampleBatch {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

impl<'a> IntoIterator for &'a SampleBatch {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retain_finite_keeps_order() {
        let mut batch = SampleBatch::new(vec![3.0, f64::NAN, 1.0, f64::NEG_INFINITY, 2.0]);
        assert_eq!(batch.non_finite_count(), 2);

        let removed = batch.retain_finite();

        assert_eq!(removed, 2);
        assert_eq!(batch.as_slice(), &[3.0, 1.0, 2.0]);
        assert!(batch.summarize(StdDevConvention::Population).is_ok());
    }

    #[test]
    fn test_summarize_fails_on_nan() {
        let batch = SampleBatch::new(vec![1.0, 2.0, f64::NAN]);
        assert!(matches!(
            batch.summarize(StdDevConvention::Population),
            Err(SummaryError::NonFinite {
                count: 1,
                first_index: 2
            })
        ));
        assert!(batch.percentile(0.5).is_err());
    }

    #[test]
    fn test_percentile_on_sorted_copy() {
        let batch = SampleBatch::new((0..100).rev().map(f64::from).collect());

        assert_eq!(batch.percentile(0.01).unwrap(), 1.0);
        assert_eq!(batch.percentile(0.5).unwrap(), 50.0);
        assert_eq!(batch.percentile(0.99).unwrap(), 99.0);
        assert_eq!(batch.percentile(1.0).unwrap(), 99.0);
        // Trial order is untouched
        assert_eq!(batch.as_slice()[0], 99.0);
    }

    #[test]
    fn test_empty_batch() {
        let batch = SampleBatch::default();
        assert!(batch.is_empty());
        assert_eq!(batch.percentile(0.5), Err(SummaryError::EmptyBatch));
        assert_eq!(
            batch.summarize(StdDevConvention::Population),
            Err(SummaryError::EmptyBatch)
        );
    }
}
