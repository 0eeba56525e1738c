//! Propagation run configuration

use serde::{Deserialize, Serialize};

use crate::model::StdDevConvention;

/// Default number of Monte Carlo trials. Odd, so the median is a single sample.
pub const DEFAULT_SAMPLES: usize = 3001;

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

/// Settings for [`crate::propagation::propagate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationConfig {
    /// Number of trials to run, must be > 0
    #[serde(default = "default_samples")]
    pub n_samples: usize,
    /// Fixed seed for reproducible runs; `None` draws one from the thread-local RNG
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub std_dev: StdDevConvention,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_SAMPLES,
            seed: None,
            std_dev: StdDevConvention::default(),
        }
    }
}

impl PropagationConfig {
    #[must_use]
    pub fn new(n_samples: usize) -> Self {
        Self {
            n_samples,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn std_dev(mut self, convention: StdDevConvention) -> Self {
        self.std_dev = convention;
        self
    }
}
