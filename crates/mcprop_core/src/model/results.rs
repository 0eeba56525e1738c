//! Propagation results

use serde::{Deserialize, Serialize};

use super::batch::SampleBatch;
use super::summary::Summary;

/// Output of one propagation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propagation {
    /// Raw outputs, kept for visualization or post-filtering
    pub batch: SampleBatch,
    pub summary: Summary,
    /// Seed that generated the batch, when the run was seeded internally.
    /// Replaying with this seed reproduces the batch exactly.
    pub seed: Option<u64>,
}

impl Propagation {
    pub fn n_samples(&self) -> usize {
        self.batch.len()
    }
}
