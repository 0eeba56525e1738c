//! Monte Carlo error propagation library
//!
//! This crate estimates how Gaussian measurement uncertainties propagate
//! through an arbitrary scalar function. It:
//! - Samples every input independently from `Normal(value, uncertainty)`
//! - Evaluates the function once per trial
//! - Summarizes the outputs by mean and standard deviation
//! - Summarizes the outputs by median and asymmetric 68.3% interval offsets
//!
//! If the two summaries disagree, the output uncertainty is not Gaussian.
//!
//! # Example
//!
//! ```
//! use mcprop_core::{InputSet, PropagationConfig, from_fn, propagate};
//!
//! let inputs = InputSet::new()
//!     .with(0.60, 0.04)
//!     .with(0.04, 0.01)
//!     .with(0.30, 0.02);
//! let f = from_fn(3, |x| x[0] + x[2] / x[1]);
//!
//! let result = propagate(&inputs, &f, &PropagationConfig::new(3001).seed(42)).unwrap();
//! let s = result.summary;
//! println!("y_mean   = {:.4} ± {:.4}", s.mean, s.std_dev);
//! println!("y_median = {:.4} + {:.4} - {:.4}", s.median, s.upper_offset, s.lower_offset);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod error;
pub mod function;
pub mod model;
pub mod propagation;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{DEFAULT_SAMPLES, PropagationConfig};
pub use error::{InvalidInputError, PropagationError, SummaryError};
pub use function::{FnPropagation, PropagationFunction, from_fn};
pub use model::{InputSet, InputVariable, Propagation, SampleBatch, StdDevConvention, Summary};
pub use propagation::{propagate, propagate_with_rng, sample_batch};
