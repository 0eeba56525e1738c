//! Monte Carlo propagation of Gaussian input uncertainties
//!
//! Each trial draws one value per input from `Normal(value, uncertainty)`,
//! evaluates the function on that sample vector and records the output. The
//! batch is then summarized by mean/standard deviation and by median with the
//! 68.3% interval.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng, distr::Distribution};
use rand_distr::Normal;
use tracing::{debug, warn};

use crate::config::PropagationConfig;
use crate::error::{InvalidInputError, Result};
use crate::function::PropagationFunction;
use crate::model::{InputSet, Propagation, SampleBatch, StdDevConvention};

/// Trials per independently seeded generator
const MAX_BATCH_SIZE: usize = 1000;

/// Run a propagation as described by `config`
///
/// Trials are split into fixed-size batches, each with its own generator
/// derived from the run seed and the batch index. With the `parallel` feature
/// the batches run on rayon; the resulting sample batch is the same either way.
pub fn propagate<F>(inputs: &InputSet, f: &F, config: &PropagationConfig) -> Result<Propagation>
where
    F: PropagationFunction + Sync + ?Sized,
{
    let distributions = prepare(inputs, f, config.n_samples)?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());

    debug!(
        n_samples = config.n_samples,
        inputs = inputs.len(),
        seed,
        std_dev = ?config.std_dev,
        "starting propagation"
    );

    let batch = SampleBatch::new(run_batches(&distributions, f, config.n_samples, seed));
    report_non_finite(&batch);
    let summary = batch.summarize(config.std_dev)?;

    Ok(Propagation {
        batch,
        summary,
        seed: Some(seed),
    })
}

/// Run a propagation on a single caller-supplied random stream
pub fn propagate_with_rng<F, R>(
    inputs: &InputSet,
    f: &F,
    n_samples: usize,
    convention: StdDevConvention,
    rng: &mut R,
) -> Result<Propagation>
where
    F: PropagationFunction + ?Sized,
    R: Rng + ?Sized,
{
    let batch = sample_batch(inputs, f, n_samples, rng)?;
    let summary = batch.summarize(convention)?;

    Ok(Propagation {
        batch,
        summary,
        seed: None,
    })
}

/// Draw the sample batch without summarizing it
///
/// Useful when the caller wants to drop non-finite outputs (see
/// [`SampleBatch::retain_finite`]) before computing a summary.
pub fn sample_batch<F, R>(
    inputs: &InputSet,
    f: &F,
    n_samples: usize,
    rng: &mut R,
) -> std::result::Result<SampleBatch, InvalidInputError>
where
    F: PropagationFunction + ?Sized,
    R: Rng + ?Sized,
{
    let distributions = prepare(inputs, f, n_samples)?;
    let batch = SampleBatch::new(run_trials(&distributions, f, n_samples, rng));
    report_non_finite(&batch);
    Ok(batch)
}

fn prepare<F>(
    inputs: &InputSet,
    f: &F,
    n_samples: usize,
) -> std::result::Result<Vec<Normal<f64>>, InvalidInputError>
where
    F: PropagationFunction + ?Sized,
{
    if n_samples == 0 {
        return Err(InvalidInputError::NoSamples);
    }
    if inputs.len() != f.arity() {
        return Err(InvalidInputError::ArityMismatch {
            expected: f.arity(),
            actual: inputs.len(),
        });
    }
    inputs.distributions()
}

fn run_trials<F, R>(
    distributions: &[Normal<f64>],
    f: &F,
    n_samples: usize,
    rng: &mut R,
) -> Vec<f64>
where
    F: PropagationFunction + ?Sized,
    R: Rng + ?Sized,
{
    let mut values = vec![0.0; distributions.len()];
    let mut outputs = Vec::with_capacity(n_samples);

    for _ in 0..n_samples {
        for (value, distribution) in values.iter_mut().zip(distributions) {
            *value = distribution.sample(rng);
        }
        outputs.push(f.evaluate(&values));
    }

    outputs
}

/// Generator for one batch; batch 0 uses the run seed unchanged
fn batch_rng(seed: u64, batch_index: usize) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ (batch_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn batch_len(n_samples: usize, batch_index: usize) -> usize {
    (n_samples - batch_index * MAX_BATCH_SIZE).min(MAX_BATCH_SIZE)
}

fn run_batch<F>(
    distributions: &[Normal<f64>],
    f: &F,
    n_samples: usize,
    seed: u64,
    batch_index: usize,
) -> Vec<f64>
where
    F: PropagationFunction + ?Sized,
{
    let mut rng = batch_rng(seed, batch_index);
    run_trials(
        distributions,
        f,
        batch_len(n_samples, batch_index),
        &mut rng,
    )
}

#[cfg(feature = "parallel")]
fn run_batches<F>(distributions: &[Normal<f64>], f: &F, n_samples: usize, seed: u64) -> Vec<f64>
where
    F: PropagationFunction + Sync + ?Sized,
{
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    let num_batches = n_samples.div_ceil(MAX_BATCH_SIZE);
    let batches: Vec<Vec<f64>> = (0..num_batches)
        .into_par_iter()
        .map(|i| run_batch(distributions, f, n_samples, seed, i))
        .collect();
    batches.concat()
}

#[cfg(not(feature = "parallel"))]
fn run_batches<F>(distributions: &[Normal<f64>], f: &F, n_samples: usize, seed: u64) -> Vec<f64>
where
    F: PropagationFunction + Sync + ?Sized,
{
    run_batches_sequential(distributions, f, n_samples, seed)
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn run_batches_sequential<F>(
    distributions: &[Normal<f64>],
    f: &F,
    n_samples: usize,
    seed: u64,
) -> Vec<f64>
where
    F: PropagationFunction + ?Sized,
{
    let num_batches = n_samples.div_ceil(MAX_BATCH_SIZE);
    (0..num_batches)
        .flat_map(|i| run_batch(distributions, f, n_samples, seed, i))
        .collect()
}

fn report_non_finite(batch: &SampleBatch) {
    let count = batch.non_finite_count();
    if count > 0 {
        warn!(
            count,
            n_samples = batch.len(),
            "propagation function produced non-finite results"
        );
    }
}
