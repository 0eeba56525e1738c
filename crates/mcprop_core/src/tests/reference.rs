//! Tests for the worked example `y = k0 + k2 / k1`
//!
//! With `k0 = 0.60 ± 0.04`, `k1 = 0.04 ± 0.01` and `k2 = 0.30 ± 0.02` the
//! output is strongly right-skewed: `k1` has a 25% relative uncertainty and
//! sits in a denominator. The reference bands below come from repeated long
//! runs of this configuration; the median summary is stable to a few percent
//! at 3001 samples while the mean and standard deviation are pulled around by
//! the heavy upper tail, so those are only pinned for a single recorded seed.

use crate::config::PropagationConfig;
use crate::function::from_fn;
use crate::model::{InputSet, PercentileIndices};
use crate::propagation::propagate;

const N_SAMPLES: usize = 3001;

fn reference_inputs() -> InputSet {
    InputSet::new()
        .with(0.60, 0.04)
        .with(0.04, 0.01)
        .with(0.30, 0.02)
}

#[test]
fn test_reference_indices_stay_in_bounds() {
    let idx = PercentileIndices::for_len(N_SAMPLES);
    assert_eq!((idx.lower, idx.median, idx.upper), (476, 1500, 2524));
    assert!(idx.upper <= N_SAMPLES - 1);
}

#[test]
fn test_reference_summary_within_tolerance() {
    let f = from_fn(3, |x| x[0] + x[2] / x[1]);

    for seed in [1, 42, 2017] {
        let result = propagate(
            &reference_inputs(),
            &f,
            &PropagationConfig::new(N_SAMPLES).seed(seed),
        )
        .unwrap();
        let s = result.summary;

        // Median of k2/k1 is close to 0.30 / 0.04 = 7.5
        assert!((s.median - 8.1).abs() < 0.3, "seed {seed}: median = {}", s.median);
        assert!(
            (s.upper_offset - 2.6).abs() < 0.5,
            "seed {seed}: upper = {}",
            s.upper_offset
        );
        assert!(
            (s.lower_offset - 1.55).abs() < 0.3,
            "seed {seed}: lower = {}",
            s.lower_offset
        );
        // Skewed output: the two summaries disagree
        assert!(s.upper_offset > s.lower_offset + 0.5);
        assert!(s.mean.is_finite() && s.std_dev > s.lower_offset);
    }
}

// SmallRng picks a different algorithm on 32-bit targets
#[cfg(target_pointer_width = "64")]
#[test]
fn test_reference_snapshot_seed_1() {
    let f = from_fn(3, |x| x[0] + x[2] / x[1]);
    let result = propagate(
        &reference_inputs(),
        &f,
        &PropagationConfig::new(N_SAMPLES).seed(1),
    )
    .unwrap();
    let s = result.summary;

    let expected = [
        ("mean", s.mean, 8.6926),
        ("std_dev", s.std_dev, 2.7521),
        ("median", s.median, 8.1035),
        ("upper_offset", s.upper_offset, 2.5962),
        ("lower_offset", s.lower_offset, 1.5504),
    ];
    for (name, actual, reference) in expected {
        assert!(
            (actual - reference).abs() < 1e-3,
            "{name} = {actual}, expected {reference}"
        );
    }
}

#[test]
fn test_smaller_uncertainties_give_gaussian_output() {
    // Ten times smaller uncertainties make the output close to Gaussian
    let inputs = InputSet::new()
        .with(0.60, 0.004)
        .with(0.04, 0.001)
        .with(0.30, 0.002);
    let f = from_fn(3, |x| x[0] + x[2] / x[1]);

    let s = propagate(&inputs, &f, &PropagationConfig::new(N_SAMPLES).seed(42))
        .unwrap()
        .summary;

    // Linearized sigma: 7.5 * sqrt(0.025^2 + (0.002 / 0.3)^2) ~= 0.194
    assert!((s.mean - 8.1).abs() < 0.03, "mean = {}", s.mean);
    assert!((s.std_dev - 0.194).abs() < 0.02, "std_dev = {}", s.std_dev);
    assert!((s.upper_offset - s.lower_offset).abs() < 0.04);
    assert!((s.median - s.mean).abs() < 0.03);
}
