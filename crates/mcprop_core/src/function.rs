//! Functions that uncertainties are propagated through
//!
//! A propagation function only ever sees sampled values, never the
//! uncertainties. It declares how many positional arguments it reads so the
//! propagator can check the input set before sampling.

/// A pure scalar function of positional inputs
pub trait PropagationFunction {
    /// Number of inputs the function reads
    fn arity(&self) -> usize;

    /// Evaluate on one sample vector of exactly `arity()` values
    fn evaluate(&self, values: &[f64]) -> f64;
}

impl<T: PropagationFunction + ?Sized> PropagationFunction for &T {
    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn evaluate(&self, values: &[f64]) -> f64 {
        (**self).evaluate(values)
    }
}

impl<T: PropagationFunction + ?Sized> PropagationFunction for Box<T> {
    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn evaluate(&self, values: &[f64]) -> f64 {
        (**self).evaluate(values)
    }
}

/// Closure with a declared arity
///
/// ```
/// use mcprop_core::function::{PropagationFunction, from_fn};
///
/// let f = from_fn(3, |x| x[0] + x[2] / x[1]);
/// assert_eq!(f.arity(), 3);
/// assert_eq!(f.evaluate(&[1.0, 2.0, 4.0]), 3.0);
/// ```
#[derive(Clone, Copy)]
pub struct FnPropagation<F> {
    arity: usize,
    f: F,
}

impl<F> FnPropagation<F>
where
    F: Fn(&[f64]) -> f64,
{
    pub fn new(arity: usize, f: F) -> Self {
        Self { arity, f }
    }
}

impl<F> PropagationFunction for FnPropagation<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn arity(&self) -> usize {
        self.arity
    }

    fn evaluate(&self, values: &[f64]) -> f64 {
        (self.f)(values)
    }
}

impl<F> std::fmt::Debug for FnPropagation<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPropagation")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`FnPropagation::new`]
pub fn from_fn<F>(arity: usize, f: F) -> FnPropagation<F>
where
    F: Fn(&[f64]) -> f64,
{
    FnPropagation::new(arity, f)
}
