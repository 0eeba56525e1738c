//! Measured inputs with Gaussian uncertainties
//!
//! An `InputSet` is positional: the function being propagated reads its
//! arguments by index, so the order of variables is part of their identity.

use rand_distr::Normal;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// One independently measured quantity, `value ± uncertainty`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputVariable {
    pub value: f64,
    /// Standard deviation of the measurement, must be >= 0
    pub uncertainty: f64,
}

impl InputVariable {
    #[must_use]
    pub const fn new(value: f64, uncertainty: f64) -> Self {
        Self { value, uncertainty }
    }

    /// An input known exactly (zero uncertainty)
    #[must_use]
    pub const fn exact(value: f64) -> Self {
        Self {
            value,
            uncertainty: 0.0,
        }
    }

    /// Check that this variable can be sampled. `index` is only used for error reporting.
    pub fn validate(&self, index: usize) -> Result<(), InvalidInputError> {
        if !self.value.is_finite() {
            return Err(InvalidInputError::NonFiniteInput { index });
        }
        if self.uncertainty.is_nan() || self.uncertainty < 0.0 {
            return Err(InvalidInputError::NegativeUncertainty {
                index,
                uncertainty: self.uncertainty,
            });
        }
        if self.uncertainty.is_infinite() {
            return Err(InvalidInputError::NonFiniteInput { index });
        }
        Ok(())
    }

    /// Gaussian centered on `value` with standard deviation `uncertainty`
    pub fn distribution(&self, index: usize) -> Result<Normal<f64>, InvalidInputError> {
        self.validate(index)?;
        Normal::new(self.value, self.uncertainty)
            .map_err(|_| InvalidInputError::NonFiniteInput { index })
    }
}

impl From<(f64, f64)> for InputVariable {
    fn from((value, uncertainty): (f64, f64)) -> Self {
        Self::new(value, uncertainty)
    }
}

/// Ordered, index-addressed collection of input variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputSet(Vec<InputVariable>);

impl InputSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a variable; it takes the next free index
    pub fn push(&mut self, variable: impl Into<InputVariable>) {
        self.0.push(variable.into());
    }

    /// Builder-style variant of [`InputSet::push`]
    #[must_use]
    pub fn with(mut self, value: f64, uncertainty: f64) -> Self {
        self.push(InputVariable::new(value, uncertainty));
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InputVariable> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InputVariable> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[InputVariable] {
        &self.0
    }

    /// Central values in index order, i.e. the unperturbed function arguments
    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|v| v.value).collect()
    }

    /// Validate every variable, reporting the first failure
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        self.0
            .iter()
            .enumerate()
            .try_for_each(|(index, variable)| variable.validate(index))
    }

    /// One sampling distribution per variable, in index order
    pub fn distributions(&self) -> Result<Vec<Normal<f64>>, InvalidInputError> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, variable)| variable.distribution(index))
            .collect()
    }
}

impl From<Vec<InputVariable>> for InputSet {
    fn from(variables: Vec<InputVariable>) -> Self {
        Self(variables)
    }
}

impl<V: Into<InputVariable>> FromIterator<V> for InputSet {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a InputSet {
    type Item = &'a InputVariable;
    type IntoIter = std::slice::Iter<'a, InputVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
