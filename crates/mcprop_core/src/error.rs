use std::fmt;

/// Errors raised while validating the arguments of a propagation run
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// The requested sample count was zero
    NoSamples,
    /// The input set length differs from the function's declared arity
    ArityMismatch { expected: usize, actual: usize },
    /// An input variable has a negative (or NaN) uncertainty
    NegativeUncertainty { index: usize, uncertainty: f64 },
    /// An input variable's value or uncertainty is infinite or NaN
    NonFiniteInput { index: usize },
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::NoSamples => write!(f, "sample count must be greater than zero"),
            InvalidInputError::ArityMismatch { expected, actual } => {
                write!(
                    f,
                    "function expects {expected} input(s) but {actual} were given"
                )
            }
            InvalidInputError::NegativeUncertainty { index, uncertainty } => {
                write!(
                    f,
                    "input {index} has invalid uncertainty {uncertainty} (must be >= 0)"
                )
            }
            InvalidInputError::NonFiniteInput { index } => {
                write!(f, "input {index} has a non-finite value or uncertainty")
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Errors raised while summarizing a sample batch
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryError {
    EmptyBatch,
    /// The batch holds NaN or infinite samples; `first_index` is in trial order
    NonFinite { count: usize, first_index: usize },
    /// Sample standard deviation needs at least two samples
    InsufficientSamples { required: usize, actual: usize },
    /// Finite samples whose mean or spread does not fit in an f64
    Overflow,
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::EmptyBatch => write!(f, "cannot summarize an empty sample batch"),
            SummaryError::NonFinite { count, first_index } => {
                write!(
                    f,
                    "sample batch contains {count} non-finite value(s) (first at trial {first_index})"
                )
            }
            SummaryError::InsufficientSamples { required, actual } => {
                write!(
                    f,
                    "summary needs at least {required} samples, batch has {actual}"
                )
            }
            SummaryError::Overflow => write!(f, "summary statistics overflowed"),
        }
    }
}

impl std::error::Error for SummaryError {}

/// Top level error returned by the propagation entry points
#[derive(Debug, Clone, PartialEq)]
pub enum PropagationError {
    InvalidInput(InvalidInputError),
    Summary(SummaryError),
}

impl fmt::Display for PropagationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropagationError::InvalidInput(e) => write!(f, "invalid input: {e}"),
            PropagationError::Summary(e) => write!(f, "summary failed: {e}"),
        }
    }
}

impl std::error::Error for PropagationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PropagationError::InvalidInput(e) => Some(e),
            PropagationError::Summary(e) => Some(e),
        }
    }
}

impl From<InvalidInputError> for PropagationError {
    fn from(err: InvalidInputError) -> Self {
        PropagationError::InvalidInput(err)
    }
}

impl From<SummaryError> for PropagationError {
    fn from(err: SummaryError) -> Self {
        PropagationError::Summary(err)
    }
}

pub type Result<T> = std::result::Result<T, PropagationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let err = InvalidInputError::ArityMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "function expects 3 input(s) but 2 were given");

        let err = SummaryError::NonFinite {
            count: 2,
            first_index: 7,
        };
        assert_eq!(
            err.to_string(),
            "sample batch contains 2 non-finite value(s) (first at trial 7)"
        );
    }

    #[test]
    fn test_propagation_error_source_chain() {
        let err: PropagationError = InvalidInputError::NoSamples.into();
        assert!(matches!(
            err,
            PropagationError::InvalidInput(InvalidInputError::NoSamples)
        ));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "sample count must be greater than zero");

        let err: PropagationError = SummaryError::EmptyBatch.into();
        assert!(err.to_string().starts_with("summary failed"));
    }
}
