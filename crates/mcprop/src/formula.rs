//! Built-in propagation functions
//!
//! The command line cannot take arbitrary code, so it offers a fixed catalog
//! of functions. Library users implement `PropagationFunction` directly.

use mcprop_core::PropagationFunction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Formula {
    Sum,
    Difference,
    Product,
    Ratio,
    /// The classic worked example, `x0 + x2 / x1`
    OffsetRatio,
    Power,
}

impl Formula {
    pub const ALL: [Formula; 6] = [
        Formula::Sum,
        Formula::Difference,
        Formula::Product,
        Formula::Ratio,
        Formula::OffsetRatio,
        Formula::Power,
    ];

    /// Name used on the command line and in scenario files
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Formula::Sum => "sum",
            Formula::Difference => "difference",
            Formula::Product => "product",
            Formula::Ratio => "ratio",
            Formula::OffsetRatio => "offset-ratio",
            Formula::Power => "power",
        }
    }

    #[must_use]
    pub fn expression(&self) -> &'static str {
        match self {
            Formula::Sum => "x0 + x1",
            Formula::Difference => "x0 - x1",
            Formula::Product => "x0 * x1",
            Formula::Ratio => "x0 / x1",
            Formula::OffsetRatio => "x0 + x2 / x1",
            Formula::Power => "x0 ^ x1",
        }
    }
}

impl PropagationFunction for Formula {
    fn arity(&self) -> usize {
        match self {
            Formula::OffsetRatio => 3,
            _ => 2,
        }
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            Formula::Sum => x[0] + x[1],
            Formula::Difference => x[0] - x[1],
            Formula::Product => x[0] * x[1],
            Formula::Ratio => x[0] / x[1],
            Formula::OffsetRatio => x[0] + x[2] / x[1],
            Formula::Power => x[0].powf(x[1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_formula_evaluation() {
        assert_eq!(Formula::Sum.evaluate(&[1.0, 2.0]), 3.0);
        assert_eq!(Formula::Difference.evaluate(&[1.0, 2.0]), -1.0);
        assert_eq!(Formula::Product.evaluate(&[3.0, 2.0]), 6.0);
        assert_eq!(Formula::Ratio.evaluate(&[3.0, 2.0]), 1.5);
        assert_eq!(Formula::OffsetRatio.evaluate(&[0.6, 0.04, 0.3]), 0.6 + 0.3 / 0.04);
        assert_eq!(Formula::Power.evaluate(&[2.0, 3.0]), 8.0);
        assert_eq!(Formula::OffsetRatio.arity(), 3);
    }

    #[test]
    fn test_names_match_cli_and_serde() {
        for formula in Formula::ALL {
            let cli_name = formula
                .to_possible_value()
                .map(|v| v.get_name().to_string());
            assert_eq!(cli_name.as_deref(), Some(formula.name()));
            assert_eq!(Formula::from_str(formula.name(), false), Ok(formula));
        }
    }
}
