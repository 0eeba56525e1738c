//! Scenario files
//!
//! A scenario bundles everything needed for one run. Scenario files are YAML:
//!
//! ```yaml
//! function: offset-ratio
//! inputs:
//!   - { value: 0.60, uncertainty: 0.04 }
//!   - { value: 0.04, uncertainty: 0.01 }
//!   - { value: 0.30, uncertainty: 0.02 }
//! samples: 3001
//! seed: 42
//! std_dev: population
//! ```

use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use mcprop_core::{DEFAULT_SAMPLES, InputSet, InputVariable, PropagationConfig, StdDevConvention};
use serde::{Deserialize, Serialize};

use crate::formula::Formula;

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub function: Formula,
    pub inputs: InputSet,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub std_dev: StdDevConvention,
}

impl Default for Scenario {
    /// The worked example: `k0 + k2 / k1` with 3001 samples
    fn default() -> Self {
        Self {
            function: Formula::OffsetRatio,
            inputs: InputSet::new()
                .with(0.60, 0.04)
                .with(0.04, 0.01)
                .with(0.30, 0.02),
            samples: DEFAULT_SAMPLES,
            seed: None,
            std_dev: StdDevConvention::Population,
        }
    }
}

impl Scenario {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read scenario {}", path.display()))?;
        // serde_saphyr errors are reported by message
        let scenario = Self::from_yaml(&content)
            .map_err(|e| eyre!("failed to parse scenario {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded scenario");
        Ok(scenario)
    }

    pub fn propagation_config(&self) -> PropagationConfig {
        PropagationConfig {
            n_samples: self.samples,
            seed: self.seed,
            std_dev: self.std_dev,
        }
    }
}

/// Parse `VALUE,UNCERTAINTY` (also accepts `VALUE±UNCERTAINTY` and `VALUE+-UNCERTAINTY`)
pub fn parse_input(s: &str) -> Result<InputVariable, String> {
    let (value, uncertainty) = s
        .split_once(',')
        .or_else(|| s.split_once('±'))
        .or_else(|| s.split_once("+-"))
        .ok_or_else(|| format!("expected VALUE,UNCERTAINTY but got '{s}'"))?;

    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value '{}': {e}", value.trim()))?;
    let uncertainty: f64 = uncertainty
        .trim()
        .parse()
        .map_err(|e| format!("invalid uncertainty '{}': {e}", uncertainty.trim()))?;

    Ok(InputVariable::new(value, uncertainty))
}

/// Parse a standard deviation convention name
pub fn parse_std_dev(s: &str) -> Result<StdDevConvention, String> {
    match s.to_ascii_lowercase().as_str() {
        "population" | "ddof0" => Ok(StdDevConvention::Population),
        "sample" | "ddof1" => Ok(StdDevConvention::Sample),
        other => Err(format!("unknown std-dev convention '{other}' (population|sample)")),
    }
}
