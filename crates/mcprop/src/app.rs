//! Running scenarios and rendering their output

use std::time::Instant;

use color_eyre::eyre::WrapErr;
use mcprop_core::{PropagationFunction, propagate};
use tracing::info;

use crate::chart::{BarScale, DEFAULT_WIDTH, Histogram};
use crate::formula::Formula;
use crate::report::render_summary;
use crate::scenario::Scenario;

/// Presentation options for a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Decimal places in the summary lines
    pub precision: usize,
    /// Histogram bin count, or `None` to skip the histogram
    pub histogram_bins: Option<usize>,
    pub histogram_scale: BarScale,
    /// Append the elapsed time to the output
    pub show_timing: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            precision: 6,
            histogram_bins: None,
            histogram_scale: BarScale::Linear,
            show_timing: true,
        }
    }
}

/// Propagate a scenario and render the result as text
pub fn run_scenario(scenario: &Scenario, options: &RunOptions) -> color_eyre::Result<String> {
    let function = scenario.function;
    info!(
        function = function.name(),
        inputs = scenario.inputs.len(),
        samples = scenario.samples,
        "running scenario"
    );

    let start = Instant::now();
    let result = propagate(&scenario.inputs, &function, &scenario.propagation_config())
        .wrap_err_with(|| format!("propagation through {} failed", function.expression()))?;
    let elapsed = start.elapsed();

    info!(
        seed = ?result.seed,
        elapsed_ms = elapsed.as_millis() as u64,
        "propagation finished"
    );

    let mut output = format!("y = {}\n", function.expression());
    output.push_str(&render_summary(&result, options.precision));
    if options.show_timing {
        output.push_str(&format!("time taken = {:.3} s\n", elapsed.as_secs_f64()));
    }

    if let Some(bins) = options.histogram_bins {
        match Histogram::from_propagation(&result, bins) {
            Some(histogram) => {
                output.push('\n');
                output.push_str(&histogram.render(DEFAULT_WIDTH, options.histogram_scale));
            }
            None => output.push_str("histogram unavailable: samples span no range\n"),
        }
    }

    Ok(output)
}

/// Table of the built-in functions
pub fn list_functions() -> String {
    Formula::ALL
        .iter()
        .map(|f| format!("{:<14} {:<14} ({} inputs)\n", f.name(), f.expression(), f.arity()))
        .collect()
}
