//! Text rendering of propagation results

use mcprop_core::Propagation;

/// Fixed-point formatting with `precision` decimals
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Both summaries, one per line, in the `y_mean` / `y_median` layout
pub fn render_summary(result: &Propagation, precision: usize) -> String {
    let s = &result.summary;
    let seed = result
        .seed
        .map(|seed| format!(" (seed {seed})"))
        .unwrap_or_default();

    [
        format!(
            "y_mean     = {} ± {}",
            format_fixed(s.mean, precision),
            format_fixed(s.std_dev, precision)
        ),
        format!(
            "y_median   = {} + {} - {}",
            format_fixed(s.median, precision),
            format_fixed(s.upper_offset, precision),
            format_fixed(s.lower_offset, precision)
        ),
        format!("samples    = {}{seed}", result.n_samples()),
    ]
    .join("\n")
        + "\n"
}
