//! Text histogram of a sample batch
//!
//! Bins span the 1%..99% percentile range so a heavy tail does not squash the
//! body of the distribution. Bar heights are probability densities, and the
//! Gaussian implied by the mean and standard deviation is drawn alongside as a
//! marker, which makes a non-Gaussian output easy to spot.

use mcprop_core::Propagation;

/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 41;

/// Default bar width in terminal cells
pub const DEFAULT_WIDTH: usize = 50;

const RANGE_LOW: f64 = 0.01;
const RANGE_HIGH: f64 = 0.99;

/// Decades of density shown below the peak on a log scale
const LOG_DECADES: f64 = 4.0;

/// Block characters for sub-character precision (from empty to full)
const BAR_CHARS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
const GAUSSIAN_MARKER: char = '•';

/// Normal probability density at `x`
pub fn gaussian_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return 0.0;
    }
    let exponent = -(x - mean).powi(2) / (2.0 * std_dev * std_dev);
    exponent.exp() / ((2.0 * std::f64::consts::PI).sqrt() * std_dev)
}

/// How bar lengths map to density
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BarScale {
    #[default]
    Linear,
    /// Logarithmic density axis, keeps sparse tail bins visible
    Log,
}

impl BarScale {
    /// Fraction of the full bar width for `value` given the largest plotted value
    fn fraction(self, value: f64, max: f64) -> f64 {
        if value <= 0.0 {
            return 0.0;
        }
        match self {
            BarScale::Linear => value / max,
            BarScale::Log => ((value / max).log10() / LOG_DECADES + 1.0).clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Left edge of the first bin
    pub low: f64,
    pub bin_width: f64,
    /// Density per bin, normalized by the full batch size
    pub densities: Vec<f64>,
    /// Gaussian density at each bin center
    pub gaussian: Vec<f64>,
}

impl Histogram {
    /// Bin a propagation result. Returns `None` when the percentile range is
    /// empty (e.g. all samples equal) or `bins` is zero.
    pub fn from_propagation(result: &Propagation, bins: usize) -> Option<Self> {
        let batch = &result.batch;
        let low = batch.percentile(RANGE_LOW).ok()?;
        let high = batch.percentile(RANGE_HIGH).ok()?;
        if bins == 0 || high <= low {
            return None;
        }

        let bin_width = (high - low) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &y in batch {
            if y < low || y > high {
                continue;
            }
            // The right edge belongs to the last bin
            let bin = (((y - low) / bin_width) as usize).min(bins - 1);
            counts[bin] += 1;
        }

        let scale = 1.0 / (bin_width * batch.len() as f64);
        let mut histogram = Self {
            low,
            bin_width,
            densities: counts.iter().map(|&c| c as f64 * scale).collect(),
            gaussian: Vec::with_capacity(bins),
        };
        let (mean, std_dev) = (result.summary.mean, result.summary.std_dev);
        histogram.gaussian = (0..bins)
            .map(|i| gaussian_pdf(histogram.center(i), mean, std_dev))
            .collect();
        Some(histogram)
    }

    pub fn bins(&self) -> usize {
        self.densities.len()
    }

    pub fn center(&self, bin: usize) -> f64 {
        self.low + (bin as f64 + 0.5) * self.bin_width
    }

    /// One row per bin: center value, density bar and Gaussian marker
    pub fn render(&self, width: usize, scale: BarScale) -> String {
        let max = self
            .densities
            .iter()
            .chain(&self.gaussian)
            .copied()
            .fold(0.0_f64, f64::max);
        if max <= 0.0 || width == 0 {
            return String::new();
        }

        let axis = match scale {
            BarScale::Linear => "",
            BarScale::Log => ", log scale",
        };
        let mut out =
            format!("density (bars) vs Gaussian from mean/std ({GAUSSIAN_MARKER}){axis}\n");
        for (bin, (&density, &pdf)) in self.densities.iter().zip(&self.gaussian).enumerate() {
            let mut cells = vec![' '; width + 1];

            let eighths = (scale.fraction(density, max) * (width * 8) as f64).round() as usize;
            let full = eighths / 8;
            cells[..full].fill(BAR_CHARS[8]);
            if eighths % 8 > 0 {
                cells[full] = BAR_CHARS[eighths % 8];
            }

            let marker = (scale.fraction(pdf, max) * width as f64).round() as usize;
            cells[marker.min(width)] = GAUSSIAN_MARKER;

            let row: String = cells.into_iter().collect();
            out.push_str(&format!("{:>12.4} │{}\n", self.center(bin), row.trim_end()));
        }
        out
    }
}
