use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mcprop::chart::BarScale;
use mcprop::scenario::{parse_input, parse_std_dev};
use mcprop::{Formula, RunOptions, Scenario, init_logging, list_functions, run_scenario};
use mcprop_core::{InputVariable, StdDevConvention};

#[derive(Parser, Debug)]
#[command(name = "mcprop")]
#[command(about = "Propagate measurement uncertainties through a function by Monte Carlo sampling")]
struct Cli {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a propagation (defaults to the worked example)
    Run(RunArgs),
    /// List the built-in functions
    Functions,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Scenario file (YAML); flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input as VALUE,UNCERTAINTY; repeat in argument order
    #[arg(short, long = "input", value_parser = parse_input)]
    inputs: Vec<InputVariable>,

    /// Function to propagate through
    #[arg(short, long, value_enum)]
    function: Option<Formula>,

    /// Number of Monte Carlo samples (odd numbers keep the median unbiased)
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Standard deviation convention: population or sample
    #[arg(long, value_parser = parse_std_dev)]
    std_dev: Option<StdDevConvention>,

    /// Decimal places in the printed summaries
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Draw a histogram with this many bins
    #[arg(long, num_args = 0..=1, default_missing_value = "41")]
    histogram: Option<usize>,

    /// Draw histogram bars on a logarithmic density axis
    #[arg(long)]
    log_scale: bool,
}

impl RunArgs {
    fn scenario(&self) -> color_eyre::Result<Scenario> {
        let mut scenario = match &self.config {
            Some(path) => Scenario::load(path)?,
            None => Scenario::default(),
        };

        if !self.inputs.is_empty() {
            scenario.inputs = self.inputs.iter().copied().collect();
        }
        if let Some(function) = self.function {
            scenario.function = function;
        }
        if let Some(samples) = self.samples {
            scenario.samples = samples;
        }
        if self.seed.is_some() {
            scenario.seed = self.seed;
        }
        if let Some(std_dev) = self.std_dev {
            scenario.std_dev = std_dev;
        }
        Ok(scenario)
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            precision: self.precision,
            histogram_bins: self.histogram,
            histogram_scale: if self.log_scale {
                BarScale::Log
            } else {
                BarScale::Linear
            },
            show_timing: true,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Command::Run(args) => {
            let scenario = args.scenario()?;
            print!("{}", run_scenario(&scenario, &args.options())?);
        }
        Command::Functions => print!("{}", list_functions()),
    }

    Ok(())
}
