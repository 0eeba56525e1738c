//! Command-line front end for Monte Carlo error propagation
//!
//! This crate is the presentation layer around `mcprop_core`. It:
//! - Loads scenarios from YAML files or command-line flags
//! - Offers a catalog of built-in propagation functions
//! - Prints both summaries with fixed-point formatting
//! - Optionally draws a text histogram against the implied Gaussian

// ============================================================================
// Core modules
// ============================================================================

pub mod app;
pub mod chart;
pub mod formula;
pub mod logging;
pub mod report;
pub mod scenario;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::{RunOptions, list_functions, run_scenario};
pub use formula::Formula;
pub use logging::init_logging;
pub use scenario::Scenario;
