//! Integration tests for the propagation engine
//!
//! Tests are organized by topic:
//! - `advisories` - Warning events for non-finite outputs
//! - `validation` - Argument checking and error kinds
//! - `statistics` - Statistical properties of the summaries
//! - `reproducibility` - Seeding and parallel/sequential agreement
//! - `reference` - The worked `x0 + x2/x1` example against reference values

mod reference;
