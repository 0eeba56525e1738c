mod batch;
mod inputs;
mod results;
mod summary;

pub use batch::SampleBatch;
pub use inputs::{InputSet, InputVariable};
pub use results::Propagation;
pub use summary::{
    LOWER_SIGMA_FRACTION, MEDIAN_FRACTION, PercentileIndices, StdDevConvention, Summary,
    UPPER_SIGMA_FRACTION, percentile_index,
};
