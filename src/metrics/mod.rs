//! @ai:module:intent Query outcomes, configuration summaries and aggregation
//! @ai:module:layer application
//! @ai:module:public_api QueryOutcome, ConfigurationSummary, BenchmarkRun, BenchmarkResults, BenchmarkAggregator

pub mod aggregator;
pub mod types;

pub use aggregator::{summarize, BenchmarkAggregator};
pub use types::{
    BenchmarkResults, BenchmarkRun, ConfigurationSummary, DepthComparison, QueryFailure,
    QueryOutcome, QuerySuccess,
};
