//! @ai:module:intent Search information density benchmark library
//! @ai:module:layer application
//! @ai:module:public_api config, error, fixtures, runner, evaluator, metrics, report, setup_check

pub mod config;
pub mod error;
pub mod evaluator;
pub mod fixtures;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod setup_check;

pub use config::BenchmarkConfig;
pub use error::BenchError;
pub use evaluator::{BpeTokenCounter, DensityCalculator, TokenCounter};
pub use fixtures::{BenchmarkKind, FixtureCatalog, QueryFixture};
pub use metrics::{BenchmarkAggregator, BenchmarkResults, ConfigurationSummary, QueryOutcome};
pub use report::ReportGenerator;
pub use runner::{CallPacer, MockSearchClient, QueryRunner, SearchClientTrait, SearchDepth, TavilyClient};
pub use setup_check::{SetupStatus, SetupValidator};
