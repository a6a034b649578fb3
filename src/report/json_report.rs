//! @ai:module:intent JSON report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter
//! @ai:module:stateless true

use crate::metrics::BenchmarkResults;
use anyhow::{Context, Result};
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Generate JSON report from results
    fn generate(&self, results: &BenchmarkResults, output_path: &Path) -> Result<()>;

    /// @ai:intent Read a previously written JSON report
    fn load(&self, input_path: &Path) -> Result<BenchmarkResults>;
}

/// @ai:intent Generates JSON reports from benchmark results
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Generate JSON report to file
    /// @ai:effects fs:write
    fn generate(&self, results: &BenchmarkResults, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        Ok(())
    }

    /// @ai:intent Load JSON report from file
    /// @ai:effects fs:read
    fn load(&self, input_path: &Path) -> Result<BenchmarkResults> {
        let content = std::fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read results file: {}", input_path.display()))?;
        let results = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse results file: {}", input_path.display()))?;
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{BenchmarkKind, QueryFixture};
    use crate::metrics::types::test_support::summary;
    use crate::metrics::{BenchmarkRun, QueryFailure, QueryOutcome};
    use crate::runner::SearchDepth;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_results() -> BenchmarkResults {
        let mut basic = summary(BenchmarkKind::SimpleQa, SearchDepth::Basic, 120.0, None, 8.3);
        basic.outcomes.push(QueryOutcome::Failure(QueryFailure {
            fixture: QueryFixture::question("What is the chemical formula for water?", "H2O", "science"),
            error_message: "Search provider error (429 Too Many Requests): slow down".to_string(),
        }));

        BenchmarkResults {
            timestamp: "2026-01-19T00:00:00Z".to_string(),
            provider: "tavily".to_string(),
            tokenizer: "tiktoken:cl100k_base (gpt-4)".to_string(),
            benchmarks: vec![BenchmarkRun {
                benchmark: BenchmarkKind::SimpleQa,
                configurations: vec![basic],
            }],
        }
    }

    #[test]
    fn test_generate_json_report() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("results.json");

        reporter.generate(&sample_results(), &output).unwrap();
        assert!(output.exists());

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("tavily_basic"));
        assert!(content.contains("\"status\": \"failure\""));
    }

    #[test]
    fn test_load_reads_back_written_report() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("results.json");
        let results = sample_results();

        reporter.generate(&results, &output).unwrap();
        let loaded = reporter.load(&output).unwrap();

        assert_eq!(loaded.timestamp, results.timestamp);
        assert_eq!(loaded.tokenizer, "tiktoken:cl100k_base (gpt-4)");
        let config = &loaded.benchmarks[0].configurations[0];
        assert_eq!(config.configuration_label, "tavily_basic");
        assert_eq!(config.avg_relevance_score, None);
        assert_eq!(config.outcomes, results.benchmarks[0].configurations[0].outcomes);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        assert!(JsonReporter::new().load(&temp.path().join("missing.json")).is_err());
    }
}
