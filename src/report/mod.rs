//! @ai:module:intent Report generation for benchmark results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, JsonReporter, MarkdownReporter, ChartGenerator

pub mod charts;
pub mod json_report;
pub mod markdown_report;

pub use charts::{density_series, ChartGenerator, ChartGeneratorTrait, DensityBar};
pub use json_report::{JsonReporter, JsonReporterTrait};
pub use markdown_report::{MarkdownReporter, MarkdownReporterTrait};

use crate::metrics::BenchmarkResults;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// @ai:intent Files written by one report pass
#[derive(Debug, Clone, Default)]
pub struct GeneratedReports {
    pub json: PathBuf,
    pub markdown: PathBuf,
    pub charts: Vec<PathBuf>,
}

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    json: JsonReporter,
    markdown: MarkdownReporter,
    charts: ChartGenerator,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            json: JsonReporter::new(),
            markdown: MarkdownReporter::new(),
            charts: ChartGenerator::new(),
        }
    }

    /// @ai:intent Generate all reports; chart failures are logged, not returned
    /// @ai:effects fs:write
    pub fn generate_all(&self, results: &BenchmarkResults, output_dir: &Path) -> Result<GeneratedReports> {
        std::fs::create_dir_all(output_dir)?;

        let json = output_dir.join("results.json");
        self.json.generate(results, &json)?;

        let markdown = output_dir.join("results.md");
        self.markdown.generate(results, &markdown)?;

        let charts = match self.charts.generate_all(results, output_dir) {
            Ok(files) => files.into_iter().map(|f| output_dir.join(f)).collect(),
            Err(e) => {
                tracing::warn!("Chart generation skipped: {}", e);
                Vec::new()
            }
        };

        tracing::info!("Reports generated in {}", output_dir.display());
        Ok(GeneratedReports { json, markdown, charts })
    }

    /// @ai:intent Rebuild Markdown and charts from an existing results.json
    /// @ai:effects fs:read, fs:write
    pub fn regenerate(&self, results_file: &Path, output_dir: &Path) -> Result<GeneratedReports> {
        let results = self.json.load(results_file)?;
        self.generate_all(&results, output_dir)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::BenchmarkKind;
    use crate::metrics::types::test_support::summary;
    use crate::metrics::BenchmarkRun;
    use crate::runner::SearchDepth;
    use tempfile::TempDir;

    fn results() -> BenchmarkResults {
        BenchmarkResults {
            timestamp: "2026-01-19T00:00:00Z".to_string(),
            provider: "tavily".to_string(),
            tokenizer: "tiktoken:cl100k_base (gpt-4)".to_string(),
            benchmarks: vec![BenchmarkRun {
                benchmark: BenchmarkKind::DocumentRelevance,
                configurations: vec![
                    summary(BenchmarkKind::DocumentRelevance, SearchDepth::Basic, 300.0, Some(0.6), 2.0),
                    summary(BenchmarkKind::DocumentRelevance, SearchDepth::Advanced, 450.0, Some(0.9), 2.0),
                ],
            }],
        }
    }

    #[test]
    fn test_generate_all_writes_json_and_markdown() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("run");

        let reports = ReportGenerator::new().generate_all(&results(), &out).unwrap();

        assert!(reports.json.exists());
        assert!(reports.markdown.exists());
        assert_eq!(reports.json, out.join("results.json"));
    }

    #[test]
    fn test_chart_failure_is_not_fatal() {
        let temp = TempDir::new().unwrap();
        let empty = BenchmarkResults {
            benchmarks: vec![],
            ..results()
        };

        let reports = ReportGenerator::new().generate_all(&empty, temp.path()).unwrap();
        assert!(reports.charts.is_empty());
        assert!(reports.markdown.exists());
    }

    #[test]
    fn test_regenerate_from_results_file() {
        let temp = TempDir::new().unwrap();
        let generator = ReportGenerator::new();
        let first = generator.generate_all(&results(), temp.path()).unwrap();
        std::fs::remove_file(&first.markdown).unwrap();

        let out = temp.path().join("again");
        let second = generator.regenerate(&first.json, &out).unwrap();

        let markdown = std::fs::read_to_string(&second.markdown).unwrap();
        assert!(markdown.contains("## Document Relevance Benchmark"));
    }
}
