//! @ai:module:intent Markdown report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter
//! @ai:module:stateless true

use crate::fixtures::BenchmarkKind;
use crate::metrics::{BenchmarkResults, BenchmarkRun, ConfigurationSummary};
use crate::runner::SearchDepth;
use anyhow::Result;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for Markdown report generation
pub trait MarkdownReporterTrait: Send + Sync {
    /// @ai:intent Generate Markdown report from results
    fn generate(&self, results: &BenchmarkResults, output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates Markdown reports from benchmark results
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Format an integer with thousands separators
    /// @ai:effects pure
    /// @ai:example (1234567) -> "1,234,567"
    fn format_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }

        out
    }

    /// @ai:intent Render the whole report as a string
    /// @ai:effects pure
    pub fn render(results: &BenchmarkResults) -> String {
        let mut content = String::new();

        content.push_str(&Self::generate_summary(results));
        for run in &results.benchmarks {
            content.push_str(&Self::generate_benchmark_section(run));
        }
        content.push_str(&Self::generate_findings(results));
        content.push_str(&Self::generate_methodology(results));

        content
    }

    /// @ai:intent Generate header and executive summary
    /// @ai:effects pure
    fn generate_summary(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        writeln!(output, "# Search Information Density Benchmark Results").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Generated:** {}", results.timestamp).unwrap();
        writeln!(output, "**Provider:** {}", results.provider).unwrap();
        writeln!(output, "**Tokenizer:** {}", results.tokenizer).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "---").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "## Executive Summary").unwrap();
        writeln!(output).unwrap();

        let titles: Vec<_> = results.benchmarks.iter().map(|b| b.benchmark.title()).collect();
        writeln!(
            output,
            "Information density and token efficiency of the {} search API across: {}.",
            results.provider,
            titles.join(", ")
        )
        .unwrap();
        writeln!(output).unwrap();

        output
    }

    /// @ai:intent Generate the results table for one benchmark
    /// @ai:effects pure
    fn generate_benchmark_section(run: &BenchmarkRun) -> String {
        let mut output = String::new();
        let unit = match run.benchmark {
            BenchmarkKind::SimpleQa => "Question",
            BenchmarkKind::DocumentRelevance => "Query",
        };

        writeln!(output, "## {} Benchmark", run.benchmark.title()).unwrap();
        writeln!(output).unwrap();

        if run.benchmark.grades_relevance() {
            writeln!(
                output,
                "| Configuration | Total {unit}s | Total Tokens | Avg Tokens/{unit} | Avg Relevance | Avg Info Density | Success Rate |"
            )
            .unwrap();
            writeln!(output, "|---------------|---------------|--------------|-------------------|---------------|------------------|--------------|").unwrap();
        } else {
            writeln!(
                output,
                "| Configuration | Total {unit}s | Total Tokens | Avg Tokens/{unit} | Avg Info Density | Success Rate |"
            )
            .unwrap();
            writeln!(output, "|---------------|---------------|--------------|-------------------|------------------|--------------|").unwrap();
        }

        for summary in &run.configurations {
            writeln!(output, "{}", Self::table_row(summary)).unwrap();
        }

        writeln!(output).unwrap();

        let failures: Vec<_> = run
            .configurations
            .iter()
            .flat_map(|c| c.failures().into_iter().map(move |f| (c.configuration_label.as_str(), f)))
            .collect();

        if !failures.is_empty() {
            writeln!(output, "### Failed {}s", unit.to_lowercase()).unwrap();
            writeln!(output).unwrap();
            for (label, (query, error)) in failures {
                writeln!(output, "- `{}` {}: {}", label, query, error).unwrap();
            }
            writeln!(output).unwrap();
        }

        output
    }

    /// @ai:intent One table row per configuration
    /// @ai:effects pure
    fn table_row(summary: &ConfigurationSummary) -> String {
        let relevance = summary
            .avg_relevance_score
            .map(|r| format!(" {:.4} |", r))
            .unwrap_or_default();

        format!(
            "| {} | {} | {} | {:.2} |{} {:.4} | {:.1}% |",
            summary.configuration_label,
            summary.total_queries,
            Self::format_thousands(summary.total_tokens),
            summary.avg_tokens_per_query,
            relevance,
            summary.avg_density,
            summary.success_rate * 100.0
        )
    }

    /// @ai:intent Generate basic vs advanced findings
    /// @ai:effects pure
    fn generate_findings(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        writeln!(output, "## Key Findings").unwrap();
        writeln!(output).unwrap();

        for run in &results.benchmarks {
            let (Some(basic), Some(advanced), Some(delta)) = (
                run.configuration(SearchDepth::Basic),
                run.configuration(SearchDepth::Advanced),
                run.depth_comparison(),
            ) else {
                continue;
            };

            writeln!(output, "### {}: Basic vs Advanced", run.benchmark.title()).unwrap();
            writeln!(output).unwrap();
            writeln!(
                output,
                "- **Basic mode** uses {:.2} tokens per query on average",
                basic.avg_tokens_per_query
            )
            .unwrap();
            writeln!(
                output,
                "- **Advanced mode** uses {:.2} tokens per query on average",
                advanced.avg_tokens_per_query
            )
            .unwrap();

            match delta.token_delta_percent {
                Some(pct) if pct > 0.0 => writeln!(
                    output,
                    "- Advanced mode uses {:.1}% more tokens for potentially deeper answers",
                    pct
                )
                .unwrap(),
                Some(pct) => {
                    writeln!(output, "- Basic mode uses {:.1}% more tokens", pct.abs()).unwrap()
                }
                None => {}
            }

            if let (Some(b), Some(a)) = (basic.avg_relevance_score, advanced.avg_relevance_score) {
                writeln!(output, "- **Basic mode** achieves {:.4} relevance score", b).unwrap();
                writeln!(output, "- **Advanced mode** achieves {:.4} relevance score", a).unwrap();
            }

            writeln!(
                output,
                "- **Basic mode** information density: {:.4}",
                basic.avg_density
            )
            .unwrap();
            writeln!(
                output,
                "- **Advanced mode** information density: {:.4}",
                advanced.avg_density
            )
            .unwrap();
            writeln!(output).unwrap();
        }

        output
    }

    /// @ai:intent Generate methodology section
    /// @ai:effects pure
    fn generate_methodology(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        writeln!(output, "## Methodology").unwrap();
        writeln!(output).unwrap();

        for run in &results.benchmarks {
            let queries = run.configurations.first().map(|c| c.total_queries).unwrap_or(0);
            let max_results = run.configurations.first().map(|c| c.max_results).unwrap_or(0);

            writeln!(output, "### {} Benchmark", run.benchmark.title()).unwrap();
            match run.benchmark {
                BenchmarkKind::SimpleQa => {
                    writeln!(output, "- **Dataset:** {} factual questions across multiple domains", queries).unwrap();
                    writeln!(output, "- **Metrics:** Token count, information density (relevance per token)").unwrap();
                    writeln!(output, "- **Relevance:** fixed at 1.0, answers are not graded for correctness").unwrap();
                }
                BenchmarkKind::DocumentRelevance => {
                    writeln!(output, "- **Dataset:** {} queries across various domains", queries).unwrap();
                    writeln!(output, "- **Metrics:** Token count, relevance score, information density").unwrap();
                    writeln!(output, "- **Relevance:** fraction of expected topics found in the content").unwrap();
                }
            }
            writeln!(output, "- **Configuration:** max_results={}", max_results).unwrap();
            writeln!(output).unwrap();
        }

        writeln!(output, "### Information Density Calculation").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "Information Density = (Relevance Score / Token Count) × 1000").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "Higher values indicate more relevant information per token used.").unwrap();
        writeln!(output).unwrap();

        output
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReporterTrait for MarkdownReporter {
    /// @ai:intent Generate Markdown report to file
    /// @ai:effects fs:write
    fn generate(&self, results: &BenchmarkResults, output_path: &Path) -> Result<()> {
        std::fs::write(output_path, Self::render(results))?;
        Ok(())
    }
}
