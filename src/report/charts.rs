//! @ai:module:intent Chart generation for benchmark results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator, density_series
//! @ai:module:stateless true

use crate::fixtures::BenchmarkKind;
use crate::metrics::BenchmarkResults;
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// @ai:intent One bar of the density chart
#[derive(Debug, Clone, PartialEq)]
pub struct DensityBar {
    pub label: String,
    pub benchmark: BenchmarkKind,
    pub density: f64,
}

/// @ai:intent Flatten results into one bar per benchmark configuration, in run order
/// @ai:effects pure
pub fn density_series(results: &BenchmarkResults) -> Vec<DensityBar> {
    results
        .benchmarks
        .iter()
        .flat_map(|run| {
            run.configurations.iter().map(move |c| DensityBar {
                label: format!("{} {}", run.benchmark.title(), c.search_depth),
                benchmark: run.benchmark,
                density: c.avg_density,
            })
        })
        .collect()
}

/// @ai:intent Upper bound of the y axis, with headroom above the tallest bar
/// @ai:effects pure
fn y_ceiling(bars: &[DensityBar]) -> f64 {
    let max = bars.iter().map(|b| b.density).fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.15
    } else {
        1.0
    }
}

/// @ai:intent Trait for chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Generate all charts from results
    fn generate_all(&self, results: &BenchmarkResults, output_dir: &Path) -> Result<Vec<String>>;
}

/// @ai:intent Generates charts from benchmark results
pub struct ChartGenerator;

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Generate density bar chart, one bar per configuration
    /// @ai:effects fs:write
    fn generate_density_chart(&self, results: &BenchmarkResults, output_path: &Path) -> Result<()> {
        let bars = density_series(results);
        if bars.is_empty() {
            anyhow::bail!("No configurations to chart");
        }

        let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Information Density by Configuration", ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0..bars.len() as i32, 0f64..y_ceiling(&bars))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bars.len())
            .y_desc("Relevance per 1000 tokens")
            .x_label_formatter(&|x| {
                bars.get(*x as usize)
                    .map(|b| b.label.clone())
                    .unwrap_or_default()
            })
            .draw()?;

        for (kind, color) in [
            (BenchmarkKind::SimpleQa, BLUE),
            (BenchmarkKind::DocumentRelevance, GREEN),
        ] {
            chart
                .draw_series(
                    bars.iter()
                        .enumerate()
                        .filter(|(_, b)| b.benchmark == kind)
                        .map(|(i, b)| {
                            Rectangle::new(
                                [(i as i32, 0.0), (i as i32 + 1, b.density)],
                                color.mix(0.7).filled(),
                            )
                        }),
                )?
                .label(kind.title())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.mix(0.7).filled())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:intent Generate all charts
    /// @ai:effects fs:write
    fn generate_all(&self, results: &BenchmarkResults, output_dir: &Path) -> Result<Vec<String>> {
        std::fs::create_dir_all(output_dir)?;

        let density_path = output_dir.join("density.png");
        self.generate_density_chart(results, &density_path)?;

        Ok(vec!["density.png".to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::types::test_support::summary;
    use crate::metrics::BenchmarkRun;
    use crate::runner::SearchDepth;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn results() -> BenchmarkResults {
        BenchmarkResults {
            timestamp: "2026-01-19T00:00:00Z".to_string(),
            provider: "tavily".to_string(),
            tokenizer: "tiktoken:cl100k_base (gpt-4)".to_string(),
            benchmarks: vec![
                BenchmarkRun {
                    benchmark: BenchmarkKind::SimpleQa,
                    configurations: vec![
                        summary(BenchmarkKind::SimpleQa, SearchDepth::Basic, 100.0, None, 10.0),
                        summary(BenchmarkKind::SimpleQa, SearchDepth::Advanced, 200.0, None, 5.0),
                    ],
                },
                BenchmarkRun {
                    benchmark: BenchmarkKind::DocumentRelevance,
                    configurations: vec![summary(
                        BenchmarkKind::DocumentRelevance,
                        SearchDepth::Basic,
                        400.0,
                        Some(0.8),
                        2.0,
                    )],
                },
            ],
        }
    }

    #[test]
    fn test_density_series_follows_run_order() {
        let bars = density_series(&results());

        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["SimpleQA basic", "SimpleQA advanced", "Document Relevance basic"]
        );
        assert_eq!(bars[0].density, 10.0);
        assert_eq!(bars[2].benchmark, BenchmarkKind::DocumentRelevance);
    }

    #[test]
    fn test_y_ceiling() {
        assert_eq!(y_ceiling(&[]), 1.0);
        let bars = density_series(&results());
        assert!((y_ceiling(&bars) - 11.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_results_fail_without_writing() {
        let temp = TempDir::new().unwrap();
        let empty = BenchmarkResults {
            benchmarks: vec![],
            ..results()
        };

        assert!(ChartGenerator::new().generate_all(&empty, temp.path()).is_err());
        assert!(!temp.path().join("density.png").exists());
    }
}
