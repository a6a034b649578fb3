//! @ai:module:intent Run fixture lists and reduce outcomes into summaries
//! @ai:module:layer application
//! @ai:module:public_api BenchmarkAggregator, summarize
//! @ai:module:stateless false

use crate::fixtures::{BenchmarkKind, FixtureCatalog, QueryFixture};
use crate::metrics::types::{BenchmarkResults, BenchmarkRun, ConfigurationSummary, QueryOutcome};
use crate::runner::client::{SearchClientTrait, SearchDepth};
use crate::runner::pacer::PacerTrait;
use crate::runner::query_runner::{QueryRunner, RunConfiguration};

/// @ai:intent Runs every fixture for a configuration and summarizes the outcomes
pub struct BenchmarkAggregator<C: SearchClientTrait, P: PacerTrait> {
    runner: QueryRunner<C, P>,
}

impl<C: SearchClientTrait, P: PacerTrait> BenchmarkAggregator<C, P> {
    /// @ai:intent Create a new aggregator around a query runner
    /// @ai:effects pure
    pub fn new(runner: QueryRunner<C, P>) -> Self {
        Self { runner }
    }

    /// @ai:intent Run fixtures sequentially in order and summarize
    /// @ai:post summary.outcomes.len() == fixtures.len()
    /// @ai:effects network, time
    pub async fn aggregate(
        &self,
        fixtures: &[QueryFixture],
        config: &RunConfiguration,
    ) -> ConfigurationSummary {
        tracing::info!(
            "Running {} benchmark on {} ({} queries)",
            config.benchmark.title(),
            config.label(),
            fixtures.len()
        );

        let total = fixtures.len();
        let mut outcomes = Vec::with_capacity(total);

        for (i, fixture) in fixtures.iter().enumerate() {
            tracing::info!("[{}/{}] {}", i + 1, total, fixture.text);
            outcomes.push(self.runner.run(fixture, config).await);
        }

        summarize(config, outcomes)
    }

    /// @ai:intent Run one benchmark at each depth, in the order given
    /// @ai:effects network, time
    pub async fn run_benchmark(
        &self,
        benchmark: BenchmarkKind,
        fixtures: &[QueryFixture],
        provider: &str,
        depths: &[SearchDepth],
        max_results: u32,
    ) -> BenchmarkRun {
        let mut configurations = Vec::with_capacity(depths.len());

        for depth in depths {
            let config = RunConfiguration {
                provider: provider.to_string(),
                benchmark,
                depth: *depth,
                max_results,
            };
            configurations.push(self.aggregate(fixtures, &config).await);
        }

        BenchmarkRun {
            benchmark,
            configurations,
        }
    }

    /// @ai:intent Run every benchmark present in the catalogue at each depth
    /// @ai:post benchmarks appear SimpleQA first, skipping those without fixtures
    /// @ai:effects network, time
    pub async fn run_suite(
        &self,
        catalog: &FixtureCatalog,
        provider: &str,
        depths: &[SearchDepth],
        max_results: u32,
        timestamp: String,
    ) -> BenchmarkResults {
        let mut benchmarks = Vec::new();

        for benchmark in catalog.benchmarks() {
            let fixtures = catalog.for_benchmark(benchmark);
            benchmarks.push(
                self.run_benchmark(benchmark, &fixtures, provider, depths, max_results)
                    .await,
            );
        }

        BenchmarkResults {
            timestamp,
            provider: provider.to_string(),
            tokenizer: self.runner.tokenizer_vocabulary().to_string(),
            benchmarks,
        }
    }
}

/// Running totals over successful outcomes.
#[derive(Default)]
struct Accumulator {
    successes: usize,
    tokens: u64,
    relevance: f64,
    density: f64,
    latency: f64,
}

impl Accumulator {
    fn mean(&self, total: f64) -> f64 {
        if self.successes == 0 {
            0.0
        } else {
            total / self.successes as f64
        }
    }
}

/// @ai:intent Reduce outcomes into summary statistics, skipping failures
/// @ai:post averages are 0 when no outcome succeeded
/// @ai:effects pure
pub fn summarize(config: &RunConfiguration, outcomes: Vec<QueryOutcome>) -> ConfigurationSummary {
    let mut acc = Accumulator::default();

    for success in outcomes.iter().filter_map(QueryOutcome::as_success) {
        acc.successes += 1;
        acc.tokens += success.tokens as u64;
        acc.relevance += success.relevance_score;
        acc.density += success.density;
        acc.latency += success.latency_seconds;
    }

    let total_queries = outcomes.len();
    let success_rate = if total_queries == 0 {
        0.0
    } else {
        acc.successes as f64 / total_queries as f64
    };

    let avg_relevance_score = config
        .benchmark
        .grades_relevance()
        .then(|| acc.mean(acc.relevance));

    ConfigurationSummary {
        configuration_label: config.label(),
        provider: config.provider.clone(),
        benchmark: config.benchmark,
        search_depth: config.depth,
        max_results: config.max_results,
        total_queries,
        successful_queries: acc.successes,
        total_tokens: acc.tokens,
        avg_tokens_per_query: acc.mean(acc.tokens as f64),
        avg_relevance_score,
        avg_density: acc.mean(acc.density),
        avg_latency_seconds: acc.mean(acc.latency),
        success_rate,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::DensityCalculator;
    use crate::runner::client::{MockSearchClient, SearchResponse, SearchResultItem};
    use crate::runner::query_runner::test_support::{CountingPacer, FixedCounter};
    use std::sync::Arc;

    fn config(benchmark: BenchmarkKind) -> RunConfiguration {
        RunConfiguration {
            provider: "tavily".to_string(),
            benchmark,
            depth: SearchDepth::Basic,
            max_results: 5,
        }
    }

    fn aggregator(client: MockSearchClient, tokens: usize) -> BenchmarkAggregator<MockSearchClient, CountingPacer> {
        BenchmarkAggregator::new(QueryRunner::new(
            Arc::new(client),
            CountingPacer::default(),
            DensityCalculator::new(Arc::new(FixedCounter(tokens))),
        ))
    }

    fn results_response(content: &str) -> SearchResponse {
        SearchResponse {
            results: vec![SearchResultItem {
                title: "Result".to_string(),
                url: "https://example.com".to_string(),
                content: content.to_string(),
            }],
            answer: None,
        }
    }

    fn relevance_fixtures() -> Vec<QueryFixture> {
        vec![
            QueryFixture::relevance("renewable energy", "energy", &["solar", "wind"]),
            QueryFixture::relevance("crypto trends", "finance", &["bitcoin", "blockchain"]),
            QueryFixture::relevance("egypt", "history", &["pyramids", "pharaohs"]),
        ]
    }

    #[tokio::test]
    async fn test_empty_fixture_list() {
        let aggregator = aggregator(MockSearchClient::new(SearchResponse::default()), 10);
        let summary = aggregator.aggregate(&[], &config(BenchmarkKind::DocumentRelevance)).await;

        assert_eq!(summary.total_queries, 0);
        assert_eq!(summary.success_rate, 0.0);
        assert_eq!(summary.avg_tokens_per_query, 0.0);
        assert_eq!(summary.avg_relevance_score, Some(0.0));
        assert_eq!(summary.avg_density, 0.0);
        assert!(summary.outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_all_failures_still_yield_one_outcome_each() {
        let client = MockSearchClient::scripted(vec![
            Err("timeout".to_string()),
            Err("timeout".to_string()),
            Err("timeout".to_string()),
        ]);
        let aggregator = aggregator(client, 10);
        let fixtures = relevance_fixtures();

        let summary = aggregator.aggregate(&fixtures, &config(BenchmarkKind::DocumentRelevance)).await;

        assert_eq!(summary.outcomes.len(), fixtures.len());
        assert_eq!(summary.success_rate, 0.0);
        assert_eq!(summary.total_tokens, 0);
        assert_eq!(summary.avg_tokens_per_query, 0.0);
        assert_eq!(summary.avg_relevance_score, Some(0.0));
        assert_eq!(summary.avg_density, 0.0);
        assert_eq!(summary.failed_queries(), 3);
    }

    #[tokio::test]
    async fn test_partial_failure_uses_successes_only() {
        let client = MockSearchClient::scripted(vec![
            Ok(results_response("solar and wind")),
            Err("connection refused".to_string()),
            Ok(results_response("pyramids only")),
        ]);
        let aggregator = aggregator(client, 40);
        let fixtures = relevance_fixtures();

        let summary = aggregator.aggregate(&fixtures, &config(BenchmarkKind::DocumentRelevance)).await;

        assert_eq!(summary.outcomes.len(), 3);
        assert_eq!(summary.successful_queries, 2);
        assert!((summary.success_rate - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.total_tokens, 80);
        assert!((summary.avg_tokens_per_query - 40.0).abs() < 1e-9);
        // (1.0 + 0.5) / 2
        assert!((summary.avg_relevance_score.unwrap() - 0.75).abs() < 1e-9);
        // (25.0 + 12.5) / 2
        assert!((summary.avg_density - 18.75).abs() < 1e-9);
        assert!(!summary.outcomes[1].is_success());
        assert_eq!(summary.failures(), vec![("crypto trends", "Search provider fault: connection refused")]);
    }

    #[tokio::test]
    async fn test_outcomes_follow_fixture_order_and_pause_each_call() {
        let client = MockSearchClient::scripted(vec![
            Err("first".to_string()),
            Ok(results_response("x")),
            Err("third".to_string()),
        ]);
        let aggregator = aggregator(client, 1);
        let fixtures = relevance_fixtures();

        let summary = aggregator.aggregate(&fixtures, &config(BenchmarkKind::DocumentRelevance)).await;

        let texts: Vec<_> = summary.outcomes.iter().map(|o| o.fixture().text.as_str()).collect();
        assert_eq!(texts, vec!["renewable energy", "crypto trends", "egypt"]);
        assert_eq!(aggregator.runner_pauses(), 3);
    }

    #[tokio::test]
    async fn test_simpleqa_summary_has_no_relevance_average() {
        let client = MockSearchClient::new(SearchResponse {
            results: vec![],
            answer: Some("Jupiter".to_string()),
        });
        let aggregator = aggregator(client, 4);
        let fixtures = vec![QueryFixture::question(
            "What is the largest planet in our solar system?",
            "Jupiter",
            "science",
        )];

        let summary = aggregator.aggregate(&fixtures, &config(BenchmarkKind::SimpleQa)).await;

        assert_eq!(summary.avg_relevance_score, None);
        assert!((summary.avg_density - 250.0).abs() < 1e-9);
        assert_eq!(summary.success_rate, 1.0);
    }

    #[tokio::test]
    async fn test_run_benchmark_covers_each_depth() {
        let aggregator = aggregator(MockSearchClient::new(results_response("solar")), 10);
        let fixtures = relevance_fixtures();

        let run = aggregator
            .run_benchmark(
                BenchmarkKind::DocumentRelevance,
                &fixtures,
                "tavily",
                &[SearchDepth::Basic, SearchDepth::Advanced],
                5,
            )
            .await;

        assert_eq!(run.configurations.len(), 2);
        assert_eq!(run.configurations[0].configuration_label, "tavily_basic");
        assert_eq!(run.configurations[1].configuration_label, "tavily_advanced");
        assert!(run.depth_comparison().is_some());
    }

    #[tokio::test]
    async fn test_run_suite_skips_benchmarks_without_fixtures() {
        let aggregator = aggregator(MockSearchClient::new(results_response("solar")), 10);
        let catalog = FixtureCatalog::new(relevance_fixtures());

        let results = aggregator
            .run_suite(&catalog, "tavily", &[SearchDepth::Advanced], 3, "2026-01-19T00:00:00Z".to_string())
            .await;

        assert_eq!(results.benchmarks.len(), 1);
        assert_eq!(results.benchmarks[0].benchmark, BenchmarkKind::DocumentRelevance);
        assert_eq!(results.benchmarks[0].configurations[0].max_results, 3);
        assert_eq!(results.tokenizer, "fixed");
        assert_eq!(aggregator.runner_pauses(), 3);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&config(BenchmarkKind::SimpleQa), vec![]);
        assert_eq!(summary.total_queries, 0);
        assert_eq!(summary.avg_latency_seconds, 0.0);
    }

    impl<C: SearchClientTrait> BenchmarkAggregator<C, CountingPacer> {
        fn runner_pauses(&self) -> usize {
            self.runner.pacer().pauses()
        }
    }
}
