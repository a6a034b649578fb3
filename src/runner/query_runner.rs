//! @ai:module:intent Run and score a single benchmark query
//! @ai:module:layer application
//! @ai:module:public_api QueryRunner, RunConfiguration
//! @ai:module:stateless false

use crate::evaluator::{
    format_search_results, DensityCalculator, ExactPresenceScorer, RelevanceScorer, TrivialScorer,
};
use crate::fixtures::{BenchmarkKind, QueryFixture};
use crate::metrics::types::{QueryFailure, QueryOutcome, QuerySuccess};
use crate::runner::client::{SearchClientTrait, SearchDepth, SearchRequest, SearchResponse};
use crate::runner::pacer::PacerTrait;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// @ai:intent One provider configuration a fixture list is run against
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfiguration {
    pub provider: String,
    pub benchmark: BenchmarkKind,
    pub depth: SearchDepth,
    pub max_results: u32,
}

impl RunConfiguration {
    /// @ai:intent Report label, e.g. "tavily_basic"
    /// @ai:effects pure
    pub fn label(&self) -> String {
        format!("{}_{}", self.provider, self.depth.as_str())
    }
}

/// @ai:intent Issues one search per fixture and turns the response into an outcome
pub struct QueryRunner<C: SearchClientTrait, P: PacerTrait> {
    client: Arc<C>,
    pacer: P,
    density: DensityCalculator,
    presence_scorer: ExactPresenceScorer,
    trivial_scorer: TrivialScorer,
}

impl<C: SearchClientTrait, P: PacerTrait> QueryRunner<C, P> {
    /// @ai:intent Create a new query runner
    /// @ai:effects pure
    pub fn new(client: Arc<C>, pacer: P, density: DensityCalculator) -> Self {
        Self {
            client,
            pacer,
            density,
            presence_scorer: ExactPresenceScorer::new(),
            trivial_scorer: TrivialScorer::new(),
        }
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn tokenizer_vocabulary(&self) -> &str {
        self.density.tokenizer().vocabulary()
    }

    /// @ai:intent Pick the relevance scorer for a benchmark
    /// @ai:effects pure
    fn scorer_for(&self, benchmark: BenchmarkKind) -> &dyn RelevanceScorer {
        match benchmark {
            BenchmarkKind::SimpleQa => &self.trivial_scorer,
            BenchmarkKind::DocumentRelevance => &self.presence_scorer,
        }
    }

    /// @ai:intent Run one fixture; every fault becomes a Failure outcome
    /// @ai:post the pacer has paused once, whatever the outcome
    /// @ai:effects network, time
    pub async fn run(&self, fixture: &QueryFixture, config: &RunConfiguration) -> QueryOutcome {
        let outcome = self.execute_once(fixture, config).await;
        self.pacer.pause().await;
        outcome
    }

    /// @ai:intent Issue the search and score the response
    /// @ai:effects network
    async fn execute_once(&self, fixture: &QueryFixture, config: &RunConfiguration) -> QueryOutcome {
        if fixture.benchmark != config.benchmark {
            tracing::warn!(
                "Fixture '{}' belongs to {} but runs under {}; scoring as {}",
                fixture.text,
                fixture.benchmark.title(),
                config.benchmark.title(),
                fixture.benchmark.title()
            );
        }

        let request = SearchRequest {
            query: &fixture.text,
            depth: config.depth,
            max_results: config.max_results,
        };

        let start = Instant::now();
        let result = self.client.search(&request).await;
        let latency = start.elapsed();

        match result {
            Ok(response) => self.score_response(fixture, response, latency),
            Err(e) => {
                tracing::warn!(
                    "Error processing query '{}' ({}): {}",
                    fixture.text,
                    config.label(),
                    e
                );
                QueryOutcome::Failure(QueryFailure {
                    fixture: fixture.clone(),
                    error_message: e.to_string(),
                })
            }
        }
    }

    /// @ai:intent Score a provider response for a fixture
    ///            The direct answer is scored when present, otherwise the formatted results
    ///            The scorer follows the fixture's own benchmark
    /// @ai:effects pure
    pub fn score_response(
        &self,
        fixture: &QueryFixture,
        response: SearchResponse,
        latency: Duration,
    ) -> QueryOutcome {
        let content = match response.direct_answer() {
            Some(answer) => answer.to_string(),
            None => format_search_results(&response.results),
        };

        let relevance = self
            .scorer_for(fixture.benchmark)
            .evaluate(&content, &fixture.expected_topics);
        let measurement = self.density.measure(&content, relevance.score);

        QueryOutcome::Success(QuerySuccess {
            fixture: fixture.clone(),
            response,
            tokens: measurement.tokens,
            relevance_score: relevance.score,
            density: measurement.density,
            latency_seconds: latency.as_secs_f64(),
            topics_covered: relevance.topics_covered,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::evaluator::TokenCounter;
    use crate::runner::pacer::PacerTrait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed count for any non-empty text.
    pub struct FixedCounter(pub usize);

    impl TokenCounter for FixedCounter {
        fn count(&self, text: &str) -> usize {
            if text.is_empty() {
                0
            } else {
                self.0
            }
        }

        fn vocabulary(&self) -> &str {
            "fixed"
        }
    }

    /// Records pauses instead of sleeping.
    #[derive(Default)]
    pub struct CountingPacer {
        pauses: AtomicUsize,
    }

    impl CountingPacer {
        pub fn pauses(&self) -> usize {
            self.pauses.load(Ordering::SeqCst)
        }
    }

    impl PacerTrait for CountingPacer {
        async fn pause(&self) {
            self.pauses.fetch_add(1, Ordering::SeqCst);
        }
    }
}
