//! @ai:module:intent Outcome and summary types for benchmark results
//! @ai:module:layer domain
//! @ai:module:public_api QueryOutcome, QuerySuccess, QueryFailure, ConfigurationSummary, BenchmarkRun, BenchmarkResults, DepthComparison
//! @ai:module:stateless true

use crate::fixtures::{BenchmarkKind, QueryFixture};
use crate::runner::client::{SearchDepth, SearchResponse};
use serde::{Deserialize, Serialize};

/// @ai:intent Scored result of one successful query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySuccess {
    pub fixture: QueryFixture,
    pub response: SearchResponse,
    pub tokens: usize,
    pub relevance_score: f64,
    pub density: f64,
    pub latency_seconds: f64,
    #[serde(default)]
    pub topics_covered: Vec<String>,
}

impl QuerySuccess {
    pub fn num_results(&self) -> usize {
        self.response.results.len()
    }
}

/// @ai:intent A query that could not be scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFailure {
    pub fixture: QueryFixture,
    pub error_message: String,
}

/// @ai:intent Exactly one per (fixture, configuration); never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    Success(QuerySuccess),
    Failure(QueryFailure),
}

impl QueryOutcome {
    pub fn fixture(&self) -> &QueryFixture {
        match self {
            QueryOutcome::Success(s) => &s.fixture,
            QueryOutcome::Failure(f) => &f.fixture,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Success(_))
    }

    pub fn as_success(&self) -> Option<&QuerySuccess> {
        match self {
            QueryOutcome::Success(s) => Some(s),
            QueryOutcome::Failure(_) => None,
        }
    }
}

/// @ai:intent Summary statistics for one provider configuration
///            Averages are over successful outcomes only, and 0 when none succeeded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationSummary {
    pub configuration_label: String,
    pub provider: String,
    pub benchmark: BenchmarkKind,
    pub search_depth: SearchDepth,
    pub max_results: u32,
    pub total_queries: usize,
    pub successful_queries: usize,
    pub total_tokens: u64,
    pub avg_tokens_per_query: f64,
    /// Only graded for document relevance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_relevance_score: Option<f64>,
    pub avg_density: f64,
    pub avg_latency_seconds: f64,
    pub success_rate: f64,
    pub outcomes: Vec<QueryOutcome>,
}

impl ConfigurationSummary {
    pub fn failed_queries(&self) -> usize {
        self.total_queries - self.successful_queries
    }

    /// @ai:intent Failures as (query text, error message), in fixture order
    /// @ai:effects pure
    pub fn failures(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                QueryOutcome::Failure(f) => Some((f.fixture.text.as_str(), f.error_message.as_str())),
                QueryOutcome::Success(_) => None,
            })
            .collect()
    }
}

/// @ai:intent Advanced-minus-basic deltas for one benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthComparison {
    /// Percent change in average tokens per query; None when basic used no tokens
    pub token_delta_percent: Option<f64>,
    pub relevance_delta: Option<f64>,
    pub density_delta: f64,
}

impl DepthComparison {
    /// @ai:intent Calculate deltas between advanced and basic summaries
    /// @ai:effects pure
    pub fn between(basic: &ConfigurationSummary, advanced: &ConfigurationSummary) -> Self {
        let token_delta_percent = if basic.avg_tokens_per_query > 0.0 {
            Some(
                (advanced.avg_tokens_per_query - basic.avg_tokens_per_query)
                    / basic.avg_tokens_per_query
                    * 100.0,
            )
        } else {
            None
        };

        let relevance_delta = match (basic.avg_relevance_score, advanced.avg_relevance_score) {
            (Some(b), Some(a)) => Some(a - b),
            _ => None,
        };

        Self {
            token_delta_percent,
            relevance_delta,
            density_delta: advanced.avg_density - basic.avg_density,
        }
    }
}

/// @ai:intent All configurations run for one benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRun {
    pub benchmark: BenchmarkKind,
    pub configurations: Vec<ConfigurationSummary>,
}

impl BenchmarkRun {
    pub fn configuration(&self, depth: SearchDepth) -> Option<&ConfigurationSummary> {
        self.configurations.iter().find(|c| c.search_depth == depth)
    }

    /// @ai:intent Basic vs advanced comparison, when both depths were run
    /// @ai:effects pure
    pub fn depth_comparison(&self) -> Option<DepthComparison> {
        let basic = self.configuration(SearchDepth::Basic)?;
        let advanced = self.configuration(SearchDepth::Advanced)?;
        Some(DepthComparison::between(basic, advanced))
    }
}

/// @ai:intent Complete benchmark results for one invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResults {
    pub timestamp: String,
    pub provider: String,
    /// Vocabulary used for token accounting
    pub tokenizer: String,
    pub benchmarks: Vec<BenchmarkRun>,
}

impl BenchmarkResults {
    pub fn run(&self, benchmark: BenchmarkKind) -> Option<&BenchmarkRun> {
        self.benchmarks.iter().find(|b| b.benchmark == benchmark)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::summary;
    use super::*;

    #[test]
    fn test_depth_comparison() {
        let basic = summary(BenchmarkKind::DocumentRelevance, SearchDepth::Basic, 200.0, Some(0.5), 2.5);
        let advanced =
            summary(BenchmarkKind::DocumentRelevance, SearchDepth::Advanced, 300.0, Some(0.75), 2.5);

        let delta = DepthComparison::between(&basic, &advanced);
        assert!((delta.token_delta_percent.unwrap() - 50.0).abs() < 0.01);
        assert!((delta.relevance_delta.unwrap() - 0.25).abs() < 0.01);
        assert!(delta.density_delta.abs() < 0.01);
    }

    #[test]
    fn test_depth_comparison_without_basic_tokens() {
        let basic = summary(BenchmarkKind::SimpleQa, SearchDepth::Basic, 0.0, None, 0.0);
        let advanced = summary(BenchmarkKind::SimpleQa, SearchDepth::Advanced, 120.0, None, 8.0);

        let delta = DepthComparison::between(&basic, &advanced);
        assert_eq!(delta.token_delta_percent, None);
        assert_eq!(delta.relevance_delta, None);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = QueryOutcome::Failure(QueryFailure {
            fixture: QueryFixture::question("Who painted the Mona Lisa?", "Leonardo da Vinci", "art"),
            error_message: "timeout".to_string(),
        });

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["error_message"], "timeout");
        assert_eq!(json["fixture"]["benchmark"], "simpleqa");
    }

    #[test]
    fn test_run_without_both_depths_has_no_comparison() {
        let run = BenchmarkRun {
            benchmark: BenchmarkKind::SimpleQa,
            configurations: vec![summary(BenchmarkKind::SimpleQa, SearchDepth::Basic, 50.0, None, 20.0)],
        };
        assert!(run.depth_comparison().is_none());
        assert!(run.configuration(SearchDepth::Basic).is_some());
    }
}
