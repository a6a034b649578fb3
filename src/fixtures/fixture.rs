//! @ai:module:intent Fixture definitions for the benchmark query sets
//! @ai:module:layer domain
//! @ai:module:public_api QueryFixture, BenchmarkKind
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent Which benchmark a fixture belongs to
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkKind {
    #[serde(rename = "simpleqa", alias = "simple_qa")]
    SimpleQa,
    DocumentRelevance,
}

impl BenchmarkKind {
    /// @ai:intent Convert benchmark kind to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            BenchmarkKind::SimpleQa => "simpleqa",
            BenchmarkKind::DocumentRelevance => "document_relevance",
        }
    }

    /// @ai:intent Human readable benchmark title used in reports
    /// @ai:effects pure
    pub fn title(&self) -> &'static str {
        match self {
            BenchmarkKind::SimpleQa => "SimpleQA",
            BenchmarkKind::DocumentRelevance => "Document Relevance",
        }
    }

    /// Relevance is only graded for document relevance; SimpleQA answers are assumed correct.
    pub fn grades_relevance(&self) -> bool {
        matches!(self, BenchmarkKind::DocumentRelevance)
    }

    /// @ai:intent Parse a benchmark name, accepting the short CLI spellings
    /// @ai:effects pure
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "simpleqa" | "simple_qa" | "qa" => Some(BenchmarkKind::SimpleQa),
            "document_relevance" | "relevance" | "docs" => Some(BenchmarkKind::DocumentRelevance),
            _ => None,
        }
    }
}

impl std::fmt::Display for BenchmarkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent A single benchmark input: query text plus hand-labeled expectations
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFixture {
    pub benchmark: BenchmarkKind,
    pub text: String,
    /// Question category for SimpleQA, domain for document relevance
    pub category: String,
    #[serde(default)]
    pub expected_topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_answer: Option<String>,
}

impl QueryFixture {
    /// @ai:intent Build a SimpleQA question fixture
    /// @ai:effects pure
    pub fn question(text: &str, expected_answer: &str, category: &str) -> Self {
        Self {
            benchmark: BenchmarkKind::SimpleQa,
            text: text.to_string(),
            category: category.to_string(),
            expected_topics: Vec::new(),
            expected_answer: Some(expected_answer.to_string()),
        }
    }

    /// @ai:intent Build a document relevance query fixture
    /// @ai:effects pure
    pub fn relevance(text: &str, domain: &str, expected_topics: &[&str]) -> Self {
        Self {
            benchmark: BenchmarkKind::DocumentRelevance,
            text: text.to_string(),
            category: domain.to_string(),
            expected_topics: expected_topics.iter().map(|t| t.to_string()).collect(),
            expected_answer: None,
        }
    }
}

/// @ai:intent Raw fixture file structure from TOML
/// @ai:effects pure
#[derive(Debug, Deserialize)]
pub struct FixtureFile {
    pub benchmark: BenchmarkKind,
    #[serde(default, rename = "fixture")]
    pub fixtures: Vec<FixtureEntry>,
}

/// @ai:intent One fixture entry inside a TOML file
/// @ai:effects pure
#[derive(Debug, Deserialize)]
pub struct FixtureEntry {
    pub text: String,
    pub category: String,
    #[serde(default)]
    pub expected_topics: Vec<String>,
    #[serde(default)]
    pub expected_answer: Option<String>,
}

impl FixtureFile {
    /// @ai:intent Expand the file into fixtures tagged with the file's benchmark
    /// @ai:effects pure
    pub fn into_fixtures(self) -> Vec<QueryFixture> {
        let benchmark = self.benchmark;

        self.fixtures
            .into_iter()
            .map(|entry| QueryFixture {
                benchmark,
                text: entry.text,
                category: entry.category,
                expected_topics: entry.expected_topics,
                expected_answer: entry.expected_answer,
            })
            .collect()
    }
}
