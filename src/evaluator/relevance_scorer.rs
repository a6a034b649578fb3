//! @ai:module:intent Score response relevance against expected topics
//! @ai:module:layer domain
//! @ai:module:public_api RelevanceScorer, ExactPresenceScorer, TrivialScorer, RelevanceScore
//! @ai:module:stateless true

/// @ai:intent Relevance of one piece of content
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceScore {
    /// In [0, 1]
    pub score: f64,
    /// Matched topics, in the order they were expected
    pub topics_covered: Vec<String>,
}

/// @ai:intent Trait for relevance scoring
pub trait RelevanceScorer: Send + Sync {
    /// @ai:intent Score content against expected topics, reporting which topics matched
    fn evaluate(&self, content: &str, expected_topics: &[String]) -> RelevanceScore;

    /// @ai:intent Score content against expected topics
    fn score(&self, content: &str, expected_topics: &[String]) -> f64 {
        self.evaluate(content, expected_topics).score
    }
}

/// @ai:intent Fraction of expected topics present as case-insensitive substrings
///            No stemming or tokenization: paraphrases miss, partial words hit
pub struct ExactPresenceScorer;

impl ExactPresenceScorer {
    /// @ai:intent Create a new exact presence scorer
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExactPresenceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RelevanceScorer for ExactPresenceScorer {
    /// @ai:intent Count topics whose lowercase form occurs in the lowercase content
    /// @ai:effects pure
    /// @ai:example ("Solar and wind", ["solar", "hydro"]) -> 0.5
    fn evaluate(&self, content: &str, expected_topics: &[String]) -> RelevanceScore {
        if expected_topics.is_empty() {
            return RelevanceScore {
                score: 0.0,
                topics_covered: Vec::new(),
            };
        }

        let content_lower = content.to_lowercase();

        let topics_covered: Vec<String> = expected_topics
            .iter()
            .filter(|topic| content_lower.contains(&topic.to_lowercase()))
            .cloned()
            .collect();

        RelevanceScore {
            score: topics_covered.len() as f64 / expected_topics.len() as f64,
            topics_covered,
        }
    }
}

/// @ai:intent Always 1.0: SimpleQA measures token cost of answers assumed correct
pub struct TrivialScorer;

impl TrivialScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrivialScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RelevanceScorer for TrivialScorer {
    fn evaluate(&self, _content: &str, _expected_topics: &[String]) -> RelevanceScore {
        RelevanceScore {
            score: 1.0,
            topics_covered: Vec::new(),
        }
    }
}
