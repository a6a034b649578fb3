//! @ai:module:intent Built-in fixture catalogue and filtering
//! @ai:module:layer domain
//! @ai:module:public_api FixtureCatalog
//! @ai:module:stateless true

use crate::config::FilterConfig;
use crate::fixtures::fixture::{BenchmarkKind, QueryFixture};

/// @ai:intent Immutable set of fixtures handed to the aggregator
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    fixtures: Vec<QueryFixture>,
}

impl FixtureCatalog {
    /// @ai:intent Wrap an explicit fixture list
    /// @ai:effects pure
    pub fn new(fixtures: Vec<QueryFixture>) -> Self {
        Self { fixtures }
    }

    /// @ai:intent The built-in SimpleQA and document relevance fixtures
    /// @ai:effects pure
    pub fn builtin() -> Self {
        let mut fixtures = simpleqa_questions();
        fixtures.extend(relevance_queries());
        Self { fixtures }
    }

    pub fn all(&self) -> &[QueryFixture] {
        &self.fixtures
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// @ai:intent Fixtures of one benchmark, in catalogue order
    /// @ai:effects pure
    pub fn for_benchmark(&self, benchmark: BenchmarkKind) -> Vec<QueryFixture> {
        self.fixtures
            .iter()
            .filter(|f| f.benchmark == benchmark)
            .cloned()
            .collect()
    }

    /// @ai:intent Benchmarks that have at least one fixture, SimpleQA first
    /// @ai:effects pure
    pub fn benchmarks(&self) -> Vec<BenchmarkKind> {
        [BenchmarkKind::SimpleQa, BenchmarkKind::DocumentRelevance]
            .into_iter()
            .filter(|kind| self.fixtures.iter().any(|f| f.benchmark == *kind))
            .collect()
    }

    /// @ai:intent Apply benchmark and category filters
    /// @ai:effects pure
    pub fn filtered(&self, filter: &FilterConfig) -> Self {
        let fixtures = self
            .fixtures
            .iter()
            .filter(|f| filter.matches(f.benchmark.as_str(), &f.category))
            .cloned()
            .collect();

        Self { fixtures }
    }
}

// Sample questions in the style of the SimpleQA dataset.
fn simpleqa_questions() -> Vec<QueryFixture> {
    [
        ("What is the capital of France?", "Paris", "geography"),
        ("Who wrote the novel '1984'?", "George Orwell", "literature"),
        ("What is the speed of light in vacuum?", "299,792,458 meters per second", "science"),
        ("When did World War II end?", "1945", "history"),
        ("What is the largest planet in our solar system?", "Jupiter", "science"),
        ("Who painted the Mona Lisa?", "Leonardo da Vinci", "art"),
        ("What is the chemical formula for water?", "H2O", "science"),
        ("What is the tallest mountain in the world?", "Mount Everest", "geography"),
        ("Who was the first person to walk on the moon?", "Neil Armstrong", "history"),
        ("What programming language was created by Guido van Rossum?", "Python", "technology"),
        ("What is the smallest prime number?", "2", "mathematics"),
        ("In which year did the Titanic sink?", "1912", "history"),
        ("What is the longest river in the world?", "Nile River", "geography"),
        ("Who developed the theory of relativity?", "Albert Einstein", "science"),
        ("What is the most spoken language in the world?", "Mandarin Chinese", "linguistics"),
        ("What is the boiling point of water at sea level in Celsius?", "100 degrees", "science"),
        ("Who is the author of Harry Potter series?", "J.K. Rowling", "literature"),
        ("What is the smallest country in the world?", "Vatican City", "geography"),
        ("What year was the iPhone first released?", "2007", "technology"),
        ("What is the main ingredient in guacamole?", "Avocado", "food"),
    ]
    .into_iter()
    .map(|(question, answer, category)| QueryFixture::question(question, answer, category))
    .collect()
}

fn relevance_queries() -> Vec<QueryFixture> {
    vec![
        QueryFixture::relevance(
            "climate change impacts on agriculture",
            "environment",
            &["climate change", "agriculture", "crops", "farming"],
        ),
        QueryFixture::relevance(
            "machine learning algorithms for image recognition",
            "technology",
            &["machine learning", "neural networks", "computer vision", "image classification"],
        ),
        QueryFixture::relevance(
            "benefits of mediterranean diet",
            "health",
            &["mediterranean diet", "health benefits", "nutrition", "heart health"],
        ),
        QueryFixture::relevance(
            "renewable energy sources comparison",
            "energy",
            &["solar", "wind", "renewable energy", "sustainability"],
        ),
        QueryFixture::relevance(
            "effective remote work strategies",
            "business",
            &["remote work", "productivity", "communication", "work from home"],
        ),
        QueryFixture::relevance(
            "quantum computing applications",
            "technology",
            &["quantum computing", "algorithms", "cryptography", "applications"],
        ),
        QueryFixture::relevance(
            "ancient Egyptian civilization",
            "history",
            &["Egypt", "pharaohs", "pyramids", "ancient civilization"],
        ),
        QueryFixture::relevance(
            "cryptocurrency market trends 2024",
            "finance",
            &["cryptocurrency", "bitcoin", "market", "blockchain"],
        ),
        QueryFixture::relevance(
            "artificial intelligence ethics",
            "technology",
            &["AI", "ethics", "bias", "responsible AI"],
        ),
        QueryFixture::relevance(
            "sustainable urban planning",
            "urban_development",
            &["urban planning", "sustainability", "green cities", "infrastructure"],
        ),
        QueryFixture::relevance(
            "deep learning frameworks comparison",
            "technology",
            &["TensorFlow", "PyTorch", "deep learning", "frameworks"],
        ),
        QueryFixture::relevance(
            "electric vehicle battery technology",
            "automotive",
            &["electric vehicles", "battery", "lithium-ion", "EV technology"],
        ),
        QueryFixture::relevance(
            "genomics and personalized medicine",
            "healthcare",
            &["genomics", "personalized medicine", "DNA", "genetics"],
        ),
        QueryFixture::relevance(
            "space exploration missions 2024",
            "science",
            &["space", "NASA", "missions", "exploration"],
        ),
        QueryFixture::relevance(
            "cybersecurity best practices for businesses",
            "security",
            &["cybersecurity", "data protection", "security", "threat prevention"],
        ),
    ]
}
