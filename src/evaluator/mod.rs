//! @ai:module:intent Scoring components: tokenizer, formatter, relevance and density
//! @ai:module:layer domain
//! @ai:module:public_api TokenCounter, BpeTokenCounter, format_search_results, RelevanceScorer, ExactPresenceScorer, TrivialScorer, DensityCalculator

pub mod density;
pub mod formatter;
pub mod relevance_scorer;
pub mod tokenizer;

pub use density::{density_from_tokens, DensityCalculator, DensityMeasurement, DENSITY_SCALE};
pub use formatter::format_search_results;
pub use relevance_scorer::{ExactPresenceScorer, RelevanceScore, RelevanceScorer, TrivialScorer};
pub use tokenizer::{encoding_for_model, BpeTokenCounter, TokenCounter, FALLBACK_ENCODING};
