//! @ai:module:intent Information density: relevance per token, scaled by 1000
//! @ai:module:layer domain
//! @ai:module:public_api DensityCalculator, DensityMeasurement
//! @ai:module:stateless true

use crate::evaluator::tokenizer::TokenCounter;
use std::sync::Arc;

/// Density is reported per thousand tokens.
pub const DENSITY_SCALE: f64 = 1000.0;

/// @ai:intent Token count and the density derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityMeasurement {
    pub tokens: usize,
    pub density: f64,
}

/// @ai:intent Combines relevance and token cost into one metric
#[derive(Clone)]
pub struct DensityCalculator {
    tokenizer: Arc<dyn TokenCounter>,
}

impl DensityCalculator {
    /// @ai:intent Create a calculator around an injected tokenizer
    /// @ai:effects pure
    pub fn new(tokenizer: Arc<dyn TokenCounter>) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &dyn TokenCounter {
        self.tokenizer.as_ref()
    }

    /// @ai:intent Count tokens once and derive density from them
    /// @ai:post tokens == 0 implies density == 0
    /// @ai:effects pure
    pub fn measure(&self, content: &str, relevance_score: f64) -> DensityMeasurement {
        let tokens = self.tokenizer.count(content);
        DensityMeasurement {
            tokens,
            density: density_from_tokens(relevance_score, tokens),
        }
    }

    /// @ai:intent Information density of content at a given relevance
    /// @ai:effects pure
    pub fn density(&self, content: &str, relevance_score: f64) -> f64 {
        self.measure(content, relevance_score).density
    }
}

/// @ai:intent relevance / tokens * 1000, or 0 when there are no tokens
/// @ai:effects pure
/// @ai:example (1.0, 2) -> 500.0
pub fn density_from_tokens(relevance_score: f64, tokens: usize) -> f64 {
    if tokens == 0 {
        return 0.0;
    }
    relevance_score / tokens as f64 * DENSITY_SCALE
}
