//! @ai:module:intent Token accounting with a fixed BPE vocabulary
//! @ai:module:layer domain
//! @ai:module:public_api TokenCounter, BpeTokenCounter
//! @ai:module:stateless true

use crate::error::{BenchError, Result};
use tiktoken_rs::CoreBPE;

/// General-purpose encoding used when no model-specific one is known.
pub const FALLBACK_ENCODING: &str = "cl100k_base";

/// @ai:intent Trait for counting tokens in text
pub trait TokenCounter: Send + Sync {
    /// @ai:intent Number of tokens in `text`; 0 for the empty string
    fn count(&self, text: &str) -> usize;

    /// @ai:intent Name of the vocabulary, recorded with results for reproducibility
    fn vocabulary(&self) -> &str;
}

/// @ai:intent Counts tokens with a tiktoken BPE encoding
pub struct BpeTokenCounter {
    bpe: CoreBPE,
    vocabulary: String,
}

impl BpeTokenCounter {
    /// @ai:intent Load the encoding for a model, falling back to cl100k_base
    /// @ai:post vocabulary names the encoding, plus the model it was chosen for
    /// @ai:effects pure
    pub fn for_model(model: &str) -> Result<Self> {
        let encoding = encoding_for_model(model);

        match (encoding, tiktoken_rs::get_bpe_from_model(model)) {
            (Some(encoding), Ok(bpe)) => Ok(Self {
                bpe,
                vocabulary: format!("tiktoken:{} ({})", encoding, model),
            }),
            (None, Ok(_)) => Self::fallback(),
            (_, Err(e)) => {
                tracing::debug!(
                    "No encoding for model {} ({}), using {}",
                    model,
                    e,
                    FALLBACK_ENCODING
                );
                Self::fallback()
            }
        }
    }

    /// @ai:intent Load the general-purpose encoding directly
    /// @ai:effects pure
    pub fn fallback() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| BenchError::Tokenizer(e.to_string()))?;

        Ok(Self {
            bpe,
            vocabulary: format!("tiktoken:{}", FALLBACK_ENCODING),
        })
    }
}

/// @ai:intent Name of the BPE encoding tiktoken uses for a model
/// @ai:effects pure
/// @ai:example ("gpt-4") -> Some("cl100k_base")
#[allow(unreachable_patterns)]
pub fn encoding_for_model(model: &str) -> Option<&'static str> {
    use tiktoken_rs::tokenizer::{get_tokenizer, Tokenizer};

    get_tokenizer(model).and_then(|tokenizer| match tokenizer {
        Tokenizer::O200kBase => Some("o200k_base"),
        Tokenizer::Cl100kBase => Some("cl100k_base"),
        Tokenizer::P50kBase => Some("p50k_base"),
        Tokenizer::R50kBase => Some("r50k_base"),
        Tokenizer::P50kEdit => Some("p50k_edit"),
        Tokenizer::Gpt2 => Some("gpt2"),
        _ => None,
    })
}

impl TokenCounter for BpeTokenCounter {
    fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.bpe.encode_with_special_tokens(text).len()
    }

    fn vocabulary(&self) -> &str {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_zero_tokens() {
        let counter = BpeTokenCounter::for_model("gpt-4").unwrap();
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn test_known_sentence_token_count() {
        let counter = BpeTokenCounter::for_model("gpt-4").unwrap();
        // "Hello" "," " world" "!"
        assert_eq!(counter.count("Hello, world!"), 4);
    }

    #[test]
    fn test_count_is_deterministic() {
        let counter = BpeTokenCounter::for_model("gpt-4").unwrap();
        let text = "Information density is relevance per token, scaled by 1000.";
        assert_eq!(counter.count(text), counter.count(text));
    }

    #[test]
    fn test_vocabulary_names_encoding_and_model() {
        let counter = BpeTokenCounter::for_model("gpt-4").unwrap();
        assert_eq!(counter.vocabulary(), "tiktoken:cl100k_base (gpt-4)");
        assert_eq!(encoding_for_model("gpt-4"), Some("cl100k_base"));
        assert_eq!(encoding_for_model("definitely-not-a-model"), None);
    }

    #[test]
    fn test_unknown_model_falls_back() {
        let counter = BpeTokenCounter::for_model("definitely-not-a-model").unwrap();
        assert_eq!(counter.vocabulary(), "tiktoken:cl100k_base");
        assert_eq!(counter.count("Hello, world!"), 4);
    }
}
