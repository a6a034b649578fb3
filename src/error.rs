//! @ai:module:intent Define error types for provider calls and tokenizer setup
//! @ai:module:layer domain
//! @ai:module:public_api BenchError, Result
//! @ai:module:stateless true

use thiserror::Error;

/// @ai:intent Unified error type for search provider and tokenizer operations
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("{0} not found in environment")]
    MissingCredential(String),

    #[error("{0} still has the placeholder value")]
    PlaceholderCredential(String),

    #[error("Failed to send request to search provider: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Search provider error ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse search provider response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Search provider fault: {0}")]
    Provider(String),

    #[error("Tokenizer unavailable: {0}")]
    Tokenizer(String),
}

impl BenchError {
    /// @ai:intent Whether the error must stop the process before any query runs
    /// @ai:effects pure
    pub fn is_configuration_fault(&self) -> bool {
        matches!(
            self,
            BenchError::MissingCredential(_)
                | BenchError::PlaceholderCredential(_)
                | BenchError::Tokenizer(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let err = BenchError::MissingCredential("TAVILY_API_KEY".to_string());
        assert_eq!(err.to_string(), "TAVILY_API_KEY not found in environment");
        assert!(err.is_configuration_fault());
    }

    #[test]
    fn test_provider_fault_is_not_configuration_fault() {
        let err = BenchError::Provider("connection reset".to_string());
        assert!(!err.is_configuration_fault());
        assert!(err.to_string().contains("connection reset"));
    }
}
