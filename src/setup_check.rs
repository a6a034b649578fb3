//! @ai:module:intent Validate credentials, tokenizer and fixtures before a benchmark run
//! @ai:module:layer infrastructure
//! @ai:module:public_api SetupValidator, SetupStatus, SetupCheck
//! @ai:module:stateless true

use crate::config::BenchmarkConfig;
use crate::evaluator::{BpeTokenCounter, TokenCounter};
use crate::fixtures::{load_catalog, BenchmarkKind};
use crate::runner::PLACEHOLDER_API_KEY;

/// Sentence counted to prove the tokenizer works.
pub const SAMPLE_SENTENCE: &str = "This is a test sentence for token counting.";

/// @ai:intent Result of a single setup check
#[derive(Debug, Clone, PartialEq)]
pub struct SetupCheck {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
    pub hint: Option<&'static str>,
}

impl SetupCheck {
    fn pass(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: true,
            detail: detail.into(),
            hint: None,
        }
    }

    fn fail(name: &'static str, detail: impl Into<String>, hint: &'static str) -> Self {
        Self {
            name,
            passed: false,
            detail: detail.into(),
            hint: Some(hint),
        }
    }
}

/// @ai:intent Status of setup validation
#[derive(Debug, Default)]
pub struct SetupStatus {
    pub checks: Vec<SetupCheck>,
}

impl SetupStatus {
    /// @ai:intent True when every check passed
    /// @ai:effects pure
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &SetupCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// @ai:intent Validates that a benchmark run can start
pub struct SetupValidator;

impl SetupValidator {
    /// @ai:intent Judge a credential value read from the environment
    /// @ai:effects pure
    fn check_credential_value(env_var: &str, value: Option<&str>) -> SetupCheck {
        match value.map(str::trim) {
            None | Some("") => SetupCheck::fail(
                "credential",
                format!("{} not found in environment", env_var),
                "Add it to your environment or a .env file in the working directory",
            ),
            Some(PLACEHOLDER_API_KEY) => SetupCheck::fail(
                "credential",
                format!("{} still has the placeholder value", env_var),
                "Replace the placeholder with a real API key",
            ),
            Some(_) => SetupCheck::pass("credential", format!("{} is set", env_var)),
        }
    }

    /// @ai:intent Check the provider credential in the process environment
    /// @ai:effects env:read
    fn check_credential(env_var: &str) -> SetupCheck {
        let value = std::env::var(env_var).ok();
        Self::check_credential_value(env_var, value.as_deref())
    }

    /// @ai:intent Load the tokenizer and count the sample sentence
    /// @ai:effects pure
    fn check_tokenizer(model: &str) -> SetupCheck {
        match BpeTokenCounter::for_model(model) {
            Ok(counter) => SetupCheck::pass(
                "tokenizer",
                format!(
                    "{} counted {} tokens in the sample sentence",
                    counter.vocabulary(),
                    counter.count(SAMPLE_SENTENCE)
                ),
            ),
            Err(e) => SetupCheck::fail(
                "tokenizer",
                e.to_string(),
                "Set tokenizer.model to a model tiktoken knows, such as gpt-4",
            ),
        }
    }

    /// @ai:intent Load fixtures and report per-benchmark counts
    /// @ai:effects fs:read
    fn check_fixtures(config: &BenchmarkConfig) -> SetupCheck {
        let catalog = match load_catalog(config.paths.fixtures_dir.as_deref()) {
            Ok(catalog) => catalog,
            Err(e) => {
                return SetupCheck::fail(
                    "fixtures",
                    e.to_string(),
                    "Point paths.fixtures_dir at a directory of fixture TOML files",
                )
            }
        };

        let counts: Vec<_> = [BenchmarkKind::SimpleQa, BenchmarkKind::DocumentRelevance]
            .into_iter()
            .map(|kind| format!("{} {}", catalog.for_benchmark(kind).len(), kind.title()))
            .collect();

        if catalog.is_empty() {
            SetupCheck::fail(
                "fixtures",
                "no fixtures found",
                "Remove paths.fixtures_dir to use the built-in fixtures",
            )
        } else {
            SetupCheck::pass("fixtures", counts.join(", "))
        }
    }

    /// @ai:intent Run every check and return the status
    /// @ai:effects env:read, fs:read
    pub fn validate(config: &BenchmarkConfig) -> SetupStatus {
        SetupStatus {
            checks: vec![
                Self::check_credential(&config.api.api_key_env),
                Self::check_tokenizer(&config.tokenizer.model),
                Self::check_fixtures(config),
            ],
        }
    }

    /// @ai:intent Log warnings for failed checks
    /// @ai:effects io
    pub fn log_warnings(status: &SetupStatus) {
        for check in status.failed() {
            tracing::warn!(
                "Setup check '{}' failed - {}. {}",
                check.name,
                check.detail,
                check.hint.unwrap_or_default()
            );
        }
    }
}
