//! @ai:module:intent Configuration structs for benchmark system
//! @ai:module:layer infrastructure
//! @ai:module:public_api BenchmarkConfig, ApiConfig, RunConfig, FilterConfig, PathConfig, TokenizerConfig
//! @ai:module:stateless true

use crate::runner::client::SearchDepth;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Lower bound on the pause after each provider call.
pub const MIN_CALL_DELAY_MS: u64 = 500;

/// @ai:intent Main configuration for the benchmark system
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

/// @ai:intent API configuration for the search provider client
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub include_answer: bool,
    #[serde(default)]
    pub include_raw_content: bool,
}

/// @ai:intent Run configuration for benchmark execution
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_depths")]
    pub depths: Vec<SearchDepth>,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default = "default_call_delay_ms")]
    pub call_delay_ms: u64,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// @ai:intent Path configuration for input/output directories
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Replaces the built-in fixture catalogue when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures_dir: Option<PathBuf>,
}

/// @ai:intent Tokenizer selection
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default = "default_tokenizer_model")]
    pub model: String,
}

/// @ai:intent Filter configuration for selecting fixtures
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub benchmarks: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            include_answer: false,
            include_raw_content: false,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            depths: default_depths(),
            max_results: default_max_results(),
            call_delay_ms: default_call_delay_ms(),
            dry_run: false,
            filter: FilterConfig::default(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            fixtures_dir: None,
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            model: default_tokenizer_model(),
        }
    }
}

fn default_provider() -> String {
    "tavily".to_string()
}

fn default_base_url() -> String {
    "https://api.tavily.com".to_string()
}

fn default_api_key_env() -> String {
    "TAVILY_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_depths() -> Vec<SearchDepth> {
    vec![SearchDepth::Basic, SearchDepth::Advanced]
}

fn default_max_results() -> u32 {
    5
}

fn default_call_delay_ms() -> u64 {
    MIN_CALL_DELAY_MS
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_tokenizer_model() -> String {
    "gpt-4".to_string()
}

impl BenchmarkConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl RunConfig {
    /// @ai:intent Post-call delay, never shorter than the provider minimum
    /// @ai:effects pure
    pub fn call_delay(&self) -> Duration {
        Duration::from_millis(self.call_delay_ms.max(MIN_CALL_DELAY_MS))
    }

    /// @ai:intent Reject settings the provider cannot run
    /// @ai:post max_results > 0 and at least one depth
    /// @ai:effects pure
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_results == 0 {
            anyhow::bail!("max_results must be greater than 0");
        }
        if self.depths.is_empty() {
            anyhow::bail!("At least one search depth is required (basic, advanced)");
        }
        Ok(())
    }
}

impl FilterConfig {
    /// @ai:intent Check if filter matches a fixture
    /// @ai:effects pure
    pub fn matches(&self, benchmark: &str, category: &str) -> bool {
        let benchmark_match = self
            .benchmarks
            .as_ref()
            .map(|b| b.iter().any(|name| name == benchmark))
            .unwrap_or(true);

        let category_match = self
            .categories
            .as_ref()
            .map(|c| c.iter().any(|cat| cat == category))
            .unwrap_or(true);

        benchmark_match && category_match
    }
}
