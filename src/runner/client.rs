//! @ai:module:intent Search provider client for benchmark execution
//! @ai:module:layer infrastructure
//! @ai:module:public_api SearchClientTrait, TavilyClient, MockSearchClient, SearchRequest, SearchResponse, SearchResultItem, SearchDepth
//! @ai:module:stateless false

use crate::config::ApiConfig;
use crate::error::{BenchError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Value shipped in `.env.example`; treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your_tavily_api_key_here";

/// @ai:intent Provider-side search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    Advanced,
}

impl SearchDepth {
    /// @ai:intent Get string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchDepth::Basic => "basic",
            SearchDepth::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Some(SearchDepth::Basic),
            "advanced" => Some(SearchDepth::Advanced),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent One search call as seen by the provider
#[derive(Debug, Clone)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub depth: SearchDepth,
    pub max_results: u32,
}

/// @ai:intent One result record returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

/// Providers send `null` for fields they have no value for.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// @ai:intent Provider response for one query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResultItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl SearchResponse {
    /// @ai:intent The provider's direct answer, if it carries any text
    /// @ai:effects pure
    pub fn direct_answer(&self) -> Option<&str> {
        self.answer.as_deref().filter(|a| !a.is_empty())
    }
}

/// @ai:intent Trait for search provider clients
#[allow(async_fn_in_trait)]
pub trait SearchClientTrait: Send + Sync {
    /// @ai:intent Run one search and return the parsed response
    async fn search(&self, request: &SearchRequest<'_>) -> Result<SearchResponse>;
}

/// @ai:intent Search API request body
#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    query: &'a str,
    search_depth: SearchDepth,
    max_results: u32,
    include_answer: bool,
    include_raw_content: bool,
}

/// @ai:intent Tavily search client
pub struct TavilyClient {
    client: reqwest::Client,
    config: ApiConfig,
    api_key: String,
}

impl TavilyClient {
    /// @ai:intent Create a client using the credential named by the config
    /// @ai:pre the api_key_env variable is set to a real key
    /// @ai:effects env
    pub fn new(config: ApiConfig) -> Result<Self> {
        let api_key = resolve_api_key(&config.api_key_env)?;
        Self::with_api_key(config, api_key)
    }

    /// @ai:intent Create a client with an explicit credential
    /// @ai:effects pure
    pub fn with_api_key(config: ApiConfig, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(BenchError::Transport)?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }
}

impl SearchClientTrait for TavilyClient {
    /// @ai:intent Send a search request and parse the response
    /// @ai:effects network
    async fn search(&self, request: &SearchRequest<'_>) -> Result<SearchResponse> {
        let body = ApiRequest {
            query: request.query,
            search_depth: request.depth,
            max_results: request.max_results,
            include_answer: self.config.include_answer,
            include_raw_content: self.config.include_raw_content,
        };

        let response = self
            .client
            .post(self.search_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(BenchError::Transport)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BenchError::Status { status, body });
        }

        response.json().await.map_err(BenchError::Decode)
    }
}

/// @ai:intent Read the credential from the environment
/// @ai:effects env
pub fn resolve_api_key(env_var: &str) -> Result<String> {
    let key = std::env::var(env_var)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| BenchError::MissingCredential(env_var.to_string()))?;

    if key == PLACEHOLDER_API_KEY {
        return Err(BenchError::PlaceholderCredential(env_var.to_string()));
    }

    Ok(key)
}

/// @ai:intent Mock client for tests and dry runs
pub struct MockSearchClient {
    fallback: SearchResponse,
    scripted: Mutex<VecDeque<std::result::Result<SearchResponse, String>>>,
}

impl MockSearchClient {
    /// @ai:intent Create a mock client that returns a fixed response
    /// @ai:effects pure
    pub fn new(response: SearchResponse) -> Self {
        Self {
            fallback: response,
            scripted: Mutex::new(VecDeque::new()),
        }
    }

    /// @ai:intent Create a mock client that plays back responses in call order
    ///            Once the script is exhausted the default response is returned
    /// @ai:effects pure
    pub fn scripted(script: Vec<std::result::Result<SearchResponse, String>>) -> Self {
        Self {
            fallback: SearchResponse::default(),
            scripted: Mutex::new(script.into()),
        }
    }

    /// @ai:intent Canned response for dry runs
    /// @ai:effects pure
    pub fn dry_run() -> Self {
        Self::new(SearchResponse {
            results: vec![SearchResultItem {
                title: "[DRY RUN] No actual API call made".to_string(),
                url: "https://example.com/dry-run".to_string(),
                content: "Placeholder content returned by the dry-run search provider.".to_string(),
            }],
            answer: None,
        })
    }
}

impl SearchClientTrait for MockSearchClient {
    /// @ai:intent Return the next scripted response
    /// @ai:effects state:write
    async fn search(&self, _request: &SearchRequest<'_>) -> Result<SearchResponse> {
        let next = self
            .scripted
            .lock()
            .map_err(|_| BenchError::Provider("mock script lock poisoned".to_string()))?
            .pop_front();

        match next {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(BenchError::Provider(message)),
            None => Ok(self.fallback.clone()),
        }
    }
}
