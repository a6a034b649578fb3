//! @ai:module:intent Search provider client, call pacing and per-query execution
//! @ai:module:layer infrastructure
//! @ai:module:public_api TavilyClient, MockSearchClient, CallPacer, QueryRunner, RunConfiguration

pub mod client;
pub mod pacer;
pub mod query_runner;

pub use client::{
    resolve_api_key, MockSearchClient, SearchClientTrait, SearchDepth, SearchRequest,
    SearchResponse, SearchResultItem, TavilyClient, PLACEHOLDER_API_KEY,
};
pub use pacer::{CallPacer, PacerTrait};
pub use query_runner::{QueryRunner, RunConfiguration};
