//! @ai:module:intent Benchmark fixture definitions, catalogue and loading
//! @ai:module:layer domain
//! @ai:module:public_api QueryFixture, BenchmarkKind, FixtureCatalog, FixtureLoader

pub mod catalog;
pub mod fixture;
pub mod loader;

pub use catalog::FixtureCatalog;
pub use fixture::{BenchmarkKind, QueryFixture};
pub use loader::{load_catalog, FixtureLoader, FixtureLoaderTrait};
