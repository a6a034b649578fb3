//! @ai:module:intent TOML loader for alternate fixture sets
//! @ai:module:layer infrastructure
//! @ai:module:public_api FixtureLoader
//! @ai:module:stateless true

use crate::fixtures::catalog::FixtureCatalog;
use crate::fixtures::fixture::{FixtureFile, QueryFixture};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Trait for loading fixture sets
pub trait FixtureLoaderTrait: Send + Sync {
    /// @ai:intent Load every fixture file under a directory
    fn load_dir(&self, fixtures_dir: &Path) -> Result<FixtureCatalog>;
}

/// @ai:intent Loads fixture definitions from TOML files
pub struct FixtureLoader;

impl FixtureLoader {
    /// @ai:intent Create a new fixture loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Parse a single fixture file
    /// @ai:pre path points to a valid TOML file
    /// @ai:effects fs:read
    fn parse_fixture_file(path: &Path) -> Result<Vec<QueryFixture>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture file: {}", path.display()))?;

        let file: FixtureFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse fixture file: {}", path.display()))?;

        Ok(file.into_fixtures())
    }

    /// Sorted so that fixture order is stable across runs.
    fn find_fixture_files(fixtures_dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(fixtures_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "toml")
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }
}

impl Default for FixtureLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureLoaderTrait for FixtureLoader {
    /// @ai:intent Load every fixture file under a directory
    /// @ai:effects fs:read
    fn load_dir(&self, fixtures_dir: &Path) -> Result<FixtureCatalog> {
        if !fixtures_dir.is_dir() {
            anyhow::bail!("Fixture directory not found: {}", fixtures_dir.display());
        }

        let mut fixtures = Vec::new();

        for path in Self::find_fixture_files(fixtures_dir) {
            match Self::parse_fixture_file(&path) {
                Ok(parsed) => fixtures.extend(parsed),
                Err(e) => {
                    tracing::warn!("Skipping invalid fixture file {}: {:#}", path.display(), e);
                }
            }
        }

        Ok(FixtureCatalog::new(fixtures))
    }
}

/// @ai:intent Use the configured fixture directory, or the built-in catalogue
/// @ai:effects fs:read
pub fn load_catalog(fixtures_dir: Option<&Path>) -> Result<FixtureCatalog> {
    match fixtures_dir {
        Some(dir) => {
            tracing::info!("Loading fixtures from {}", dir.display());
            FixtureLoader::new().load_dir(dir)
        }
        None => Ok(FixtureCatalog::builtin()),
    }
}
