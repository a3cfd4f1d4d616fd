// ⚙️ Store configuration - where a store keeps its state file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default backing file, relative to the working directory
pub const DEFAULT_STATE_FILE: &str = "state.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// File used by `GroceryStore::save` / `GroceryStore::restore`
    pub state_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}

impl StoreConfig {
    pub fn new(state_path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            state_path: state_path.into(),
        }
    }

    /// Load from a JSON file. Missing keys fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: StoreConfig =
            serde_json::from_str(&raw).context("Failed to parse store config")?;

        Ok(config)
    }
}
