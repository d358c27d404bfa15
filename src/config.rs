//! Scorer configuration
//!
//! Table locations and the MIT distance flag. Every field has a default, so a
//! JSON config file only needs the keys it overrides:
//!
//! ```json
//! { "cfd_table": "/opt/crispr/CFD_Scores.txt", "include_distance": false }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const CFD_TABLE_FILE: &str = "CFD_Scores.txt";
pub const MIT_WEIGHTS_FILE: &str = "MIT_Weights.txt";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    /// CFD score table (PAM and mismatch labels)
    pub cfd_table: PathBuf,

    /// MIT position weights
    pub mit_weights: PathBuf,

    /// Apply the MIT mean-pairwise-distance term
    pub include_distance: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR)
    }
}

impl ScorerConfig {
    /// Both tables under `dir` with their standard file names
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            cfd_table: dir.join(CFD_TABLE_FILE),
            mit_weights: dir.join(MIT_WEIGHTS_FILE),
            include_distance: true,
        }
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))
    }
}
