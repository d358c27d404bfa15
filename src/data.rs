//! Table Loading and Management
//!
//! Loads the CFD score table and MIT position weights once, before any pair is
//! scored. The loaded tables are never mutated and are shared by reference
//! with every scoring call, including rayon workers.

use crate::config::ScorerConfig;
use crate::tables::{CfdTable, MitWeights};
use anyhow::Result;

/// Both lookup tables needed to score a pair
#[derive(Debug, Clone)]
pub struct ScoringTables {
    /// PAM penalties and per-position mismatch scores (CFD and MIT)
    pub cfd: CfdTable,

    /// Per-position mismatch tolerance (MIT only)
    pub mit: MitWeights,
}

impl ScoringTables {
    pub fn new(cfd: CfdTable, mit: MitWeights) -> Self {
        Self { cfd, mit }
    }

    /// Load both tables from the paths in `config`
    pub fn load(config: &ScorerConfig) -> Result<Self> {
        tracing::info!("Loading scoring tables...");

        let cfd = CfdTable::load(&config.cfd_table)?;
        let mit = MitWeights::load(&config.mit_weights)?;

        tracing::info!(
            cfd_entries = cfd.len(),
            mit_positions = mit.defined(),
            "Scoring tables ready"
        );

        Ok(Self { cfd, mit })
    }
}
