//! Off-Target Scorer - Main coordinator for scoring guide/target pairs
//!
//! Owns the loaded tables and runs Sequence Normalizer → CFD and → MIT for
//! each pair. Includes both sequential and parallel (Rayon) batch scoring.

use crate::config::ScorerConfig;
use crate::data::ScoringTables;
use crate::error::ScoreError;
use crate::metrics::{calculate_cfd, calculate_mit};
use crate::sequence::{normalize, NormalizedPair};
use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

/// Main off-target scorer
#[derive(Debug, Clone)]
pub struct OffTargetScorer {
    tables: ScoringTables,
    include_distance: bool,
}

/// Scores for one guide/target pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairScore {
    pub cfd: f64,
    pub mit: f64,
}

impl OffTargetScorer {
    pub fn new(tables: ScoringTables, include_distance: bool) -> Self {
        Self {
            tables,
            include_distance,
        }
    }

    /// Load tables from the configured paths
    pub fn from_config(config: &ScorerConfig) -> Result<Self> {
        let tables = ScoringTables::load(config)?;

        tracing::info!(
            include_distance = config.include_distance,
            "Off-target scorer initialized"
        );

        Ok(Self::new(tables, config.include_distance))
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    pub fn include_distance(&self) -> bool {
        self.include_distance
    }

    /// Score an already normalized pair with both models
    pub fn score_normalized(&self, pair: &NormalizedPair) -> PairScore {
        let cfd = calculate_cfd(&pair.cfd.guide, &pair.cfd.target, &pair.pam, &self.tables.cfd);
        if !cfd.unresolved.is_empty() {
            tracing::debug!(
                guide = %pair.cfd.guide,
                target = %pair.cfd.target,
                positions = ?cfd.unresolved.as_slice(),
                "CFD labels absent from table, scored as 0"
            );
        }

        let mit = calculate_mit(
            &pair.mit.guide,
            &pair.mit.target,
            &pair.pam,
            &self.tables.cfd,
            &self.tables.mit,
            self.include_distance,
        );

        PairScore {
            cfd: cfd.score,
            mit: mit.score,
        }
    }

    /// Normalize and score a raw pair
    pub fn score_pair(&self, guide: &str, target: &str) -> Result<PairScore, ScoreError> {
        let pair = normalize(guide, target)?;
        Ok(self.score_normalized(&pair))
    }

    /// CFD score alone for a raw pair
    pub fn cfd_only(&self, guide: &str, target: &str) -> Result<f64, ScoreError> {
        let pair = normalize(guide, target)?;
        Ok(calculate_cfd(&pair.cfd.guide, &pair.cfd.target, &pair.pam, &self.tables.cfd).score)
    }

    /// Score pairs one after another
    pub fn score_pairs<S: AsRef<str>>(&self, pairs: &[(S, S)]) -> Vec<Result<PairScore, ScoreError>> {
        pairs
            .iter()
            .map(|(guide, target)| self.score_pair(guide.as_ref(), target.as_ref()))
            .collect()
    }

    /// Score pairs IN PARALLEL
    ///
    /// Results keep input order. Tables are shared read-only across workers.
    pub fn score_pairs_parallel<S: AsRef<str> + Sync>(
        &self,
        pairs: &[(S, S)],
    ) -> Vec<Result<PairScore, ScoreError>> {
        pairs
            .par_iter()
            .map(|(guide, target)| self.score_pair(guide.as_ref(), target.as_ref()))
            .collect()
    }
}
