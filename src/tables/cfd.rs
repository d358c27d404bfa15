//! CFD Lookup Table
//!
//! One flat map holding two disjoint key families:
//! - PAM keys: the 2 nt PAM-proximal string, e.g. `GG`
//! - mismatch keys: `r<RNA base>:d<complement of DNA base>_<1-based position>`,
//!   e.g. `rU:dG_2`
//!
//! Absent keys resolve to 0.0. That is the model's "not cleaved" value and it
//! is absorbing under multiplication, so a table missing an identity label
//! (`rA:dT_n`, `rC:dG_n`, `rG:dC_n`, `rU:dA_n`) zeroes every perfect match at
//! that position. Malformed tables are therefore silent; check `contains`.
//!
//! File format: whitespace-separated `<label> <score>` per line. Lines
//! containing `Label` or `Error` are headers and skipped.
//!
//! Reference: Doench, J., et al. (2016) Nat Biotechnol 34, 184–191.

use crate::sequence::complement_base;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Immutable CFD score table
#[derive(Debug, Clone, Default)]
pub struct CfdTable {
    scores: FxHashMap<String, f64>,
}

impl CfdTable {
    /// Score for a key, 0.0 when absent
    #[inline]
    pub fn get(&self, key: &str) -> f64 {
        self.scores.get(key).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.scores.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Build the mismatch label for one window position
    ///
    /// `rna` is the guide base (U alphabet), `dna` the raw target base; the
    /// label carries the complement of `dna`. `position` is 1-based.
    pub fn mismatch_label(rna: char, dna: char, position: usize) -> String {
        format!("r{}:d{}_{}", rna, complement_base(dna), position)
    }

    /// Load from a score file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open CFD score table: {}", path.display()))?;

        let table = Self::parse(BufReader::new(file))
            .with_context(|| format!("Failed to read CFD score table: {}", path.display()))?;

        tracing::info!(path = %path.display(), entries = table.len(), "Loaded CFD score table");
        if !table.contains("GG") {
            tracing::warn!(path = %path.display(), "CFD table has no canonical `GG` PAM entry");
        }

        Ok(table)
    }

    /// Parse score lines from any reader
    ///
    /// Malformed lines are skipped with a warning; only I/O failures error.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut scores = FxHashMap::default();
        let mut skipped = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            if line.contains("Label") || line.contains("Error") {
                continue;
            }

            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next().map(str::parse::<f64>)) {
                (Some(label), Some(Ok(score))) => {
                    scores.insert(label.to_string(), score);
                }
                (None, _) => {
                    tracing::debug!(line = line_no, "Skipping blank CFD table line");
                    skipped += 1;
                }
                _ => {
                    tracing::warn!(line = line_no, text = %line, "Skipping malformed CFD table line");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            tracing::info!(skipped, "CFD table lines skipped");
        }

        Ok(Self { scores })
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for CfdTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
