//! MIT Position-Weight Table
//!
//! Per-position mismatch weights for window positions 1..=20, PAM-distal to
//! PAM-proximal. Undefined positions weigh 0.0.
//!
//! File format: whitespace-separated `<position> <weight>` per line.
//!
//! Reference: Hsu, P., et al. (2013) Nat Biotechnol 31, 827–832.

use crate::sequence::WINDOW_LEN;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Published position weights, position 1 first
pub const HSU_2013_WEIGHTS: [f64; WINDOW_LEN] = [
    0.0, 0.0, 0.014, 0.0, 0.0, 0.395, 0.317, 0.0, 0.389, 0.079, 0.445, 0.508, 0.613, 0.851, 0.732,
    0.828, 0.615, 0.804, 0.685, 0.583,
];

/// Immutable MIT weight table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MitWeights {
    weights: [Option<f64>; WINDOW_LEN],
}

impl MitWeights {
    /// The Hsu et al. (2013) weights
    pub fn published() -> Self {
        HSU_2013_WEIGHTS
            .iter()
            .enumerate()
            .map(|(idx, &w)| (idx + 1, w))
            .collect()
    }

    /// Weight at a 1-based position, 0.0 when undefined or out of range
    #[inline]
    pub fn weight(&self, position: usize) -> f64 {
        position
            .checked_sub(1)
            .and_then(|idx| self.weights.get(idx).copied().flatten())
            .unwrap_or(0.0)
    }

    /// Number of positions with a defined weight
    pub fn defined(&self) -> usize {
        self.weights.iter().filter(|w| w.is_some()).count()
    }

    /// Load from a weight file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open MIT weight table: {}", path.display()))?;

        let weights = Self::parse(BufReader::new(file))
            .with_context(|| format!("Failed to read MIT weight table: {}", path.display()))?;

        tracing::info!(path = %path.display(), positions = weights.defined(), "Loaded MIT weights");
        if weights.defined() < WINDOW_LEN {
            tracing::warn!(
                path = %path.display(),
                defined = weights.defined(),
                "MIT weight table does not cover all 20 positions; missing ones weigh 0"
            );
        }

        Ok(weights)
    }

    /// Parse weight lines from any reader
    ///
    /// Malformed lines and positions outside 1..=20 are skipped with a
    /// warning; only I/O failures error.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut weights = [None; WINDOW_LEN];

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            let mut tokens = line.split_whitespace();
            let position = tokens.next().map(str::parse::<usize>);
            let weight = tokens.next().map(str::parse::<f64>);

            match (position, weight) {
                (Some(Ok(pos)), Some(Ok(w))) if (1..=WINDOW_LEN).contains(&pos) => {
                    weights[pos - 1] = Some(w);
                }
                (Some(Ok(pos)), Some(Ok(_))) => {
                    tracing::warn!(line = line_no, position = pos, "Skipping MIT weight outside positions 1-20");
                }
                (None, _) => {
                    tracing::debug!(line = line_no, "Skipping blank MIT weight line");
                }
                _ => {
                    tracing::warn!(line = line_no, text = %line, "Skipping malformed MIT weight line");
                }
            }
        }

        Ok(Self { weights })
    }
}

impl FromIterator<(usize, f64)> for MitWeights {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        let mut weights = [None; WINDOW_LEN];
        for (pos, w) in iter {
            match pos.checked_sub(1).and_then(|idx| weights.get_mut(idx)) {
                Some(slot) => *slot = Some(w),
                None => tracing::warn!(position = pos, "Ignoring MIT weight outside positions 1-20"),
            }
        }
        Self { weights }
    }
}
