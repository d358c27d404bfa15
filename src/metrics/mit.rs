//! MIT off-target score
//!
//! Position- and distance-weighted model over the mismatches of a 20 nt
//! window, adjusted for non-canonical PAMs with the CFD PAM penalties:
//!
//! ```text
//! score = pam × t1 × t2 × t3
//!   t1 = Π (1 - W[pos])                      over mismatch positions (1-based)
//!   t2 = 1 / m²                              m = number of mismatches
//!   t3 = 1 / ((19 - d) / 19 × 4 + 1)         d = mean pairwise distance
//! ```
//!
//! `d` is `(max - min) / (m - 1)` for two or more mismatches and fixed at 19
//! for a single mismatch, which makes `t3 = 1` for every lone mismatch.
//!
//! Reference: Hsu, P., et al. (2013) Nat Biotechnol 31, 827–832.

use crate::sequence::WINDOW_LEN;
use crate::tables::{CfdTable, MitWeights};
use smallvec::SmallVec;

/// Mean pairwise distance assumed for a single mismatch
pub const SINGLE_MISMATCH_DISTANCE: f64 = 19.0;

/// Result of an MIT calculation
#[derive(Debug, Clone, PartialEq)]
pub struct MitResult {
    /// Final MIT score
    pub score: f64,
    /// CFD table score of the PAM key
    pub pam_penalty: f64,
    /// 0-based mismatch indices within the window
    pub mismatches: SmallVec<[usize; WINDOW_LEN]>,
    /// Mean pairwise mismatch distance (None without mismatches)
    pub mean_distance: Option<f64>,
    /// t1: position weights
    pub position_term: f64,
    /// t2: mismatch count
    pub count_term: f64,
    /// t3: distance, reported even when not applied
    pub distance_term: f64,
}

impl MitResult {
    fn unadjusted(pam_penalty: f64, mismatches: SmallVec<[usize; WINDOW_LEN]>) -> Self {
        Self {
            score: pam_penalty,
            pam_penalty,
            mismatches,
            mean_distance: None,
            position_term: 1.0,
            count_term: 1.0,
            distance_term: 1.0,
        }
    }
}

/// Calculate MIT with a breakdown of every term
///
/// `guide` must be in DNA alphabet (`T`), `target` uppercase DNA. Returns the
/// PAM penalty unchanged when it is not positive or the window matches fully.
pub fn calculate_mit(
    guide: &str,
    target: &str,
    pam: &str,
    cfd_table: &CfdTable,
    weights: &MitWeights,
    include_distance: bool,
) -> MitResult {
    // PAM adjustment reuses the CFD table
    let pam_penalty = cfd_table.get(pam);
    if pam_penalty <= 0.0 {
        return MitResult::unadjusted(pam_penalty, SmallVec::new());
    }

    let mismatches: SmallVec<[usize; WINDOW_LEN]> = guide
        .chars()
        .zip(target.chars())
        .enumerate()
        .filter(|(_, (g, t))| g != t)
        .map(|(idx, _)| idx)
        .collect();

    if mismatches.is_empty() {
        return MitResult::unadjusted(pam_penalty, mismatches);
    }

    let m = mismatches.len();
    let mean_distance = if m == 1 {
        SINGLE_MISMATCH_DISTANCE
    } else {
        // Indices ascend, so first/last are min/max
        (mismatches[m - 1] - mismatches[0]) as f64 / (m - 1) as f64
    };

    let position_term: f64 = mismatches
        .iter()
        .map(|&idx| 1.0 - weights.weight(idx + 1))
        .product();
    let count_term = 1.0 / (m * m) as f64;
    let distance_term = 1.0 / ((19.0 - mean_distance) / 19.0 * 4.0 + 1.0);

    let mut score = pam_penalty * position_term * count_term;
    if include_distance {
        score *= distance_term;
    }

    MitResult {
        score,
        pam_penalty,
        mismatches,
        mean_distance: Some(mean_distance),
        position_term,
        count_term,
        distance_term,
    }
}

/// MIT score for a normalized pair
pub fn mit_score(
    guide: &str,
    target: &str,
    pam: &str,
    cfd_table: &CfdTable,
    weights: &MitWeights,
    include_distance: bool,
) -> f64 {
    calculate_mit(guide, target, pam, cfd_table, weights, include_distance).score
}
