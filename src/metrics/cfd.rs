//! CFD: Cutting Frequency Determination
//!
//! Multiplicative model over the CFD table:
//!
//! ```text
//! score = table[pam] × Π_{i=1..20} table["r{guide[i]}:d{comp(target[i])}_{i}"]
//! ```
//!
//! Every position is looked up, matches included; a consistent table defines
//! the four identity labels per position as 1.0. Any absent key contributes
//! 0.0, which is the model's reading of "this site is not cleaved".
//!
//! Reference: Doench, J., et al. (2016) Nat Biotechnol 34, 184–191.

use crate::tables::CfdTable;
use smallvec::SmallVec;

/// Result of a CFD calculation
#[derive(Debug, Clone, PartialEq)]
pub struct CfdResult {
    /// Final CFD score (0-1)
    pub score: f64,
    /// Score of the PAM key alone
    pub pam_penalty: f64,
    /// 1-based positions whose label had no table entry
    pub unresolved: SmallVec<[usize; 4]>,
}

/// Calculate CFD with a breakdown of the PAM term and unresolved labels
///
/// `guide` must be in RNA alphabet (`U`), `target` uppercase DNA. When the PAM
/// penalty is not positive no labels are looked up and `unresolved` is empty.
pub fn calculate_cfd(guide: &str, target: &str, pam: &str, table: &CfdTable) -> CfdResult {
    let pam_penalty = table.get(pam);
    let mut score = pam_penalty;
    let mut unresolved = SmallVec::new();

    if score > 0.0 {
        for (idx, (rna, dna)) in guide.chars().zip(target.chars()).enumerate() {
            let position = idx + 1;
            let label = CfdTable::mismatch_label(rna, dna, position);
            if !table.contains(&label) {
                unresolved.push(position);
            }
            score *= table.get(&label);
        }
    }

    CfdResult {
        score,
        pam_penalty,
        unresolved,
    }
}

/// CFD score for a normalized pair
pub fn cfd_score(guide: &str, target: &str, pam: &str, table: &CfdTable) -> f64 {
    calculate_cfd(guide, target, pam, table).score
}
