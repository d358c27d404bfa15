//! Sequence Normalizer
//!
//! Turns raw guide/target strings into the fixed 20 nt alignment window and
//! the 2 nt PAM-proximal key used by both scoring models.
//!
//! Layout of a (length-normalized) input, `len >= 23`:
//!
//! ```text
//!   ...dropped... | 20 nt window [len-23, len-3) | N G G
//!                                                    ^^^ pam key = last 2
//! ```
//!
//! The two models disagree on the guide alphabet: CFD labels are written in
//! RNA (`T` → `U`), MIT compares in DNA (`U` → `T`). Both variants are
//! produced here so each scorer receives exactly the convention it expects.

use crate::error::{ScoreError, SequenceRole};

/// Length of the protospacer alignment window
pub const WINDOW_LEN: usize = 20;

/// Length of the trailing PAM (NGG)
pub const PAM_LEN: usize = 3;

/// Number of PAM-proximal characters used as the PAM lookup key
pub const PAM_KEY_LEN: usize = 2;

/// Shortest accepted guide or target
pub const MIN_SEQUENCE_LEN: usize = WINDOW_LEN + PAM_LEN;

/// Guide and target windows in one alphabet convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedWindow {
    /// 20 nt guide window
    pub guide: String,
    /// 20 nt target window (uppercase DNA, `U` left as is)
    pub target: String,
}

/// Canonical form of a guide/target pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPair {
    /// Guide in RNA alphabet (`T` → `U`), for CFD label construction
    pub cfd: AlignedWindow,
    /// Guide in DNA alphabet (`U` → `T`), for MIT mismatch detection
    pub mit: AlignedWindow,
    /// Last two characters of the full, unwindowed target
    pub pam: String,
}

/// Normalize a raw guide/target pair
///
/// Fails with [`ScoreError::SequenceTooShort`] before any slicing if either
/// input is shorter than [`MIN_SEQUENCE_LEN`]. Characters beyond the trailing
/// 23 are dropped silently; no alphabet validation is performed.
pub fn normalize(guide: &str, target: &str) -> Result<NormalizedPair, ScoreError> {
    let guide: Vec<char> = guide.chars().map(|c| c.to_ascii_uppercase()).collect();
    let target: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();

    check_length(&guide, SequenceRole::Guide)?;
    check_length(&target, SequenceRole::Target)?;

    // PAM comes from the original target, not the window
    let pam: String = target[target.len() - PAM_KEY_LEN..].iter().collect();

    let guide_window = window(&guide);
    let target_window: String = window(&target).iter().collect();

    let cfd_guide: String = guide_window
        .iter()
        .map(|&c| if c == 'T' { 'U' } else { c })
        .collect();
    let mit_guide: String = guide_window
        .iter()
        .map(|&c| if c == 'U' { 'T' } else { c })
        .collect();

    Ok(NormalizedPair {
        cfd: AlignedWindow {
            guide: cfd_guide,
            target: target_window.clone(),
        },
        mit: AlignedWindow {
            guide: mit_guide,
            target: target_window,
        },
        pam,
    })
}

fn check_length(seq: &[char], role: SequenceRole) -> Result<(), ScoreError> {
    if seq.len() < MIN_SEQUENCE_LEN {
        return Err(ScoreError::SequenceTooShort {
            role,
            len: seq.len(),
            min: MIN_SEQUENCE_LEN,
        });
    }
    Ok(())
}

/// The 20 characters immediately preceding the final 3
fn window(seq: &[char]) -> &[char] {
    let start = seq.len() - MIN_SEQUENCE_LEN;
    &seq[start..start + WINDOW_LEN]
}
