//! Error types for the scoring core
//!
//! Only the length precondition is an error. Missing table keys are not:
//! they resolve to 0.0 and flow through the products as "no activity".

use std::fmt;
use thiserror::Error;

/// Which side of a guide/target pair a sequence came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceRole {
    Guide,
    Target,
}

impl fmt::Display for SequenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceRole::Guide => write!(f, "guide"),
            SequenceRole::Target => write!(f, "target"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// Input shorter than the 20 nt window plus 3 nt PAM
    #[error("{role} sequence must be at least {min} nucleotides long (got {len})")]
    SequenceTooShort {
        role: SequenceRole,
        len: usize,
        min: usize,
    },
}
