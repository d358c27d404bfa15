//! Scoring models
//!
//! Each model is implemented in its own module. Both are pure functions of a
//! normalized pair and the read-only tables.

pub mod cfd;
pub mod mit;

pub use cfd::{calculate_cfd, cfd_score, CfdResult};
pub use mit::{calculate_mit, mit_score, MitResult, SINGLE_MISMATCH_DISTANCE};
