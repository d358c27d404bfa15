//! Empirical lookup tables
//!
//! Both tables are read-only once built and safe to share across threads.

pub mod cfd;
pub mod mit;

pub use cfd::CfdTable;
pub use mit::{MitWeights, HSU_2013_WEIGHTS};
