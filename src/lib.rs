//! Off-Target Scorer
//!
//! CFD and MIT off-target scores for CRISPR guide/target pairs.
//!
//! Layout:
//! - `sequence/`: normalization to 20 nt windows + PAM key, base complement
//! - `tables/`: CFD score table and MIT position weights
//! - `data`: both tables loaded together, shared read-only
//! - `metrics/`: the CFD and MIT models
//! - `scorer`: per-pair coordinator, sequential and parallel
//! - `batch`: pair-list reading and score output
//!
//! ```no_run
//! use offtarget_scorer::{OffTargetScorer, ScorerConfig};
//!
//! let scorer = OffTargetScorer::from_config(&ScorerConfig::default())?;
//! let score = scorer.score_pair("ATCGATGCTGATGCTAGATAAGG", "ACCGATGCTGATGCTAGATAAGG")?;
//! println!("CFD {} MIT {}", score.cfd, score.mit);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod batch;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod scorer;
pub mod sequence;
pub mod tables;
pub mod utils;

// Re-export commonly used types
pub use config::ScorerConfig;
pub use data::ScoringTables;
pub use error::{ScoreError, SequenceRole};
pub use metrics::*;
pub use scorer::{OffTargetScorer, PairScore};
pub use sequence::{complement, normalize, NormalizedPair};
pub use tables::{CfdTable, MitWeights};
