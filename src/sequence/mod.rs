//! Sequence handling shared by both scoring models
//!
//! - `normalize`: raw pair → 20 nt windows + PAM key
//! - `complement`: base complement used for CFD labels

pub mod complement;
pub mod normalize;

pub use complement::{complement, complement_base};
pub use normalize::{
    normalize, AlignedWindow, NormalizedPair, MIN_SEQUENCE_LEN, PAM_KEY_LEN, PAM_LEN, WINDOW_LEN,
};
