//! Utility modules
//!
//! - Format: `%g`-style score printing shared by every output path

pub mod format;

pub use format::format_score;
