//! Watson-Crick complement
//!
//! A↔T and C↔G. Everything else, including `U`, `-` and lowercase letters,
//! is returned unchanged. Used to build CFD mismatch labels from the DNA base.

/// Complement a single base
#[inline]
pub fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        other => other,
    }
}

/// Complement every base of a sequence (no reversal, no length change)
pub fn complement(seq: &str) -> String {
    seq.chars().map(complement_base).collect()
}
