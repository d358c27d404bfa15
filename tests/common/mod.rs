#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const GUIDE: &str = "ATCGATGCTGATGCTAGATAAGG";
pub const TARGET: &str = "ACCGATGCTGATGCTAGATAAGG";

/// Shipped MIT weight file
pub fn mit_weights_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/MIT_Weights.txt")
}

/// Write a synthetic CFD table: header, every identity label at 1.0, and `extra`
pub fn write_cfd_table(dir: &Path, extra: &[(&str, f64)]) -> PathBuf {
    let path = dir.join("CFD_Scores.txt");
    let mut f = File::create(&path).expect("create CFD table");

    writeln!(f, "Label\tScore").unwrap();
    for pos in 1..=20 {
        for pair in ["rA:dT", "rC:dG", "rG:dC", "rU:dA"] {
            writeln!(f, "{}_{}\t1", pair, pos).unwrap();
        }
    }
    for (label, score) in extra {
        writeln!(f, "{}\t{}", label, score).unwrap();
    }

    path
}

/// Synthetic table used by the regression cases
pub fn write_reference_cfd_table(dir: &Path) -> PathBuf {
    write_cfd_table(
        dir,
        &[
            ("GG", 1.0),
            ("AG", 0.259259259),
            ("rU:dG_2", 0.692307692),
            ("rA:dA_1", 1.0),
            ("rG:dG_13", 0.384615385),
        ],
    )
}
