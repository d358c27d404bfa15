//! Pair-list batch scoring
//!
//! Reads tab-delimited `<guide>\t<target>[\t...]` rows, scores them in
//! parallel and writes them back in input order with CFD and MIT appended.
//! The first line is a header and is echoed with the two new column names.

use crate::scorer::{OffTargetScorer, PairScore};
use crate::utils::format_score;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Output layout for scored pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Tab-separated, byte-compatible with the reference tool
    #[default]
    Tsv,
    /// One JSON object per pair per line
    Json,
}

/// One data row of a pair list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRow {
    /// 1-based line number in the source file
    pub line_no: usize,
    /// Row as read, without line terminator
    pub raw: String,
    pub guide: String,
    pub target: String,
}

/// Parsed pair list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairList {
    pub header: Option<String>,
    pub rows: Vec<PairRow>,
}

#[derive(Serialize)]
struct CfdRecord<'a> {
    guide: &'a str,
    target: &'a str,
    cfd: f64,
}

#[derive(Serialize)]
struct PairRecord<'a> {
    guide: &'a str,
    target: &'a str,
    cfd: f64,
    mit: f64,
}

impl PairList {
    /// Read a pair list from a file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open pair list: {}", path.display()))?;

        let list = Self::parse(BufReader::new(file))
            .with_context(|| format!("Failed to parse pair list: {}", path.display()))?;

        tracing::info!(path = %path.display(), pairs = list.rows.len(), "Loaded pair list");
        Ok(list)
    }

    /// Parse a pair list from any reader
    ///
    /// A data row without a second tab-separated field aborts parsing.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut list = PairList::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            let line_no = idx + 1;

            if idx == 0 {
                list.header = Some(line.to_string());
                continue;
            }
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            match (fields.next(), fields.next()) {
                (Some(guide), Some(target)) => list.rows.push(PairRow {
                    line_no,
                    raw: line.to_string(),
                    guide: guide.to_string(),
                    target: target.to_string(),
                }),
                _ => {
                    tracing::error!(line = line_no, text = %line, "Malformed pair-list row");
                    anyhow::bail!("line {}: expected <guide>\\t<target>, got {:?}", line_no, line);
                }
            }
        }

        Ok(list)
    }
}

/// Score every row IN PARALLEL
///
/// All rows are scored before any error is reported, so a failure always
/// names the lowest failing line number.
pub fn score_pair_list(scorer: &OffTargetScorer, list: &PairList) -> Result<Vec<PairScore>> {
    let results: Vec<_> = list
        .rows
        .par_iter()
        .map(|row| scorer.score_pair(&row.guide, &row.target))
        .collect();

    list.rows
        .iter()
        .zip(results)
        .map(|(row, result)| result.with_context(|| format!("line {}", row.line_no)))
        .collect()
}

/// Write scored rows in the requested format
pub fn write_scored_pairs<W: Write>(
    out: &mut W,
    list: &PairList,
    scores: &[PairScore],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Tsv => {
            if let Some(header) = &list.header {
                writeln!(out, "{}\tCFD\tMIT", header)?;
            }
            for (row, score) in list.rows.iter().zip(scores) {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    row.raw,
                    format_score(score.cfd),
                    format_score(score.mit)
                )?;
            }
        }
        OutputFormat::Json => {
            for (row, score) in list.rows.iter().zip(scores) {
                write_json_record(out, &row.guide, &row.target, score)?;
            }
        }
    }
    Ok(())
}

/// Write a single pair score in the requested format
pub fn write_single_pair<W: Write>(
    out: &mut W,
    guide: &str,
    target: &str,
    score: &PairScore,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Tsv => writeln!(
            out,
            "CFD\t{}\tMIT\t{}",
            format_score(score.cfd),
            format_score(score.mit)
        ),
        OutputFormat::Json => write_json_record(out, guide, target, score),
    }
}

/// Write a lone CFD score in the requested format
pub fn write_cfd_score<W: Write>(
    out: &mut W,
    guide: &str,
    target: &str,
    cfd: f64,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Tsv => writeln!(out, "{}", format_score(cfd)),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &CfdRecord { guide, target, cfd })?;
            writeln!(out)
        }
    }
}

fn write_json_record<W: Write>(
    out: &mut W,
    guide: &str,
    target: &str,
    score: &PairScore,
) -> io::Result<()> {
    let record = PairRecord {
        guide,
        target,
        cfd: score.cfd,
        mit: score.mit,
    };
    serde_json::to_writer(&mut *out, &record)?;
    writeln!(out)
}
