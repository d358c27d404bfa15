//! Off-target score calculator (CFD & MIT)
//!
//! Usage:
//!   offtarget_score singlePair ATCGATGCTGATGCTAGATAAGG ACCGATGCTGATGCTAGATAAGG
//!   offtarget_score pairList data/crRNA_DNA_Pair_Examples.txt
//!   offtarget_score cfd ATCGATGCTGATGCTAGATAAGG ACCGATGCTGATGCTAGATAAGG
//!
//! Tables default to data/CFD_Scores.txt and data/MIT_Weights.txt.

use anyhow::Result;
use clap::{Parser, Subcommand};
use offtarget_scorer::batch::{
    score_pair_list, write_cfd_score, write_scored_pairs, write_single_pair, OutputFormat, PairList,
};
use offtarget_scorer::metrics::cfd_score;
use offtarget_scorer::{normalize, CfdTable, OffTargetScorer, ScorerConfig};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LONG_ABOUT: &str = "\
Guide and target sequences must be at least 23 nucleotides long and end with \
their PAM. Guides may be written with T or U, in any case.

CFD: Cutting Frequency Determination scores range from 0 to 1 and represent \
the percentage activity of a guide RNA at a specific off-target site, taking \
number, position and type of mismatches into account, adjusted for \
non-canonical PAMs.

MIT: takes a value between 0 and 1 and represents the likelihood of a guide \
cutting a specific off-target site, taking number, position and distance of \
mismatches into account. Non-canonical PAMs are adjusted with the CFD PAM \
scores.

References:
    CFD: Doench, J., et al. (2016) Nat Biotechnol 34, 184-191.
    MIT: Hsu, P., et al. (2013) Nat Biotechnol 31, 827-832.";

#[derive(Parser)]
#[command(name = "offtarget_score")]
#[command(version)]
#[command(about = "CFD and MIT off-target scores for CRISPR guide/target pairs", long_about = LONG_ABOUT)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file (table paths, distance flag)
    #[arg(long, global = true, env = "OFFTARGET_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding CFD_Scores.txt and MIT_Weights.txt
    #[arg(long, global = true, env = "OFFTARGET_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// CFD score table
    #[arg(long, global = true, env = "OFFTARGET_CFD_TABLE")]
    cfd_table: Option<PathBuf>,

    /// MIT position weight table
    #[arg(long, global = true, env = "OFFTARGET_MIT_WEIGHTS")]
    mit_weights: Option<PathBuf>,

    /// Leave the mismatch-distance term out of the MIT score
    #[arg(long, global = true)]
    no_distance: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one guide/target pair
    #[command(name = "singlePair", alias = "single-pair")]
    SinglePair { guide: String, target: String },

    /// Score every row of a tab-delimited pair list (first line is a header)
    #[command(name = "pairList", alias = "pair-list")]
    PairList { path: PathBuf },

    /// CFD score only, for one guide/target pair (MIT weights are not read)
    Cfd { guide: String, target: String },
}

impl Cli {
    /// Flag > environment > config file > defaults
    fn scorer_config(&self) -> Result<ScorerConfig> {
        let mut config = match &self.config {
            Some(path) => ScorerConfig::load(path)?,
            None => ScorerConfig::default(),
        };

        if let Some(dir) = &self.data_dir {
            let include_distance = config.include_distance;
            config = ScorerConfig {
                include_distance,
                ..ScorerConfig::with_data_dir(dir)
            };
        }
        if let Some(path) = &self.cfd_table {
            config.cfd_table = path.clone();
        }
        if let Some(path) = &self.mit_weights {
            config.mit_weights = path.clone();
        }
        if self.no_distance {
            config.include_distance = false;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "offtarget_scorer=info,offtarget_score=info,warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.scorer_config()?;
    tracing::debug!(?config, "Resolved configuration");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &cli.command {
        Commands::SinglePair { guide, target } => {
            let scorer = OffTargetScorer::from_config(&config)?;
            let score = scorer.score_pair(guide, target)?;
            write_single_pair(&mut out, guide, target, &score, cli.format)?;
        }
        Commands::PairList { path } => {
            let scorer = OffTargetScorer::from_config(&config)?;
            let list = PairList::load(path)?;
            let scores = score_pair_list(&scorer, &list)?;
            write_scored_pairs(&mut out, &list, &scores, cli.format)?;
            tracing::info!(pairs = scores.len(), "Pair list scored");
        }
        Commands::Cfd { guide, target } => {
            let table = CfdTable::load(&config.cfd_table)?;
            let pair = normalize(guide, target)?;
            let cfd = cfd_score(&pair.cfd.guide, &pair.cfd.target, &pair.pam, &table);
            write_cfd_score(&mut out, guide, target, cfd, cli.format)?;
        }
    }

    out.flush()?;
    Ok(())
}
