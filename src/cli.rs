//! Command-line surface.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use num_bigint::BigUint;
use tracing::info;

use crate::count::PathCounter;
use crate::hops::HopSet;
use crate::layout::GridLayout;
use crate::oracle::brute_force_count;
use crate::sample::{sample_sequences, SampleConfig};
use crate::total::count_all_signed;
use crate::transitions::TransitionGraph;

#[derive(Debug, Parser)]
#[command(name = "hopcount")]
#[command(about = "Count knight-move sequences on a keypad")]
pub struct Args {
    /// Sequence length; zero or negative lengths count zero sequences
    #[arg(default_value_t = 10, allow_negative_numbers = true)]
    pub length: i64,
    /// Layout file: one row per line, `.` for an empty cell (defaults to the keypad)
    #[arg(long)]
    pub layout: Option<PathBuf>,
    /// Largest length that is also counted by brute-force enumeration
    #[arg(long, default_value_t = 10)]
    pub oracle_limit: i64,
    /// Print this many uniformly sampled sequences after the count
    #[arg(long, default_value_t = 0)]
    pub sample: usize,
    /// Seed for sampling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Run one invocation, writing results to `out`.
///
/// Prints the memoized total, then (for lengths up to `--oracle-limit`) the brute-force
/// total, then any sampled sequences, one per line.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let layout = match &args.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read layout {}", path.display()))?;
            GridLayout::parse(&text)
                .with_context(|| format!("invalid layout {}", path.display()))?
        }
        None => GridLayout::keypad(),
    };
    let graph = TransitionGraph::build(&layout, &HopSet::knight());
    info!(symbols = graph.len(), length = args.length, "counting sequences");

    let mut counter = PathCounter::new(&graph);
    let fast = count_all_signed(&mut counter, args.length)
        .with_context(|| format!("counting sequences of length {}", args.length))?;
    writeln!(out, "{fast}")?;
    info!(entries = counter.table().len(), stats = ?counter.stats(), "memo table");

    if args.length <= args.oracle_limit {
        let brute = usize::try_from(args.length).map_or(0, |n| brute_force_count(&graph, n));
        writeln!(out, "{brute}")?;
        if BigUint::from(brute) != fast {
            bail!("brute-force count {brute} disagrees with memoized count {fast}");
        }
    }

    if args.sample > 0 {
        if let Ok(length) = usize::try_from(args.length) {
            let config = SampleConfig { length, samples: args.sample, seed: args.seed };
            for seq in sample_sequences(&mut counter, config)? {
                let word: String = seq.iter().map(|s| s.0).collect();
                writeln!(out, "{word}")?;
            }
        }
    }
    Ok(())
}
