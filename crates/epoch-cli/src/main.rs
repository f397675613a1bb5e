//! `epochs` CLI — apply interval set algebra to JSON epoch lists.
//!
//! Reads JSON from stdin and writes the resulting set as JSON to stdout.
//! A set is `{"intervals": [[start, stop], ...], "domain": [[start, stop], ...]}`
//! where `domain` is optional and `null` stands for an unbounded side.
//!
//! ## Usage
//!
//! ```sh
//! # Merge epochs closer than 2 s
//! echo '{"intervals":[[0,2],[2,5],[7,8]]}' | epochs merge --gap 2
//!
//! # Binary operations read {"left": SET, "right": SET}
//! echo '{"left":{"intervals":[[1,8]]},"right":{"intervals":[[0,3]]}}' | epochs difference
//!
//! # Gaps inside a 50 s recording, input given in samples at 1 kHz
//! echo '{"intervals":[[1000,3000]]}' | epochs --fs 1000 --domain 0,50 complement
//!
//! # Count, total duration and bounds
//! echo '{"intervals":[[0,3],[5,6],[10,15]]}' | epochs stats
//! ```
//!
//! Set `RUST_LOG` (or pass `-v`) for diagnostics on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use epoch_engine::{BuildOptions, Direction, Domain, Interval, IntervalSet};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "epochs", version, about = "Interval set algebra for time epochs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Sampling rate of the input; pairs are divided by it to get seconds
    #[arg(long, global = true, default_value_t = 1.0)]
    fs: f64,

    /// Domain `START,STOP` in seconds for input sets that do not carry one
    #[arg(long, global = true, allow_hyphen_values = true, value_parser = parse_domain)]
    domain: Option<Domain>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log engine diagnostics at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fuse intervals separated by at most GAP seconds
    Merge {
        #[arg(long, default_value_t = 0.0)]
        gap: f64,
    },
    /// Every time in either set
    Union,
    /// Every time in both sets
    Intersect,
    /// Every time in the left set but not the right
    Difference,
    /// Every time in the domain not covered by the set
    Complement,
    /// Grow each interval by DELTA seconds on both ends (negative shrinks)
    Expand {
        #[arg(long, allow_hyphen_values = true)]
        delta: f64,
    },
    /// Move each interval by DELTA seconds (later unless --left)
    Shift {
        #[arg(long, allow_hyphen_values = true)]
        delta: f64,
        /// Shift earlier instead of later
        #[arg(long)]
        left: bool,
    },
    /// Remove intervals shorter than THRESHOLD seconds
    DropShort {
        #[arg(long)]
        threshold: f64,
    },
    /// Remove intervals longer than THRESHOLD seconds
    DropLong {
        #[arg(long)]
        threshold: f64,
    },
    /// Show count, total duration and bounds
    Stats,
}

/// A set as read from stdin. `domain` falls back to `--domain` when absent.
#[derive(Deserialize)]
struct SetInput {
    intervals: Vec<Interval>,
    #[serde(default)]
    domain: Option<Domain>,
}

#[derive(Deserialize)]
struct PairInput {
    left: SetInput,
    right: SetInput,
}

#[derive(Serialize)]
struct Stats {
    count: usize,
    /// `null` when the set reaches an unbounded end.
    total_duration: f64,
    bounds: Option<Interval>,
    domain: Domain,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let input = read_stdin()?;

    let result = match &cli.command {
        Commands::Union => {
            let (left, right) = parse_pair(&input, &cli)?;
            left.union(&right).context("Failed to compute union")?
        }
        Commands::Intersect => {
            let (left, right) = parse_pair(&input, &cli)?;
            left.intersect(&right)
        }
        Commands::Difference => {
            let (left, right) = parse_pair(&input, &cli)?;
            left.difference(&right)
        }
        Commands::Merge { gap } => parse_set(&input, &cli)?.merge(*gap),
        Commands::Complement => parse_set(&input, &cli)?.complement(),
        Commands::Expand { delta } => parse_set(&input, &cli)?.expand(*delta),
        Commands::Shift { delta, left } => {
            let direction = if *left { Direction::Left } else { Direction::Right };
            parse_set(&input, &cli)?.shift(*delta, direction)
        }
        Commands::DropShort { threshold } => {
            parse_set(&input, &cli)?.drop_short_intervals(*threshold)
        }
        Commands::DropLong { threshold } => {
            parse_set(&input, &cli)?.drop_long_intervals(*threshold)
        }
        Commands::Stats => {
            let set = parse_set(&input, &cli)?;
            let stats = Stats {
                count: set.count(),
                total_duration: set.total_duration(),
                bounds: set.bounds(),
                domain: set.domain().clone(),
            };
            return write_json(&stats, cli.pretty);
        }
    };

    tracing::debug!(
        count = result.count(),
        total_duration = result.total_duration(),
        "computed result"
    );
    write_json(&result, cli.pretty)
}

/// Route engine diagnostics to stderr so stdout stays pure JSON.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_pair(input: &str, cli: &Cli) -> Result<(IntervalSet, IntervalSet)> {
    let pair: PairInput =
        serde_json::from_str(input).context("Failed to parse {\"left\", \"right\"} JSON")?;
    let left = build_set(pair.left, cli).context("Invalid left set")?;
    let right = build_set(pair.right, cli).context("Invalid right set")?;
    Ok((left, right))
}

fn parse_set(input: &str, cli: &Cli) -> Result<IntervalSet> {
    let set: SetInput = serde_json::from_str(input).context("Failed to parse interval set JSON")?;
    build_set(set, cli)
}

/// Apply `--domain` and `--fs` to a parsed input set.
fn build_set(input: SetInput, cli: &Cli) -> Result<IntervalSet> {
    let domain = input
        .domain
        .or_else(|| cli.domain.clone())
        .unwrap_or_default();

    if cli.fs == 1.0 {
        return Ok(IntervalSet::from_parts(input.intervals, domain));
    }

    // Scaling needs finite sample counts, so unbounded sides are rejected here.
    let pairs: Vec<(f64, f64)> = input
        .intervals
        .iter()
        .map(|iv| (iv.start().as_f64(), iv.stop().as_f64()))
        .collect();
    let options = BuildOptions {
        sampling_rate: cli.fs,
        domain,
    };
    IntervalSet::from_intervals_with_options(&pairs, &options)
        .with_context(|| format!("Failed to build interval set at --fs {}", cli.fs))
}

/// Parse `START,STOP` into a single-interval domain.
fn parse_domain(raw: &str) -> std::result::Result<Domain, String> {
    let (start, stop) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected START,STOP but got '{}'", raw))?;
    let start: f64 = start
        .trim()
        .parse()
        .map_err(|e| format!("invalid domain start '{}': {}", start.trim(), e))?;
    let stop: f64 = stop
        .trim()
        .parse()
        .map_err(|e| format!("invalid domain stop '{}': {}", stop.trim(), e))?;
    Domain::bounded(start, stop).map_err(|e| e.to_string())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read from stdin")?;
    Ok(buf)
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}
