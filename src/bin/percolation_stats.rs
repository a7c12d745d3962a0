use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use rand::prelude::*;

use percolation::PercolationStats;

/// Estimates the site percolation threshold of an N-by-N grid by Monte Carlo simulation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid size
    #[clap(value_name = "N")]
    n: usize,

    /// Number of independent trials
    #[clap(value_name = "T")]
    trials: usize,

    /// Seed for the random number generator (drawn from entropy if omitted)
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let start = Instant::now();
    let stats = PercolationStats::run(args.n, args.trials, &mut rng)?;
    log::info!(
        "{} trials on a {}x{} grid in {:?}",
        stats.trials(),
        args.n,
        args.n,
        start.elapsed(),
    );

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi(),
    );
    println!(
        "observed range          = [{}, {}]",
        stats.min(),
        stats.max(),
    );

    Ok(())
}
