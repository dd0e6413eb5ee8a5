//! # quicksort benchmark harness
//! times the naive quicksort for every (array size, swap count) pair of the
//! chosen profile and writes `<size> <sortedness> <ms>` rows, one block per
//! array size.
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use clap_derive::Parser;
use harness::BenchConfig;
use harness::generate;
use lib::RESULTS_FILE;
use lib::profile::Metric;
use lib::profile::Profile;
use lib::write_samples;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    #[arg(long, value_enum, default_value_t = Profile::EditDistance)]
    pub profile: Profile,
    #[arg(long, default_value = RESULTS_FILE)]
    pub output: PathBuf,
    /// seed the shuffles for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
    /// override the profile's sortedness metric
    #[arg(long, value_enum)]
    pub metric: Option<Metric>,
    #[arg(long)]
    pub warmup: Option<usize>,
    #[arg(long)]
    pub timed: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();

    let start = Instant::now();

    let mut config = BenchConfig::from(args.profile);
    if let Some(metric) = args.metric {
        config.metric = metric;
    }
    if let Some(warmup) = args.warmup {
        config.warmup = warmup;
    }
    if let Some(timed) = args.timed {
        config.timed = timed;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "running {} benchmarks ({:?}, {} timed runs each)...",
        config.rows(),
        args.profile,
        config.timed
    );

    let samples = generate(&config, &mut rng)?;
    write_samples(&args.output, &samples)?;

    println!(
        "{} results written to {} in {}s",
        samples.len(),
        args.output.display(),
        start.elapsed().as_secs_f32()
    );
    Ok(())
}
