//! # Results plotter
//! load → sample → render → save:
//! - read the benchmark results
//! - pick the worst/best case row of every block
//! - draw the surface with both curves on top (and the 2d plot, if the
//!   profile has one)
//!
//! any error aborts the run.
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use clap_derive::Parser;
use lib::RESULTS_FILE;
use lib::envelope::sample_envelopes;
use lib::load_samples;
use lib::profile::Profile;
use plotter::render_all;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// results file, or a glob matching several
    #[arg(long, default_value = RESULTS_FILE)]
    pub input: String,
    #[arg(long, value_enum, default_value_t = Profile::EditDistance)]
    pub profile: Profile,
    /// rows per array size; must match what the harness produced
    #[arg(long)]
    pub block_size: Option<usize>,
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();

    let start = Instant::now();
    let block_size = args.block_size.unwrap_or(args.profile.block_size());

    let samples = load_samples(&args.input)?;
    log::info!("parsed {} rows from {}", samples.len(), args.input);

    let envelopes = sample_envelopes(&samples, block_size)?;
    if samples.len() % block_size != 0 {
        log::warn!(
            "{} rows is not a multiple of the block size {block_size}, the last block is partial",
            samples.len()
        );
    }
    log::info!(
        "envelopes: {} worst case, {} best case points",
        envelopes.max.len(),
        envelopes.min.len()
    );

    let written = render_all(&samples, &envelopes, args.profile, block_size, &args.out_dir)?;

    println!(
        "{} images done in {}s",
        written.len(),
        start.elapsed().as_secs_f32()
    );
    Ok(())
}
