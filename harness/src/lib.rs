//! quicksort benchmark harness: times the naive quicksort over growing
//! arrays at decreasing sortedness and collects the results file the
//! plotter reads.

use anyhow::Result;
use anyhow::bail;
use indicatif::ProgressIterator;
use lib::SampleRow;
use lib::profile::BenchDefaults;
use lib::profile::Metric;
use lib::profile::Profile;
use lib::progress_bar;
use lib::samples::Samples;
use rand::Rng;

pub mod metric;
pub mod sort;
pub mod timing;

use sort::sequential;
use timing::mean_sort_time;

/// everything one harness run needs
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub grid: BenchDefaults,
    pub warmup: usize,
    pub timed: usize,
    pub trim_percent: usize,
    pub ascending: bool,
    pub metric: Metric,
}

impl From<Profile> for BenchConfig {
    fn from(profile: Profile) -> Self {
        let grid = profile.bench();
        BenchConfig {
            warmup: grid.warmup,
            timed: grid.timed,
            trim_percent: grid.trim_percent,
            ascending: grid.ascending,
            metric: grid.metric,
            grid,
        }
    }
}

impl BenchConfig {
    pub fn rows(&self) -> usize {
        self.grid.array_sizes().count() * self.grid.swap_counts().count()
    }
}

/// run the benchmark over every (array size, swap count) pair. rows come out
/// grouped per array size, fewest swaps first, which is the block layout the
/// envelope sampler relies on.
pub fn generate<R: Rng>(config: &BenchConfig, rng: &mut R) -> Result<Samples> {
    if config.grid.size_step == 0 || config.grid.swap_step == 0 {
        bail!("array size and swap steps must be at least 1");
    }
    if config.timed == 0 {
        bail!("need at least one timed iteration");
    }

    let sizes = config.grid.array_sizes().collect::<Vec<_>>();
    let pb = progress_bar(sizes.len() as u64)?;
    let mut samples = Samples::with_capacity(config.rows());

    for size in sizes.into_iter().progress_with(pb.clone()) {
        let base = sequential(size, config.ascending);
        for swaps in config.grid.swap_counts() {
            let (execution_time, sortedness) = mean_sort_time(&base, swaps, config, rng)?;
            samples.push(SampleRow {
                array_size: size as f64,
                sortedness,
                execution_time,
            });
        }
        log::debug!("array size {size} done");
    }
    pb.finish_and_clear();

    Ok(samples)
}
