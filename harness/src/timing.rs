use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use anyhow::bail;
use rand::Rng;

use crate::BenchConfig;
use crate::metric::sortedness;
use crate::sort::quicksort;
use crate::sort::sequential;
use crate::sort::shuffle;

/// mean in ms after dropping `len * trim_percent / 100` (rounded down) values
/// off each end of the sorted timings
///
/// ```
/// # use std::time::Duration;
/// # use harness::timing::trimmed_mean_ms;
/// let mut t = [1, 2, 3, 4, 100].map(Duration::from_millis);
/// assert_eq!(trimmed_mean_ms(&mut t, 20).unwrap(), 3.0);
/// ```
pub fn trimmed_mean_ms(times: &mut [Duration], trim_percent: usize) -> Result<f64> {
    if trim_percent >= 50 {
        bail!("trim must be below 50%, got {trim_percent}%");
    }
    times.sort_unstable();

    let bounds = times.len() * trim_percent / 100;
    let kept = &times[bounds..times.len() - bounds];
    if kept.is_empty() {
        bail!("no timings left after trimming {bounds} from each end");
    }

    let total: Duration = kept.iter().sum();
    Ok(total.as_nanos() as f64 / 1e6 / kept.len() as f64)
}

/// one result row's worth of measuring: (mean sort time in ms, sortedness)
///
/// every run sorts a freshly shuffled copy of `base`; only the sort itself is
/// timed. warm-up runs are thrown away.
pub fn mean_sort_time<R: Rng>(
    base: &[i64],
    swaps: usize,
    config: &BenchConfig,
    rng: &mut R,
) -> Result<(f64, f64)> {
    let expected = sequential(base.len(), true);

    for _ in 0..config.warmup {
        quicksort(&mut shuffle(base, swaps, rng));
    }

    let mut times = Vec::with_capacity(config.timed);
    let mut last_sortedness = sortedness(config.metric, base, base, swaps)?;

    for _ in 0..config.timed {
        let mut shuffled = shuffle(base, swaps, rng);
        last_sortedness = sortedness(config.metric, base, &shuffled, swaps)?;

        let start = Instant::now();
        quicksort(&mut shuffled);
        times.push(start.elapsed());

        if shuffled != expected {
            bail!(
                "quicksort did not sort an array of {} elements ({swaps} swaps)",
                base.len()
            );
        }
    }

    Ok((trimmed_mean_ms(&mut times, config.trim_percent)?, last_sortedness))
}
