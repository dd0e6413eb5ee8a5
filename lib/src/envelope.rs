//! worst/best case reference curves.
//!
//! results come in blocks of `block_size` rows per array size, least sorted
//! first. the first row of every block is the worst case for the pivot
//! choice, the last one the best case; collecting those across blocks gives
//! the O(n^2) and O(nlog(n)) curves drawn over the surface.

use anyhow::Result;
use anyhow::bail;

use crate::samples::Samples;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelopes {
    /// first row of each block (starts a block, even a partial one)
    pub max: Samples,
    /// last row of each completed block
    pub min: Samples,
}

/// pick the envelope rows by position only, nothing is fitted.
///
/// ```
/// # use lib::envelope::sample_envelopes;
/// # use lib::samples::Samples;
/// # use lib::SampleRow;
/// let s = (0..7)
///     .map(|i| SampleRow { array_size: (i / 3) as f64, sortedness: (i % 3) as f64, execution_time: 0.0 })
///     .collect::<Samples>();
/// let env = sample_envelopes(&s, 3).unwrap();
/// assert_eq!(env.max.len(), 3); // ceil(7 / 3)
/// assert_eq!(env.min.len(), 2); // floor(7 / 3)
/// ```
pub fn sample_envelopes(samples: &Samples, block_size: usize) -> Result<Envelopes> {
    if block_size == 0 {
        bail!("block size must be at least 1");
    }

    let mut env = Envelopes::default();
    for (i, row) in samples.iter().enumerate() {
        if i % block_size == 0 {
            env.max.push(row);
        }
        if i % block_size == block_size - 1 {
            env.min.push(row);
        }
    }

    Ok(env)
}
