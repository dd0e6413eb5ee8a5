//! sortedness of a shuffled array relative to where it started

use anyhow::Result;
use lib::profile::Metric;

/// 1-based ranks of the elements, in input order. assumes unique values
///
/// ```
/// # use harness::metric::ranks;
/// assert_eq!(ranks(&[30, 10, 20]), vec![3, 1, 2]);
/// ```
pub fn ranks(array: &[i64]) -> Vec<usize> {
    let mut order = (0..array.len()).collect::<Vec<_>>();
    order.sort_by_key(|&i| array[i]);

    let mut ranks = vec![0; array.len()];
    for (rank, i) in order.into_iter().enumerate() {
        ranks[i] = rank + 1;
    }
    ranks
}

/// spearman's rank correlation, `1 - 6Σd²/(n(n²-1))`.
/// `None` if the lengths differ or there are fewer than two elements.
pub fn spearman(x: &[i64], y: &[i64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let n = x.len() as f64;
    let d2: f64 = ranks(x)
        .into_iter()
        .zip(ranks(y))
        .map(|(rx, ry)| {
            let d = rx as f64 - ry as f64;
            d * d
        })
        .sum();

    Some(1.0 - 6.0 * d2 / (n * (n * n - 1.0)))
}

/// what gets written to the sortedness column for one row
pub fn sortedness(metric: Metric, base: &[i64], shuffled: &[i64], swaps: usize) -> Result<f64> {
    // a single element is as sorted as it gets
    if !matches!(metric, Metric::Swaps) && base.len() < 2 {
        return Ok(1.0);
    }
    match metric {
        Metric::Swaps => Ok(swaps as f64),
        Metric::Spearman => Ok(spearman(base, shuffled).unwrap_or(1.0)),
        Metric::Kendall => {
            let (t, _sig) = kendalls::tau_b(base, shuffled)?;
            Ok(t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::sequential;

    #[test]
    fn spearman_extremes() {
        let up = sequential(50, true);
        let down = sequential(50, false);
        assert_eq!(spearman(&up, &up), Some(1.0));
        assert!((spearman(&up, &down).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn spearman_rejects_bad_input() {
        assert_eq!(spearman(&[1, 2], &[1]), None);
        assert_eq!(spearman(&[1], &[1]), None);
        assert_eq!(spearman(&[], &[]), None);
    }

    #[test]
    fn one_swap_lowers_spearman() {
        let up = sequential(10, true);
        let mut swapped = up.clone();
        swapped.swap(0, 9);
        let rho = spearman(&up, &swapped).unwrap();
        assert!(rho < 1.0 && rho > -1.0);
    }

    #[test]
    fn sortedness_per_metric() {
        let up = sequential(20, true);
        let down = sequential(20, false);

        assert_eq!(sortedness(Metric::Swaps, &up, &down, 7).unwrap(), 7.0);
        assert!((sortedness(Metric::Spearman, &up, &down, 7).unwrap() + 1.0).abs() < 1e-12);
        assert!((sortedness(Metric::Kendall, &up, &up, 0).unwrap() - 1.0).abs() < 1e-12);
        assert!((sortedness(Metric::Kendall, &up, &down, 0).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_arrays_count_as_sorted() {
        assert_eq!(sortedness(Metric::Spearman, &[0], &[0], 3).unwrap(), 1.0);
        assert_eq!(sortedness(Metric::Kendall, &[], &[], 0).unwrap(), 1.0);
        assert_eq!(sortedness(Metric::Swaps, &[], &[], 4).unwrap(), 4.0);
    }
}
