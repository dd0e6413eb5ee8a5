//! the quicksort under test and the arrays it gets fed

use rand::Rng;

/// `0..n`, or `n-1` down to `0` when not ascending
///
/// ```
/// # use harness::sort::sequential;
/// assert_eq!(sequential(4, true), vec![0, 1, 2, 3]);
/// assert_eq!(sequential(4, false), vec![3, 2, 1, 0]);
/// ```
pub fn sequential(n: usize, ascending: bool) -> Vec<i64> {
    let n = n as i64;
    if ascending {
        (0..n).collect()
    } else {
        (0..n).rev().collect()
    }
}

/// a copy of `array` with `swaps` random pairs exchanged.
///
/// the same index can come up twice, or a swap can undo the previous one,
/// so the result is *at most* `swaps` swaps away from the input. that gets
/// unlikely quickly as the array grows.
pub fn shuffle<R: Rng>(array: &[i64], swaps: usize, rng: &mut R) -> Vec<i64> {
    let mut shuffled = array.to_vec();
    if shuffled.is_empty() {
        return shuffled;
    }
    for _ in 0..swaps {
        let i = rng.gen_range(0..shuffled.len());
        let j = rng.gen_range(0..shuffled.len());
        shuffled.swap(i, j);
    }
    shuffled
}

/// non in-place quicksort with the last element as pivot.
///
/// average O(nlog(n)), but O(n^2) on input that is already (reverse) sorted,
/// which is exactly what the benchmark wants to show. partitions are copied
/// into fresh vectors on every level.
///
/// ```
/// # use harness::sort::quicksort;
/// let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// quicksort(&mut v);
/// assert_eq!(v, vec![1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn quicksort(array: &mut [i64]) {
    let Some((&pivot, rest)) = array.split_last() else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    let (mut left, mut right): (Vec<i64>, Vec<i64>) = rest.iter().partition(|&&x| x <= pivot);

    quicksort(&mut left);
    quicksort(&mut right);

    let split = left.len();
    array[..split].copy_from_slice(&left);
    array[split] = pivot;
    array[split + 1..].copy_from_slice(&right);
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn sorts_shuffled_input() {
        let mut rng = StdRng::seed_from_u64(1357);
        for n in [0, 1, 2, 3, 17, 256] {
            for swaps in [0, 1, n / 2, n * 3] {
                let base = sequential(n, false);
                let mut s = shuffle(&base, swaps, &mut rng);
                quicksort(&mut s);
                assert_eq!(s, sequential(n, true), "n = {n}, swaps = {swaps}");
            }
        }
    }

    #[test]
    fn sorts_duplicates() {
        let mut v = vec![2, 2, 1, 2, 0, 0];
        quicksort(&mut v);
        assert_eq!(v, vec![0, 0, 1, 2, 2, 2]);
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        let base = sequential(100, true);
        let mut s = shuffle(&base, 30, &mut rng);
        assert_eq!(base, sequential(100, true));
        s.sort_unstable();
        assert_eq!(s, base);
    }

    #[test]
    fn zero_swaps_is_a_copy() {
        let mut rng = StdRng::seed_from_u64(0);
        let base = sequential(10, false);
        assert_eq!(shuffle(&base, 0, &mut rng), base);
        assert!(shuffle(&[], 10, &mut rng).is_empty());
    }
}
