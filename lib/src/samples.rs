//! benchmark results held as three parallel sequences

use crate::SampleRow;

/// array sizes, sortedness values and execution times, index-aligned and in
/// the order they were recorded. all three always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    pub array_sizes: Vec<f64>,
    pub sortedness: Vec<f64>,
    pub execution_times: Vec<f64>,
}

impl Samples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Samples {
            array_sizes: Vec::with_capacity(n),
            sortedness: Vec::with_capacity(n),
            execution_times: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.array_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array_sizes.is_empty()
    }

    pub fn push(&mut self, row: SampleRow) {
        self.array_sizes.push(row.array_size);
        self.sortedness.push(row.sortedness);
        self.execution_times.push(row.execution_time);
    }

    pub fn get(&self, idx: usize) -> Option<SampleRow> {
        Some(SampleRow {
            array_size: *self.array_sizes.get(idx)?,
            sortedness: *self.sortedness.get(idx)?,
            execution_time: *self.execution_times.get(idx)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = SampleRow> + '_ {
        self.array_sizes
            .iter()
            .zip(&self.sortedness)
            .zip(&self.execution_times)
            .map(|((&array_size, &sortedness), &execution_time)| SampleRow {
                array_size,
                sortedness,
                execution_time,
            })
    }

    /// the last `n` rows (all of them if there are fewer)
    ///
    /// ```
    /// # use lib::samples::Samples;
    /// # use lib::SampleRow;
    /// let mut s = Samples::new();
    /// for i in 0..5 {
    ///     s.push(SampleRow { array_size: 10.0, sortedness: i as f64, execution_time: 1.0 });
    /// }
    /// assert_eq!(s.tail(2).sortedness, vec![3.0, 4.0]);
    /// assert_eq!(s.tail(100).len(), 5);
    /// ```
    pub fn tail(&self, n: usize) -> Samples {
        let from = self.len().saturating_sub(n);
        Samples {
            array_sizes: self.array_sizes[from..].to_vec(),
            sortedness: self.sortedness[from..].to_vec(),
            execution_times: self.execution_times[from..].to_vec(),
        }
    }
}

impl FromIterator<SampleRow> for Samples {
    fn from_iter<I: IntoIterator<Item = SampleRow>>(iter: I) -> Self {
        let mut samples = Samples::new();
        iter.into_iter().for_each(|r| samples.push(r));
        samples
    }
}
