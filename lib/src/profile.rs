//! the two benchmark setups: what the harness runs and what the plotter
//! draws for each.

use std::ops::Range;

/// which benchmark/plot setup to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap_derive::ValueEnum)]
pub enum Profile {
    /// descending base arrays, sortedness is the number of swaps applied
    #[default]
    EditDistance,
    /// ascending base arrays, sortedness is spearman's rho against sorted
    Swaps,
}

/// how sortedness gets recorded for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap_derive::ValueEnum)]
pub enum Metric {
    /// number of random swaps applied (edit distance upper bound)
    Swaps,
    Spearman,
    Kendall,
}

/// camera position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub elevation: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageKind {
    /// surface + envelopes, seen from the camera
    Surface(Camera),
    /// sortedness vs time over the largest array size
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Image {
    pub file: &'static str,
    pub kind: ImageKind,
}

/// harness defaults for a profile
#[derive(Debug, Clone, PartialEq)]
pub struct BenchDefaults {
    pub sizes: Range<usize>,
    pub size_step: usize,
    pub swaps: Range<usize>,
    pub swap_step: usize,
    pub warmup: usize,
    pub timed: usize,
    /// percent of the sorted timings dropped from each end
    pub trim_percent: usize,
    pub ascending: bool,
    pub metric: Metric,
}

const FRONT: Camera = Camera {
    elevation: 20.0,
    azimuth: -245.0,
};
const SIDE: Camera = Camera {
    elevation: -3.0,
    azimuth: 98.0,
};

/// rows in the 2d plot, taken from the end of the file: the two largest
/// array sizes with 50-row blocks, or the most-swapped half (100..199) of the
/// largest size with 200-row blocks
pub const SCATTER_ROWS: usize = 100;

impl Profile {
    /// rows per array size
    pub fn block_size(&self) -> usize {
        match self {
            Profile::EditDistance => 50,
            Profile::Swaps => 200,
        }
    }

    pub fn sortedness_label(&self) -> &'static str {
        match self {
            Profile::EditDistance => "Sortedness (edit distance)",
            Profile::Swaps => "Sortedness (Spearman's rho)",
        }
    }

    pub fn images(&self) -> Vec<Image> {
        match self {
            Profile::EditDistance => vec![
                Image {
                    file: "sortedness_vs_time_vs_size.png",
                    kind: ImageKind::Surface(FRONT),
                },
                Image {
                    file: "sortedness_vs_time_vs_size_2.png",
                    kind: ImageKind::Surface(SIDE),
                },
            ],
            Profile::Swaps => vec![
                Image {
                    file: "execution_time_vs_no_swaps_and_array_size_3d.png",
                    kind: ImageKind::Surface(FRONT),
                },
                Image {
                    file: "execution_time_vs_no_swaps.png",
                    kind: ImageKind::Scatter,
                },
            ],
        }
    }

    pub fn bench(&self) -> BenchDefaults {
        match self {
            Profile::EditDistance => BenchDefaults {
                sizes: 0..5000,
                size_step: 100,
                swaps: 0..100,
                swap_step: 2,
                warmup: 10,
                timed: 500,
                trim_percent: 10,
                ascending: false,
                metric: Metric::Swaps,
            },
            Profile::Swaps => BenchDefaults {
                sizes: 2..1000,
                size_step: 10,
                swaps: 0..200,
                swap_step: 1,
                warmup: 5,
                timed: 100,
                trim_percent: 20,
                ascending: true,
                metric: Metric::Spearman,
            },
        }
    }
}

impl BenchDefaults {
    pub fn array_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.sizes.clone().step_by(self.size_step)
    }

    pub fn swap_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.swaps.clone().step_by(self.swap_step)
    }
}
