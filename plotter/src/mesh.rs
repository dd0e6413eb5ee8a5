//! triangulated surface over the result grid.
//!
//! results are laid out block by block (one block per array size), so the
//! grid is stitched strip by strip: row `j` of one block, row `j` of the
//! next, and their successors form a quad that becomes two triangles.

use anyhow::Result;
use anyhow::bail;
use itertools::Itertools;
use lib::SampleRow;
use lib::samples::Samples;

/// a point in chart space: (array size, execution time, sortedness).
/// plotters draws its y axis upwards, so time goes in the middle.
pub type Point3 = (f64, f64, f64);

pub fn chart_point(row: SampleRow) -> Point3 {
    (row.array_size, row.execution_time, row.sortedness)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3; 3],
}

impl Triangle {
    pub fn new(a: SampleRow, b: SampleRow, c: SampleRow) -> Self {
        Triangle {
            vertices: [chart_point(a), chart_point(b), chart_point(c)],
        }
    }

    pub fn centroid(&self) -> Point3 {
        let [a, b, c] = self.vertices;
        (
            (a.0 + b.0 + c.0) / 3.0,
            (a.1 + b.1 + c.1) / 3.0,
            (a.2 + b.2 + c.2) / 3.0,
        )
    }

    /// what the colormap is keyed on
    pub fn mean_time(&self) -> f64 {
        self.centroid().1
    }
}

/// stitch consecutive blocks together. a trailing partial block is stitched
/// over the rows it has; fewer than two blocks give no surface at all.
///
/// ```
/// # use lib::samples::Samples;
/// # use lib::SampleRow;
/// # use plotter::mesh::triangulate;
/// let s = (0..6)
///     .map(|i| SampleRow { array_size: (i / 3) as f64, sortedness: (i % 3) as f64, execution_time: 1.0 })
///     .collect::<Samples>();
/// // 2 blocks of 3 rows -> 2 quads -> 4 triangles
/// assert_eq!(triangulate(&s, 3).unwrap().len(), 4);
/// ```
pub fn triangulate(samples: &Samples, block_size: usize) -> Result<Vec<Triangle>> {
    if block_size == 0 {
        bail!("block size must be at least 1");
    }

    let rows = samples.iter().collect_vec();
    let triangles = rows
        .chunks(block_size)
        .tuple_windows()
        .flat_map(|(near, far)| {
            let common = near.len().min(far.len());
            (1..common).flat_map(move |j| {
                [
                    Triangle::new(near[j - 1], near[j], far[j - 1]),
                    Triangle::new(near[j], far[j], far[j - 1]),
                ]
            })
        })
        .collect();

    Ok(triangles)
}
