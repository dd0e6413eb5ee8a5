//! drawing the charts. plotters errors are kept as boxed errors inside the
//! drawing code and turned into anyhow errors naming the file at the edge.

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use anyhow::Result;
use anyhow::anyhow;
use itertools::Itertools;
use lib::envelope::Envelopes;
use lib::profile::Camera;
use lib::samples::Samples;
use plotters::prelude::*;

use crate::mesh::Triangle;
use crate::mesh::chart_point;

pub const SURFACE_SIZE: (u32, u32) = (1250, 1200);
pub const SCATTER_SIZE: (u32, u32) = (1000, 750);
const FONT: &str = "sans-serif";
const FONT_SIZE: i32 = 18;
const CAPTION_SIZE: i32 = 30;

/// worst case curve, first row of every block
pub const MAX_COLOR: RGBColor = RGBColor(0xf2, 0x00, 0x89);
/// best case curve, last row of every block
pub const MIN_COLOR: RGBColor = RGBColor(0x89, 0x00, 0xf2);

type PlotResult = Result<(), Box<dyn Error>>;

/// dark purple through orange to pale yellow
pub fn inferno() -> DerivedColorMap<RGBColor> {
    DerivedColorMap::new(&[
        RGBColor(0x00, 0x00, 0x04),
        RGBColor(0x1b, 0x0c, 0x41),
        RGBColor(0x4a, 0x0c, 0x6b),
        RGBColor(0x78, 0x1c, 0x6d),
        RGBColor(0xa5, 0x2c, 0x60),
        RGBColor(0xcf, 0x44, 0x46),
        RGBColor(0xed, 0x69, 0x25),
        RGBColor(0xfb, 0x9b, 0x06),
        RGBColor(0xf7, 0xd1, 0x3d),
        RGBColor(0xfc, 0xff, 0xa4),
    ])
}

/// (min, max) over a column, `None` when it is empty or holds anything
/// non-finite
pub fn bounds(column: &[f64]) -> Option<(f64, f64)> {
    if column.is_empty() || !column.iter().all(|v| v.is_finite()) {
        return None;
    }
    Some(
        column
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            }),
    )
}

/// span of a column, widened when every value is the same so the axis
/// doesn't collapse
///
/// ```
/// # use plotter::render::axis_range;
/// assert_eq!(axis_range(&[3.0, 1.0, 2.0]), Some(1.0..3.0));
/// assert_eq!(axis_range(&[2.0, 2.0]), Some(1.5..2.5));
/// assert_eq!(axis_range(&[]), None);
/// assert_eq!(axis_range(&[1.0, f64::NAN]), None);
/// ```
pub fn axis_range(column: &[f64]) -> Option<Range<f64>> {
    let (lo, hi) = bounds(column)?;
    if hi > lo {
        Some(lo..hi)
    } else {
        Some(lo - 0.5..hi + 0.5)
    }
}

/// position of `v` in `[lo, hi]`, clamped to `[0, 1]`
pub fn normalize(v: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn ranges(samples: &Samples) -> Result<(Range<f64>, Range<f64>, Range<f64>), Box<dyn Error>> {
    if samples.is_empty() {
        return Err("no samples to plot".into());
    }
    let missing = || "non-finite values, can't plot";
    Ok((
        axis_range(&samples.array_sizes).ok_or_else(missing)?,
        axis_range(&samples.execution_times).ok_or_else(missing)?,
        axis_range(&samples.sortedness).ok_or_else(missing)?,
    ))
}

/// surface + envelope curves seen from `camera`
pub fn draw_surface(
    path: &Path,
    samples: &Samples,
    envelopes: &Envelopes,
    triangles: &[Triangle],
    camera: Camera,
    sortedness_label: &str,
) -> Result<()> {
    try_draw_surface(path, samples, envelopes, triangles, camera, sortedness_label)
        .map_err(|e| anyhow!("couldn't render {}: {e}", path.display()))
}

fn try_draw_surface(
    path: &Path,
    samples: &Samples,
    envelopes: &Envelopes,
    triangles: &[Triangle],
    camera: Camera,
    sortedness_label: &str,
) -> PlotResult {
    let (x, y, z) = ranges(samples)?;
    let (t_lo, t_hi) = (y.start, y.end);

    let root = BitMapBackend::new(path, SURFACE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Execution Time vs Array Size and {sortedness_label}"),
            (FONT, CAPTION_SIZE),
        )
        .margin(20)
        .build_cartesian_3d(x, y, z)?;

    chart.with_projection(|mut pb| {
        pb.pitch = camera.elevation.to_radians();
        pb.yaw = camera.azimuth.to_radians();
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .label_style((FONT, FONT_SIZE))
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    // no depth buffer: paint far triangles first
    let coord = chart.as_coord_spec();
    let ordered = triangles
        .iter()
        .map(|t| {
            let (cx, cy, cz) = t.centroid();
            (coord.projected_depth(&cx, &cy, &cz), t)
        })
        .sorted_by_key(|(depth, _)| std::cmp::Reverse(*depth))
        .collect_vec();

    let colormap = inferno();
    chart.draw_series(ordered.into_iter().map(|(_, t)| {
        let shade = normalize(t.mean_time(), t_lo, t_hi);
        Polygon::new(t.vertices.to_vec(), colormap.get_color(shade).filled())
    }))?;

    for (curve, label, color) in [
        (&envelopes.max, "O(n^2)", MAX_COLOR),
        (&envelopes.min, "O(nlog(n))", MIN_COLOR),
    ] {
        chart
            .draw_series(LineSeries::new(
                curve.iter().map(chart_point),
                color.stroke_width(3),
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
    }

    chart
        .configure_series_labels()
        .label_font((FONT, FONT_SIZE))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    // the 3d axes carry no titles of their own
    root.draw(&Text::new(
        format!("x: Array Size    y: Execution Time (ms)    z: {sortedness_label}"),
        (20, SURFACE_SIZE.1 as i32 - 40),
        (FONT, FONT_SIZE),
    ))?;

    root.present()?;
    Ok(())
}

/// sortedness against time, in file order
pub fn draw_scatter(path: &Path, samples: &Samples, sortedness_label: &str) -> Result<()> {
    try_draw_scatter(path, samples, sortedness_label)
        .map_err(|e| anyhow!("couldn't render {}: {e}", path.display()))
}

fn try_draw_scatter(path: &Path, samples: &Samples, sortedness_label: &str) -> PlotResult {
    let (_, y, z) = ranges(samples)?;

    for row in samples.iter().filter(|r| r.sortedness == 0.0) {
        log::debug!(
            "zero sortedness at array size {}: {}ms",
            row.array_size,
            row.execution_time
        );
    }

    let root = BitMapBackend::new(path, SCATTER_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Execution Time vs {sortedness_label}"),
            (FONT, CAPTION_SIZE),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(z, y)?;

    chart
        .configure_mesh()
        .x_desc(sortedness_label)
        .y_desc("Execution Time (ms)")
        .label_style((FONT, FONT_SIZE))
        .draw()?;

    chart.draw_series(LineSeries::new(
        samples.iter().map(|r| (r.sortedness, r.execution_time)),
        MIN_COLOR.stroke_width(2),
    ))?;
    chart.draw_series(
        samples
            .iter()
            .map(|r| Circle::new((r.sortedness, r.execution_time), 3, MAX_COLOR.filled())),
    )?;

    root.present()?;
    Ok(())
}
