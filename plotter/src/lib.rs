use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use lib::envelope::Envelopes;
use lib::profile::ImageKind;
use lib::profile::Profile;
use lib::profile::SCATTER_ROWS;
use lib::samples::Samples;

pub mod mesh;
pub mod render;

use mesh::triangulate;
use render::draw_scatter;
use render::draw_surface;

/// draw every image of `profile` into `out_dir`, overwriting what's there.
/// returns the written paths in the order they were drawn.
pub fn render_all(
    samples: &Samples,
    envelopes: &Envelopes,
    profile: Profile,
    block_size: usize,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let label = profile.sortedness_label();
    let triangles = triangulate(samples, block_size)?;
    log::debug!("{} triangles in the surface", triangles.len());

    let mut written = vec![];
    for image in profile.images() {
        let path = out_dir.join(image.file);
        match image.kind {
            ImageKind::Surface(camera) => {
                draw_surface(&path, samples, envelopes, &triangles, camera, label)?
            }
            ImageKind::Scatter => draw_scatter(&path, &samples.tail(SCATTER_ROWS), label)?,
        }
        log::info!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
