//! `slice` subcommand.

use std::path::Path;

use tracing::info;

use lemscope_config::Config;
use lemscope_core::{RasterImage, SliceLayout, Slicer};
use lemscope_protocols::SliceRole;

/// Print slice geometry for a screenshot, optionally writing the slices.
pub(crate) fn handle_slice(
    config: &Config,
    image: &Path,
    out_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(image)?;
    let raster = RasterImage::decode(&bytes)?;
    let (width, height) = (raster.width(), raster.height());

    let slicer = Slicer::new(config.analysis.aspect_width, config.analysis.aspect_height);
    let slices = slicer.slice(raster);
    let layout = SliceLayout::from_slices(&slices);

    println!(
        "{}x{} image, {} slices of up to {}px (total {}px)",
        width,
        height,
        slices.len(),
        slicer.standard_height(width),
        layout.total_height()
    );
    println!("{:<6} {:<10} {:<8} {}", "INDEX", "OFFSET", "HEIGHT", "ROLE");
    println!("{}", "-".repeat(36));
    for slice in &slices {
        println!(
            "{:<6} {:<10} {:<8} {:?}",
            slice.index,
            slice.source_y_offset,
            slice.height_pixels,
            SliceRole::for_index(slice.index)
        );
    }

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)?;
        for slice in &slices {
            let path = dir.join(format!("slice-{:03}.png", slice.index));
            slice.pixels().save(&path)?;
        }
        info!("Wrote {} slices to {}", slices.len(), dir.display());
    }

    Ok(())
}
