//! PNG input and output for pixel grids, plus logging setup shared by the demos.
use std::path::Path;

use anyhow::Context;
use fun_image::prelude::*;
use image::GrayImage;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Decodes an image file into a grid of 8-bit luma intensities, top row first.
pub fn read_grid(path: impl AsRef<Path>) -> anyhow::Result<PixelGrid> {
    let path = path.as_ref();
    let luma = image::open(path)
        .with_context(|| format!("failed to read {}", path.display()))?
        .into_luma8();
    let (width, height) = luma.dimensions();
    let data = luma.into_raw().into_iter().map(Intensity::from).collect();
    let grid = PixelGrid::from_raw(width as usize, height as usize, data)?;
    info!("Read {}x{} grid from {}.", width, height, path.display());
    Ok(grid)
}

/// Encodes `grid` as an 8-bit grayscale PNG.
///
/// Intensities outside `[0, 255]` are clamped here, at the file boundary.
pub fn write_grid(grid: &PixelGrid, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let width = u32::try_from(grid.width()).context("grid too wide for PNG")?;
    let height = u32::try_from(grid.height()).context("grid too tall for PNG")?;
    let data = grid
        .as_slice()
        .iter()
        .map(|v| (*v).clamp(BLACK, WHITE) as u8)
        .collect();
    let luma = GrayImage::from_raw(width, height, data)
        .context("grid dimensions do not match its data")?;
    luma.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {}x{} grid to {}.", width, height, path.display());
    Ok(())
}
