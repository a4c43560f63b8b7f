use fun_image::prelude::*;
use fun_image_demos::{init_tracing, read_grid, write_grid};
use tracing::info;

/// Fallback source when no input file is given: a small rendering of the Mandelbrot set.
fn synthesized_grid() -> anyhow::Result<PixelGrid> {
    let fractal = Image::mandelbrot().scale_at_origin(40.0, 40.0)?.invert();
    Ok(rasterize(-100, 60, 27, -59, &fractal))
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Optional input image path; any format readable as 8-bit luma
    let raster = match std::env::args().nth(1) {
        Some(path) => read_grid(path)?,
        None => {
            info!("No input image given, tiling a synthesized one.");
            synthesized_grid()?
        }
    };

    // Tile the raster over the plane, shrink it, and render twice the original extent
    let (image, width, height) = from_raster(raster, true)?;
    let image = image.scale_at_origin(0.3, 0.3)?;
    let (width, height) = (i32::try_from(width)?, i32::try_from(height)?);
    let tiled = rasterize(0, height * 2, width * 2, 0, &image);

    write_grid(&tiled, "tiled-raster.png")?;
    Ok(())
}
