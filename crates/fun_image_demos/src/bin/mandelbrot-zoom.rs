use fun_image::prelude::*;
use fun_image_demos::{init_tracing, write_grid};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Zoom deep into the seahorse valley, invert so the set is white, then tilt
    let chain = Chain::new()
        .then(Transform::scale_at_point(
            -0.7487666666666666,
            0.107017,
            1_000_000.0,
            1_000_000.0,
        ))
        .then(Transform::invert())
        .then(Transform::rotate_at_origin(45.0));
    let image = chain.apply(Image::mandelbrot())?;

    let config = RasterConfig::new(Region::new(-1000, 1000, 1000, -1000)).with_parallel(true);
    let rasterizer = Rasterizer::try_new(config)?;
    let grid = rasterizer.run(&image);

    write_grid(&grid, "mandelbrot-zoom.png")?;
    Ok(())
}
