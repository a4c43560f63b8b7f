use fun_image::prelude::*;
use fun_image_demos::{init_tracing, write_grid};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A lattice bent by concentric ripples
    let lattice = Image::grid(3.0, 3.0, 40.0, 40.0)?;
    let rippled = lattice.ripple();
    write_grid(&rasterize(-400, 400, 400, -400, &rippled), "ripple.png")?;

    // Outline of the rippled lines, drawn dark on light
    let outlined = Chain::new()
        .then(Transform::edge_detect(255.0))
        .then(Transform::invert())
        .apply(rippled)?;
    let config = RasterConfig::new(Region::new(-400, 400, 400, -400)).with_parallel(true);
    let grid = Rasterizer::try_new(config)?.run(&outlined);

    write_grid(&grid, "ripple-edges.png")?;
    Ok(())
}
