use fun_image::prelude::*;
use fun_image_demos::{init_tracing, write_grid};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Freeze one draw of noise into a raster so it can be transformed deterministically
    let noise = Image::random_field(StdRng::seed_from_u64(42));
    let tile = rasterize(0, 31, 31, 0, &noise);

    // Tile the frozen noise, magnify it 8x and spin it about the picture centre
    let (image, _, _) = from_raster(tile, true)?;
    let image = image
        .scale_at_origin(8.0, 8.0)?
        .rotate_at_point(256.0, 256.0, 30.0);

    write_grid(&rasterize(0, 511, 511, 0, &image), "random-noise.png")?;
    Ok(())
}
