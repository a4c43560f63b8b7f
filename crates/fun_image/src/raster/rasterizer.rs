//! Sampling images onto pixel grids.
//!
//! Rows are emitted top to bottom, i.e. for decreasing y, and each row runs left to
//! right. Every pixel is an independent full evaluation of the image at integer
//! coordinates; nothing is cached between pixels.
use glam::DVec2;
use tracing::{debug, warn};

use crate::error::Result;
use crate::image::{Image, Intensity};
use crate::raster::config::{RasterConfig, Region};
use crate::raster::PixelGrid;

/// Samples `image` over the inclusive region from `(top_left_x, top_left_y)` to
/// `(bottom_right_x, bottom_right_y)`.
///
/// The grid is `top_left_y - bottom_right_y + 1` rows by
/// `bottom_right_x - top_left_x + 1` columns; an inverted region yields an empty grid.
/// A region with more samples than fit in `usize` yields a 0x0 grid.
pub fn rasterize(
    top_left_x: i32,
    top_left_y: i32,
    bottom_right_x: i32,
    bottom_right_y: i32,
    image: &Image,
) -> PixelGrid {
    let region = Region::new(top_left_x, top_left_y, bottom_right_x, bottom_right_y);
    if region.is_empty() {
        warn!("Rasterizing empty region {:?}.", region);
    }
    render(&region, image, false)
}

/// Rasterizer bound to a validated [`RasterConfig`].
#[derive(Clone, Debug)]
pub struct Rasterizer {
    /// Configuration applied to every run.
    pub config: RasterConfig,
}

impl Rasterizer {
    pub fn try_new(config: RasterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: RasterConfig) -> Self {
        debug_assert!(
            config.region.width() > 0,
            "region must have bottom_right.x >= top_left.x"
        );
        debug_assert!(
            config.region.height() > 0,
            "region must have top_left.y >= bottom_right.y"
        );
        debug_assert!(config.region.len().is_some(), "region is too large");

        Self { config }
    }

    /// Samples `image` over the configured region.
    pub fn run(&self, image: &Image) -> PixelGrid {
        render(&self.config.region, image, self.config.parallel)
    }
}

fn render(region: &Region, image: &Image, parallel: bool) -> PixelGrid {
    let (width, height) = (region.width(), region.height());
    let mut grid = match PixelGrid::new(width, height) {
        Ok(grid) => grid,
        Err(err) => {
            warn!("Rasterizing region {:?}: {}.", region, err);
            return PixelGrid::default();
        }
    };
    if grid.is_empty() {
        return grid;
    }

    debug!(
        "Rasterizing {} image over {}x{} from {:?}.",
        image.kind(),
        width,
        height,
        region.top_left
    );

    let top_left = region.top_left;
    let fill_row = |(r, row): (usize, &mut [Intensity])| {
        let y = f64::from(top_left.y) - r as f64;
        for (c, pixel) in row.iter_mut().enumerate() {
            let x = f64::from(top_left.x) + c as f64;
            *pixel = image.sample(DVec2::new(x, y));
        }
    };
    fill_rows(grid.data_mut(), width, parallel, fill_row);
    grid
}

#[cfg(feature = "parallel")]
fn fill_rows<F>(data: &mut [Intensity], width: usize, parallel: bool, fill_row: F)
where
    F: Fn((usize, &mut [Intensity])) + Send + Sync,
{
    use rayon::prelude::*;

    if parallel {
        data.par_chunks_mut(width).enumerate().for_each(fill_row);
    } else {
        data.chunks_mut(width).enumerate().for_each(fill_row);
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_rows<F>(data: &mut [Intensity], width: usize, parallel: bool, fill_row: F)
where
    F: Fn((usize, &mut [Intensity])),
{
    if parallel {
        debug!("Parallel rasterization requested without the `parallel` feature.");
    }
    data.chunks_mut(width).enumerate().for_each(fill_row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{BLACK, WHITE};

    fn coords() -> Image {
        Image::from_fn(|p: DVec2| p.x as Intensity * 100 + p.y as Intensity)
    }

    #[test]
    fn constant_two_by_two() {
        let grid = rasterize(0, 1, 1, 0, &Image::constant(100));
        assert_eq!(grid.to_rows(), vec![vec![100, 100], vec![100, 100]]);
    }

    #[test]
    fn dimensions_match_region() {
        for &(tlx, tly, brx, bry) in &[(0, 0, 0, 0), (-3, 4, 5, -2), (10, 20, 14, 19)] {
            let grid = rasterize(tlx, tly, brx, bry, &Image::black());
            assert_eq!(grid.height(), (tly - bry + 1) as usize);
            assert_eq!(grid.width(), (brx - tlx + 1) as usize);
        }
    }

    #[test]
    fn rows_run_top_down_and_columns_left_right() {
        let grid = rasterize(1, 3, 2, 2, &coords());
        assert_eq!(grid.to_rows(), vec![vec![103, 203], vec![102, 202]]);
    }

    #[test]
    fn each_pixel_samples_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let image = Image::from_fn(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
            WHITE
        });
        let grid = rasterize(-2, 2, 2, -2, &image);
        assert_eq!(calls.load(Ordering::Relaxed), 25);
        assert_eq!(grid.as_slice().len(), 25);
    }

    #[test]
    fn inverted_region_is_empty() {
        let grid = rasterize(0, 0, 5, 5, &Image::white());
        assert_eq!(grid.height(), 0);
        assert!(grid.is_empty());

        let grid = rasterize(5, 5, 0, 0, &Image::white());
        assert_eq!(grid.size(), (0, 6));
    }

    #[test]
    fn oversized_region_yields_consistent_empty_grid() {
        let grid = rasterize(i32::MIN, i32::MAX, i32::MAX, i32::MIN, &Image::white());
        assert_eq!(grid.size(), (0, 0));
        assert!(grid.as_slice().is_empty());
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    fn try_new_rejects_oversized_region() {
        let config = RasterConfig::new(Region::new(i32::MIN, i32::MAX, i32::MAX, i32::MIN));
        assert!(matches!(
            Rasterizer::try_new(config),
            Err(crate::error::Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn grid_generator_renders_lattice() {
        let image = Image::grid(1.0, 1.0, 4.0, 4.0).unwrap();
        let grid = rasterize(0, 3, 3, 0, &image);
        assert_eq!(
            grid.to_rows(),
            vec![
                vec![BLACK, WHITE, WHITE, WHITE],
                vec![BLACK, WHITE, WHITE, WHITE],
                vec![BLACK, WHITE, WHITE, WHITE],
                vec![BLACK, BLACK, BLACK, BLACK],
            ]
        );
    }

    #[test]
    fn rasterizer_runs_configured_region() {
        let config = RasterConfig::new(Region::new(1, 3, 2, 2));
        let rasterizer = Rasterizer::try_new(config).unwrap();
        assert_eq!(rasterizer.run(&coords()), rasterize(1, 3, 2, 2, &coords()));
    }

    #[test]
    fn try_new_rejects_empty_region() {
        assert!(Rasterizer::try_new(RasterConfig::new(Region::new(0, 0, 0, 1))).is_err());
    }

    #[test]
    fn parallel_flag_does_not_change_output() {
        let image = Image::mandelbrot().scale_at_origin(20.0, 20.0).unwrap();
        let region = Region::new(-40, 30, 20, -30);
        let sequential = Rasterizer::new(RasterConfig::new(region)).run(&image);
        let parallel = Rasterizer::new(RasterConfig::new(region).with_parallel(true)).run(&image);
        assert_eq!(sequential, parallel);
    }
}
